//! # Params Module
//!
//! Parameter kinds and the binding step that decides, per controller method
//! parameter, whether it is read from the path, query, headers or body.
//!
//! Path parameters carry a [`ParamAccess`](crate::path::ParamAccess) telling
//! the emitter whether to read a scalar or go through a decoded matrix segment.

mod bind;
mod types;
#[cfg(test)]
mod tests;

pub use bind::{bind_params, BindError, BoundParam};
pub use types::{MethodParam, ParamType};
