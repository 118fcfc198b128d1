//! # pathgen
//!
//! **pathgen** compiles the route paths of annotated controllers into the
//! metadata a code generator needs: which names a path binds, how each bound
//! value is read, and how the path is spelled for a given router or for
//! OpenAPI.
//!
//! ## Overview
//!
//! Route paths are templates such as `/hello/:id/{date}` or
//! `/withMatrix/:year;author;country/:other`. The path compiler turns each one
//! into a [`PathSegments`](path::PathSegments) value that is built once and
//! queried read-only while code is emitted. Nothing here matches requests at
//! runtime.
//!
//! ## Architecture
//!
//! - **[`path`]** - Template parsing, matrix-key resolution and dialect rendering
//! - **[`params`]** - Parameter kinds and binding of method parameters to path/query/body
//! - **[`platform`]** - Per-framework emission settings (dialect, read/decode snippets)
//! - **[`generator`]** - Routes manifest loading and askama rendering of `routes.rs`
//! - **[`openapi`]** - OpenAPI document collection keyed by curly-form paths
//! - **[`cli`]** - The `pathgen` command line
//! - **[`logging`]** - `tracing-subscriber` setup for the binary
//!
//! ### Generation Flow
//!
//! ```text
//! routes.yaml ─▶ RoutesManifest ─▶ PathSegments::parse ─▶ bind_params ─▶ RouteMethod
//!                                                                          │
//!                         PlatformConfig (colon / curly / file) ──────────▶├─▶ routes.rs
//!                                                                          └─▶ openapi.json
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pathgen::path::{Dialect, PathSegments};
//!
//! let path = PathSegments::parse("/withMatrix/:year;author;country/:other");
//!
//! assert!(path.contains("yearAuthor"));
//! assert_eq!(path.full_path(Dialect::COLON), "/withMatrix/:year_segment/:other");
//!
//! let year = path.segment("yearAuthor").unwrap();
//! assert_eq!(year.name(), "year");
//! assert_eq!(year.matrix_key_for("yearAuthor"), "author");
//! ```

pub mod cli;
pub mod generator;
pub mod logging;
pub mod openapi;
pub mod params;
pub mod path;
pub mod platform;

pub use params::{bind_params, MethodParam, ParamType};
pub use path::{Chunk, Dialect, ParamAccess, PathSegments, Segment};
pub use platform::PlatformConfig;
