//! # Path Module
//!
//! Compiles route path templates into a structured form that the code
//! generator and documentation collector query. Nothing here matches requests
//! at runtime; the output is metadata used to emit routing glue.
//!
//! ## Overview
//!
//! A template such as `/withMatrix/:year;author;country/:other` is turned into:
//!
//! - an ordered list of [`Chunk`]s (`/`, `withMatrix`, `/`, `year_segment`, `/`, `other`)
//!   used to re-render the path in any [`Dialect`]
//! - one [`Segment`] per path variable, with matrix keys resolved into compound
//!   names (`yearAuthor`, `yearCountry`)
//!
//! Variables are written `:name` or `{name}`. Matrix keys follow the name,
//! separated by `;`.
//!
//! ## Example
//!
//! ```rust
//! use pathgen::path::{Dialect, PathSegments};
//!
//! let path = PathSegments::parse("/hello/:id/{date}");
//! assert_eq!(path.full_path(Dialect::CURLY), "/hello/{id}/{date}");
//! assert_eq!(path.full_path(Dialect::COLON), "/hello/:id/:date");
//! assert!(path.contains("date"));
//! ```
//!
//! ## Matrix parameters
//!
//! A segment with matrix keys is still a single path element. Generated code
//! decodes it once into a segment object (`year_segment`) and then reads the
//! bare value or individual keys from that object; see [`ParamAccess`].

mod chunk;
mod core;
mod segment;
#[cfg(test)]
mod tests;

pub use chunk::{Chunk, Dialect};
pub use self::core::PathSegments;
pub use segment::{ParamAccess, Segment, SEGMENT_SUFFIX};
