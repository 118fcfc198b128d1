//! # Generator Module
//!
//! Turns a routes manifest (controllers, their routes and method parameters)
//! into router registration code and an OpenAPI document.
//!
//! ## Architecture
//!
//! ```text
//! routes.yaml → RoutesManifest → RouteMethod (PathSegments + bound params) → askama → routes.rs
//!                                                                         └→ DocContext → openapi.json
//! ```
//!
//! Each route path is compiled once into [`PathSegments`](crate::path::PathSegments).
//! Registration paths use the platform's dialect; OpenAPI keys use the curly
//! form. For every matrix segment a single decode statement is emitted ahead
//! of the parameter reads, which then fan out from the decoded object.
//!
//! ## Generated Structure
//!
//! ```text
//! <output>/
//! ├── routes.rs       # register() plus one function per route
//! └── openapi.json    # paths in natural order
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pathgen::generator::{generate_project, load_manifest, GenerateOptions};
//! use pathgen::platform::PlatformConfig;
//!
//! let manifest = load_manifest("routes.yaml".as_ref())?;
//! let options = GenerateOptions::new("generated");
//! generate_project(&manifest, &PlatformConfig::colon(), &options)?;
//! ```

mod manifest;
mod plan;
mod project;
mod templates;

pub use manifest::{join_path, load_manifest, ControllerDef, RouteDef, RoutesManifest};
pub use plan::{to_snake_case, ArgRead, RouteMethod};
pub use project::{
    compile_routes, generate_project, generate_routes, GenerateOptions, GenerationReport,
    OPENAPI_FILE, ROUTES_FILE,
};
pub use templates::{render_routes, write_file, RouteView, RoutesTemplateData};
