use anyhow::Context;
use http::Method;

use super::manifest::{ControllerDef, RouteDef};
use crate::params::{bind_params, BoundParam};
use crate::path::{Dialect, PathSegments};
use crate::platform::PlatformConfig;

/// A local binding emitted before the controller call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgRead {
    /// Local variable name (snake_case)
    pub name: String,
    pub ty: String,
    /// Expression producing the value
    pub expr: String,
}

/// Everything the emitter needs for one route, compiled once.
#[derive(Debug, Clone)]
pub struct RouteMethod {
    pub controller: String,
    pub method: Method,
    pub handler: String,
    pub summary: Option<String>,
    pub hidden: bool,
    pub path: PathSegments,
    pub params: Vec<BoundParam>,
}

impl RouteMethod {
    /// Parse the route path and bind the method parameters
    ///
    /// # Errors
    ///
    /// Returns an error when a parameter cannot be bound
    pub fn build(controller: &ControllerDef, route: &RouteDef) -> anyhow::Result<Self> {
        let full_path = controller.full_path(route);
        let path = PathSegments::parse(&full_path);
        let body_allowed = matches!(route.method, Method::POST | Method::PUT | Method::PATCH);
        let params = bind_params(&path, &route.params, body_allowed).with_context(|| {
            format!(
                "{}.{} ({} {full_path})",
                controller.name, route.handler, route.method
            )
        })?;
        Ok(Self {
            controller: controller.name.clone(),
            method: route.method.clone(),
            handler: route.handler.clone(),
            summary: route.summary.clone(),
            hidden: route.hidden,
            path,
            params,
        })
    }

    /// Path handed to the router in `dialect`
    #[must_use]
    pub fn register_path(&self, dialect: Dialect) -> String {
        self.path.full_path(dialect)
    }

    /// Name of the generated function serving this route
    #[must_use]
    pub fn fn_name(&self) -> String {
        format!(
            "{}_{}",
            to_snake_case(&self.controller),
            to_snake_case(&self.handler)
        )
    }

    /// One decode statement per matrix segment, emitted before any read
    #[must_use]
    pub fn decode_lines(&self, platform: &PlatformConfig) -> Vec<String> {
        self.path
            .matrix_segments()
            .map(|segment| platform.write_create_segment(segment))
            .collect()
    }

    /// Reads for every bound parameter, in declaration order
    #[must_use]
    pub fn arg_reads(&self, platform: &PlatformConfig) -> Vec<ArgRead> {
        self.params
            .iter()
            .map(|bound| ArgRead {
                name: to_snake_case(bound.name()),
                ty: bound.param.rust_type.clone(),
                expr: platform.write_bound_read(bound),
            })
            .collect()
    }
}

/// `HelloController` / `yearAuthor` -> `hello_controller` / `year_author`
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else if c == '-' || c == ' ' {
            out.push('_');
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
