use std::fmt;
use tracing::debug;

use super::types::{MethodParam, ParamType};
use crate::path::{ParamAccess, PathSegments};

/// Scalar types read straight from a path/query string rather than a body.
const SCALAR_TYPES: &[&str] = &[
    "String", "&str", "str", "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8",
    "u16", "u32", "u64", "u128", "usize", "f32", "f64", "NaiveDate", "NaiveDateTime", "Uuid",
];

/// Binding failure for one controller method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// Parameter marked as a path parameter that the template does not bind
    UnboundPathParam {
        /// Parameter name
        name: String,
        /// Template in curly form
        path: String,
    },
    /// More than one parameter would be read from the request body
    MultipleBodies {
        /// The first body parameter
        first: String,
        /// The conflicting parameter
        second: String,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::UnboundPathParam { name, path } => write!(
                f,
                "parameter '{name}' is declared as a path parameter but {path} does not bind it"
            ),
            BindError::MultipleBodies { first, second } => write!(
                f,
                "parameters '{first}' and '{second}' both bind to the request body"
            ),
        }
    }
}

impl std::error::Error for BindError {}

/// A method parameter with its source decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParam {
    pub param: MethodParam,
    pub param_type: ParamType,
    /// Read strategy, present only for path parameters
    pub access: Option<ParamAccess>,
    pub required: bool,
}

impl BoundParam {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.param.name
    }
}

/// Decide where each method parameter is read from.
///
/// Explicit types are kept. Untyped parameters the path binds become path
/// parameters, untyped non-scalars become the body when `body_allowed`, and
/// everything else is a query parameter. At most one body is accepted.
pub fn bind_params(
    path: &PathSegments,
    params: &[MethodParam],
    body_allowed: bool,
) -> Result<Vec<BoundParam>, BindError> {
    let mut bound = Vec::with_capacity(params.len());
    let mut body: Option<&str> = None;

    for param in params {
        let param_type = match param.param_type {
            Some(explicit) => explicit,
            None if path.contains(&param.name) => ParamType::PathParam,
            None if body_allowed && !is_scalar(&param.rust_type) => ParamType::Body,
            None => ParamType::QueryParam,
        };

        let (access, required) = match param_type {
            ParamType::PathParam => {
                let segment = path
                    .segment(&param.name)
                    .ok_or_else(|| BindError::UnboundPathParam {
                        name: param.name.clone(),
                        path: path.full_path_curly(),
                    })?;
                (
                    Some(segment.access(&param.name)),
                    segment.is_required(&param.name),
                )
            }
            ParamType::Body => {
                if let Some(first) = body {
                    return Err(BindError::MultipleBodies {
                        first: first.to_string(),
                        second: param.name.clone(),
                    });
                }
                body = Some(param.name.as_str());
                (None, true)
            }
            _ => (None, !is_optional(&param.rust_type)),
        };

        debug!(
            param = %param.name,
            param_type = %param_type,
            required,
            "Bound method parameter"
        );
        bound.push(BoundParam {
            param: param.clone(),
            param_type,
            access,
            required,
        });
    }

    Ok(bound)
}

fn is_scalar(rust_type: &str) -> bool {
    let inner = rust_type
        .strip_prefix("Option<")
        .and_then(|t| t.strip_suffix('>'))
        .unwrap_or(rust_type)
        .trim();
    let last = inner.rsplit("::").next().unwrap_or(inner);
    SCALAR_TYPES.contains(&last)
}

fn is_optional(rust_type: &str) -> bool {
    rust_type.trim_start().starts_with("Option<")
}
