use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::params::ParamType;

#[derive(Debug, Clone, Serialize)]
pub struct OpenApiDoc {
    pub openapi: String,
    pub info: Info,
    pub paths: BTreeMap<String, PathItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Operations available on one path
#[derive(Debug, Clone, Default, Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Store `operation` under `method`; `false` for methods OpenAPI has no slot for
    pub fn set(&mut self, method: &Method, operation: Operation) -> bool {
        let slot = match *method {
            Method::GET => &mut self.get,
            Method::PUT => &mut self.put,
            Method::POST => &mut self.post,
            Method::DELETE => &mut self.delete,
            Method::OPTIONS => &mut self.options,
            Method::HEAD => &mut self.head,
            Method::PATCH => &mut self.patch,
            Method::TRACE => &mut self.trace,
            _ => return false,
        };
        *slot = Some(operation);
        true
    }

    #[must_use]
    pub fn get_operation(&self, method: &Method) -> Option<&Operation> {
        match *method {
            Method::GET => self.get.as_ref(),
            Method::PUT => self.put.as_ref(),
            Method::POST => self.post.as_ref(),
            Method::DELETE => self.delete.as_ref(),
            Method::OPTIONS => self.options.as_ref(),
            Method::HEAD => self.head.as_ref(),
            Method::PATCH => self.patch.as_ref(),
            Method::TRACE => self.trace.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<String, Response>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterIn,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ParameterStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema: Schema,
}

/// Value of a parameter's `in` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterIn {
    /// Location for kinds documented under `parameters`; `None` for bodies and forms
    #[must_use]
    pub fn from_param_type(param_type: ParamType) -> Option<Self> {
        match param_type {
            ParamType::PathParam => Some(ParameterIn::Path),
            ParamType::QueryParam => Some(ParameterIn::Query),
            ParamType::Header => Some(ParameterIn::Header),
            ParamType::Cookie => Some(ParameterIn::Cookie),
            ParamType::Body | ParamType::BeanParam | ParamType::Form | ParamType::FormParam => {
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterStyle {
    Matrix,
    Label,
    Form,
    Simple,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

/// Scalar schema derived from a parameter's type name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Schema {
    #[must_use]
    pub fn string() -> Self {
        Self::new("string", None)
    }

    fn new(ty: &str, format: Option<&str>) -> Self {
        Self {
            ty: ty.to_string(),
            format: format.map(str::to_string),
        }
    }

    /// Map a Rust type name to an OpenAPI scalar; unknown types become `string`
    #[must_use]
    pub fn for_rust_type(rust_type: &str) -> Self {
        let inner = rust_type
            .trim()
            .strip_prefix("Option<")
            .and_then(|t| t.strip_suffix('>'))
            .unwrap_or(rust_type)
            .trim();
        match inner.rsplit("::").next().unwrap_or(inner) {
            "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => Self::new("integer", Some("int32")),
            "i64" | "u64" | "isize" | "usize" | "i128" | "u128" => {
                Self::new("integer", Some("int64"))
            }
            "f32" => Self::new("number", Some("float")),
            "f64" => Self::new("number", Some("double")),
            "bool" => Self::new("boolean", None),
            "NaiveDate" => Self::new("string", Some("date")),
            "NaiveDateTime" | "DateTime<Utc>" => Self::new("string", Some("date-time")),
            "Uuid" => Self::new("string", Some("uuid")),
            _ => Self::string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: BTreeMap<String, MediaType>,
    pub required: bool,
}

impl RequestBody {
    pub(crate) fn single(media_type: &str, schema: Value, description: Option<String>) -> Self {
        Self {
            description,
            content: BTreeMap::from([(media_type.to_string(), MediaType { schema })]),
            required: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    pub schema: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub description: String,
}
