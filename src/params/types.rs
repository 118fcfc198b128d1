use serde::{Deserialize, Serialize};

/// Where a controller method parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamType {
    Body,
    PathParam,
    Form,
    BeanParam,
    QueryParam,
    FormParam,
    Cookie,
    Header,
}

impl ParamType {
    /// Code name used when emitting a read call (e.g. `pathParam`)
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParamType::Body => "body",
            ParamType::PathParam => "pathParam",
            ParamType::Form => "form",
            ParamType::BeanParam => "beanParam",
            ParamType::QueryParam => "queryParam",
            ParamType::FormParam => "formParam",
            ParamType::Cookie => "cookie",
            ParamType::Header => "header",
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One controller method parameter as handed over by controller discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParam {
    pub name: String,
    /// Explicit source; `None` lets the binder decide
    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<ParamType>,
    /// Type of the parameter in the emitted code
    #[serde(default = "default_param_type", rename = "type")]
    pub rust_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_param_type() -> String {
    "String".to_string()
}

impl MethodParam {
    /// Untyped `String` parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: None,
            rust_type: default_param_type(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = Some(param_type);
        self
    }

    #[must_use]
    pub fn with_rust_type(mut self, rust_type: impl Into<String>) -> Self {
        self.rust_type = rust_type.into();
        self
    }
}
