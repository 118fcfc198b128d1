//! # Platform Module
//!
//! Describes how generated code for a target web framework reads parameters
//! and registers routes. A platform is plain configuration: the path dialect
//! plus a handful of small text templates with `{placeholder}` slots.
//!
//! ## Configuration
//!
//! Platforms load from YAML or JSON:
//!
//! ```yaml
//! name: javalin
//! dialect: colon
//! indent: "    "
//! handler_args: 'ctx: &mut Context'
//! read_param: 'ctx.{type}("{name}")'
//! read_body: 'ctx.body::<{ty}>()?'
//! segment_decl: 'let {var} = PathSegment::of(&{read});'
//! segment_value: '{var}.val()'
//! segment_matrix: '{var}.matrix("{key}")'
//! register: 'router.{method}("{path}", {handler});'
//! ```
//!
//! Missing fields take the values of the built-in `colon` preset.
//! Placeholders are filled in a single pass, so substituted text (a path
//! containing `{handler}`, say) is never expanded again.
//!
//! ## Matrix segments
//!
//! [`PlatformConfig::write_create_segment`] emits exactly one decode statement
//! per matrix-bearing path element; every later read of the bare value or a
//! matrix key goes through that decoded object.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::params::{BoundParam, ParamType};
use crate::path::{Dialect, ParamAccess, Segment};


/// Emission settings for one target framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Display name of the platform
    pub name: String,
    /// Marker convention used in registered route paths
    pub dialect: Dialect,
    /// Indentation prefixed to each emitted statement
    pub indent: String,
    /// Parameter list of every generated handler; binds the receiver the
    /// read templates use
    pub handler_args: String,
    /// Read a parameter; placeholders `{type}` and `{name}`
    pub read_param: String,
    /// Read the request body; placeholder `{ty}`
    pub read_body: String,
    /// Decode a matrix segment; placeholders `{var}` and `{read}`
    pub segment_decl: String,
    /// Bare value of a decoded segment; placeholder `{var}`
    pub segment_value: String,
    /// Matrix key of a decoded segment; placeholders `{var}` and `{key}`
    pub segment_matrix: String,
    /// Route registration; placeholders `{method}`, `{path}` and `{handler}`
    pub register: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::colon()
    }
}

impl PlatformConfig {
    /// Routers using `:name` path markers
    #[must_use]
    pub fn colon() -> Self {
        Self {
            name: "colon".to_string(),
            dialect: Dialect::COLON,
            indent: "    ".to_string(),
            handler_args: "ctx: &mut Context".to_string(),
            read_param: r#"ctx.{type}("{name}")"#.to_string(),
            read_body: "ctx.body::<{ty}>()?".to_string(),
            segment_decl: "let {var} = PathSegment::of(&{read});".to_string(),
            segment_value: "{var}.val()".to_string(),
            segment_matrix: r#"{var}.matrix("{key}")"#.to_string(),
            register: r#"router.{method}("{path}", {handler});"#.to_string(),
        }
    }

    /// Routers using `{name}` path markers
    #[must_use]
    pub fn curly() -> Self {
        Self {
            name: "curly".to_string(),
            dialect: Dialect::CURLY,
            handler_args: "req: &mut Request".to_string(),
            read_param: r#"req.{type}("{name}")"#.to_string(),
            read_body: "req.json::<{ty}>()?".to_string(),
            register: r#"router.route(Method::{method_upper}, "{path}", {handler});"#.to_string(),
            ..Self::colon()
        }
    }

    /// Resolve a preset name (`colon`, `curly`) or load a config file.
    pub fn resolve(name_or_path: &str) -> anyhow::Result<Self> {
        match name_or_path {
            "colon" => Ok(Self::colon()),
            "curly" => Ok(Self::curly()),
            other => Self::from_file(Path::new(other)),
        }
    }

    /// Load a platform from a YAML (`.yaml`/`.yml`) or JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read platform config {}", path.display()))?;
        let config: Self = if path
            .extension()
            .map(|s| s == "yaml" || s == "yml")
            .unwrap_or(false)
        {
            serde_yaml::from_str(&raw)
                .with_context(|| format!("invalid platform YAML {}", path.display()))?
        } else {
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid platform JSON {}", path.display()))?
        };
        info!(
            platform = %config.name,
            dialect = %config.dialect,
            path = %path.display(),
            "Loaded platform config"
        );
        Ok(config)
    }

    /// Expression reading one parameter
    #[must_use]
    pub fn write_read_parameter(&self, param_type: ParamType, name: &str) -> String {
        fill(&self.read_param, &[("type", param_type.code()), ("name", name)])
    }

    /// Statement decoding a matrix segment into its segment object
    #[must_use]
    pub fn write_create_segment(&self, segment: &Segment) -> String {
        let var = segment.segment_var();
        let read = self.write_read_parameter(ParamType::PathParam, &var);
        let decl = fill(
            &self.segment_decl,
            &[("var", var.as_str()), ("read", read.as_str())],
        );
        format!("{}{decl}", self.indent)
    }

    /// Expression reading `var_name` through `segment`
    #[must_use]
    pub fn write_get_val(&self, segment: &Segment, var_name: &str) -> String {
        self.write_access(&segment.access(var_name))
    }

    /// Expression for an already decided access strategy
    #[must_use]
    pub fn write_access(&self, access: &ParamAccess) -> String {
        match access {
            ParamAccess::PathParam { name } => {
                self.write_read_parameter(ParamType::PathParam, name)
            }
            ParamAccess::SegmentValue { segment_var } => {
                fill(&self.segment_value, &[("var", segment_var.as_str())])
            }
            ParamAccess::MatrixValue { segment_var, key } => fill(
                &self.segment_matrix,
                &[("var", segment_var.as_str()), ("key", key.as_str())],
            ),
        }
    }

    /// Expression reading a bound method parameter
    #[must_use]
    pub fn write_bound_read(&self, bound: &BoundParam) -> String {
        match (&bound.access, bound.param_type) {
            (Some(access), _) => self.write_access(access),
            (None, ParamType::Body) => {
                fill(&self.read_body, &[("ty", bound.param.rust_type.as_str())])
            }
            (None, param_type) => self.write_read_parameter(param_type, bound.name()),
        }
    }

    /// Route registration statement
    #[must_use]
    pub fn write_register(&self, method: &http::Method, path: &str, handler: &str) -> String {
        let lower = method.as_str().to_ascii_lowercase();
        fill(
            &self.register,
            &[
                ("method_upper", method.as_str()),
                ("method", lower.as_str()),
                ("path", path),
                ("handler", handler),
            ],
        )
    }
}

/// Replace each known `{key}` of `template` with its value. Unknown braces are
/// copied as-is and inserted values are not scanned again.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let known = tail[1..]
            .find('}')
            .map(|close| &tail[1..=close])
            .and_then(|key| {
                values
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| (key.len(), *value))
            });
        match known {
            Some((key_len, value)) => {
                out.push_str(value);
                rest = &tail[key_len + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
