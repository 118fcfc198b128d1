use anyhow::Context;
use http::Method;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::info;

use crate::params::MethodParam;

/// Controllers discovered for one service, as read from a routes manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutesManifest {
    #[serde(default)]
    pub controllers: Vec<ControllerDef>,
}

/// One controller: a base path and the routes it serves.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerDef {
    pub name: String,
    /// Base path shared by every route of the controller
    #[serde(default, rename = "path")]
    pub base_path: String,
    #[serde(default)]
    pub routes: Vec<RouteDef>,
}

/// One controller method bound to an HTTP method and path.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDef {
    #[serde(deserialize_with = "deserialize_method")]
    pub method: Method,
    /// Path relative to the controller base path
    #[serde(default)]
    pub path: String,
    pub handler: String,
    #[serde(default)]
    pub params: Vec<MethodParam>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Excluded from OpenAPI output when set
    #[serde(default)]
    pub hidden: bool,
}

impl ControllerDef {
    /// Controller base path joined with a route path
    #[must_use]
    pub fn full_path(&self, route: &RouteDef) -> String {
        join_path(&self.base_path, &route.path)
    }
}

/// Join two path fragments with exactly one `/` between them.
///
/// The result always starts with `/`; two empty fragments give `/`.
#[must_use]
pub fn join_path(base: &str, path: &str) -> String {
    let base = base.trim_matches('/');
    let path = path.trim_start_matches('/');
    match (base.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{path}"),
        (false, true) => format!("/{base}"),
        (false, false) => format!("/{base}/{path}"),
    }
}

fn deserialize_method<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Method::from_bytes(raw.to_ascii_uppercase().as_bytes()).map_err(serde::de::Error::custom)
}

/// Load a routes manifest from YAML (`.yaml`/`.yml`) or JSON
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_manifest(path: &Path) -> anyhow::Result<RoutesManifest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read routes manifest {}", path.display()))?;
    let manifest: RoutesManifest = if path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
    {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid routes manifest {}", path.display()))?
    } else {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid routes manifest {}", path.display()))?
    };
    info!(
        controllers = manifest.controllers.len(),
        routes = manifest
            .controllers
            .iter()
            .map(|c| c.routes.len())
            .sum::<usize>(),
        path = %path.display(),
        "Loaded routes manifest"
    );
    Ok(manifest)
}
