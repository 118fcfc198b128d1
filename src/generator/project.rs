use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

use super::manifest::RoutesManifest;
use super::plan::RouteMethod;
use super::templates::{render_routes, write_file};
use crate::openapi::DocContext;
use crate::platform::PlatformConfig;

/// File name of the generated routes module
pub const ROUTES_FILE: &str = "routes.rs";
/// File name of the generated OpenAPI document
pub const OPENAPI_FILE: &str = "openapi.json";

/// Options for [`generate_project`]
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub force: bool,
    /// OpenAPI `info.title`
    pub title: String,
    /// OpenAPI `info.version`
    pub version: String,
}

/// What a generation run produced
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub routes: usize,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    fn record(&mut self, path: PathBuf, written: bool) {
        if written {
            self.written.push(path);
        } else {
            self.skipped.push(path);
        }
    }
}

/// Compile every route of the manifest, sorted by path then method.
///
/// # Errors
///
/// Returns the first parameter binding failure
pub fn compile_routes(manifest: &RoutesManifest) -> anyhow::Result<Vec<RouteMethod>> {
    let mut routes = Vec::new();
    for controller in &manifest.controllers {
        for route in &controller.routes {
            routes.push(RouteMethod::build(controller, route)?);
        }
    }
    routes.sort_by(|a, b| {
        a.path
            .full_path_curly()
            .cmp(&b.path.full_path_curly())
            .then_with(|| a.method.as_str().cmp(b.method.as_str()))
    });
    Ok(routes)
}

/// Render the routes module source for a manifest
///
/// # Errors
///
/// Returns an error if binding or template rendering fails
pub fn generate_routes(
    manifest: &RoutesManifest,
    platform: &PlatformConfig,
) -> anyhow::Result<String> {
    let routes = compile_routes(manifest)?;
    render_routes(&routes, platform)
}

/// Write `routes.rs` and `openapi.json` for a manifest into the output directory
///
/// # Errors
///
/// Returns an error if binding, rendering or writing fails
pub fn generate_project(
    manifest: &RoutesManifest,
    platform: &PlatformConfig,
    options: &GenerateOptions,
) -> anyhow::Result<GenerationReport> {
    let routes = compile_routes(manifest).context("failed to bind controller parameters")?;

    let source = render_routes(&routes, platform)?;
    let mut doc = DocContext::new(&options.title, &options.version);
    for route in &routes {
        doc.add_route(route);
    }

    let mut report = GenerationReport {
        routes: routes.len(),
        ..Default::default()
    };
    let routes_path = options.output_dir.join(ROUTES_FILE);
    let written = write_file(&routes_path, &source, options.force)?;
    report.record(routes_path, written);
    let api_path = options.output_dir.join(OPENAPI_FILE);
    let written = doc.write_api(&api_path, options.force)?;
    report.record(api_path, written);

    info!(
        routes = report.routes,
        written = report.written.len(),
        skipped = report.skipped.len(),
        platform = %platform.name,
        output = %options.output_dir.display(),
        "Generation complete"
    );
    Ok(report)
}

impl GenerateOptions {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            force: false,
            title: String::new(),
            version: "0.1.0".to_string(),
        }
    }
}
