use askama::Template;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::plan::{to_snake_case, ArgRead, RouteMethod};
use crate::platform::PlatformConfig;

/// Per-route data for the routes template
#[derive(Debug, Clone)]
pub struct RouteView {
    /// Router registration statement
    pub register: String,
    /// HTTP method
    pub method: String,
    /// Path in curly form, for the doc comment
    pub doc_path: String,
    /// Generated function name
    pub fn_name: String,
    /// Segment decode statements
    pub decode_lines: Vec<String>,
    /// Parameter reads
    pub args: Vec<ArgRead>,
    /// Controller instance variable
    pub controller_var: String,
    /// Controller method name
    pub handler: String,
    /// Comma separated call arguments
    pub call_args: String,
}

impl RouteView {
    /// Build the view for one route
    #[must_use]
    pub fn new(route: &RouteMethod, platform: &PlatformConfig) -> Self {
        let fn_name = route.fn_name();
        let register_path = route.register_path(platform.dialect);
        let args = route.arg_reads(platform);
        let call_args = args
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            register: platform.write_register(&route.method, &register_path, &fn_name),
            method: route.method.to_string(),
            doc_path: route.path.full_path_curly(),
            fn_name,
            decode_lines: route.decode_lines(platform),
            args,
            controller_var: to_snake_case(&route.controller),
            handler: route.handler.clone(),
            call_args,
        }
    }
}

/// Template data for the generated routes module
#[derive(Template)]
#[template(path = "routes.rs.txt", escape = "none")]
pub struct RoutesTemplateData {
    /// Platform name
    pub platform: String,
    /// Parameter list of each generated handler
    pub handler_args: String,
    /// Routes in registration order
    pub routes: Vec<RouteView>,
}

/// Render the routes module for already compiled routes
///
/// # Errors
///
/// Returns an error if template rendering fails
pub fn render_routes(routes: &[RouteMethod], platform: &PlatformConfig) -> anyhow::Result<String> {
    let rendered = RoutesTemplateData {
        platform: platform.name.clone(),
        handler_args: platform.handler_args.clone(),
        routes: routes
            .iter()
            .map(|route| RouteView::new(route, platform))
            .collect(),
    }
    .render()?;
    Ok(rendered)
}

/// Write a generated file, skipping existing files unless `force` is set
///
/// Returns `true` when the file was written.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written
pub fn write_file(path: &Path, contents: &str, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        warn!(path = %path.display(), "Skipping existing file (use --force to overwrite)");
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "Generated file");
    Ok(true)
}
