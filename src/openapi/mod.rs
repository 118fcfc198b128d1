//! # OpenAPI Module
//!
//! Collects generated routes into an OpenAPI 3.1 document. Paths are keyed by
//! their curly-brace form and kept in natural (sorted) order so output is
//! stable across runs regardless of controller order.
//!
//! Only what the path compiler and parameter binder know is documented:
//! operations, path/query/header/cookie parameters and request bodies.
//! Schema assembly beyond scalar types is left to the caller.

mod types;

pub use types::{
    Info, MediaType, OpenApiDoc, Operation, Parameter, ParameterIn, ParameterStyle, PathItem,
    RequestBody, Response, Schema,
};

use anyhow::Context;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::generator::{write_file, RouteMethod};
use crate::params::ParamType;

/// Builds the OpenAPI document for a set of routes
#[derive(Debug, Clone)]
pub struct DocContext {
    info: Info,
    paths: BTreeMap<String, PathItem>,
}

impl DocContext {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            info: Info {
                title: title.into(),
                version: version.into(),
                description: None,
            },
            paths: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    /// Path item for a curly-form path, created on first use
    pub fn path_item(&mut self, full_path: &str) -> &mut PathItem {
        self.paths.entry(full_path.to_string()).or_default()
    }

    /// Paths documented so far, in natural order
    #[must_use]
    pub fn paths(&self) -> &BTreeMap<String, PathItem> {
        &self.paths
    }

    /// Document one route. Hidden routes are skipped.
    pub fn add_route(&mut self, route: &RouteMethod) {
        if route.hidden {
            debug!(handler = %route.handler, "Skipping hidden route");
            return;
        }
        let operation = build_operation(route);
        let full_path = route.path.full_path_curly();
        if !self.path_item(&full_path).set(&route.method, operation) {
            warn!(
                method = %route.method,
                path = %full_path,
                "HTTP method has no OpenAPI operation slot, route not documented"
            );
        }
    }

    /// Assemble the document
    #[must_use]
    pub fn api(&self) -> OpenApiDoc {
        OpenApiDoc {
            openapi: "3.1.0".to_string(),
            info: self.info.clone(),
            paths: self.paths.clone(),
        }
    }

    /// Pretty JSON without absent fields
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&self.api()).context("failed to serialize OpenAPI document")
    }

    /// Write the document as JSON to `path`, keeping an existing file unless
    /// `force` is set. Returns `true` when the file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn write_api(&self, path: &Path, force: bool) -> anyhow::Result<bool> {
        let json = self.to_json()?;
        let written = write_file(path, &json, force)
            .with_context(|| format!("error writing openapi file {}", path.display()))?;
        if written {
            info!(path = %path.display(), paths = self.paths.len(), "Wrote OpenAPI document");
        }
        Ok(written)
    }
}

fn build_operation(route: &RouteMethod) -> Operation {
    let mut parameters = Vec::new();

    for segment in route.path.segments() {
        let matrix = segment.has_matrix_params();
        let description = matrix.then(|| {
            let keys: Vec<&str> = segment.matrix_keys().iter().map(String::as_str).collect();
            format!("Matrix keys: {}", keys.join(", "))
        });
        // a matrix segment is one opaque string; a plain one carries its binding's type
        let schema = if matrix {
            Schema::string()
        } else {
            route
                .params
                .iter()
                .find(|b| b.param_type == ParamType::PathParam && b.name() == segment.name())
                .map_or_else(Schema::string, |b| Schema::for_rust_type(&b.param.rust_type))
        };
        parameters.push(Parameter {
            name: segment.path_key(),
            location: ParameterIn::Path,
            required: true,
            style: matrix.then_some(ParameterStyle::Matrix),
            description,
            schema,
        });
    }

    let mut body = None;
    let mut form_fields = serde_json::Map::new();
    for bound in &route.params {
        match (bound.param_type, ParameterIn::from_param_type(bound.param_type)) {
            (ParamType::PathParam, _) => {}
            (_, Some(location)) => parameters.push(Parameter {
                name: bound.name().to_string(),
                location,
                required: bound.required,
                style: None,
                description: bound.param.description.clone(),
                schema: Schema::for_rust_type(&bound.param.rust_type),
            }),
            (ParamType::Body | ParamType::BeanParam, None) => {
                body = Some(RequestBody::single(
                    "application/json",
                    json!({ "type": "object", "title": bound.param.rust_type }),
                    bound.param.description.clone(),
                ));
            }
            _ => {
                let schema = Schema::for_rust_type(&bound.param.rust_type);
                form_fields.insert(
                    bound.name().to_string(),
                    serde_json::to_value(schema).unwrap_or_default(),
                );
            }
        }
    }
    if body.is_none() && !form_fields.is_empty() {
        body = Some(RequestBody::single(
            "application/x-www-form-urlencoded",
            json!({ "type": "object", "properties": form_fields }),
            None,
        ));
    }

    Operation {
        operation_id: route.handler.clone(),
        summary: route.summary.clone(),
        tags: vec![route.controller.clone()],
        parameters,
        request_body: body,
        responses: BTreeMap::from([(
            "200".to_string(),
            Response {
                description: "OK".to_string(),
            },
        )]),
    }
}
