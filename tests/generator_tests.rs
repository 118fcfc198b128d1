#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for manifest loading and project generation.

use pathgen::generator::{
    generate_project, generate_routes, load_manifest, GenerateOptions, OPENAPI_FILE, ROUTES_FILE,
};
use pathgen::platform::PlatformConfig;
use serde_json::Value;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_manifest_fixture() {
    let manifest = load_manifest(&fixture("hello_routes.yaml")).unwrap();
    assert_eq!(manifest.controllers.len(), 1);
    assert_eq!(manifest.controllers[0].routes.len(), 7);
}

#[test]
fn test_load_manifest_missing_file() {
    let err = load_manifest(&fixture("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_generate_project_writes_both_files() {
    let manifest = load_manifest(&fixture("hello_routes.yaml")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        title: "Hello API".to_string(),
        ..GenerateOptions::new(dir.path())
    };

    let report = generate_project(&manifest, &PlatformConfig::colon(), &options).unwrap();
    assert_eq!(report.routes, 7);
    assert_eq!(report.written.len(), 2);
    assert!(report.skipped.is_empty());

    let routes = std::fs::read_to_string(dir.path().join(ROUTES_FILE)).unwrap();
    assert!(routes.contains(r#"router.get("/hello/findbyname/:name", hello_controller_find_by_name);"#));
    assert!(routes.contains(r#"let my_param: String = ctx.queryParam("my-param");"#));
    assert!(routes.contains(r#"router.get("/hello", hello_controller_get_all);"#));

    let api: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(OPENAPI_FILE)).unwrap())
            .unwrap();
    assert_eq!(api["info"]["title"], "Hello API");
    assert_eq!(api["info"]["version"], "0.1.0");
    let paths = api["paths"].as_object().unwrap();
    assert!(paths.contains_key("/hello/withMatrix/{year_segment}/{other}"));
    assert!(paths.contains_key("/hello/findbyname/{name}"));
    // hidden route is registered but not documented
    assert!(!paths.contains_key("/hello"));
    assert_eq!(
        api["paths"]["/hello/{id}/{date}"]["get"]["summary"],
        "Return the Hello DTO"
    );
}

#[test]
fn test_existing_files_skipped_unless_forced() {
    let manifest = load_manifest(&fixture("hello_routes.yaml")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let routes_path = dir.path().join(ROUTES_FILE);
    std::fs::write(&routes_path, "// user edits").unwrap();

    let options = GenerateOptions::new(dir.path());
    let report = generate_project(&manifest, &PlatformConfig::colon(), &options).unwrap();
    assert_eq!(report.skipped, vec![routes_path.clone()]);
    assert_eq!(std::fs::read_to_string(&routes_path).unwrap(), "// user edits");

    let forced = GenerateOptions {
        force: true,
        ..GenerateOptions::new(dir.path())
    };
    let report = generate_project(&manifest, &PlatformConfig::colon(), &forced).unwrap();
    assert_eq!(report.written.len(), 2);
    assert!(std::fs::read_to_string(&routes_path)
        .unwrap()
        .contains("pub fn register"));
}

#[test]
fn test_platform_file_drives_output() {
    let manifest = load_manifest(&fixture("hello_routes.yaml")).unwrap();
    let platform = PlatformConfig::from_file(&fixture("platform.yaml")).unwrap();
    let source = generate_routes(&manifest, &platform).unwrap();

    assert!(source.contains("(javalin platform)"));
    assert!(source.contains(r#"app.delete("/hello/:id", hello_controller_delete_by_id);"#));
    assert!(source.contains(r#"  let year_segment = PathSegment::of(&ctx.pathParam("year_segment"));"#));
}

#[test]
fn test_generation_is_deterministic() {
    let manifest = load_manifest(&fixture("hello_routes.yaml")).unwrap();
    let first = generate_routes(&manifest, &PlatformConfig::curly()).unwrap();
    let second = generate_routes(&manifest, &PlatformConfig::curly()).unwrap();
    assert_eq!(first, second);
}
