use super::{bind_params, BindError, MethodParam, ParamType};
use crate::path::{ParamAccess, PathSegments};

#[test]
fn test_param_type_codes() {
    assert_eq!(ParamType::PathParam.code(), "pathParam");
    assert_eq!(ParamType::QueryParam.to_string(), "queryParam");
}

#[test]
fn test_param_type_deserialize() {
    let t: ParamType = serde_yaml::from_str("queryParam").expect("parse");
    assert_eq!(t, ParamType::QueryParam);
}

#[test]
fn test_bind_path_and_query() {
    let path = PathSegments::parse("/hello/:id/:date");
    let params = vec![
        MethodParam::new("id").with_rust_type("i32"),
        MethodParam::new("date").with_rust_type("NaiveDate"),
        MethodParam::new("otherParam"),
    ];
    let bound = bind_params(&path, &params, false).expect("bind");
    assert_eq!(bound[0].param_type, ParamType::PathParam);
    assert_eq!(
        bound[0].access,
        Some(ParamAccess::PathParam { name: "id".into() })
    );
    assert!(bound[0].required);
    assert_eq!(bound[1].param_type, ParamType::PathParam);
    assert_eq!(bound[2].param_type, ParamType::QueryParam);
    assert!(bound[2].access.is_none());
}

#[test]
fn test_bind_matrix_params() {
    let path = PathSegments::parse("/withMatrix/:year;author;country/:other");
    let params = vec![
        MethodParam::new("year").with_rust_type("i32"),
        MethodParam::new("author"),
        MethodParam::new("yearCountry"),
        MethodParam::new("other"),
        MethodParam::new("extra"),
    ];
    let bound = bind_params(&path, &params, false).expect("bind");
    assert_eq!(
        bound[0].access,
        Some(ParamAccess::SegmentValue {
            segment_var: "year_segment".into()
        })
    );
    assert!(bound[0].required);
    assert_eq!(
        bound[1].access,
        Some(ParamAccess::MatrixValue {
            segment_var: "year_segment".into(),
            key: "author".into()
        })
    );
    assert!(!bound[1].required);
    assert_eq!(
        bound[2].access,
        Some(ParamAccess::MatrixValue {
            segment_var: "year_segment".into(),
            key: "country".into()
        })
    );
    assert_eq!(bound[4].param_type, ParamType::QueryParam);
}

#[test]
fn test_bind_body() {
    let path = PathSegments::parse("/savebean/:foo");
    let params = vec![
        MethodParam::new("foo"),
        MethodParam::new("dto").with_rust_type("HelloDto"),
    ];
    let bound = bind_params(&path, &params, true).expect("bind");
    assert_eq!(bound[1].param_type, ParamType::Body);
}

#[test]
fn test_bind_non_scalar_without_body_is_query() {
    let path = PathSegments::parse("/search");
    let params = vec![MethodParam::new("filter").with_rust_type("Filter")];
    let bound = bind_params(&path, &params, false).expect("bind");
    assert_eq!(bound[0].param_type, ParamType::QueryParam);
}

#[test]
fn test_optional_query_not_required() {
    let path = PathSegments::parse("/search");
    let params = vec![MethodParam::new("q").with_rust_type("Option<String>")];
    let bound = bind_params(&path, &params, true).expect("bind");
    assert_eq!(bound[0].param_type, ParamType::QueryParam);
    assert!(!bound[0].required);
}

#[test]
fn test_explicit_type_wins() {
    let path = PathSegments::parse("/items/:id");
    let params = vec![MethodParam::new("id").with_type(ParamType::Header)];
    let bound = bind_params(&path, &params, false).expect("bind");
    assert_eq!(bound[0].param_type, ParamType::Header);
}

#[test]
fn test_unbound_path_param() {
    let path = PathSegments::parse("/items/:id");
    let params = vec![MethodParam::new("missing").with_type(ParamType::PathParam)];
    let err = bind_params(&path, &params, false).unwrap_err();
    assert_eq!(
        err,
        BindError::UnboundPathParam {
            name: "missing".into(),
            path: "/items/{id}".into()
        }
    );
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_multiple_bodies() {
    let path = PathSegments::parse("/items");
    let params = vec![
        MethodParam::new("a").with_rust_type("Item"),
        MethodParam::new("b").with_rust_type("Item"),
    ];
    let err = bind_params(&path, &params, true).unwrap_err();
    assert!(matches!(err, BindError::MultipleBodies { .. }));
}
