use super::{Chunk, Dialect, ParamAccess, PathSegments};

#[test]
fn test_root_path() {
    let path = PathSegments::parse("/");
    assert_eq!(path.chunks(), &[Chunk::Literal("/".to_string())]);
    assert!(path.segments().is_empty());
    assert_eq!(path.full_path(Dialect::CURLY), "/");
    assert_eq!(path.full_path(Dialect::COLON), "/");
}

#[test]
fn test_literal_path_round_trips() {
    let path = PathSegments::parse("/hello/message");
    assert_eq!(path.full_path_curly(), "/hello/message");
    assert_eq!(path.full_path_colon(), "/hello/message");
    assert!(path.segments().is_empty());
}

#[test]
fn test_mixed_markers() {
    let path = PathSegments::parse("/:a/{b}");
    assert_eq!(path.full_path_curly(), "/{a}/{b}");
    assert_eq!(path.full_path_colon(), "/:a/:b");
    assert!(path.contains("a"));
    assert!(path.contains("b"));
}

#[test]
fn test_chunk_order() {
    let path = PathSegments::parse("/hello/:id/:date");
    assert_eq!(
        path.chunks(),
        &[
            Chunk::Literal("/".into()),
            Chunk::Literal("hello".into()),
            Chunk::Literal("/".into()),
            Chunk::Named("id".into()),
            Chunk::Literal("/".into()),
            Chunk::Named("date".into()),
        ]
    );
    let names: Vec<_> = path.segments().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["id", "date"]);
}

#[test]
fn test_consecutive_slashes_collapse() {
    let path = PathSegments::parse("//a///:b/");
    assert_eq!(path.full_path_curly(), "/a/{b}");
}

#[test]
fn test_relative_path_gains_leading_slash() {
    let path = PathSegments::parse(":id");
    assert_eq!(path.full_path_colon(), "/:id");
}

#[test]
fn test_unbalanced_brace_is_literal() {
    let path = PathSegments::parse("/a/{b/c}");
    assert_eq!(path.full_path_curly(), "/a/{b/c}");
    assert!(path.segments().is_empty());
    assert!(!path.contains("b"));
}

#[test]
fn test_custom_dialect() {
    let path = PathSegments::parse("/users/:id");
    assert_eq!(path.full_path(Dialect::new("<", ">")), "/users/<id>");
}

#[test]
fn test_matrix_decomposition() {
    let path = PathSegments::parse("/withMatrix/:year;author;country/:other");
    let year = path.segment("year").expect("year segment");
    assert_eq!(year.name(), "year");
    assert_eq!(
        year.matrix_keys().iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["author", "country"]
    );
    assert_eq!(
        year.matrix_var_names()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        vec!["yearAuthor", "yearCountry"]
    );
    assert!(path.contains("yearAuthor"));
    assert!(path.contains("year"));
    assert!(path.contains("other"));
    assert!(!path.contains("bogus"));
}

#[test]
fn test_matrix_segment_renders_as_one_element() {
    let path = PathSegments::parse("/withMatrix/:year;author;country/:other");
    assert_eq!(path.full_path_colon(), "/withMatrix/:year_segment/:other");
    assert_eq!(path.full_path_curly(), "/withMatrix/{year_segment}/{other}");
}

#[test]
fn test_required_vs_alias() {
    let path = PathSegments::parse("/withMatrix/:year;author;country/:other");
    let year = path.segment("yearAuthor").expect("owning segment");
    assert_eq!(year.name(), "year");
    assert!(year.is_required("year"));
    assert!(!year.is_required("yearAuthor"));
    assert!(year.is_path_parameter("yearAuthor"));
    assert!(year.is_path_parameter("author"));
    assert!(!year.is_path_parameter("other"));
}

#[test]
fn test_matrix_key_for() {
    let path = PathSegments::parse("/:year;author;country");
    let year = path.segment("year").expect("year segment");
    assert_eq!(year.matrix_key_for("yearAuthor"), "author");
    assert_eq!(year.matrix_key_for("yearCountry"), "country");
    assert_eq!(year.matrix_key_for("author"), "author");
    assert_eq!(year.matrix_key_for("year"), "year");
}

#[test]
fn test_access_strategy() {
    let path = PathSegments::parse("/:year;author/:other");
    let year = path.segment("year").expect("year segment");
    assert_eq!(
        year.access("year"),
        ParamAccess::SegmentValue {
            segment_var: "year_segment".into()
        }
    );
    assert_eq!(
        year.access("yearAuthor"),
        ParamAccess::MatrixValue {
            segment_var: "year_segment".into(),
            key: "author".into()
        }
    );
    let other = path.segment("other").expect("other segment");
    assert_eq!(
        other.access("other"),
        ParamAccess::PathParam {
            name: "other".into()
        }
    );
}

#[test]
fn test_segment_lookup_miss() {
    let path = PathSegments::parse("/hello/:id");
    assert!(path.segment("nonexistent").is_none());
    assert!(PathSegments::parse("/").segment("nonexistent").is_none());
}

#[test]
fn test_matrix_segments_listing() {
    let path = PathSegments::parse("/:a/:b;x/c/{d;y;z}/:e");
    let names: Vec<_> = path.matrix_segments().map(|s| s.name()).collect();
    assert_eq!(names, vec!["b", "d"]);
    assert_eq!(path.segments().len(), 4);
}

#[test]
fn test_empty_matrix_keys_ignored() {
    let path = PathSegments::parse("/:a;/:b;;k");
    let a = path.segment("a").expect("a segment");
    assert!(!a.has_matrix_params());
    assert_eq!(path.full_path_colon(), "/:a/:b_segment");
    let b = path.segment("b").expect("b segment");
    assert_eq!(b.matrix_keys().len(), 1);
    assert!(path.contains("bK"));
}

#[test]
fn test_duplicate_names_last_wins() {
    let path = PathSegments::parse("/:id/items/:id;rev");
    assert_eq!(path.segments().len(), 1);
    let id = path.segment("id").expect("id segment");
    assert!(id.has_matrix_params());
    assert_eq!(path.matrix_segments().len(), 1);
    assert_eq!(path.full_path_colon(), "/:id/items/:id_segment");
}

#[test]
fn test_display_uses_curly() {
    let path = PathSegments::parse("/findbyname/:name");
    assert_eq!(path.to_string(), "/findbyname/{name}");
}
