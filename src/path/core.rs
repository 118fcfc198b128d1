use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use super::chunk::{render, Chunk, Dialect};
use super::segment::Segment;

/// A route path template compiled into chunks and segments.
///
/// Built once per route path at generation time and only queried afterwards.
/// Parsing is total: malformed input falls back to literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSegments {
    chunks: Vec<Chunk>,
    /// In path order; one entry per distinct primary name
    segments: Vec<Segment>,
    /// Indexes into `segments` of those carrying matrix params
    matrix: Vec<usize>,
    all_names: HashSet<String>,
}

impl PathSegments {
    /// Parse a raw path template such as `/withMatrix/:year;author;country/:other`.
    ///
    /// Sections are split on `/`; empty sections are dropped and every kept
    /// section is preceded by a literal `/`. A section is a variable when it
    /// starts with `:` or is wrapped in `{}`; anything else is literal text.
    ///
    /// When a primary name appears twice the later segment replaces the
    /// earlier one, keeping the earlier position. Both named chunks remain.
    #[must_use]
    pub fn parse(full_path: &str) -> Self {
        let mut chunks = Vec::new();
        let mut segments: Vec<Segment> = Vec::new();

        if full_path == "/" {
            chunks.push(Chunk::Literal("/".to_string()));
        } else {
            for section in full_path.split('/').filter(|s| !s.is_empty()) {
                chunks.push(Chunk::Literal("/".to_string()));
                match variable_name(section) {
                    Some(raw) => {
                        let segment = Segment::from_variable(raw);
                        chunks.push(Chunk::Named(segment.path_key()));
                        match segments.iter_mut().find(|s| s.name() == segment.name()) {
                            Some(existing) => {
                                debug!(
                                    template = %full_path,
                                    name = %segment.name(),
                                    "Duplicate path variable, later occurrence wins"
                                );
                                *existing = segment;
                            }
                            None => segments.push(segment),
                        }
                    }
                    None => chunks.push(Chunk::Literal(section.to_string())),
                }
            }
        }

        let parsed = Self::from_parts(chunks, segments);
        debug!(
            template = %full_path,
            segments = parsed.segments.len(),
            matrix_segments = parsed.matrix.len(),
            "Parsed path template"
        );
        parsed
    }

    fn from_parts(chunks: Vec<Chunk>, segments: Vec<Segment>) -> Self {
        let mut all_names = HashSet::new();
        let mut matrix = Vec::new();
        for (idx, segment) in segments.iter().enumerate() {
            all_names.extend(segment.names().map(str::to_string));
            if segment.has_matrix_params() {
                matrix.push(idx);
            }
        }
        Self {
            chunks,
            segments,
            matrix,
            all_names,
        }
    }

    /// Does this template bind `var_name` anywhere, matrix keys included?
    #[must_use]
    pub fn contains(&self, var_name: &str) -> bool {
        self.all_names.contains(var_name)
    }

    /// Segment owning `var_name`, or `None` when the name is not path-bound.
    #[must_use]
    pub fn segment(&self, var_name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.is_path_parameter(var_name))
    }

    /// All segments in path order
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments that need a segment-object decode before their values are read
    pub fn matrix_segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.matrix.iter().map(move |&idx| &self.segments[idx])
    }

    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Render the template with the given dialect's markers
    #[must_use]
    pub fn full_path(&self, dialect: Dialect) -> String {
        render(&self.chunks, dialect)
    }

    /// Full path with `{name}` markers (OpenAPI path keys)
    #[must_use]
    pub fn full_path_curly(&self) -> String {
        self.full_path(Dialect::CURLY)
    }

    /// Full path with `:name` markers
    #[must_use]
    pub fn full_path_colon(&self) -> String {
        self.full_path(Dialect::COLON)
    }
}

impl fmt::Display for PathSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path_curly())
    }
}

fn variable_name(section: &str) -> Option<&str> {
    if let Some(name) = section.strip_prefix(':') {
        return Some(name);
    }
    if section.len() >= 2 && section.starts_with('{') && section.ends_with('}') {
        return Some(&section[1..section.len() - 1]);
    }
    None
}
