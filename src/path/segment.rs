use std::collections::BTreeSet;

/// Suffix of the path key used for segments that carry matrix parameters.
pub const SEGMENT_SUFFIX: &str = "_segment";

/// How generated code reads one bound variable out of the path.
///
/// Matrix parameters share a single path element, so their values come from
/// one decoded segment object rather than from separate path reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamAccess {
    /// Plain scalar path parameter read under its own name
    PathParam {
        /// Name of the path parameter
        name: String,
    },
    /// Bare value of a decoded segment object
    SegmentValue {
        /// Variable holding the decoded segment (e.g. `year_segment`)
        segment_var: String,
    },
    /// One matrix key looked up in a decoded segment object
    MatrixValue {
        /// Variable holding the decoded segment
        segment_var: String,
        /// Raw matrix key (e.g. `author`)
        key: String,
    },
}

/// Parsed representation of one named path variable and its matrix keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: String,
    matrix_keys: BTreeSet<String>,
    matrix_var_names: BTreeSet<String>,
}

impl Segment {
    /// Build a segment from the text between the variable markers.
    ///
    /// `year;author;country` yields primary name `year` and matrix keys
    /// `author` and `country`. Empty keys are dropped.
    pub(crate) fn from_variable(raw: &str) -> Self {
        let mut parts = raw.split(';');
        let name = parts.next().unwrap_or_default().to_string();
        let matrix_keys: BTreeSet<String> = parts
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect();
        let matrix_var_names = matrix_keys.iter().map(|key| combine(&name, key)).collect();
        Self {
            name,
            matrix_keys,
            matrix_var_names,
        }
    }

    /// Primary variable name (the part before any `;`)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw matrix keys
    #[must_use]
    pub fn matrix_keys(&self) -> &BTreeSet<String> {
        &self.matrix_keys
    }

    /// Compound variable names, one per matrix key (`year` + `author` = `yearAuthor`)
    #[must_use]
    pub fn matrix_var_names(&self) -> &BTreeSet<String> {
        &self.matrix_var_names
    }

    #[must_use]
    pub fn has_matrix_params(&self) -> bool {
        !self.matrix_keys.is_empty()
    }

    /// True only for the primary name, never for a matrix alias.
    #[must_use]
    pub fn is_required(&self, var_name: &str) -> bool {
        self.name == var_name
    }

    /// True for the primary name, a compound matrix name or a raw matrix key.
    #[must_use]
    pub fn is_path_parameter(&self, var_name: &str) -> bool {
        self.name == var_name
            || self.matrix_var_names.contains(var_name)
            || self.matrix_keys.contains(var_name)
    }

    /// Every name this segment answers to.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.matrix_var_names.iter().map(String::as_str))
            .chain(self.matrix_keys.iter().map(String::as_str))
    }

    /// Recover the raw matrix key from a compound variable name.
    ///
    /// Names that do not extend the primary name are returned unchanged, so a
    /// raw key passes straight through.
    #[must_use]
    pub fn matrix_key_for(&self, var_name: &str) -> String {
        match var_name.strip_prefix(self.name.as_str()) {
            Some(rest) if !rest.is_empty() => lower_first(rest),
            _ => var_name.to_string(),
        }
    }

    /// Name of the variable holding this segment's decoded object.
    #[must_use]
    pub fn segment_var(&self) -> String {
        format!("{}{SEGMENT_SUFFIX}", self.name)
    }

    /// Key this segment occupies in the rendered path.
    ///
    /// Matrix segments are read as an opaque segment object and so are keyed
    /// `name_segment`.
    #[must_use]
    pub fn path_key(&self) -> String {
        if self.has_matrix_params() {
            self.segment_var()
        } else {
            self.name.clone()
        }
    }

    /// Read strategy for a variable bound to this segment.
    #[must_use]
    pub fn access(&self, var_name: &str) -> ParamAccess {
        if !self.has_matrix_params() {
            return ParamAccess::PathParam {
                name: self.name.clone(),
            };
        }
        let segment_var = self.segment_var();
        if self.is_required(var_name) {
            ParamAccess::SegmentValue { segment_var }
        } else {
            ParamAccess::MatrixValue {
                segment_var,
                key: self.matrix_key_for(var_name),
            }
        }
    }
}

fn combine(name: &str, key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len() + key.len());
            out.push_str(name);
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => name.to_string(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
