use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marker convention used when rendering named chunks back into a path.
///
/// A dialect is just a prefix/suffix pair, so adding a router syntax never
/// needs a new type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dialect {
    /// Text emitted before a variable key
    pub prefix: &'static str,
    /// Text emitted after a variable key
    pub suffix: &'static str,
}

impl Dialect {
    /// `{name}` - OpenAPI path keys and brace-style routers
    pub const CURLY: Dialect = Dialect::new("{", "}");

    /// `:name` - routers using a leading colon with no closing marker
    pub const COLON: Dialect = Dialect::new(":", "");

    /// Create a custom dialect
    #[must_use]
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Config name of the dialect, if it is one of the built-ins
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        if *self == Self::CURLY {
            Some("curly")
        } else if *self == Self::COLON {
            Some("colon")
        } else {
            None
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::CURLY
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}name{}", self.prefix, self.suffix),
        }
    }
}

impl Serialize for Dialect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => Err(serde::ser::Error::custom(format!(
                "dialect {self} has no config name"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        match name.to_ascii_lowercase().as_str() {
            "curly" | "brace" | "openapi" => Ok(Dialect::CURLY),
            "colon" => Ok(Dialect::COLON),
            other => Err(serde::de::Error::unknown_variant(other, &["curly", "colon"])),
        }
    }
}

/// One ordered piece of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// Fixed text (slashes, static path sections), emitted verbatim
    Literal(String),
    /// Path key of a variable, emitted as `prefix + key + suffix`
    Named(String),
}

impl Chunk {
    /// Raw text of the chunk without any dialect markers
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Chunk::Literal(text) | Chunk::Named(text) => text,
        }
    }

    pub(crate) fn render_into(&self, out: &mut String, dialect: Dialect) {
        match self {
            Chunk::Literal(text) => out.push_str(text),
            Chunk::Named(key) => {
                out.push_str(dialect.prefix);
                out.push_str(key);
                out.push_str(dialect.suffix);
            }
        }
    }
}

/// Render a chunk sequence in the given dialect.
pub(crate) fn render(chunks: &[Chunk], dialect: Dialect) -> String {
    let capacity = chunks
        .iter()
        .map(|c| c.text().len() + dialect.prefix.len() + dialect.suffix.len())
        .sum();
    let mut out = String::with_capacity(capacity);
    for chunk in chunks {
        chunk.render_into(&mut out, dialect);
    }
    out
}
