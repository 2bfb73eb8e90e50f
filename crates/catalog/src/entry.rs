use serde::{Deserialize, Serialize};

/// A single named emoji with its embedding.
///
/// Entries are immutable once a catalog is built. `name` is the identity and
/// the exact-match key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Lookup key, e.g. `"happy"` or `"birthday cake"`.
    pub name: String,
    /// Embedding of `name`; every entry in a catalog shares one dimension.
    pub vector: Vec<f32>,
    /// Short code rendered into a glyph, e.g. `":grinning_face:"`.
    pub short_name: String,
    /// Explicit glyph that takes precedence over short-name rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, short_name: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            vector,
            short_name: short_name.into(),
            glyph: None,
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    pub fn dimension(&self) -> usize {
        self.vector.len()
    }
}
