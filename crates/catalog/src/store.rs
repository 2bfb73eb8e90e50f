use std::collections::HashMap;
use std::sync::Arc;

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use crate::render::render_short_name;

/// Read-only, ordered collection of emoji entries.
///
/// Iteration follows insertion order, which is also the tie-break order for
/// similarity search. Entries are validated on construction so that scoring
/// code never has to re-check them.
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    entries: Vec<Arc<CatalogEntry>>,
    by_name: HashMap<String, usize>,
    dimension: Option<usize>,
}

impl EmojiCatalog {
    /// A catalog with no entries. Every prediction against it falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting malformed or duplicate entries.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for entry in entries {
            catalog.push(entry)?;
        }
        Ok(catalog)
    }

    fn push(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if entry.name.is_empty() {
            return Err(CatalogError::integrity("", "entry name must not be empty"));
        }
        if entry.short_name.trim().is_empty() {
            return Err(CatalogError::integrity(&entry.name, "missing short_name"));
        }
        if entry.vector.is_empty() {
            return Err(CatalogError::integrity(&entry.name, "missing vector"));
        }
        if entry.vector.iter().any(|x| !x.is_finite()) {
            return Err(CatalogError::integrity(
                &entry.name,
                "vector contains non-finite values",
            ));
        }
        match self.dimension {
            Some(dim) if dim != entry.vector.len() => {
                return Err(CatalogError::integrity(
                    &entry.name,
                    format!(
                        "vector has {} components, catalog dimension is {dim}",
                        entry.vector.len()
                    ),
                ));
            }
            Some(_) => {}
            None => self.dimension = Some(entry.vector.len()),
        }
        if self.by_name.contains_key(&entry.name) {
            return Err(CatalogError::integrity(&entry.name, "duplicate entry name"));
        }
        self.by_name.insert(entry.name.clone(), self.entries.len());
        self.entries.push(Arc::new(entry));
        Ok(())
    }

    /// Exact lookup by name.
    pub fn get(&self, name: &str) -> Option<&Arc<CatalogEntry>> {
        self.by_name.get(name).map(|idx| &self.entries[*idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shared vector dimension, `None` for an empty catalog.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Render a short code into a glyph.
    pub fn render(&self, short_name: &str) -> String {
        render_short_name(short_name)
    }

    /// Glyph for `entry`: its explicit glyph if present, otherwise its short code rendered.
    pub fn render_entry(&self, entry: &CatalogEntry) -> String {
        match &entry.glyph {
            Some(glyph) => glyph.clone(),
            None => self.render(&entry.short_name),
        }
    }
}
