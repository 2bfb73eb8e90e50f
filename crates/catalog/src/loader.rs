//! JSON catalog loading.
//!
//! The file is a JSON object keyed by entry name, in the order the entries
//! should be scanned:
//!
//! ```json
//! {
//!   "happy": { "short_name": ":grinning_face:", "vector": [0.9, 0.1] },
//!   "sad":   { "short_name": ":crying_face:",   "vector": [0.1, 0.9], "emoji": "😢" }
//! }
//! ```
//!
//! `emoji` is optional and overrides short-code rendering. Any other fields
//! (for example a stored `unicode`) are ignored.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use semantic::Embedder;

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use crate::store::EmojiCatalog;

/// Where to find the catalog and how strictly to treat missing vectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file.
    pub path: PathBuf,
    /// Embed entry names whose `vector` is absent instead of rejecting them.
    #[serde(default)]
    pub embed_missing: bool,
}

impl CatalogConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            embed_missing: false,
        }
    }

    pub fn with_embed_missing(mut self, embed_missing: bool) -> Self {
        self.embed_missing = embed_missing;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("./data/emoji_catalog.json")
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    vector: Option<Vec<f32>>,
    #[serde(default)]
    emoji: Option<String>,
}

/// Parse catalog JSON. When `embedder` is given, entries without a vector get
/// the embedding of their name; otherwise a missing vector is a
/// [`CatalogError::DataIntegrity`].
pub fn parse_catalog(
    json: &str,
    embedder: Option<&dyn Embedder>,
) -> Result<EmojiCatalog, CatalogError> {
    let root: Value = serde_json::from_str(json)?;
    let object: Map<String, Value> = match root {
        Value::Object(map) => map,
        _ => {
            return Err(CatalogError::Parse(
                "catalog root must be a JSON object keyed by entry name".into(),
            ))
        }
    };

    let mut entries = Vec::with_capacity(object.len());
    for (name, value) in object {
        let raw: RawEntry = serde_json::from_value(value)
            .map_err(|e| CatalogError::integrity(&name, e.to_string()))?;
        let short_name = raw
            .short_name
            .ok_or_else(|| CatalogError::integrity(&name, "missing short_name"))?;
        let vector = match (raw.vector, embedder) {
            (Some(vector), _) => vector,
            (None, Some(embedder)) => {
                debug!(entry = %name, "embedding catalog entry without stored vector");
                embedder.embed(&name)?
            }
            (None, None) => return Err(CatalogError::integrity(&name, "missing vector")),
        };
        entries.push(CatalogEntry {
            name,
            vector,
            short_name,
            glyph: raw.emoji,
        });
    }

    EmojiCatalog::new(entries)
}

/// Load a catalog file whose entries all carry vectors.
pub fn load_catalog(path: &Path) -> Result<EmojiCatalog, CatalogError> {
    load_catalog_from(path, None)
}

/// Load a catalog file, embedding entries that lack a vector.
pub fn load_catalog_with_embedder(
    path: &Path,
    embedder: &dyn Embedder,
) -> Result<EmojiCatalog, CatalogError> {
    load_catalog_from(path, Some(embedder))
}

fn load_catalog_from(
    path: &Path,
    embedder: Option<&dyn Embedder>,
) -> Result<EmojiCatalog, CatalogError> {
    let json = fs::read_to_string(path)?;
    let catalog = parse_catalog(&json, embedder)?;
    info!(
        path = %path.display(),
        entries = catalog.len(),
        dimension = ?catalog.dimension(),
        "loaded emoji catalog"
    );
    Ok(catalog)
}

/// Catalogs filled by an embedder are only valid in that embedder's vector
/// space, so the key carries the embedder's address when `embed_missing` is
/// set. The entry keeps the embedder alive so the address cannot be reused.
type RegistryKey = (CatalogConfig, Option<usize>);

struct CachedCatalog {
    catalog: Arc<EmojiCatalog>,
    _filled_by: Option<Arc<dyn Embedder>>,
}

type Registry = Mutex<HashMap<RegistryKey, CachedCatalog>>;

fn registry() -> &'static Registry {
    static CATALOGS: OnceCell<Registry> = OnceCell::new();
    CATALOGS.get_or_init(|| Mutex::new(HashMap::new()))
}

fn embedder_id(embedder: &Arc<dyn Embedder>) -> usize {
    Arc::as_ptr(embedder).cast::<()>() as usize
}

/// Shared catalog for `cfg`, loaded on first use and reused afterwards.
///
/// `embedder` is only consulted when `cfg.embed_missing` is set. In that case
/// the catalog is memoized per embedder instance as well as per config.
pub fn load_catalog_cached(
    cfg: &CatalogConfig,
    embedder: Option<&Arc<dyn Embedder>>,
) -> Result<Arc<EmojiCatalog>, CatalogError> {
    let fill = if cfg.embed_missing { embedder } else { None };
    let key = (cfg.clone(), fill.map(embedder_id));

    let mut cache = registry()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(cached) = cache.get(&key) {
        return Ok(cached.catalog.clone());
    }

    let catalog = Arc::new(load_catalog_from(&cfg.path, fill.map(|e| &**e))?);
    cache.insert(
        key,
        CachedCatalog {
            catalog: catalog.clone(),
            _filled_by: fill.cloned(),
        },
    );
    Ok(catalog)
}
