use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::lexicon::LexiconEmbedder;
use crate::stub::HashedEmbedder;
use crate::{Embedder, SemanticConfig, SemanticError};

#[derive(Hash, PartialEq, Eq, Clone, Debug)]
struct EmbedderCacheKey {
    mode: String,
    model_name: String,
    lexicon_path: Option<PathBuf>,
    dimension: usize,
    normalize: bool,
}

impl EmbedderCacheKey {
    fn from_config(cfg: &SemanticConfig) -> Self {
        Self {
            mode: cfg.mode.clone(),
            model_name: cfg.model_name.clone(),
            lexicon_path: cfg.lexicon_path.clone(),
            dimension: cfg.dimension,
            normalize: cfg.normalize,
        }
    }
}

type Registry = Mutex<HashMap<EmbedderCacheKey, Arc<dyn Embedder>>>;

fn registry() -> &'static Registry {
    static EMBEDDERS: OnceCell<Registry> = OnceCell::new();
    EMBEDDERS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Return the shared embedder for `cfg`, building it on first use.
///
/// Repeated calls with an equal configuration return the same instance; the
/// lexicon file is read at most once per process.
pub fn load_embedder(cfg: &SemanticConfig) -> Result<Arc<dyn Embedder>, SemanticError> {
    cfg.validate()?;
    let key = EmbedderCacheKey::from_config(cfg);

    let mut cache = registry()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(handle) = cache.get(&key) {
        debug!(mode = %cfg.mode, "reusing cached embedder");
        return Ok(handle.clone());
    }

    let handle = build_embedder(cfg)?;
    cache.insert(key, handle.clone());
    Ok(handle)
}

/// Construct a fresh embedder for `cfg` without touching the shared registry.
pub fn build_embedder(cfg: &SemanticConfig) -> Result<Arc<dyn Embedder>, SemanticError> {
    cfg.validate()?;
    let handle: Arc<dyn Embedder> = match cfg.mode.as_str() {
        "fast" => Arc::new(HashedEmbedder::new(cfg)?),
        _ => {
            let path = cfg.lexicon_path.as_ref().ok_or_else(|| {
                SemanticError::InvalidConfig("lexicon mode requires lexicon_path".into())
            })?;
            Arc::new(LexiconEmbedder::from_file(path, cfg)?)
        }
    };
    Ok(handle)
}
