//! Workspace umbrella crate for emojify.
//!
//! This crate wires the embedder (`semantic`), the emoji catalog (`catalog`)
//! and the matcher (`matcher`) together so callers can go from a YAML file to
//! predictions with a single entry point.
//!
//! ```no_run
//! use emojify::{Emojify, EmojifyConfig, Prediction};
//!
//! let cfg = EmojifyConfig::load(None).expect("config");
//! let emojify = Emojify::from_config(&cfg).expect("engine");
//! match emojify.predict("I am happy today").expect("predict") {
//!     Prediction::Matched(result) => println!("{}", result.emoji_sequence),
//!     Prediction::Fallback(text) => println!("{text}"),
//! }
//! ```

pub mod config;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

pub use crate::config::{
    CatalogYamlConfig, ConfigLoadError, EmojifyConfig, MatchYamlConfig, SemanticYamlConfig,
};
pub use catalog::{
    load_catalog, load_catalog_cached, load_catalog_with_embedder, parse_catalog, CatalogConfig,
    CatalogEntry, CatalogError, EmojiCatalog,
};
pub use matcher::{
    set_predict_metrics, MatchConfig, MatchEngine, MatchError, MatchKind, MatchOutcome,
    PredictMetrics, Prediction, PredictionResult, ScoringBackend, SentenceExactMatch, WordResult,
    MATCH_CONFIG_VERSION,
};
pub use semantic::{
    build_embedder, cosine_similarity, load_embedder, Embedder, HashedEmbedder, LexiconEmbedder,
    SemanticConfig, SemanticError,
};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "emojify.yaml";

/// Errors surfaced while bootstrapping or running the pipeline.
#[derive(Debug, Error)]
pub enum EmojifyError {
    #[error("config error: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
    #[error("match error: {0}")]
    Match(#[from] MatchError),
}

impl EmojifyConfig {
    /// Load `path`, or `emojify.yaml` when present, or the defaults; then
    /// apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        base.with_env_overrides()
    }
}

/// A ready-to-use matcher built from configuration.
pub struct Emojify {
    engine: MatchEngine,
}

impl Emojify {
    /// Load (or reuse) the embedder and catalog named by `cfg` and build an engine.
    ///
    /// Embedders and catalogs are memoized per configuration, so calling this
    /// repeatedly never reloads files.
    pub fn from_config(cfg: &EmojifyConfig) -> Result<Self, EmojifyError> {
        cfg.validate()?;
        let embedder = load_embedder(&cfg.semantic_config())?;
        let catalog = load_catalog_cached(&cfg.catalog_config(), Some(&embedder))?;
        info!(
            model = embedder.model_name(),
            entries = catalog.len(),
            "emojify ready"
        );
        Self::from_parts(catalog, embedder, cfg.match_config())
    }

    /// Build from already loaded parts.
    pub fn from_parts(
        catalog: Arc<EmojiCatalog>,
        embedder: Arc<dyn Embedder>,
        cfg: MatchConfig,
    ) -> Result<Self, EmojifyError> {
        let engine = MatchEngine::new(catalog, embedder, cfg)?;
        Ok(Self { engine })
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn predict(&self, text: &str) -> Result<Prediction, EmojifyError> {
        Ok(self.engine.predict(text)?)
    }

    pub fn predict_batch<S>(&self, texts: &[S]) -> Result<Vec<Prediction>, EmojifyError>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self.engine.predict_batch(texts)?)
    }
}
