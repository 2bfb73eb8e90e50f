use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::SemanticError;

/// Runtime configuration describing which embedder to build and how to post-process vectors.
///
/// # Example
/// ```no_run
/// use semantic::{load_embedder, SemanticConfig};
///
/// let cfg = SemanticConfig {
///     mode: "lexicon".into(),
///     lexicon_path: Some("./data/lexicon.json".into()),
///     ..Default::default()
/// };
///
/// let embedder = load_embedder(&cfg).expect("lexicon should load");
/// let _vector = embedder.embed("joyful").expect("embed");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticConfig {
    /// Embedder selector: `"lexicon"` (word-vector table on disk) or `"fast"` (hashed stub).
    pub mode: String,
    /// Friendly label reported by the embedder.
    pub model_name: String,
    /// Path to the lexicon JSON file when [`mode`](Self::mode) is `"lexicon"`.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Output dimension of the hashed stub. Lexicon embedders take their dimension from the file.
    pub dimension: usize,
    /// Normalize every produced vector to unit length.
    pub normalize: bool,
}

impl SemanticConfig {
    /// Deterministic hashed stub; needs no assets on disk.
    pub fn fast() -> Self {
        Self {
            mode: "fast".into(),
            model_name: "hashed-stub".into(),
            ..Self::default()
        }
    }

    /// Word-vector lexicon loaded from `path`.
    pub fn lexicon(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: "lexicon".into(),
            lexicon_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), SemanticError> {
        match self.mode.as_str() {
            "fast" => {
                if self.dimension == 0 {
                    return Err(SemanticError::InvalidConfig(
                        "dimension must be greater than zero".into(),
                    ));
                }
            }
            "lexicon" => {
                if self.lexicon_path.is_none() {
                    return Err(SemanticError::InvalidConfig(
                        "lexicon mode requires lexicon_path".into(),
                    ));
                }
            }
            other => {
                return Err(SemanticError::InvalidConfig(format!(
                    "unknown embedder mode '{other}' (expected 'lexicon' or 'fast')"
                )));
            }
        }
        if self.model_name.trim().is_empty() {
            return Err(SemanticError::InvalidConfig(
                "model_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            mode: "lexicon".into(),
            model_name: "en-word-vectors-md".into(),
            lexicon_path: Some(PathBuf::from("./data/lexicon.json")),
            dimension: 300,
            normalize: false,
        }
    }
}
