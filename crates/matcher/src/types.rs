use std::sync::Arc;

use catalog::CatalogEntry;
use semantic::SemanticError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape of the input once normalized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// No ASCII space in the text; matched as one unit.
    SingleWord,
    /// Text splits on ASCII space into more than one word.
    Sentence,
}

/// Which stage produced a [`WordResult`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Exact,
    Similarity,
    None,
}

/// Best catalog entry for one word (or the whole text in single-word mode).
#[derive(Debug, Clone, PartialEq)]
pub struct WordResult {
    /// The word or text that was matched.
    pub word: String,
    /// Matched entry, `None` when nothing scored above zero.
    pub entry: Option<Arc<CatalogEntry>>,
    /// 1.0 for exact matches, cosine similarity in `[0, 1]` otherwise.
    pub score: f32,
    pub source: MatchSource,
}

impl WordResult {
    pub fn exact(word: impl Into<String>, entry: Arc<CatalogEntry>) -> Self {
        Self {
            word: word.into(),
            entry: Some(entry),
            score: 1.0,
            source: MatchSource::Exact,
        }
    }

    pub fn similar(word: impl Into<String>, entry: Arc<CatalogEntry>, score: f32) -> Self {
        Self {
            word: word.into(),
            entry: Some(entry),
            score,
            source: MatchSource::Similarity,
        }
    }

    pub fn miss(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            entry: None,
            score: 0.0,
            source: MatchSource::None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.entry.is_some()
    }

    pub fn entry_name(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.name.as_str())
    }
}

/// Per-word results for one input, tagged with how they were produced.
///
/// Single-word and exact-match outcomes carry exactly one element; sentence
/// similarity outcomes carry one element per content word.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub kind: MatchKind,
    pub words: Vec<WordResult>,
}

impl MatchOutcome {
    pub fn single(kind: MatchKind, word: WordResult) -> Self {
        Self {
            kind,
            words: vec![word],
        }
    }
}

/// Structured match returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Rendered glyphs of every matched word, in word order.
    pub emoji_sequence: String,
    /// `U+XXXX` per word; `None` for multi-codepoint glyphs and unmatched words.
    pub unicode_sequence: Vec<Option<String>>,
    /// Mean of per-word scores.
    pub confidence: f32,
    pub kind: MatchKind,
}

/// Outcome of [`MatchEngine::predict`](crate::MatchEngine::predict).
///
/// Callers must check which variant they got: `Fallback` carries the
/// normalized input unchanged and means no usable match was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Prediction {
    Matched(PredictionResult),
    Fallback(String),
}

impl Prediction {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Prediction::Fallback(_))
    }

    pub fn matched(&self) -> Option<&PredictionResult> {
        match self {
            Prediction::Matched(result) => Some(result),
            Prediction::Fallback(_) => None,
        }
    }

    /// Confidence of the prediction; 0 for fallbacks.
    pub fn confidence(&self) -> f32 {
        self.matched().map_or(0.0, |r| r.confidence)
    }

    /// Emoji sequence for matches, the original text for fallbacks.
    pub fn as_text(&self) -> &str {
        match self {
            Prediction::Matched(result) => &result.emoji_sequence,
            Prediction::Fallback(text) => text,
        }
    }
}

/// Exact-match order for multi-word input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SentenceExactMatch {
    /// Look up each word left to right; the first hit wins.
    #[default]
    PerWord,
    /// Look up the whole text first (catalog names may contain spaces), then each word.
    WholeTextFirst,
}

/// How candidate vectors are compared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringBackend {
    /// Cosine similarity computed by the matcher.
    #[default]
    Cosine,
    /// Delegate to [`semantic::Embedder::similarity`].
    Embedder,
}

/// The only [`MatchConfig::version`] this crate understands.
pub const MATCH_CONFIG_VERSION: u32 = 1;

/// Configuration for a [`MatchEngine`](crate::MatchEngine).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Schema version of the stored config. Engines refuse any version other
    /// than [`MATCH_CONFIG_VERSION`], so a config written for a newer
    /// matcher with different scoring rules is not silently misread.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    #[serde(default)]
    pub sentence_exact_match: SentenceExactMatch,
    #[serde(default)]
    pub scoring: ScoringBackend,
    /// Scan the catalog and sentence words on the rayon pool.
    #[serde(default)]
    pub use_parallel: bool,
    /// Predictions below this confidence fall back to the input text.
    /// `None` keeps every non-zero match, however weak.
    #[serde(default)]
    pub min_confidence: Option<f32>,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        MATCH_CONFIG_VERSION
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn with_sentence_exact_match(mut self, order: SentenceExactMatch) -> Self {
        self.sentence_exact_match = order;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringBackend) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: Option<f32>) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version != MATCH_CONFIG_VERSION {
            return Err(MatchError::InvalidConfig(format!(
                "unsupported match config version {} (expected {MATCH_CONFIG_VERSION})",
                self.version
            )));
        }
        if let Some(min) = self.min_confidence {
            if !(0.0..=1.0).contains(&min) {
                return Err(MatchError::InvalidConfig(
                    "min_confidence must be between 0.0 and 1.0".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            sentence_exact_match: SentenceExactMatch::default(),
            scoring: ScoringBackend::default(),
            use_parallel: false,
            min_confidence: None,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The embedder failed to produce a vector.
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
    /// Query and catalog vectors disagree on dimension.
    #[error("embedding dimension mismatch: catalog has {expected}, embedder produced {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
