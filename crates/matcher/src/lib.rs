//! # emojify matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns free text into an emoji sequence. It sits on top of the
//! catalog (`catalog`) and the embedding layer (`semantic`) and owns the
//! decision logic: which entry wins, how confident the result is, and when to
//! hand the input back unchanged.
//!
//! ## Pipeline
//!
//! 1. **Normalize** - lowercase only. Whitespace is kept as is.
//! 2. **Exact match** - single words are looked up directly; in a sentence
//!    the first word that is a catalog key wins with score 1.0 and nothing
//!    else runs.
//! 3. **Similarity** - otherwise the text (or each non stop word of a
//!    sentence) is embedded and compared against every catalog vector. The
//!    highest strictly positive cosine wins; ties go to the earlier entry.
//! 4. **Aggregate** - glyphs are concatenated, confidence is the mean score,
//!    and zero confidence yields [`Prediction::Fallback`].
//!
//! ## Core Types
//!
//! - [`MatchEngine`]: holds the shared catalog and embedder.
//! - [`MatchConfig`]: exact-match order, scoring backend, rayon toggle and an
//!   optional minimum confidence.
//! - [`MatchOutcome`] / [`WordResult`]: per-word results before aggregation.
//! - [`Prediction`] / [`PredictionResult`]: what callers get back.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use catalog::{CatalogEntry, EmojiCatalog};
//! use matcher::{MatchConfig, MatchEngine, Prediction};
//! use semantic::LexiconEmbedder;
//!
//! let embedder = LexiconEmbedder::from_vectors(
//!     "demo",
//!     2,
//!     vec![("joyful", vec![0.8, 0.6])],
//!     None,
//! )
//! .unwrap();
//! let catalog = EmojiCatalog::new(vec![
//!     CatalogEntry::new("happy", ":grinning_face:", vec![1.0, 0.0]),
//!     CatalogEntry::new("sad", ":crying_face:", vec![0.0, 1.0]),
//! ])
//! .unwrap();
//!
//! let engine =
//!     MatchEngine::new(Arc::new(catalog), Arc::new(embedder), MatchConfig::default()).unwrap();
//!
//! match engine.predict("Joyful").unwrap() {
//!     Prediction::Matched(result) => assert_eq!(result.emoji_sequence, "😀"),
//!     Prediction::Fallback(text) => panic!("no emoji for {text}"),
//! }
//! ```
//!
//! ## Observability
//!
//! Install a [`PredictMetrics`] implementation via [`set_predict_metrics`] to
//! record per-prediction latency, confidence and fallbacks.

pub mod aggregate;
pub mod engine;
pub mod exact;
pub mod metrics;
pub mod normalize;
pub mod scorer;
pub mod types;

pub use crate::aggregate::{aggregate, decide};
pub use crate::engine::MatchEngine;
pub use crate::exact::{exact_match, is_multi_word, sentence_exact_match};
pub use crate::metrics::{set_predict_metrics, PredictMetrics};
pub use crate::normalize::normalize;
pub use crate::scorer::{
    best_entry, remove_stop_words, score_against_catalog, score_sentence, ScoredEntry,
};
pub use crate::types::{
    MatchConfig, MatchError, MatchKind, MatchOutcome, MatchSource, Prediction, PredictionResult,
    ScoringBackend, SentenceExactMatch, WordResult, MATCH_CONFIG_VERSION,
};
