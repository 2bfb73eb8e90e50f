use std::sync::Arc;
use std::time::Instant;

use catalog::EmojiCatalog;
use rayon::prelude::*;
use semantic::Embedder;
use tracing::debug;

use crate::aggregate::{aggregate, decide};
use crate::exact::{exact_match, is_multi_word, sentence_exact_match};
use crate::metrics::metrics_recorder;
use crate::normalize::normalize;
use crate::scorer::{remove_stop_words, score_against_catalog, score_sentence};
use crate::types::{
    MatchConfig, MatchError, MatchKind, MatchOutcome, Prediction, SentenceExactMatch, WordResult,
};


/// Text-to-emoji matcher over a shared catalog and embedder.
///
/// Both handles are read-only, so one engine can serve many threads.
pub struct MatchEngine {
    catalog: Arc<EmojiCatalog>,
    embedder: Arc<dyn Embedder>,
    cfg: MatchConfig,
}

impl MatchEngine {
    /// Construct an engine, checking that the embedder produces vectors of
    /// the catalog's dimension.
    pub fn new(
        catalog: Arc<EmojiCatalog>,
        embedder: Arc<dyn Embedder>,
        cfg: MatchConfig,
    ) -> Result<Self, MatchError> {
        cfg.validate()?;
        if let Some(expected) = catalog.dimension() {
            let actual = embedder.dimension();
            if expected != actual {
                return Err(MatchError::DimensionMismatch { expected, actual });
            }
        }
        debug!(
            entries = catalog.len(),
            model = embedder.model_name(),
            parallel = cfg.use_parallel,
            "match engine ready"
        );
        Ok(Self {
            catalog,
            embedder,
            cfg,
        })
    }

    pub fn catalog(&self) -> &Arc<EmojiCatalog> {
        &self.catalog
    }

    pub fn embedder(&self) -> &Arc<dyn Embedder> {
        &self.embedder
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Run normalization, exact matching and the similarity fallback, and
    /// return the per-word results before aggregation.
    pub fn match_text(&self, text: &str) -> Result<MatchOutcome, MatchError> {
        let normalized = normalize(text);
        self.match_normalized(&normalized)
    }

    fn match_normalized(&self, normalized: &str) -> Result<MatchOutcome, MatchError> {
        let kind = if is_multi_word(normalized) {
            MatchKind::Sentence
        } else {
            MatchKind::SingleWord
        };

        if self.catalog.is_empty() {
            debug!("empty catalog, skipping match");
            return Ok(MatchOutcome::single(kind, WordResult::miss(normalized)));
        }

        let exact = match kind {
            MatchKind::SingleWord => exact_match(normalized, &self.catalog),
            MatchKind::Sentence => self.sentence_exact(normalized),
        };
        if exact.is_match() {
            debug!(word = %exact.word, entry = ?exact.entry_name(), "exact match");
            return Ok(MatchOutcome::single(kind, exact));
        }

        let embedder = self.embedder.as_ref();
        match kind {
            MatchKind::SingleWord => {
                let result = score_against_catalog(normalized, &self.catalog, embedder, &self.cfg)?;
                debug!(entry = ?result.entry_name(), score = result.score, "similarity match");
                Ok(MatchOutcome::single(kind, result))
            }
            MatchKind::Sentence => {
                let words = remove_stop_words(normalized, embedder);
                debug!(content_words = words.len(), "scoring sentence");
                let results = score_sentence(&words, &self.catalog, embedder, &self.cfg)?;
                Ok(MatchOutcome {
                    kind,
                    words: results,
                })
            }
        }
    }

    fn sentence_exact(&self, normalized: &str) -> WordResult {
        if self.cfg.sentence_exact_match == SentenceExactMatch::WholeTextFirst {
            let whole = exact_match(normalized, &self.catalog);
            if whole.is_match() {
                return whole;
            }
        }
        sentence_exact_match(normalized, &self.catalog)
    }

    /// Map `text` to an emoji sequence, or fall back to the normalized text.
    pub fn predict(&self, text: &str) -> Result<Prediction, MatchError> {
        let start = Instant::now();
        let normalized = normalize(text);
        let outcome = self.match_normalized(&normalized)?;
        let result = aggregate(&outcome, &self.catalog);
        let kind = result.kind;
        let confidence = result.confidence;
        let prediction = decide(result, &normalized, &self.cfg);
        let latency = start.elapsed();

        debug!(
            ?kind,
            confidence,
            fallback = prediction.is_fallback(),
            latency_us = latency.as_micros() as u64,
            "prediction complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_predict(kind, latency, confidence, prediction.is_fallback());
        }

        Ok(prediction)
    }

    /// Predict every text, keeping input order. The first error aborts the batch.
    pub fn predict_batch<S>(&self, texts: &[S]) -> Result<Vec<Prediction>, MatchError>
    where
        S: AsRef<str> + Sync,
    {
        if self.cfg.use_parallel {
            texts.par_iter().map(|t| self.predict(t.as_ref())).collect()
        } else {
            texts.iter().map(|t| self.predict(t.as_ref())).collect()
        }
    }
}
