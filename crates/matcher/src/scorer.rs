//! Similarity fallback: embed a word and scan the catalog for the entry with
//! the highest positive score.

use std::sync::Arc;

use catalog::{CatalogEntry, EmojiCatalog};
use rayon::prelude::*;
use semantic::{cosine_similarity, Embedder};
use tracing::trace;

use crate::exact::split_words;
use crate::types::{MatchConfig, MatchError, ScoringBackend, WordResult};

/// Best-scoring entry for a query vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub index: usize,
    pub entry: Arc<CatalogEntry>,
    pub score: f32,
}

fn score_pair(
    backend: ScoringBackend,
    embedder: &dyn Embedder,
    query: &[f32],
    candidate: &[f32],
) -> f32 {
    match backend {
        ScoringBackend::Cosine => cosine_similarity(query, candidate),
        ScoringBackend::Embedder => embedder.similarity(query, candidate).min(1.0),
    }
}

/// Scan `catalog` for the entry most similar to `query`.
///
/// Only strictly positive scores are kept and only a strictly greater score
/// replaces the current best, so ties resolve to the entry that comes first in
/// catalog order. The parallel scan reduces with the same rule and returns the
/// same entry as the sequential one.
pub fn best_entry(
    query: &[f32],
    catalog: &EmojiCatalog,
    embedder: &dyn Embedder,
    backend: ScoringBackend,
    use_parallel: bool,
) -> Option<ScoredEntry> {
    let entries = catalog.entries();
    let best = if use_parallel {
        entries
            .par_iter()
            .enumerate()
            .map(|(idx, entry)| (idx, score_pair(backend, embedder, query, &entry.vector)))
            .filter(|(_, score)| *score > 0.0)
            .reduce_with(|a, b| {
                if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
                    b
                } else {
                    a
                }
            })
    } else {
        let mut best: Option<(usize, f32)> = None;
        let mut max_score = 0.0f32;
        for (idx, entry) in entries.iter().enumerate() {
            let score = score_pair(backend, embedder, query, &entry.vector);
            if score > max_score {
                max_score = score;
                best = Some((idx, score));
            }
        }
        best
    };

    best.map(|(index, score)| ScoredEntry {
        index,
        entry: entries[index].clone(),
        score,
    })
}

/// Words of `text` that the embedder does not treat as stop words.
///
/// Empty words from repeated spaces are kept; they embed to nothing useful and
/// simply score zero.
pub fn remove_stop_words<'a>(text: &'a str, embedder: &dyn Embedder) -> Vec<&'a str> {
    split_words(text)
        .filter(|word| !embedder.is_stop_word(word))
        .collect()
}

/// Embed `word` and find its closest catalog entry.
pub fn score_against_catalog(
    word: &str,
    catalog: &EmojiCatalog,
    embedder: &dyn Embedder,
    cfg: &MatchConfig,
) -> Result<WordResult, MatchError> {
    let query = embedder.embed(word)?;
    if let Some(expected) = catalog.dimension() {
        if query.len() != expected {
            return Err(MatchError::DimensionMismatch {
                expected,
                actual: query.len(),
            });
        }
    }

    let result = match best_entry(&query, catalog, embedder, cfg.scoring, cfg.use_parallel) {
        Some(best) => {
            trace!(word, entry = %best.entry.name, score = best.score, "similarity match");
            WordResult::similar(word, best.entry, best.score)
        }
        None => {
            trace!(word, "no positive similarity");
            WordResult::miss(word)
        }
    };
    Ok(result)
}

/// Score every word independently, preserving word order.
pub fn score_sentence(
    words: &[&str],
    catalog: &EmojiCatalog,
    embedder: &dyn Embedder,
    cfg: &MatchConfig,
) -> Result<Vec<WordResult>, MatchError> {
    if cfg.use_parallel {
        words
            .par_iter()
            .map(|word| score_against_catalog(word, catalog, embedder, cfg))
            .collect()
    } else {
        words
            .iter()
            .map(|word| score_against_catalog(word, catalog, embedder, cfg))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchSource;
    use semantic::{LexiconEmbedder, SemanticError};

    fn embedder() -> LexiconEmbedder {
        LexiconEmbedder::from_vectors(
            "test",
            2,
            vec![
                ("joyful".to_string(), vec![0.8, 0.6]),
                ("gloomy".to_string(), vec![0.1, 0.9]),
            ],
            None,
        )
        .unwrap()
    }

    fn catalog() -> EmojiCatalog {
        EmojiCatalog::new(vec![
            CatalogEntry::new("happy", ":grinning_face:", vec![1.0, 0.0]),
            CatalogEntry::new("sad", ":crying_face:", vec![0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn picks_highest_cosine() {
        let emb = embedder();
        let best = best_entry(&[0.8, 0.6], &catalog(), &emb, ScoringBackend::Cosine, false)
            .unwrap();
        assert_eq!(best.entry.name, "happy");
        assert!((best.score - 0.8).abs() < 1e-6);
    }

    #[test]
    fn ties_keep_first_entry() {
        let emb = embedder();
        for parallel in [false, true] {
            let best =
                best_entry(&[1.0, 1.0], &catalog(), &emb, ScoringBackend::Cosine, parallel)
                    .unwrap();
            assert_eq!(best.index, 0, "parallel={parallel}");
            assert_eq!(best.entry.name, "happy");
        }
    }

    #[test]
    fn non_positive_scores_never_win() {
        let emb = embedder();
        for parallel in [false, true] {
            assert!(best_entry(
                &[-1.0, -1.0],
                &catalog(),
                &emb,
                ScoringBackend::Cosine,
                parallel
            )
            .is_none());
            assert!(best_entry(
                &[0.0, 0.0],
                &catalog(),
                &emb,
                ScoringBackend::Cosine,
                parallel
            )
            .is_none());
        }
    }

    #[test]
    fn parallel_matches_sequential_on_large_catalog() {
        let emb = embedder();
        let entries = (0..500).map(|i| {
            let angle = (i % 37) as f32 * 0.05;
            CatalogEntry::new(format!("e{i}"), ":pizza:", vec![angle.cos(), angle.sin()])
        });
        let catalog = EmojiCatalog::new(entries).unwrap();
        let query = [0.9, 0.4];
        let seq = best_entry(&query, &catalog, &emb, ScoringBackend::Cosine, false);
        let par = best_entry(&query, &catalog, &emb, ScoringBackend::Cosine, true);
        assert_eq!(seq, par);
    }

    #[test]
    fn multi_word_entries_score_by_their_stored_vector() {
        let emb = LexiconEmbedder::from_vectors(
            "test",
            2,
            vec![
                ("birthday".to_string(), vec![1.0, 0.0]),
                ("cake".to_string(), vec![0.0, 1.0]),
            ],
            None,
        )
        .unwrap();
        // A name's own words do not count; only its vector does.
        let catalog = EmojiCatalog::new(vec![
            CatalogEntry::new("birthday cake", ":birthday_cake:", vec![0.0, 1.0]),
            CatalogEntry::new("party", ":party_popper:", vec![1.0, 0.0]),
        ])
        .unwrap();

        let result =
            score_against_catalog("birthday", &catalog, &emb, &MatchConfig::default()).unwrap();
        assert_eq!(result.entry_name(), Some("party"));
        assert_eq!(result.score, 1.0);
    }

    struct Constant(f32);

    impl Embedder for Constant {
        fn embed(&self, _text: &str) -> Result<Vec<f32>, SemanticError> {
            Ok(vec![1.0, 0.0])
        }
        fn is_stop_word(&self, _word: &str) -> bool {
            false
        }
        fn dimension(&self) -> usize {
            2
        }
        fn model_name(&self) -> &str {
            "constant"
        }
        fn similarity(&self, _a: &[f32], _b: &[f32]) -> f32 {
            self.0
        }
    }

    #[test]
    fn embedder_backend_is_clamped() {
        let best = best_entry(
            &[1.0, 0.0],
            &catalog(),
            &Constant(3.0),
            ScoringBackend::Embedder,
            false,
        )
        .unwrap();
        assert_eq!(best.score, 1.0);
        assert_eq!(best.index, 0);
    }

    #[test]
    fn embedder_backend_nan_never_wins() {
        for parallel in [false, true] {
            assert!(best_entry(
                &[1.0, 0.0],
                &catalog(),
                &Constant(f32::NAN),
                ScoringBackend::Embedder,
                parallel
            )
            .is_none());
        }
    }

    #[test]
    fn stop_words_removed_keeping_order() {
        let emb = HashedStops;
        assert_eq!(remove_stop_words("i am happy today", &emb), vec!["happy", "today"]);
        assert_eq!(remove_stop_words("the a", &emb), Vec::<&str>::new());
        assert_eq!(remove_stop_words("happy  today", &emb), vec!["happy", "", "today"]);
    }

    struct HashedStops;

    impl Embedder for HashedStops {
        fn embed(&self, _text: &str) -> Result<Vec<f32>, SemanticError> {
            Ok(vec![0.0, 0.0])
        }
        fn is_stop_word(&self, word: &str) -> bool {
            semantic::is_english_stop_word(word)
        }
        fn dimension(&self) -> usize {
            2
        }
        fn model_name(&self) -> &str {
            "stops"
        }
    }

    #[test]
    fn score_against_catalog_oov_is_miss() {
        let result =
            score_against_catalog("unknown", &catalog(), &embedder(), &MatchConfig::default())
                .unwrap();
        assert_eq!(result.source, MatchSource::None);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn score_against_catalog_rejects_dimension_mismatch() {
        let wide = EmojiCatalog::new(vec![CatalogEntry::new(
            "happy",
            ":grinning_face:",
            vec![1.0, 0.0, 0.0],
        )])
        .unwrap();
        let err = score_against_catalog("joyful", &wide, &embedder(), &MatchConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            MatchError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn score_sentence_preserves_word_order() {
        let emb = embedder();
        for parallel in [false, true] {
            let cfg = MatchConfig::default().with_parallel(parallel);
            let results =
                score_sentence(&["gloomy", "joyful", "unknown"], &catalog(), &emb, &cfg).unwrap();
            let names: Vec<Option<&str>> = results.iter().map(|r| r.entry_name()).collect();
            assert_eq!(names, vec![Some("sad"), Some("happy"), None]);
        }
    }
}
