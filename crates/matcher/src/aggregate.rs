use catalog::{unicode_of, EmojiCatalog};
use tracing::warn;

use crate::types::{MatchConfig, MatchOutcome, Prediction, PredictionResult};

/// Fold per-word results into a single [`PredictionResult`].
///
/// Glyphs of matched words are concatenated in order; unmatched words add
/// nothing to the sequence but still count toward the mean confidence.
pub fn aggregate(outcome: &MatchOutcome, catalog: &EmojiCatalog) -> PredictionResult {
    let mut emoji_sequence = String::new();
    let mut unicode_sequence = Vec::with_capacity(outcome.words.len());
    let mut total = 0.0f32;

    for word in &outcome.words {
        total += word.score;
        match &word.entry {
            Some(entry) => {
                let glyph = catalog.render_entry(entry);
                unicode_sequence.push(unicode_of(&glyph));
                emoji_sequence.push_str(&glyph);
            }
            None => unicode_sequence.push(None),
        }
    }

    let confidence = if outcome.words.is_empty() {
        0.0
    } else {
        total / outcome.words.len() as f32
    };

    PredictionResult {
        emoji_sequence,
        unicode_sequence,
        confidence,
        kind: outcome.kind,
    }
}

/// Turn an aggregated result into the caller-facing decision.
///
/// Zero confidence, or confidence under `cfg.min_confidence`, returns the
/// normalized input unchanged.
pub fn decide(result: PredictionResult, normalized: &str, cfg: &MatchConfig) -> Prediction {
    if result.confidence <= 0.0 {
        return Prediction::Fallback(normalized.to_string());
    }
    if let Some(min) = cfg.min_confidence {
        if result.confidence < min {
            warn!(
                confidence = result.confidence,
                min_confidence = min,
                "match below minimum confidence, falling back"
            );
            return Prediction::Fallback(normalized.to_string());
        }
    }
    Prediction::Matched(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MatchKind, WordResult};
    use catalog::CatalogEntry;

    fn catalog() -> EmojiCatalog {
        EmojiCatalog::new(vec![
            CatalogEntry::new("happy", ":grinning_face:", vec![1.0, 0.0]),
            CatalogEntry::new("family", ":family:", vec![0.0, 1.0]).with_glyph("👨‍👩‍👧"),
        ])
        .unwrap()
    }

    #[test]
    fn single_exact_hit() {
        let catalog = catalog();
        let entry = catalog.get("happy").unwrap().clone();
        let outcome =
            MatchOutcome::single(MatchKind::SingleWord, WordResult::exact("happy", entry));
        let result = aggregate(&outcome, &catalog);
        assert_eq!(result.emoji_sequence, "😀");
        assert_eq!(result.unicode_sequence, vec![Some("U+1F600".to_string())]);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn misses_count_toward_mean_and_skip_glyph() {
        let catalog = catalog();
        let entry = catalog.get("happy").unwrap().clone();
        let outcome = MatchOutcome {
            kind: MatchKind::Sentence,
            words: vec![
                WordResult::similar("joyful", entry, 0.8),
                WordResult::miss("xyz"),
            ],
        };
        let result = aggregate(&outcome, &catalog);
        assert_eq!(result.emoji_sequence, "😀");
        assert_eq!(result.unicode_sequence, vec![Some("U+1F600".to_string()), None]);
        assert!((result.confidence - 0.4).abs() < 1e-6);
    }

    #[test]
    fn multi_codepoint_glyph_has_no_unicode() {
        let catalog = catalog();
        let entry = catalog.get("family").unwrap().clone();
        let outcome =
            MatchOutcome::single(MatchKind::SingleWord, WordResult::exact("family", entry));
        let result = aggregate(&outcome, &catalog);
        assert_eq!(result.emoji_sequence, "👨‍👩‍👧");
        assert_eq!(result.unicode_sequence, vec![None]);
    }

    #[test]
    fn empty_outcome_has_zero_confidence() {
        let outcome = MatchOutcome {
            kind: MatchKind::Sentence,
            words: Vec::new(),
        };
        let result = aggregate(&outcome, &catalog());
        assert_eq!(result.confidence, 0.0);
        assert!(result.emoji_sequence.is_empty());
    }

    #[test]
    fn decide_falls_back_on_zero_confidence() {
        let result = PredictionResult {
            emoji_sequence: String::new(),
            unicode_sequence: vec![None],
            confidence: 0.0,
            kind: MatchKind::SingleWord,
        };
        let prediction = decide(result, "xyzzy", &MatchConfig::default());
        assert_eq!(prediction, Prediction::Fallback("xyzzy".into()));
    }

    #[test]
    fn decide_honors_min_confidence() {
        let result = PredictionResult {
            emoji_sequence: "😀".into(),
            unicode_sequence: vec![Some("U+1F600".into())],
            confidence: 0.3,
            kind: MatchKind::SingleWord,
        };
        let loose = decide(result.clone(), "joyful", &MatchConfig::default());
        assert!(!loose.is_fallback());

        let strict = MatchConfig::default().with_min_confidence(Some(0.5));
        assert!(decide(result, "joyful", &strict).is_fallback());
    }
}
