use fxhash::hash64;

use crate::normalize::l2_normalize_in_place;
use crate::stopwords::is_english_stop_word;
use crate::{Embedder, SemanticConfig, SemanticError};

/// Deterministic stub used when mode is `"fast"` or for tests and benches.
///
/// Every whitespace token is mapped to sinusoid values derived from a hash of
/// the token, and token vectors are summed. Identical texts always embed
/// identically; texts sharing tokens land closer together than texts that
/// share none.
#[derive(Debug, Clone)]
pub struct HashedEmbedder {
    model_name: String,
    dimension: usize,
    normalize: bool,
}

impl HashedEmbedder {
    pub fn new(cfg: &SemanticConfig) -> Result<Self, SemanticError> {
        if cfg.dimension == 0 {
            return Err(SemanticError::InvalidConfig(
                "dimension must be greater than zero".into(),
            ));
        }
        Ok(Self {
            model_name: cfg.model_name.clone(),
            dimension: cfg.dimension,
            normalize: cfg.normalize,
        })
    }

    fn accumulate_token(&self, token: &str, v: &mut [f32]) {
        let h = hash64(token.as_bytes());
        for (idx, value) in v.iter_mut().enumerate() {
            *value += ((h >> (idx % 32)) as f32 * 0.0001).sin();
        }
    }
}

impl Embedder for HashedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        let mut v = vec![0f32; self.dimension];
        for token in text.split_whitespace() {
            self.accumulate_token(token, &mut v);
        }
        if self.normalize {
            l2_normalize_in_place(&mut v);
        }
        Ok(v)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        is_english_stop_word(word)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
