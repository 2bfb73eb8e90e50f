//! Static word-vector table loaded from JSON.
//!
//! File layout:
//!
//! ```json
//! {
//!   "model_name": "en-word-vectors-md",
//!   "dimension": 3,
//!   "vectors": { "happy": [0.9, 0.1, 0.0], "sad": [0.0, 0.2, 0.9] },
//!   "stop_words": ["the", "is"]
//! }
//! ```
//!
//! `stop_words` is optional; when absent the built-in English list applies.
//! Text is embedded as the mean of its whitespace tokens' vectors, with
//! unknown tokens contributing zero vectors.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::normalize::l2_normalize_in_place;
use crate::stopwords::is_english_stop_word;
use crate::{Embedder, SemanticConfig, SemanticError};

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    model_name: Option<String>,
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
    #[serde(default)]
    stop_words: Option<Vec<String>>,
}

/// Embedder backed by an in-memory word → vector table.
#[derive(Debug, Clone)]
pub struct LexiconEmbedder {
    model_name: String,
    dimension: usize,
    normalize: bool,
    vectors: HashMap<String, Vec<f32>>,
    stop_words: Option<HashSet<String>>,
}

impl LexiconEmbedder {
    /// Build a lexicon directly from word vectors.
    ///
    /// Every vector must have length `dimension`. `stop_words = None` selects
    /// the built-in English list.
    pub fn from_vectors<I, W>(
        model_name: impl Into<String>,
        dimension: usize,
        vectors: I,
        stop_words: Option<HashSet<String>>,
    ) -> Result<Self, SemanticError>
    where
        I: IntoIterator<Item = (W, Vec<f32>)>,
        W: Into<String>,
    {
        if dimension == 0 {
            return Err(SemanticError::Parse(
                "lexicon dimension must be greater than zero".into(),
            ));
        }
        let mut table = HashMap::new();
        for (word, vector) in vectors {
            let word = word.into();
            if vector.len() != dimension {
                return Err(SemanticError::Parse(format!(
                    "vector for '{word}' has {} components, expected {dimension}",
                    vector.len()
                )));
            }
            table.insert(word, vector);
        }
        Ok(Self {
            model_name: model_name.into(),
            dimension,
            normalize: false,
            vectors: table,
            stop_words,
        })
    }

    /// Parse a lexicon from its JSON text.
    pub fn from_json_str(json: &str, cfg: &SemanticConfig) -> Result<Self, SemanticError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        let model_name = file.model_name.unwrap_or_else(|| cfg.model_name.clone());
        let stop_words = file.stop_words.map(|words| words.into_iter().collect());
        let embedder = Self::from_vectors(model_name, file.dimension, file.vectors, stop_words)?;
        Ok(embedder.with_normalize(cfg.normalize))
    }

    /// Read and parse a lexicon file.
    pub fn from_file(path: &Path, cfg: &SemanticConfig) -> Result<Self, SemanticError> {
        if !path.exists() {
            return Err(SemanticError::ModelNotFound(path.display().to_string()));
        }
        let json = fs::read_to_string(path)?;
        let embedder = Self::from_json_str(&json, cfg)?;
        info!(
            path = %path.display(),
            words = embedder.len(),
            dimension = embedder.dimension,
            "loaded word-vector lexicon"
        );
        Ok(embedder)
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Number of words with a vector.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }
}

impl Embedder for LexiconEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        let mut sum = vec![0f32; self.dimension];
        let mut tokens = 0usize;
        for token in text.split_whitespace() {
            tokens += 1;
            if let Some(vector) = self.vectors.get(token) {
                for (acc, x) in sum.iter_mut().zip(vector.iter()) {
                    *acc += *x;
                }
            }
        }
        if tokens > 1 {
            let inv = (tokens as f32).recip();
            for x in sum.iter_mut() {
                *x *= inv;
            }
        }
        if self.normalize {
            l2_normalize_in_place(&mut sum);
        }
        Ok(sum)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        match &self.stop_words {
            Some(words) => words.contains(word),
            None => is_english_stop_word(word),
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LEXICON: &str = r#"{
        "model_name": "tiny",
        "dimension": 2,
        "vectors": {
            "happy": [1.0, 0.0],
            "joyful": [0.9, 0.1],
            "sad": [0.0, 1.0]
        }
    }"#;

    fn tiny() -> LexiconEmbedder {
        LexiconEmbedder::from_json_str(LEXICON, &SemanticConfig::default()).expect("valid lexicon")
    }

    #[test]
    fn known_word_returns_its_vector() {
        let lexicon = tiny();
        assert_eq!(lexicon.embed("joyful").unwrap(), vec![0.9, 0.1]);
        assert_eq!(lexicon.model_name(), "tiny");
        assert_eq!(lexicon.dimension(), 2);
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn unknown_word_is_zero_vector() {
        let lexicon = tiny();
        assert_eq!(lexicon.embed("xylophone").unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn phrase_is_mean_over_all_tokens() {
        let lexicon = tiny();
        // "happy" + "sad" + unknown, divided by three tokens
        let v = lexicon.embed("happy sad zzz").unwrap();
        assert!((v[0] - 1.0 / 3.0).abs() < 1e-6);
        assert!((v[1] - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn empty_text_is_zero_vector() {
        assert_eq!(tiny().embed("").unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn normalize_applies_to_output() {
        let cfg = SemanticConfig::default().with_normalize(true);
        let lexicon = LexiconEmbedder::from_json_str(LEXICON, &cfg).unwrap();
        let v = lexicon.embed("joyful").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn dimension_mismatch_rejected() {
        let json = r#"{"dimension": 3, "vectors": {"happy": [1.0, 0.0]}}"#;
        let err = LexiconEmbedder::from_json_str(json, &SemanticConfig::default())
            .expect_err("mismatched vector should fail");
        match err {
            SemanticError::Parse(msg) => assert!(msg.contains("happy")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_stop_words_replace_builtin_list() {
        let json = r#"{"dimension": 1, "vectors": {}, "stop_words": ["happy"]}"#;
        let lexicon = LexiconEmbedder::from_json_str(json, &SemanticConfig::default()).unwrap();
        assert!(lexicon.is_stop_word("happy"));
        assert!(!lexicon.is_stop_word("the"));
    }

    #[test]
    fn builtin_stop_words_by_default() {
        assert!(tiny().is_stop_word("the"));
    }

    #[test]
    fn model_name_falls_back_to_config() {
        let json = r#"{"dimension": 1, "vectors": {"a": [1.0]}}"#;
        let cfg = SemanticConfig {
            model_name: "from-config".into(),
            ..Default::default()
        };
        let lexicon = LexiconEmbedder::from_json_str(json, &cfg).unwrap();
        assert_eq!(lexicon.model_name(), "from-config");
    }

    #[test]
    fn from_file_reads_lexicon() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LEXICON.as_bytes()).unwrap();
        let lexicon = LexiconEmbedder::from_file(file.path(), &SemanticConfig::default()).unwrap();
        assert!(lexicon.contains("sad"));
    }

    #[test]
    fn from_file_missing_path() {
        let err = LexiconEmbedder::from_file(
            Path::new("./missing/lexicon.json"),
            &SemanticConfig::default(),
        )
        .expect_err("missing file should fail");
        assert!(matches!(err, SemanticError::ModelNotFound(_)));
    }
}
