use crate::similarity::cosine_similarity;
use crate::SemanticError;

/// Source of embedding vectors for arbitrary text.
///
/// Implementations own out-of-vocabulary policy: when a text has no known
/// representation they return a vector anyway (typically all zeros) rather
/// than an error. Errors are reserved for genuine failures and abort the
/// surrounding prediction.
pub trait Embedder: Send + Sync {
    /// Embed `text` into a fixed-dimension dense vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError>;

    /// Whether `word` belongs to the language model's stop-word set.
    fn is_stop_word(&self, word: &str) -> bool;

    /// Dimension of every vector returned by [`embed`](Self::embed).
    fn dimension(&self) -> usize;

    /// Label of the underlying model, for logs.
    fn model_name(&self) -> &str;

    /// Similarity between two vectors as judged by the model.
    ///
    /// Defaults to [`cosine_similarity`]. The matcher only consults this when
    /// explicitly configured to delegate scoring to the embedder.
    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }
}
