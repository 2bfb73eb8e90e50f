use std::io;
use thiserror::Error;

/// Errors surfaced while loading or running an embedder.
#[derive(Debug, Error)]
pub enum SemanticError {
    /// The lexicon file could not be located on disk.
    #[error("model file not found: {0}")]
    ModelNotFound(String),
    /// Configuration is inconsistent (e.g., lexicon mode without a lexicon path).
    #[error("invalid semantic config: {0}")]
    InvalidConfig(String),
    /// The lexicon file exists but its contents are malformed.
    #[error("lexicon parse error: {0}")]
    Parse(String),
    /// Low-level IO failures while touching the filesystem.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The embedder could not produce a vector for the given text.
    #[error("inference failure: {0}")]
    Inference(String),
}

impl From<serde_json::Error> for SemanticError {
    fn from(err: serde_json::Error) -> Self {
        SemanticError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_model_not_found() {
        let err = SemanticError::ModelNotFound("/path/to/lexicon.json".into());
        assert!(err.to_string().contains("model file not found"));
        assert!(err.to_string().contains("/path/to/lexicon.json"));
    }

    #[test]
    fn error_invalid_config() {
        let err = SemanticError::InvalidConfig("missing lexicon path".into());
        assert!(err.to_string().contains("invalid semantic config"));
        assert!(err.to_string().contains("missing lexicon path"));
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SemanticError = json_err.into();
        assert!(matches!(err, SemanticError::Parse(_)));
        assert!(err.to_string().contains("lexicon parse error"));
    }
}
