use std::io;
use thiserror::Error;

use semantic::SemanticError;

/// Errors raised while loading or assembling an emoji catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),
    /// The catalog file is not valid JSON of the expected shape.
    #[error("failed to parse catalog: {0}")]
    Parse(String),
    /// An entry is missing data the matcher relies on.
    #[error("catalog entry '{name}' is malformed: {reason}")]
    DataIntegrity { name: String, reason: String },
    /// Filling a missing vector through the embedder failed.
    #[error("failed to embed catalog entry: {0}")]
    Semantic(#[from] SemanticError),
}

impl CatalogError {
    pub(crate) fn integrity(name: &str, reason: impl Into<String>) -> Self {
        CatalogError::DataIntegrity {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_error_names_entry_and_reason() {
        let err = CatalogError::integrity("grinning", "missing vector");
        let msg = err.to_string();
        assert!(msg.contains("grinning"));
        assert!(msg.contains("missing vector"));
    }

    #[test]
    fn parse_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
