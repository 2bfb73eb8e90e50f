//! YAML configuration file support for emojify.
//!
//! One file describes the embedder, the catalog and the matcher, plus the
//! logging defaults used by the CLI.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # emojify configuration
//! version: "1.0"
//!
//! semantic:
//!   mode: "lexicon"
//!   model_name: "en-word-vectors-md"
//!   lexicon_path: "./data/lexicon.json"
//!   normalize: false
//!
//! catalog:
//!   path: "./data/emoji_catalog.json"
//!   embed_missing: false
//!
//! matcher:
//!   version: 1
//!   sentence_exact_match: "per_word"
//!   scoring: "cosine"
//!   use_parallel: false
//!
//! log_level: "info"
//! log_json: false
//! ```
//!
//! Environment variables win over the file: `EMOJIFY_CATALOG_PATH`,
//! `EMOJIFY_LEXICON_PATH` and `EMOJIFY_MODE`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use catalog::CatalogConfig;
use matcher::{MatchConfig, ScoringBackend, SentenceExactMatch, MATCH_CONFIG_VERSION};
use semantic::SemanticConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_CATALOG_PATH: &str = "EMOJIFY_CATALOG_PATH";
pub const ENV_LEXICON_PATH: &str = "EMOJIFY_LEXICON_PATH";
pub const ENV_MODE: &str = "EMOJIFY_MODE";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EmojifyConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub semantic: SemanticYamlConfig,

    #[serde(default)]
    pub catalog: CatalogYamlConfig,

    #[serde(default)]
    pub matcher: MatchYamlConfig,

    /// Default tracing filter for the CLI; `EMOJIFY_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

impl EmojifyConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EmojifyConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.semantic.validate()?;
        self.catalog.validate()?;
        self.matcher.validate()?;

        if self.log_level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "log_level must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply `EMOJIFY_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigLoadError> {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup, then re-validate.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            self.catalog.path = path;
        }
        if let Some(path) = lookup(ENV_LEXICON_PATH) {
            self.semantic.lexicon_path = Some(path);
        }
        if let Some(mode) = lookup(ENV_MODE) {
            self.semantic.mode = mode;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn semantic_config(&self) -> SemanticConfig {
        self.semantic.to_semantic_config()
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        self.catalog.to_catalog_config()
    }

    pub fn match_config(&self) -> MatchConfig {
        self.matcher.to_match_config()
    }
}

impl Default for EmojifyConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            semantic: SemanticYamlConfig::default(),
            catalog: CatalogYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Embedder YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticYamlConfig {
    #[serde(default = "default_mode")]
    pub mode: String,

    #[serde(default = "default_model_name")]
    pub model_name: String,

    #[serde(default = "default_lexicon_path")]
    pub lexicon_path: Option<String>,

    /// Only used by the hashed `fast` embedder.
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    #[serde(default)]
    pub normalize: bool,
}

impl SemanticYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        let valid_modes = ["lexicon", "fast"];
        if !valid_modes.contains(&self.mode.as_str()) {
            return Err(ConfigLoadError::Validation(format!(
                "semantic.mode must be one of: {valid_modes:?}"
            )));
        }
        if self.mode == "lexicon" && self.lexicon_path.is_none() {
            return Err(ConfigLoadError::Validation(
                "semantic.lexicon_path is required when mode is 'lexicon'".to_string(),
            ));
        }
        if self.mode == "fast" && self.dimension == 0 {
            return Err(ConfigLoadError::Validation(
                "semantic.dimension must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_semantic_config(&self) -> SemanticConfig {
        SemanticConfig {
            mode: self.mode.clone(),
            model_name: self.model_name.clone(),
            lexicon_path: self.lexicon_path.as_ref().map(PathBuf::from),
            dimension: self.dimension,
            normalize: self.normalize,
        }
    }
}

impl Default for SemanticYamlConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            model_name: default_model_name(),
            lexicon_path: default_lexicon_path(),
            dimension: default_dimension(),
            normalize: false,
        }
    }
}

/// Catalog YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogYamlConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,

    /// Embed entry names that have no stored vector.
    #[serde(default)]
    pub embed_missing: bool,
}

impl CatalogYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.path.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "catalog.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn to_catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(&self.path).with_embed_missing(self.embed_missing)
    }
}

impl Default for CatalogYamlConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            embed_missing: false,
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_sentence_exact_match")]
    pub sentence_exact_match: String,

    #[serde(default = "default_scoring")]
    pub scoring: String,

    #[serde(default)]
    pub use_parallel: bool,

    #[serde(default)]
    pub min_confidence: Option<f32>,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version != MATCH_CONFIG_VERSION {
            return Err(ConfigLoadError::UnsupportedVersion(format!(
                "matcher.version {}",
                self.version
            )));
        }
        self.exact_order()?;
        self.backend()?;
        if let Some(min) = self.min_confidence {
            if !(0.0..=1.0).contains(&min) {
                return Err(ConfigLoadError::Validation(
                    "matcher.min_confidence must be between 0.0 and 1.0".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn exact_order(&self) -> Result<SentenceExactMatch, ConfigLoadError> {
        match self.sentence_exact_match.as_str() {
            "per_word" => Ok(SentenceExactMatch::PerWord),
            "whole_text_first" => Ok(SentenceExactMatch::WholeTextFirst),
            other => Err(ConfigLoadError::Validation(format!(
                "matcher.sentence_exact_match must be per_word or whole_text_first, got '{other}'"
            ))),
        }
    }

    fn backend(&self) -> Result<ScoringBackend, ConfigLoadError> {
        match self.scoring.as_str() {
            "cosine" => Ok(ScoringBackend::Cosine),
            "embedder" => Ok(ScoringBackend::Embedder),
            other => Err(ConfigLoadError::Validation(format!(
                "matcher.scoring must be 'cosine' or 'embedder', got '{other}'"
            ))),
        }
    }

    // Called on validated configs only; unknown strings fall back to defaults.
    fn to_match_config(&self) -> MatchConfig {
        MatchConfig {
            version: self.version,
            sentence_exact_match: self.exact_order().unwrap_or_default(),
            scoring: self.backend().unwrap_or_default(),
            use_parallel: self.use_parallel,
            min_confidence: self.min_confidence,
        }
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sentence_exact_match: default_sentence_exact_match(),
            scoring: default_scoring(),
            use_parallel: false,
            min_confidence: None,
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    MATCH_CONFIG_VERSION
}
fn default_mode() -> String {
    "lexicon".to_string()
}
fn default_model_name() -> String {
    "en-word-vectors-md".to_string()
}
fn default_lexicon_path() -> Option<String> {
    Some("./data/lexicon.json".to_string())
}
fn default_dimension() -> usize {
    300
}
fn default_catalog_path() -> String {
    "./data/emoji_catalog.json".to_string()
}
fn default_sentence_exact_match() -> String {
    "per_word".to_string()
}
fn default_scoring() -> String {
    "cosine".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
