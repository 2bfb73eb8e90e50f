//! emojify semantic layer
//!
//! This crate turns text into vectors and compares them. The matcher never
//! talks to a language model directly; it holds an [`Embedder`] and asks it
//! for vectors and stop words, then scores with [`cosine_similarity`].
//!
//! Two embedders ship in the box:
//!
//! - **Lexicon mode** - a static word-vector table read from JSON. Phrases
//!   embed as the mean of their token vectors; unknown tokens count as zeros.
//! - **Fast mode** - a hashed stub. No assets, fully deterministic, good for
//!   tests and benches.
//!
//! ## Loading once
//!
//! [`load_embedder`] memoizes embedders per configuration for the life of the
//! process, so wiring code can call it from anywhere without re-reading the
//! lexicon. Use [`build_embedder`] when a private instance is wanted.
//!
//! ## Quick example
//!
//! ```
//! use semantic::{cosine_similarity, load_embedder, SemanticConfig};
//!
//! let embedder = load_embedder(&SemanticConfig::fast().with_dimension(32)).unwrap();
//! let a = embedder.embed("party time").unwrap();
//! let b = embedder.embed("party time").unwrap();
//! assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
//! ```

pub mod config;
pub mod error;
pub mod similarity;
pub mod stopwords;

mod cache;
mod embedder;
mod lexicon;
mod normalize;
mod stub;

pub use crate::cache::{build_embedder, load_embedder};
pub use crate::config::SemanticConfig;
pub use crate::embedder::Embedder;
pub use crate::error::SemanticError;
pub use crate::lexicon::LexiconEmbedder;
pub use crate::normalize::l2_normalize_in_place;
pub use crate::similarity::{cosine_similarity, dot};
pub use crate::stopwords::{is_english_stop_word, ENGLISH_STOP_WORDS};
pub use crate::stub::HashedEmbedder;
