//! # emojify catalog
//!
//! The catalog is the static emoji dictionary the matcher searches: an
//! ordered set of [`CatalogEntry`] values, each with a name (the exact-match
//! key), an embedding vector and a short code that renders into a glyph.
//!
//! Catalogs are validated once when they are built. A missing vector, an
//! empty short code, a duplicate name or a dimension that disagrees with the
//! rest of the catalog is a [`CatalogError::DataIntegrity`] at load time, so
//! the scoring loop can trust every entry it touches.
//!
//! ```
//! use catalog::{parse_catalog, unicode_of};
//!
//! let catalog = parse_catalog(
//!     r#"{ "happy": { "short_name": ":grinning_face:", "vector": [1.0, 0.0] } }"#,
//!     None,
//! )
//! .unwrap();
//! let glyph = catalog.render_entry(catalog.get("happy").unwrap());
//! assert_eq!(glyph, "😀");
//! assert_eq!(unicode_of(&glyph).as_deref(), Some("U+1F600"));
//! ```

mod entry;
mod error;
mod loader;
mod render;
mod store;

pub use crate::entry::CatalogEntry;
pub use crate::error::CatalogError;
pub use crate::loader::{
    load_catalog, load_catalog_cached, load_catalog_with_embedder, parse_catalog, CatalogConfig,
};
pub use crate::render::{render_short_name, unicode_of};
pub use crate::store::EmojiCatalog;
