//! Homestead Storage - Catalog and Favorites
//!
//! In-memory stores for the listing browser: a read-only property catalog
//! built from the startup dataset, and a favorites store keyed by property
//! id. Both are plain values constructed by the caller; nothing here is
//! global, so each test can start from a fresh instance.

pub mod catalog;
pub mod favorites;
pub mod saved;

pub use catalog::PropertyCatalog;
pub use favorites::{FavoritesStore, InMemoryFavoritesStore};
pub use saved::saved_properties;
