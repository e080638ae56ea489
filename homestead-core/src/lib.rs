//! Homestead Core - Listing Types and Filter Evaluation
//!
//! Data types shared by every Homestead crate, plus the pure logic that
//! operates on them: filter evaluation over a listing slice and map
//! viewport selection. Nothing in this crate owns mutable state; stores
//! live in `homestead-storage`.

pub mod config;
pub mod entities;
pub mod enums;
pub mod error;
pub mod filter;
pub mod identity;
pub mod inquiry;
pub mod map;
pub mod query;

pub use config::HomesteadConfig;
pub use entities::{Coordinates, FavoriteRecord, NeighborhoodStats, PropertyRecord};
pub use enums::{ListingStatus, PropertyType, KNOWN_AMENITIES};
pub use error::{
    CatalogError, ConfigError, FavoriteError, HomesteadError, HomesteadResult, InquiryError,
    InquiryFieldError,
};
pub use filter::{FilterSpec, PriceRange};
pub use identity::{FavoriteId, PropertyId, Timestamp};
pub use inquiry::Inquiry;
pub use map::{centroid, MapViewport};
pub use query::PropertyQueryEngine;
