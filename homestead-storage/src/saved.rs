//! Saved properties: favorites resolved against the catalog

use crate::{FavoritesStore, PropertyCatalog};
use homestead_core::PropertyRecord;

/// Listings the user has favorited, in catalog order.
/// Favorites whose listing is not in the catalog are skipped.
pub fn saved_properties<S>(catalog: &PropertyCatalog, favorites: &S) -> Vec<PropertyRecord>
where
    S: FavoritesStore + ?Sized,
{
    let ids = favorites.property_ids();
    if ids.is_empty() {
        return Vec::new();
    }
    catalog.get_by_ids(&ids)
}
