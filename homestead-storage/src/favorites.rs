//! Favorites store
//!
//! Per property id a favorite is either absent or present:
//! `add` moves absent -> present, `remove` moves present -> absent and
//! `update_notes` keeps it present. Every other transition is rejected.

use homestead_core::{FavoriteError, FavoriteId, FavoriteRecord, HomesteadResult, PropertyId};

/// Storage trait for favorites.
///
/// Mutating operations take `&mut self`: the store is single-writer and
/// callers that share it must serialize access themselves.
pub trait FavoritesStore {
    /// Snapshot of every favorite, in insertion order.
    fn list(&self) -> Vec<FavoriteRecord>;

    /// Favorite a property.
    /// Fails with `DuplicateFavorite` if the property is already present.
    fn add(&mut self, property_id: PropertyId, notes: &str) -> HomesteadResult<FavoriteRecord>;

    /// Unfavorite a property, returning the removed record.
    /// Fails with `NotFound` if the property is absent.
    fn remove(&mut self, property_id: PropertyId) -> HomesteadResult<FavoriteRecord>;

    /// Replace the notes on a favorite; `added_date` is left untouched.
    /// Fails with `NotFound` if the property is absent.
    fn update_notes(&mut self, property_id: PropertyId, notes: &str) -> HomesteadResult<FavoriteRecord>;

    /// Membership test. Never fails.
    fn is_favorite(&self, property_id: PropertyId) -> bool;

    /// Copy of the favorite for a property, if present.
    fn get(&self, property_id: PropertyId) -> Option<FavoriteRecord>;

    /// Favorited property ids, in insertion order.
    fn property_ids(&self) -> Vec<PropertyId> {
        self.list().into_iter().map(|f| f.property_id).collect()
    }
}

/// In-memory favorites store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFavoritesStore {
    favorites: Vec<FavoriteRecord>,
}

impl InMemoryFavoritesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get count of stored favorites.
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Clear all stored favorites.
    pub fn clear(&mut self) {
        self.favorites.clear();
    }

    fn position(&self, property_id: PropertyId) -> Option<usize> {
        self.favorites.iter().position(|f| f.property_id == property_id)
    }

    /// One past the highest identifier in use; `FavoriteId::FIRST` when empty.
    fn next_id(&self) -> FavoriteId {
        self.favorites
            .iter()
            .map(|f| f.id)
            .max()
            .map_or(FavoriteId::FIRST, FavoriteId::next)
    }
}

impl FavoritesStore for InMemoryFavoritesStore {
    fn list(&self) -> Vec<FavoriteRecord> {
        self.favorites.clone()
    }

    fn add(&mut self, property_id: PropertyId, notes: &str) -> HomesteadResult<FavoriteRecord> {
        if self.position(property_id).is_some() {
            tracing::debug!(%property_id, "rejected duplicate favorite");
            return Err(FavoriteError::DuplicateFavorite { property_id }.into());
        }
        let favorite = FavoriteRecord::new(self.next_id(), property_id, notes);
        self.favorites.push(favorite.clone());
        tracing::debug!(%property_id, id = %favorite.id, "added favorite");
        Ok(favorite)
    }

    fn remove(&mut self, property_id: PropertyId) -> HomesteadResult<FavoriteRecord> {
        let Some(index) = self.position(property_id) else {
            tracing::debug!(%property_id, "rejected removal of missing favorite");
            return Err(FavoriteError::NotFound { property_id }.into());
        };
        let removed = self.favorites.remove(index);
        tracing::debug!(%property_id, "removed favorite");
        Ok(removed)
    }

    fn update_notes(&mut self, property_id: PropertyId, notes: &str) -> HomesteadResult<FavoriteRecord> {
        let Some(favorite) = self.favorites.iter_mut().find(|f| f.property_id == property_id) else {
            tracing::debug!(%property_id, "rejected notes update for missing favorite");
            return Err(FavoriteError::NotFound { property_id }.into());
        };
        favorite.notes = notes.to_string();
        tracing::debug!(%property_id, "updated favorite notes");
        Ok(favorite.clone())
    }

    fn is_favorite(&self, property_id: PropertyId) -> bool {
        self.position(property_id).is_some()
    }

    fn get(&self, property_id: PropertyId) -> Option<FavoriteRecord> {
        self.favorites
            .iter()
            .find(|f| f.property_id == property_id)
            .cloned()
    }
}

// ============================================================================
// TESTS
// ============================================================================
