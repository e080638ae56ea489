//! Map viewport selection for a set of listings

use crate::{Coordinates, HomesteadConfig, PropertyRecord};
use serde::{Deserialize, Serialize};

/// Where the map should be centered and how far it should zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub center: Coordinates,
    pub zoom: u8,
}

impl MapViewport {
    /// Compute the viewport for `records`, optionally focused on `selected`.
    ///
    /// - no records: the configured default center
    /// - a selected listing with coordinates: that listing
    /// - otherwise: the mean position of listings that have coordinates,
    ///   falling back to the default center when none do
    ///
    /// Zoom is `detail_zoom` whenever a listing is selected.
    pub fn for_listings(
        records: &[PropertyRecord],
        selected: Option<&PropertyRecord>,
        config: &HomesteadConfig,
    ) -> Self {
        let zoom = if selected.is_some() {
            config.detail_zoom
        } else {
            config.overview_zoom
        };

        if records.is_empty() {
            return Self {
                center: config.default_center,
                zoom,
            };
        }

        if let Some(coords) = selected.and_then(|s| s.coordinates) {
            return Self { center: coords, zoom };
        }

        let center = centroid(records.iter().filter_map(|r| r.coordinates))
            .unwrap_or(config.default_center);
        Self { center, zoom }
    }
}

/// Arithmetic mean of the given positions, `None` when empty.
pub fn centroid(points: impl IntoIterator<Item = Coordinates>) -> Option<Coordinates> {
    let (count, lat_sum, lng_sum) = points
        .into_iter()
        .fold((0usize, 0.0f64, 0.0f64), |(n, lat, lng), p| (n + 1, lat + p.lat, lng + p.lng));
    if count == 0 {
        return None;
    }
    Some(Coordinates::new(lat_sum / count as f64, lng_sum / count as f64))
}
