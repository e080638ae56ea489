//! Filter specification for listing searches
//!
//! A [`FilterSpec`] is a set of independent, optional constraints. An unset
//! dimension imposes no filtering. Numeric bounds of exactly zero and an
//! empty keyword string count as unset, so a cleared form field never
//! narrows the result set.

use crate::PropertyType;
use serde::{Deserialize, Serialize};

/// Optional constraints narrowing a property collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Case-insensitive substring over title, address, city and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Inclusive lower price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    /// Inclusive upper price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    /// Accepted property types; empty means any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_types: Vec<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_feet_min: Option<f64>,
    /// Requested features; a listing matches if it has any of them
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

/// Zero and NaN bounds are treated as "no constraint".
fn active_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|b| *b != 0.0 && !b.is_nan())
}

impl FilterSpec {
    /// A spec with every dimension unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_price_min(mut self, price_min: f64) -> Self {
        self.price_min = Some(price_min);
        self
    }

    pub fn with_price_max(mut self, price_max: f64) -> Self {
        self.price_max = Some(price_max);
        self
    }

    /// Replace both price bounds with a preset range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        let (min, max) = range.bounds();
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_property_types(mut self, types: impl IntoIterator<Item = PropertyType>) -> Self {
        self.property_types = types.into_iter().collect();
        self
    }

    pub fn with_bedrooms_min(mut self, bedrooms_min: f64) -> Self {
        self.bedrooms_min = Some(bedrooms_min);
        self
    }

    pub fn with_bathrooms_min(mut self, bathrooms_min: f64) -> Self {
        self.bathrooms_min = Some(bathrooms_min);
        self
    }

    pub fn with_square_feet_min(mut self, square_feet_min: f64) -> Self {
        self.square_feet_min = Some(square_feet_min);
        self
    }

    pub fn with_amenities<S: Into<String>>(mut self, amenities: impl IntoIterator<Item = S>) -> Self {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle a property type on or off, as the filter checkboxes do.
    pub fn toggle_property_type(&mut self, property_type: PropertyType) {
        if let Some(pos) = self.property_types.iter().position(|t| *t == property_type) {
            self.property_types.remove(pos);
        } else {
            self.property_types.push(property_type);
        }
    }

    /// Toggle an amenity on or off.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Effective constraints
    // ------------------------------------------------------------------

    pub fn active_keywords(&self) -> Option<&str> {
        self.keywords.as_deref().filter(|k| !k.is_empty())
    }

    pub fn active_price_min(&self) -> Option<f64> {
        active_bound(self.price_min)
    }

    pub fn active_price_max(&self) -> Option<f64> {
        active_bound(self.price_max)
    }

    pub fn active_bedrooms_min(&self) -> Option<f64> {
        active_bound(self.bedrooms_min)
    }

    pub fn active_bathrooms_min(&self) -> Option<f64> {
        active_bound(self.bathrooms_min)
    }

    pub fn active_square_feet_min(&self) -> Option<f64> {
        active_bound(self.square_feet_min)
    }

    /// True when no dimension narrows the result set.
    pub fn is_unconstrained(&self) -> bool {
        self.active_keywords().is_none()
            && self.active_price_min().is_none()
            && self.active_price_max().is_none()
            && self.property_types.is_empty()
            && self.active_bedrooms_min().is_none()
            && self.active_bathrooms_min().is_none()
            && self.active_square_feet_min().is_none()
            && self.amenities.is_empty()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.is_unconstrained()
    }

    /// Reset every dimension to unset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // ------------------------------------------------------------------
    // Query-pair codec
    // ------------------------------------------------------------------

    /// Encode the active constraints as `(key, value)` pairs for a URL
    /// query string. List values are comma-joined; unset dimensions are
    /// omitted.
    ///
    /// Commas are not escaped: a property type or amenity label that itself
    /// contains `,` comes back from [`FilterSpec::from_query_pairs`] as two
    /// labels. Every known label is comma-free.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(keywords) = self.active_keywords() {
            pairs.push(("keywords", keywords.to_string()));
        }
        if let Some(v) = self.active_price_min() {
            pairs.push(("priceMin", v.to_string()));
        }
        if let Some(v) = self.active_price_max() {
            pairs.push(("priceMax", v.to_string()));
        }
        if !self.property_types.is_empty() {
            let joined = self
                .property_types
                .iter()
                .map(PropertyType::as_str)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("propertyTypes", joined));
        }
        if let Some(v) = self.active_bedrooms_min() {
            pairs.push(("bedroomsMin", v.to_string()));
        }
        if let Some(v) = self.active_bathrooms_min() {
            pairs.push(("bathroomsMin", v.to_string()));
        }
        if let Some(v) = self.active_square_feet_min() {
            pairs.push(("squareFeetMin", v.to_string()));
        }
        if !self.amenities.is_empty() {
            pairs.push(("amenities", self.amenities.join(",")));
        }
        pairs
    }

    /// Decode a spec from already-unescaped query pairs.
    ///
    /// Accepts the keys produced by [`FilterSpec::to_query_pairs`] plus `q`
    /// as an alias for `keywords`. Unknown keys are ignored, as are numbers
    /// that fail to parse. List values are split on `,` with surrounding
    /// whitespace trimmed and empty items dropped.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut spec = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "q" | "keywords" => spec.keywords = Some(value.to_string()),
                "priceMin" => spec.price_min = parse_number(value),
                "priceMax" => spec.price_max = parse_number(value),
                "propertyTypes" => {
                    spec.property_types = split_list(value).map(PropertyType::from).collect()
                }
                "bedroomsMin" => spec.bedrooms_min = parse_number(value),
                "bathroomsMin" => spec.bathrooms_min = parse_number(value),
                "squareFeetMin" => spec.square_feet_min = parse_number(value),
                "amenities" => spec.amenities = split_list(value).map(str::to_string).collect(),
                _ => {}
            }
        }
        spec
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// PRICE RANGE PRESETS
// ============================================================================

/// Quick price presets offered next to the price inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    Under500K,
    From500KTo750K,
    From750KTo1M,
    Over1M,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Under500K,
        PriceRange::From500KTo750K,
        PriceRange::From750KTo1M,
        PriceRange::Over1M,
    ];

    /// `(price_min, price_max)` for this preset.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            PriceRange::Under500K => (None, Some(500_000.0)),
            PriceRange::From500KTo750K => (Some(500_000.0), Some(750_000.0)),
            PriceRange::From750KTo1M => (Some(750_000.0), Some(1_000_000.0)),
            PriceRange::Over1M => (Some(1_000_000.0), None),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Under500K => "Under $500K",
            PriceRange::From500KTo750K => "$500K - $750K",
            PriceRange::From750KTo1M => "$750K - $1M",
            PriceRange::Over1M => "Over $1M",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
