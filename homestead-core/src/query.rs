//! Property query evaluation
//!
//! Evaluates a [`FilterSpec`] against a slice of listings. Dimensions are
//! combined with logical AND; within the keyword and amenity checks any
//! single hit is enough. Evaluation is a stable filter: matching records
//! come back in their original relative order. It never fails.

use crate::{FilterSpec, PropertyRecord, PropertyType};

/// Stateless evaluator of filter specifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyQueryEngine;

impl PropertyQueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Return the records matching every active constraint of `spec`,
    /// preserving input order.
    pub fn evaluate<'a>(
        &self,
        records: &'a [PropertyRecord],
        spec: &FilterSpec,
    ) -> Vec<&'a PropertyRecord> {
        let predicate = CompiledFilter::compile(spec);
        let matched: Vec<&PropertyRecord> =
            records.iter().filter(|r| predicate.matches(r)).collect();
        tracing::debug!(
            total = records.len(),
            matched = matched.len(),
            "evaluated property filter"
        );
        matched
    }

    /// Owned variant of [`PropertyQueryEngine::evaluate`].
    pub fn evaluate_owned(&self, records: &[PropertyRecord], spec: &FilterSpec) -> Vec<PropertyRecord> {
        self.evaluate(records, spec).into_iter().cloned().collect()
    }

    /// Whether a single record satisfies `spec`.
    pub fn matches(&self, record: &PropertyRecord, spec: &FilterSpec) -> bool {
        CompiledFilter::compile(spec).matches(record)
    }
}

/// A filter spec with its active constraints resolved once per evaluation.
#[derive(Debug)]
struct CompiledFilter<'s> {
    price_min: Option<f64>,
    price_max: Option<f64>,
    property_types: &'s [PropertyType],
    bedrooms_min: Option<f64>,
    bathrooms_min: Option<f64>,
    square_feet_min: Option<f64>,
    /// Lowercased keyword
    keywords: Option<String>,
    amenities: &'s [String],
}

impl<'s> CompiledFilter<'s> {
    fn compile(spec: &'s FilterSpec) -> Self {
        Self {
            price_min: spec.active_price_min(),
            price_max: spec.active_price_max(),
            property_types: &spec.property_types,
            bedrooms_min: spec.active_bedrooms_min(),
            bathrooms_min: spec.active_bathrooms_min(),
            square_feet_min: spec.active_square_feet_min(),
            keywords: spec.active_keywords().map(str::to_lowercase),
            amenities: &spec.amenities,
        }
    }

    fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(min) = self.price_min {
            if record.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if record.price > max {
                return false;
            }
        }
        if !self.property_types.is_empty() && !self.property_types.contains(&record.property_type) {
            return false;
        }
        if let Some(min) = self.bedrooms_min {
            if f64::from(record.bedrooms) < min {
                return false;
            }
        }
        if let Some(min) = self.bathrooms_min {
            if f64::from(record.bathrooms) < min {
                return false;
            }
        }
        if let Some(min) = self.square_feet_min {
            if record.square_feet < min {
                return false;
            }
        }
        if let Some(keywords) = &self.keywords {
            if !matches_keywords(record, keywords) {
                return false;
            }
        }
        if !self.amenities.is_empty() && !self.amenities.iter().any(|a| record.has_feature(a)) {
            return false;
        }
        true
    }
}

/// `needle` must already be lowercased.
fn matches_keywords(record: &PropertyRecord, needle: &str) -> bool {
    [
        record.title.as_str(),
        record.address.as_str(),
        record.city.as_str(),
        record.description.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::{ListingStatus, PropertyId};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    const FEATURES: [&str; 5] = ["Garage", "Deck", "Garden", "Fireplace", "Basement"];

    fn arb_property_type() -> impl Strategy<Value = PropertyType> {
        prop_oneof![
            Just(PropertyType::SingleFamily),
            Just(PropertyType::Condo),
            Just(PropertyType::Townhouse),
            Just(PropertyType::MultiFamily),
        ]
    }

    fn arb_listings() -> impl Strategy<Value = Vec<PropertyRecord>> {
        prop::collection::vec(
            (
                50_000u32..2_000_000,
                arb_property_type(),
                0u32..7,
                0u32..5,
                300u32..6000,
                "[a-z ]{0,12}",
                prop::sample::subsequence(FEATURES.to_vec(), 0..=FEATURES.len()),
            ),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (price, property_type, bedrooms, bathrooms, sqft, title, features))| {
                    PropertyRecord {
                        id: PropertyId::new(i as u64 + 1),
                        title,
                        price: f64::from(price),
                        property_type,
                        bedrooms,
                        bathrooms,
                        square_feet: f64::from(sqft),
                        address: format!("{} Elm St", i),
                        city: "Boulder".to_string(),
                        state: None,
                        zip_code: None,
                        description: String::new(),
                        features: features.into_iter().map(str::to_string).collect(),
                        status: ListingStatus::Active,
                        listing_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                        year_built: None,
                        lot_size: None,
                        images: vec![],
                        coordinates: None,
                        neighborhood_stats: None,
                    }
                })
                .collect()
        })
    }

    fn arb_spec() -> impl Strategy<Value = FilterSpec> {
        (
            prop::option::of("[a-z]{1,3}"),
            prop::option::of(0u32..2_000_000),
            prop::option::of(0u32..2_000_000),
            prop::collection::vec(arb_property_type(), 0..3),
            prop::option::of(0u32..6),
            prop::option::of(0u32..5),
            prop::option::of(0u32..6000),
            prop::sample::subsequence(FEATURES.to_vec(), 0..3),
        )
            .prop_map(|(kw, pmin, pmax, types, beds, baths, sqft, amenities)| FilterSpec {
                keywords: kw,
                price_min: pmin.map(f64::from),
                price_max: pmax.map(f64::from),
                property_types: types,
                bedrooms_min: beds.map(f64::from),
                bathrooms_min: baths.map(f64::from),
                square_feet_min: sqft.map(f64::from),
                amenities: amenities.into_iter().map(str::to_string).collect(),
            })
    }

    /// Copy of `spec` with dimension `dim` unset.
    fn without_dimension(spec: &FilterSpec, dim: usize) -> FilterSpec {
        let mut s = spec.clone();
        match dim {
            0 => s.keywords = None,
            1 => s.price_min = None,
            2 => s.price_max = None,
            3 => s.property_types.clear(),
            4 => s.bedrooms_min = None,
            5 => s.bathrooms_min = None,
            6 => s.square_feet_min = None,
            _ => s.amenities.clear(),
        }
        s
    }

    /// Copy of `spec` with every dimension except `dim` unset.
    fn only_dimension(spec: &FilterSpec, dim: usize) -> FilterSpec {
        match dim {
            0 => FilterSpec { keywords: spec.keywords.clone(), ..FilterSpec::new() },
            1 => FilterSpec { price_min: spec.price_min, ..FilterSpec::new() },
            2 => FilterSpec { price_max: spec.price_max, ..FilterSpec::new() },
            3 => FilterSpec { property_types: spec.property_types.clone(), ..FilterSpec::new() },
            4 => FilterSpec { bedrooms_min: spec.bedrooms_min, ..FilterSpec::new() },
            5 => FilterSpec { bathrooms_min: spec.bathrooms_min, ..FilterSpec::new() },
            6 => FilterSpec { square_feet_min: spec.square_feet_min, ..FilterSpec::new() },
            _ => FilterSpec { amenities: spec.amenities.clone(), ..FilterSpec::new() },
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// An unconstrained spec returns the input unchanged, in order.
        #[test]
        fn prop_unconstrained_spec_returns_everything(records in arb_listings()) {
            let result = PropertyQueryEngine::new().evaluate(&records, &FilterSpec::new());
            let expected: Vec<&PropertyRecord> = records.iter().collect();
            prop_assert_eq!(result, expected);
        }

        /// priceMin above every price yields nothing.
        #[test]
        fn prop_price_min_above_all_is_empty(records in arb_listings()) {
            let spec = FilterSpec::new().with_price_min(2_000_001.0);
            prop_assert!(PropertyQueryEngine::new().evaluate(&records, &spec).is_empty());
        }

        /// The result is an order-preserving subsequence of the input.
        #[test]
        fn prop_result_is_stable_subsequence(records in arb_listings(), spec in arb_spec()) {
            let result = PropertyQueryEngine::new().evaluate(&records, &spec);
            let mut cursor = records.iter();
            for matched in &result {
                prop_assert!(cursor.any(|r| std::ptr::eq(r, *matched)));
            }
        }

        /// Evaluating twice gives identical results.
        #[test]
        fn prop_evaluate_is_idempotent(records in arb_listings(), spec in arb_spec()) {
            let engine = PropertyQueryEngine::new();
            let first = engine.evaluate_owned(&records, &spec);
            let second = engine.evaluate_owned(&records, &spec);
            prop_assert_eq!(first, second);
        }

        /// Unsetting any single dimension can only widen the result, and the
        /// result equals the intersection of the single-dimension filters.
        #[test]
        fn prop_dimensions_are_independent(
            records in arb_listings(),
            spec in arb_spec(),
            dim in 0usize..8,
        ) {
            let engine = PropertyQueryEngine::new();
            let narrowed = engine.evaluate(&records, &spec);
            let widened = engine.evaluate(&records, &without_dimension(&spec, dim));
            prop_assert!(narrowed.len() <= widened.len());
            for r in &narrowed {
                prop_assert!(widened.iter().any(|w| std::ptr::eq(*w, *r)));
            }

            for record in &records {
                let all = engine.matches(record, &spec);
                let each = (0..8).all(|d| engine.matches(record, &only_dimension(&spec, d)));
                prop_assert_eq!(all, each);
            }
        }
    }
}
