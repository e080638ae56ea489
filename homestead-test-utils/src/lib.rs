//! Homestead Test Utilities
//!
//! Shared test infrastructure for the Homestead workspace:
//! - Proptest generators for listings, filters and configuration
//! - Fixtures with a small, hand-checked listing set
//! - Custom assertions for Homestead error variants
//! - Test logging setup

// Re-export storage types so integration tests need a single import
pub use homestead_storage::{saved_properties, FavoritesStore, InMemoryFavoritesStore, PropertyCatalog};

// Re-export core types for convenience
pub use homestead_core::{
    CatalogError, ConfigError, Coordinates, FavoriteError, FavoriteId, FavoriteRecord, FilterSpec,
    HomesteadConfig, HomesteadError, HomesteadResult, Inquiry, InquiryError, InquiryFieldError,
    ListingStatus, MapViewport,
    NeighborhoodStats, PriceRange, PropertyId, PropertyQueryEngine, PropertyRecord, PropertyType,
    Timestamp, KNOWN_AMENITIES,
};

use chrono::Utc;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber.
///
/// Output goes through the libtest capture, filtered by `RUST_LOG`
/// (default `warn`). Safe to call from every test; only the first call wins.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// In-memory sink for [`capture_logs`].
#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber at `DEBUG` and return what it
/// logged, without ANSI colors or timestamps.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    {
        let _guard = subscriber.set_default();
        f();
    }
    let bytes = buffer.0.lock().map(|b| b.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating Homestead types.

    use super::*;
    use proptest::prelude::*;

    // === Identity Type Generators ===

    /// Generate a PropertyId from a small range so collisions happen.
    pub fn arb_property_id() -> impl Strategy<Value = PropertyId> {
        (1u64..64).prop_map(PropertyId::new)
    }

    /// Generate a Timestamp (DateTime<Utc>).
    pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        // 2020-01-01 .. 2030-01-01
        (1577836800i64..1893456000i64).prop_map(|secs| {
            chrono::DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
        })
    }

    // === Enum Generators ===

    /// Generate one of the four catalog property types.
    pub fn arb_known_property_type() -> impl Strategy<Value = PropertyType> {
        prop_oneof![
            Just(PropertyType::SingleFamily),
            Just(PropertyType::Condo),
            Just(PropertyType::Townhouse),
            Just(PropertyType::MultiFamily),
        ]
    }

    /// Generate a PropertyType, occasionally one outside the catalog list.
    pub fn arb_property_type() -> impl Strategy<Value = PropertyType> {
        prop_oneof![
            4 => arb_known_property_type(),
            1 => "[A-Z][a-z]{3,8}".prop_map(PropertyType::from),
        ]
    }

    /// Generate a ListingStatus variant.
    pub fn arb_listing_status() -> impl Strategy<Value = ListingStatus> {
        prop_oneof![
            Just(ListingStatus::Active),
            Just(ListingStatus::Featured),
            Just(ListingStatus::Pending),
            Just(ListingStatus::Sold),
        ]
    }

    /// Generate a feature list drawn from the known amenities.
    pub fn arb_features() -> impl Strategy<Value = Vec<String>> {
        prop::sample::subsequence(KNOWN_AMENITIES.to_vec(), 0..=4)
            .prop_map(|names| names.into_iter().map(str::to_string).collect())
    }

    /// Generate a position somewhere around the Front Range.
    pub fn arb_coordinates() -> impl Strategy<Value = Coordinates> {
        (39.0f64..41.0, -106.0f64..-104.0).prop_map(|(lat, lng)| Coordinates::new(lat, lng))
    }

    /// Generate free-form notes text.
    pub fn arb_notes() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ,.]{0,32}"
    }

    // === Entity Generators ===

    /// Generate a PropertyRecord with the given id.
    pub fn arb_property_record(id: PropertyId) -> impl Strategy<Value = PropertyRecord> {
        (
            (
                "[A-Za-z ]{1,24}",
                50_000u32..2_500_000,
                arb_property_type(),
                0u32..7,
                0u32..5,
                300u32..6000,
            ),
            (
                "[A-Za-z ]{0,40}",
                arb_features(),
                arb_listing_status(),
                arb_timestamp(),
                prop::option::of(arb_coordinates()),
            ),
        )
            .prop_map(
                move |(
                    (title, price, property_type, bedrooms, bathrooms, square_feet),
                    (description, features, status, listing_date, coordinates),
                )| PropertyRecord {
                    id,
                    title,
                    price: f64::from(price),
                    property_type,
                    bedrooms,
                    bathrooms,
                    square_feet: f64::from(square_feet),
                    address: format!("{} Main St", id),
                    city: "Denver".to_string(),
                    state: Some("CO".to_string()),
                    zip_code: None,
                    description,
                    features,
                    status,
                    listing_date,
                    year_built: None,
                    lot_size: None,
                    images: vec![],
                    coordinates,
                    neighborhood_stats: None,
                },
            )
    }

    /// Generate up to `max_len` listings with unique ids `1..=len`.
    pub fn arb_listings(max_len: usize) -> impl Strategy<Value = Vec<PropertyRecord>> {
        (0..=max_len).prop_flat_map(|len| {
            (1..=len as u64)
                .map(|raw| arb_property_record(PropertyId::new(raw)))
                .collect::<Vec<_>>()
        })
    }

    /// Generate a FilterSpec with each dimension independently set or unset.
    pub fn arb_filter_spec() -> impl Strategy<Value = FilterSpec> {
        (
            prop::option::of("[a-z]{1,3}"),
            prop::option::of(0u32..2_500_000),
            prop::option::of(0u32..2_500_000),
            prop::collection::vec(arb_known_property_type(), 0..3),
            prop::option::of(0u32..6),
            prop::option::of(0u32..5),
            prop::option::of(0u32..6000),
            prop::sample::subsequence(KNOWN_AMENITIES.to_vec(), 0..3),
        )
            .prop_map(|(keywords, price_min, price_max, types, beds, baths, sqft, amenities)| {
                FilterSpec {
                    keywords,
                    price_min: price_min.map(f64::from),
                    price_max: price_max.map(f64::from),
                    property_types: types,
                    bedrooms_min: beds.map(f64::from),
                    bathrooms_min: baths.map(f64::from),
                    square_feet_min: sqft.map(f64::from),
                    amenities: amenities.into_iter().map(str::to_string).collect(),
                }
            })
    }

    /// Generate a HomesteadConfig that passes validation.
    pub fn arb_valid_config() -> impl Strategy<Value = HomesteadConfig> {
        (1usize..20, -90.0f64..=90.0, -180.0f64..=180.0, 0u8..=20, 0u8..=20).prop_map(
            |(featured_limit, lat, lng, a, b)| HomesteadConfig {
                featured_limit,
                default_center: Coordinates::new(lat, lng),
                overview_zoom: a.min(b),
                detail_zoom: a.max(b),
                dataset_path: None,
            },
        )
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built listings for common testing scenarios.

    use super::*;

    fn listing_date(day: u32) -> Timestamp {
        let secs = 1_704_067_200 + i64::from(day) * 86_400; // 2024-01-01
        chrono::DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
    }

    /// A bare listing; callers fill in anything beyond the filterable fields.
    pub fn listing(
        id: u64,
        title: &str,
        price: f64,
        property_type: PropertyType,
        bedrooms: u32,
        bathrooms: u32,
        square_feet: f64,
    ) -> PropertyRecord {
        PropertyRecord {
            id: PropertyId::new(id),
            title: title.to_string(),
            price,
            property_type,
            bedrooms,
            bathrooms,
            square_feet,
            address: String::new(),
            city: String::new(),
            state: None,
            zip_code: None,
            description: String::new(),
            features: vec![],
            status: ListingStatus::Active,
            listing_date: listing_date(0),
            year_built: None,
            lot_size: None,
            images: vec![],
            coordinates: None,
            neighborhood_stats: None,
        }
    }

    /// Two listings either side of a 500k price cap.
    pub fn price_cap_pair() -> Vec<PropertyRecord> {
        vec![
            listing(1, "Downtown Condo", 400_000.0, PropertyType::Condo, 2, 1, 950.0),
            listing(2, "Suburban House", 800_000.0, PropertyType::SingleFamily, 4, 3, 2400.0),
        ]
    }

    /// Eight listings covering every property type, status and price preset.
    pub fn sample_listings() -> Vec<PropertyRecord> {
        let rows: [(u64, &str, f64, PropertyType, u32, u32, f64, &str, &str, &[&str], ListingStatus, Option<(f64, f64)>); 8] = [
            (1, "Modern Downtown Condo", 450_000.0, PropertyType::Condo, 2, 2, 1200.0,
             "123 Larimer St", "Denver", &["Fireplace", "City Views"], ListingStatus::Featured,
             Some((39.7486, -104.9995))),
            (2, "Family Home with Garden", 725_000.0, PropertyType::SingleFamily, 4, 3, 2600.0,
             "456 Pearl St", "Boulder", &["Garden", "Garage", "Deck"], ListingStatus::Active,
             Some((40.0176, -105.2797))),
            (3, "Luxury Mountain Retreat", 1_450_000.0, PropertyType::SingleFamily, 5, 4, 4200.0,
             "789 Evergreen Pkwy", "Evergreen", &["Fireplace", "Swimming Pool", "Mountain Views"],
             ListingStatus::Featured, Some((39.6333, -105.3172))),
            (4, "Cozy Townhouse", 385_000.0, PropertyType::Townhouse, 3, 2, 1650.0,
             "22 Havana St", "Aurora", &["Garage"], ListingStatus::Pending, None),
            (5, "Investment Duplex", 610_000.0, PropertyType::MultiFamily, 4, 2, 2400.0,
             "910 Colfax Ave", "Denver", &["Basement", "Hardwood Floors"], ListingStatus::Active,
             Some((39.7401, -104.9802))),
            (6, "Lakeside Bungalow", 530_000.0, PropertyType::SingleFamily, 2, 1, 1100.0,
             "5 Shore Dr", "Littleton", &["Deck", "Updated Kitchen"], ListingStatus::Featured,
             Some((39.6133, -105.0166))),
            (7, "Loft near Union Station", 980_000.0, PropertyType::Condo, 2, 2, 1500.0,
             "1701 Wynkoop St", "Denver", &["City Views", "Central Air"], ListingStatus::Sold,
             Some((39.7530, -105.0002))),
            (8, "Starter Townhome", 299_000.0, PropertyType::Townhouse, 2, 1, 980.0,
             "48 Main St", "Longmont", &[], ListingStatus::Active, None),
        ];

        rows.into_iter()
            .enumerate()
            .map(
                |(day, (id, title, price, property_type, beds, baths, sqft, address, city, features, status, coords))| {
                    PropertyRecord {
                        address: address.to_string(),
                        city: city.to_string(),
                        state: Some("CO".to_string()),
                        description: format!("{} in {}.", title, city),
                        features: features.iter().map(|f| f.to_string()).collect(),
                        status,
                        listing_date: listing_date(day as u32),
                        coordinates: coords.map(|(lat, lng)| Coordinates::new(lat, lng)),
                        ..listing(id, title, price, property_type, beds, baths, sqft)
                    }
                },
            )
            .collect()
    }

    /// Catalog over [`sample_listings`].
    pub fn sample_catalog() -> PropertyCatalog {
        PropertyCatalog::new(sample_listings()).expect("sample listings have unique ids")
    }

    /// Configuration with every default.
    pub fn default_config() -> HomesteadConfig {
        HomesteadConfig::default()
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Custom assertion functions for Homestead error variants.

    use super::*;

    /// Assert that a HomesteadResult is Ok.
    #[track_caller]
    pub fn assert_ok<T: std::fmt::Debug>(result: &HomesteadResult<T>) {
        assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
    }

    /// Assert that a HomesteadResult is a DuplicateFavorite error for `property_id`.
    #[track_caller]
    pub fn assert_duplicate_favorite<T: std::fmt::Debug>(result: &HomesteadResult<T>, property_id: PropertyId) {
        match result {
            Err(HomesteadError::Favorite(FavoriteError::DuplicateFavorite { property_id: got })) => {
                assert_eq!(*got, property_id, "Wrong property id in DuplicateFavorite error");
            }
            other => panic!("Expected DuplicateFavorite for {}, got: {:?}", property_id, other),
        }
    }

    /// Assert that a HomesteadResult is a favorites NotFound error for `property_id`.
    #[track_caller]
    pub fn assert_favorite_not_found<T: std::fmt::Debug>(result: &HomesteadResult<T>, property_id: PropertyId) {
        match result {
            Err(HomesteadError::Favorite(FavoriteError::NotFound { property_id: got })) => {
                assert_eq!(*got, property_id, "Wrong property id in NotFound error");
            }
            other => panic!("Expected favorite NotFound for {}, got: {:?}", property_id, other),
        }
    }

    /// Assert that a HomesteadResult is a PropertyNotFound catalog error.
    #[track_caller]
    pub fn assert_property_not_found<T: std::fmt::Debug>(result: &HomesteadResult<T>, id: PropertyId) {
        match result {
            Err(HomesteadError::Catalog(CatalogError::PropertyNotFound { id: got })) => {
                assert_eq!(*got, id, "Wrong id in PropertyNotFound error");
            }
            other => panic!("Expected PropertyNotFound for {}, got: {:?}", id, other),
        }
    }

    /// Assert that a HomesteadResult is a Config error.
    #[track_caller]
    pub fn assert_config_error<T: std::fmt::Debug>(result: &HomesteadResult<T>) {
        match result {
            Err(HomesteadError::Config(_)) => {}
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    /// Assert that listing ids appear exactly in the given order.
    #[track_caller]
    pub fn assert_ids(records: &[PropertyRecord], expected: &[u64]) {
        let got: Vec<u64> = records.iter().map(|r| r.id.get()).collect();
        assert_eq!(got, expected, "Unexpected listing ids");
    }
}

// ============================================================================
// TESTS
// ============================================================================
