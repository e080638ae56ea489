//! Enum types for Homestead listings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// PROPERTY TYPE
// ============================================================================

/// Kind of dwelling a listing describes.
///
/// The dataset stores this as a free-form string. The four types offered by
/// the search filters get their own variants; anything else is preserved
/// verbatim in `Other` so that records never fail to load over an unknown
/// label.
///
/// Equality and hashing compare labels, so `Other("Condo")` equals `Condo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
    Other(String),
}

impl PropertyType {
    /// Property types offered by the search filters, in display order.
    pub const KNOWN: [PropertyType; 4] = [
        PropertyType::SingleFamily,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::MultiFamily,
    ];

    /// Label as stored in the dataset.
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Other(label) => label,
        }
    }

    /// Parse a dataset label. Matching is exact; unknown labels become `Other`.
    pub fn parse(label: &str) -> Self {
        match label {
            "Single Family" => PropertyType::SingleFamily,
            "Condo" => PropertyType::Condo,
            "Townhouse" => PropertyType::Townhouse,
            "Multi-Family" => PropertyType::MultiFamily,
            other => PropertyType::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(PropertyType::parse(self.as_str()), PropertyType::Other(_))
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PropertyType {}

impl Hash for PropertyType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for PropertyType {
    fn from(label: String) -> Self {
        match PropertyType::parse(&label) {
            PropertyType::Other(_) => PropertyType::Other(label),
            known => known,
        }
    }
}

impl From<&str> for PropertyType {
    fn from(label: &str) -> Self {
        PropertyType::parse(label)
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LISTING STATUS
// ============================================================================

/// Market status of a listing.
///
/// Statuses are lowercase tags matched exactly; any other spelling is kept
/// verbatim in `Other`. Equality and hashing compare labels.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ListingStatus {
    #[default]
    Active,
    /// Promoted on the landing page
    Featured,
    Pending,
    Sold,
    Other(String),
}

impl ListingStatus {
    /// Status as stored in the dataset.
    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Featured => "featured",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
            ListingStatus::Other(label) => label,
        }
    }

    /// Parse a dataset status. Matching is exact; `"Featured"` is `Other`.
    pub fn parse(label: &str) -> Self {
        match label {
            "active" => ListingStatus::Active,
            "featured" => ListingStatus::Featured,
            "pending" => ListingStatus::Pending,
            "sold" => ListingStatus::Sold,
            other => ListingStatus::Other(other.to_string()),
        }
    }

    pub fn is_featured(&self) -> bool {
        self.as_str() == "featured"
    }
}

impl PartialEq for ListingStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ListingStatus {}

impl Hash for ListingStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for ListingStatus {
    fn from(label: String) -> Self {
        match ListingStatus::parse(&label) {
            ListingStatus::Other(_) => ListingStatus::Other(label),
            known => known,
        }
    }
}

impl From<&str> for ListingStatus {
    fn from(label: &str) -> Self {
        ListingStatus::parse(label)
    }
}

impl From<ListingStatus> for String {
    fn from(value: ListingStatus) -> Self {
        match value {
            ListingStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// AMENITIES
// ============================================================================

/// Amenities offered by the search filters, in display order.
/// Listings may carry features outside this list; they still match by name.
pub const KNOWN_AMENITIES: [&str; 12] = [
    "Swimming Pool",
    "Garage",
    "Fireplace",
    "Garden",
    "Deck",
    "Mountain Views",
    "City Views",
    "Hardwood Floors",
    "Updated Kitchen",
    "Central Air",
    "Walk-in Closets",
    "Basement",
];

// ============================================================================
// TESTS
// ============================================================================
