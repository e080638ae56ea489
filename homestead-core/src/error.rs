//! Error types for Homestead operations

use crate::PropertyId;
use thiserror::Error;

/// Favorites store errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("Property {property_id} is already in favorites")]
    DuplicateFavorite { property_id: PropertyId },

    #[error("Favorite not found for property {property_id}")]
    NotFound { property_id: PropertyId },
}

/// Property catalog errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Property not found: {id}")]
    PropertyNotFound { id: PropertyId },

    #[error("Duplicate property id in catalog data: {id}")]
    DuplicateId { id: PropertyId },

    #[error("Invalid catalog data: {reason}")]
    InvalidData { reason: String },

    #[error("Failed to read catalog data from {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse config TOML: {reason}")]
    Parse { reason: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// A single contact-form field that failed validation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InquiryFieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Message is required")]
    MessageRequired,
}

impl InquiryFieldError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            InquiryFieldError::NameRequired => "name",
            InquiryFieldError::EmailRequired | InquiryFieldError::EmailInvalid => "email",
            InquiryFieldError::MessageRequired => "message",
        }
    }
}

/// Property inquiry errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Invalid inquiry: {} field(s) failed validation", .fields.len())]
    Invalid { fields: Vec<InquiryFieldError> },
}

/// Master error type for all Homestead errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HomesteadError {
    #[error("Favorite error: {0}")]
    Favorite(#[from] FavoriteError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Inquiry error: {0}")]
    Inquiry(#[from] InquiryError),
}

/// Result type alias for Homestead operations.
pub type HomesteadResult<T> = Result<T, HomesteadError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_favorite_display() {
        let err = FavoriteError::DuplicateFavorite {
            property_id: PropertyId::new(5),
        };
        assert_eq!(err.to_string(), "Property 5 is already in favorites");
    }

    #[test]
    fn test_favorite_not_found_display() {
        let err = FavoriteError::NotFound {
            property_id: PropertyId::new(3),
        };
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::PropertyNotFound {
            id: PropertyId::new(99),
        };
        assert_eq!(err.to_string(), "Property not found: 99");

        let err = CatalogError::InvalidData {
            reason: "expected an array".to_string(),
        };
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "featured_limit".to_string(),
            value: "0".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("featured_limit"));
        assert!(msg.contains("must be greater than 0"));
    }

    #[test]
    fn test_inquiry_error_display() {
        let err = InquiryError::Invalid {
            fields: vec![InquiryFieldError::NameRequired, InquiryFieldError::EmailInvalid],
        };
        assert_eq!(err.to_string(), "Invalid inquiry: 2 field(s) failed validation");
        assert_eq!(InquiryFieldError::NameRequired.to_string(), "Name is required");
    }

    #[test]
    fn test_master_error_from_conversions() {
        let fav: HomesteadError = FavoriteError::NotFound {
            property_id: PropertyId::new(1),
        }
        .into();
        assert!(matches!(fav, HomesteadError::Favorite(_)));

        let catalog: HomesteadError = CatalogError::DuplicateId {
            id: PropertyId::new(2),
        }
        .into();
        assert!(matches!(catalog, HomesteadError::Catalog(_)));

        let config: HomesteadError = ConfigError::Parse {
            reason: "bad".to_string(),
        }
        .into();
        assert!(config.to_string().starts_with("Config error"));
    }
}
