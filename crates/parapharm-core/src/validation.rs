//! # Validation Module
//!
//! Checks applied to catalog payloads before they are dispatched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: SPA                                                          │
//! │  └── Items come straight from the catalog API                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (storefront app)                                     │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: name and price checks                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer                                                      │
//! │  └── Total: accepts every well-typed action                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parapharm_core::validation::{validate_item_name, validate_price_cents};
//!
//! validate_item_name("Vitamin C 1000mg").unwrap();
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::CatalogItem;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a catalog item display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_ITEM_NAME_LEN`] characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free samples).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a whole catalog item as received from the SPA.
pub fn validate_catalog_item(item: &CatalogItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_price_cents(item.price_cents)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Crème hydratante 50ml").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN)).is_ok());
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1290).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_catalog_item() {
        let mut item = CatalogItem {
            id: 1,
            is_pack: true,
            name: "Pack solaire".to_string(),
            price_cents: 2450,
            image: None,
            brand: None,
            description: None,
            extra: Default::default(),
        };
        assert!(validate_catalog_item(&item).is_ok());

        item.price_cents = -1;
        assert!(matches!(
            validate_catalog_item(&item),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
