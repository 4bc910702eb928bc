//! # Error Types
//!
//! Domain error types for parapharm-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parapharm-core (this file)                                            │
//! │  ├── CoreError        - Rejected input at the command boundary         │
//! │  ├── ValidationError  - Field-level validation failures                │
//! │  └── HydrationIssue   - Persisted data that was discarded on load      │
//! │                                                                         │
//! │  parapharm-db                                                          │
//! │  └── DbError          - Storage operation failures                     │
//! │                                                                         │
//! │  storefront app                                                        │
//! │  └── ApiError         - What the SPA sees (serialized)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer itself has no error type: every action is total. These
//! errors only exist around it (parsing actions, validating catalog payloads,
//! reporting what hydration threw away).

use thiserror::Error;

use crate::types::ItemKey;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised before an action reaches the reducer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The action JSON could not be decoded.
    ///
    /// ## When This Occurs
    /// - Unknown `type` tag
    /// - Payload shape does not match the tag
    #[error("Malformed action: {0}")]
    MalformedAction(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Hydration Issue
// =============================================================================

/// Something found in persisted storage that could not be used as-is.
///
/// Hydration never fails; it reports these and substitutes defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HydrationIssue {
    /// The stored value for `key` is not valid JSON of the expected shape.
    #[error("Stored value for '{key}' is malformed: {reason}")]
    Malformed { key: &'static str, reason: String },

    /// A stored line had quantity 0 and was dropped.
    #[error("Dropped {0} with zero quantity")]
    ZeroQuantity(ItemKey),

    /// Two stored lines shared a key; their quantities were merged.
    #[error("Merged duplicate line {0}")]
    DuplicateLine(ItemKey),

    /// The stored cart amount did not match the number of lines.
    #[error("Stored cart amount {persisted} does not match {actual} lines")]
    AmountMismatch { persisted: u64, actual: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_hydration_issue_messages() {
        let issue = HydrationIssue::ZeroQuantity(ItemKey::pack(4));
        assert_eq!(issue.to_string(), "Dropped pack#4 with zero quantity");

        let issue = HydrationIssue::AmountMismatch {
            persisted: 3,
            actual: 2,
        };
        assert_eq!(
            issue.to_string(),
            "Stored cart amount 3 does not match 2 lines"
        );
    }
}
