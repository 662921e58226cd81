//! # Error Types
//!
//! Domain-specific error types for droidworks-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  droidworks-core errors (this file)                                    │
//! │  ├── CoreError        - Catalog and ordering failures                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - Config, terminal I/O, wrapped CoreError        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Popping an empty [`Stack`](crate::collections::Stack) or dequeuing an
//! empty [`Queue`](crate::collections::Queue) returns `None`. Callers use it
//! as a loop terminator, so it never shows up here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core catalog errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item's category is absent from the router's ranking.
    ///
    /// ## When This Occurs
    /// - The configured category order omits a category that a droid in the
    ///   catalog belongs to
    ///
    /// This is a contract violation between the ranking and the items, so the
    /// bucketing pass aborts without touching the collection. It is never
    /// retried and the item is never dropped silently.
    #[error("Unrecognized category: {category}")]
    UnrecognizedCategory { category: String },

    /// Droid cannot be found in the catalog.
    #[error("Droid not found: {0}")]
    DroidNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Catalog export failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a droid is added to the catalog.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID, not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., a category listed twice in the ranking).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
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
    fn test_error_messages() {
        let err = CoreError::UnrecognizedCategory {
            category: "Janitor".to_string(),
        };
        assert_eq!(err.to_string(), "Unrecognized category: Janitor");

        let err = CoreError::DroidNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Droid not found: abc");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "number of languages".to_string(),
            min: 0,
            max: 200,
        };
        assert_eq!(
            err.to_string(),
            "number of languages must be between 0 and 200"
        );

        let err = ValidationError::Duplicate {
            field: "category".to_string(),
            value: "utility".to_string(),
        };
        assert_eq!(err.to_string(), "category 'utility' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "material".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
