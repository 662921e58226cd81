//! # Validation Module
//!
//! Input validation for droid construction and menu input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI prompt (apps/cli)                                        │
//! │  ├── Parse the typed line (number, yes/no, name)                       │
//! │  └── Re-prompt on failure                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog (this crate)                                         │
//! │  └── THIS MODULE: range checks before a droid is built                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_LANGUAGES, MAX_SHIPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the number of languages a protocol droid speaks.
///
/// ## Example
/// ```rust
/// use droidworks_core::validation::validate_language_count;
///
/// assert!(validate_language_count(12).is_ok());
/// assert!(validate_language_count(10_000).is_err());
/// ```
pub fn validate_language_count(languages: u32) -> ValidationResult<()> {
    if languages > MAX_LANGUAGES {
        return Err(ValidationError::OutOfRange {
            field: "number of languages".to_string(),
            min: 0,
            max: MAX_LANGUAGES as i64,
        });
    }

    Ok(())
}

/// Validates the number of ships an astromech is certified for.
pub fn validate_ship_count(ships: u32) -> ValidationResult<()> {
    if ships > MAX_SHIPS {
        return Err(ValidationError::OutOfRange {
            field: "number of ships".to_string(),
            min: 0,
            max: MAX_SHIPS as i64,
        });
    }

    Ok(())
}

/// Validates a 1-based menu choice.
///
/// ## Example
/// ```rust
/// use droidworks_core::validation::validate_menu_choice;
///
/// assert!(validate_menu_choice(1, 6).is_ok());
/// assert!(validate_menu_choice(0, 6).is_err());
/// assert!(validate_menu_choice(7, 6).is_err());
/// ```
pub fn validate_menu_choice(choice: i64, max: usize) -> ValidationResult<usize> {
    if choice < 1 || choice > max as i64 {
        return Err(ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 1,
            max: max as i64,
        });
    }

    Ok(choice as usize)
}

// =============================================================================
// Unit Tests
// =============================================================================
