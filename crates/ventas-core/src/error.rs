//! # Error Types
//!
//! Domain-specific error types for ventas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ventas-core errors (this file)                                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ventas-db errors (separate crate)                                     │
//! │  └── DbError          - Store failures (wraps ValidationError)         │
//! │                                                                         │
//! │  Shell errors (in apps)                                                │
//! │  ├── ShellError       - Text menu (I/O + storage)                      │
//! │  └── ApiError         - Desktop form (serialized)                      │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → ShellError / ApiError → Operator    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are never fatal: the shells report them and ask again
//! (text menu) or abort the single action (desktop form).

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised both when raw operator text fails to parse and when an already
/// typed value breaks a record invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// The text is not a number.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// The text is not a whole number.
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: String, value: String },

    /// The value is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::NotAnInteger { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
