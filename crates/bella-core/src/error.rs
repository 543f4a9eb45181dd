//! # Error Types
//!
//! Domain-specific error types for bella-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bella-core errors (this file)                                         │
//! │  ├── CoreError        - Admin/checkout domain errors                   │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  bella-db errors (separate crate)                                      │
//! │  └── DbError          - Storage failures                               │
//! │                                                                         │
//! │  bella-app errors                                                      │
//! │  ├── SessionError     - Storage failure while logging in               │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! Cart mutations never fail: unknown ids are no-ops and non-positive
//! quantities remove the line. A rejected login is an outcome, not an error.

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Adding an item to the cart by id that was deleted from the menu
    /// - Admin edits/deletes a menu item that another tab already removed
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Event id is not in the catalog.
    #[error("Event not found: {0}")]
    EventNotFound(String),

    /// Order id is not on the order board (unknown, or already delivered).
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Checkout was attempted with an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyOrder,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Input validation errors.
///
/// Produced by the checkout form and the admin menu/event forms.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (phone number, email, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MenuItemNotFound("main9".to_string());
        assert_eq!(err.to_string(), "Menu item not found: main9");

        assert_eq!(
            CoreError::EmptyOrder.to_string(),
            "Cannot place an order with an empty cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), "phone is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "name must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
