//! # Validation Module
//!
//! Form validation for the checkout form and the admin menu/event editors.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── `required` attributes, input types                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commands (Rust)                                              │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules                                          │
//! │                                                                         │
//! │  The cart is deliberately NOT validated here: it sanitizes its own     │
//! │  inputs instead of rejecting them.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bella_core::validation::{validate_phone, validate_price_cents};
//!
//! assert!(validate_phone("+1 (555) 123-4567").is_ok());
//! assert!(validate_price_cents(-100).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{ContactMessage, CustomerInfo};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const MAX_CUSTOMER_NAME_LEN: usize = 100;
pub const MAX_ADDRESS_LEN: usize = 300;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_LOCATION_LEN: usize = 200;

/// Highest menu price accepted from the admin editor ($100,000.00).
pub const MAX_PRICE_CENTS: i64 = 10_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Trims `value` and checks it is non-empty and at most `max` characters.
pub fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Like [`validate_required_text`] but an empty value is fine.
pub fn validate_optional_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates a delivery phone number.
///
/// ## Rules
/// - 7 to 20 characters after trimming
/// - Only digits, spaces and `+ ( ) - .`
/// - At least 7 digits
///
/// ```rust
/// use bella_core::validation::validate_phone;
///
/// assert!(validate_phone("+1 (555) 987-6543").is_ok());
/// assert!(validate_phone("call me").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() < 7 {
        return Err(ValidationError::TooShort {
            field: "phone".to_string(),
            min: 7,
        });
    }

    if phone.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: 20,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '(' | ')' | '-' | '.'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces and + ( ) - .".to_string(),
        });
    }

    if phone.chars().filter(char::is_ascii_digit).count() < 7 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain at least 7 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address (shape only: `local@domain.tld`).
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price in cents.
///
/// Zero is allowed (complimentary items); negative prices are not.
/// The ceiling keeps `price × quantity` far from `i64` overflow.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the checkout form.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Checkout: "Place Order"                                                │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_customer_info() ← THIS FUNCTION                              │
/// │       │                                                                 │
/// │       ├── name empty?      → "name is required"                        │
/// │       ├── phone malformed? → "phone has invalid format: ..."           │
/// │       ├── address empty?   → "address is required"                     │
/// │       │                                                                 │
/// │       └── OK → order goes on the board, cart is cleared                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_customer_info(info: &CustomerInfo) -> ValidationResult<()> {
    validate_required_text("name", &info.name, MAX_CUSTOMER_NAME_LEN)?;
    validate_phone(&info.phone)?;
    validate_required_text("address", &info.address, MAX_ADDRESS_LEN)?;
    Ok(())
}

/// Validates the contact form. Phone may be left blank.
pub fn validate_contact_message(contact: &ContactMessage) -> ValidationResult<()> {
    validate_required_text("name", &contact.name, MAX_CUSTOMER_NAME_LEN)?;
    validate_email(&contact.email)?;
    if !contact.phone.trim().is_empty() {
        validate_phone(&contact.phone)?;
    }
    validate_required_text("message", &contact.message, MAX_DESCRIPTION_LEN)?;
    Ok(())
}
