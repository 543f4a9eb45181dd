//! # Contact Command
//!
//! The contact page form: name, email, optional phone, message.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_contact(form)                                                   │
//! │      │                                                                  │
//! │      ├── invalid field ──► Err(VALIDATION_ERROR), form keeps its input  │
//! │      └── valid ──────────► logged, Ok(confirmation), form resets        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are not stored; the log is the record.

use bella_core::validation::validate_contact_message;
use bella_core::{ContactMessage, CoreError};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::ConfigState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactConfirmation {
    /// Quoted back to the guest if they follow up.
    pub reference: String,
    pub message: String,
}

/// Validates and records a contact message.
pub fn submit_contact(
    config: &ConfigState,
    contact: ContactMessage,
) -> ApiResult<ContactConfirmation> {
    debug!("submit_contact command");
    validate_contact_message(&contact).map_err(CoreError::from)?;

    let reference = Uuid::new_v4().to_string();
    let phone = contact.phone.trim();
    info!(
        reference = %reference,
        name = %contact.name.trim(),
        email = %contact.email.trim(),
        phone = (!phone.is_empty()).then_some(phone),
        message = %contact.message.trim(),
        "Contact message received"
    );

    Ok(ContactConfirmation {
        message: format!(
            "Thank you, {}! {} will get back to you soon.",
            contact.name.trim(),
            config.restaurant_name
        ),
        reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn form() -> ContactMessage {
        ContactMessage {
            name: " Maria Lopez ".to_string(),
            email: "maria@example.com".to_string(),
            phone: String::new(),
            message: "Do you have a private room for twelve?".to_string(),
        }
    }

    #[test]
    fn test_submit_contact() {
        let confirmation = submit_contact(&ConfigState::default(), form()).unwrap();

        assert!(Uuid::parse_str(&confirmation.reference).is_ok());
        assert_eq!(
            confirmation.message,
            "Thank you, Maria Lopez! Bella Vista will get back to you soon."
        );
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let config = ConfigState::default();

        let mut bad = form();
        bad.email = "maria-at-example".to_string();
        let err = submit_contact(&config, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut bad = form();
        bad.phone = "12345".to_string();
        assert_eq!(submit_contact(&config, bad).unwrap_err().code, ErrorCode::ValidationError);

        let mut bad = form();
        bad.message = String::new();
        let err = submit_contact(&config, bad).unwrap_err();
        assert_eq!(err.message, "message is required");
    }

    #[test]
    fn test_wire_format() {
        let contact: ContactMessage = serde_json::from_str(
            r#"{"name":"Maria","email":"maria@example.com","message":"Hello there"}"#,
        )
        .unwrap();
        assert!(contact.phone.is_empty());
        assert!(submit_contact(&ConfigState::default(), contact).is_ok());
    }
}
