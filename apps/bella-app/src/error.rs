//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bella Vista                            │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ├── CoreError::MenuItemNotFound ──► NOT_FOUND                   │
//! │         ├── CoreError::Validation ────────► VALIDATION_ERROR            │
//! │         ├── CoreError::EmptyOrder ────────► EMPTY_ORDER                 │
//! │         ├── SessionError / DbError ───────► STORAGE_ERROR               │
//! │         └── anonymous admin call ─────────► UNAUTHORIZED                │
//! │                                                                         │
//! │  The presentation layer receives:                                       │
//! │    { "code": "NOT_FOUND", "message": "Menu item not found: main9" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an ApiError
//! A wrong password. `login` returns a normal response with
//! `success: false`.

use bella_core::CoreError;
use bella_db::DbError;
use serde::Serialize;
use ts_rs::TS;

use crate::state::SessionError;

/// API error returned from commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown menu item, event or order
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Checkout with an empty cart
    EmptyOrder,

    /// Admin command without an authenticated session
    Unauthorized,

    /// Durable storage failed
    StorageError,

    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Admin login required")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuItemNotFound(id) => ApiError::not_found("Menu item", &id),
            CoreError::EventNotFound(id) => ApiError::not_found("Event", &id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::EmptyOrder => ApiError::new(ErrorCode::EmptyOrder, err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to API errors.
///
/// Details are logged, not sent: the presentation layer gets a generic message.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!("Storage error: {}", err);
        let message = match err {
            DbError::ConnectionFailed(_) | DbError::PoolExhausted => "Storage is unavailable",
            DbError::MigrationFailed(_) => "Storage migration failed",
            DbError::QueryFailed(_) | DbError::TransactionFailed(_) | DbError::Internal(_) => {
                "Storage operation failed"
            }
        };
        ApiError::new(ErrorCode::StorageError, message)
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Storage(e) => ApiError::from(e),
            SessionError::Encode(e) => ApiError::internal(format!("Could not save session: {}", e)),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for commands.
pub type ApiResult<T> = Result<T, ApiError>;
