//! # Session Commands
//!
//! Admin login, logout and the session indicator.
//!
//! ## Login Outcomes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(credential)                                                      │
//! │      │                                                                  │
//! │      ├── credential accepted, saved ──► Ok { success: true,  ... }      │
//! │      ├── credential rejected ─────────► Ok { success: false, error:     │
//! │      │                                      "Invalid credentials" }     │
//! │      └── storage failed ──────────────► Err(STORAGE_ERROR)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bella_core::Credential;
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::{SessionSnapshot, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    /// The session after the attempt.
    pub session: SessionSnapshot,
}

/// Signs an admin in. A wrong credential is a normal response, not an error.
pub async fn login(session: &SessionState, credential: Credential) -> ApiResult<LoginResponse> {
    debug!(identifier = %credential.identifier(), "login command");

    let outcome = session.login(&credential).await?;
    Ok(LoginResponse {
        success: outcome.is_success(),
        session: session.snapshot(),
    })
}

/// Signs out. Always succeeds.
pub async fn logout(session: &SessionState) -> SessionSnapshot {
    debug!("logout command");
    session.logout().await;
    session.snapshot()
}

pub fn get_session(session: &SessionState) -> SessionSnapshot {
    debug!("get_session command");
    session.snapshot()
}
