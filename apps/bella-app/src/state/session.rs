//! # Session State
//!
//! The admin session: who is logged in, and the two durable keys that make
//! the login survive a restart.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 login(valid)                                            │
//! │   ┌───────────┐ ───────────────────────► ┌───────────────────────┐     │
//! │   │ Anonymous │                          │ Authenticated(user)   │     │
//! │   └───────────┘ ◄─────────────────────── └───────────────────────┘     │
//! │        ▲  │           logout()                                          │
//! │        │  │                                                             │
//! │        └──┘ login(invalid) / storage failure: no change                │
//! │                                                                         │
//! │   restore_session() at startup:                                        │
//! │     token + parseable user ──► Authenticated                           │
//! │     nothing stored          ──► Anonymous                              │
//! │     anything else           ──► wipe both keys, Anonymous              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durable Keys
//! | Key           | Value                                    |
//! |---------------|------------------------------------------|
//! | `admin-token` | opaque token (UUID v4)                   |
//! | `admin-user`  | JSON `{id, name, email, role}`           |
//!
//! Both are written in one `set_all` and removed in one `remove_all`.
//!
//! ## Locking
//! `status` is a short-lived `std::sync::Mutex` so readers never wait on
//! storage. `ops` is a `tokio::sync::Mutex` held across the awaits of a
//! login or logout, so two of them never interleave.

use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bella_core::{AdminUser, Credential};
use bella_db::{DbError, KeyValueStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::auth::CredentialVerifier;

/// Message recorded when the verifier rejects a credential.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

// =============================================================================
// Types
// =============================================================================

/// Authentication status. The identity exists only inside `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AdminUser),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// Result of a login attempt that reached the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(AdminUser),
    Rejected,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated(_))
    }
}

/// Failures that are NOT a wrong password.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session could not be persisted.
    #[error("Could not save session: {0}")]
    Storage(#[from] DbError),

    /// The identity could not be encoded for storage.
    #[error("Could not encode session identity: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Names of the two durable keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub token_key: String,
    pub user_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        StorageKeys {
            token_key: "admin-token".to_string(),
            user_key: "admin-user".to_string(),
        }
    }
}

/// What the presentation layer sees.
///
/// `user` is `Some` exactly when `authenticated` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub user: Option<AdminUser>,
    /// A login or logout is in flight.
    pub pending: bool,
    /// Why the last login failed, until the next attempt or logout.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Status {
    session: Session,
    pending: bool,
    last_error: Option<String>,
}

// =============================================================================
// Session Store
// =============================================================================

/// Owns the admin session and its durable keys.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    keys: StorageKeys,
    status: Mutex<Status>,
    ops: tokio::sync::Mutex<()>,
}

impl SessionStore {
    /// Creates an anonymous store. Call [`restore_session`](Self::restore_session)
    /// once at startup to pick up a previous login.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        verifier: Arc<dyn CredentialVerifier>,
        keys: StorageKeys,
    ) -> Self {
        SessionStore {
            storage,
            verifier,
            keys,
            status: Mutex::new(Status::default()),
            ops: tokio::sync::Mutex::new(()),
        }
    }

    fn status(&self) -> MutexGuard<'_, Status> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn session(&self) -> Session {
        self.status().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status().session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<AdminUser> {
        self.status().session.user().cloned()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let status = self.status();
        SessionSnapshot {
            authenticated: status.session.is_authenticated(),
            user: status.session.user().cloned(),
            pending: status.pending,
            error: status.last_error.clone(),
        }
    }

    /// Reads the durable keys and adopts the stored identity if it is intact.
    ///
    /// Never fails. Corrupt entries are deleted; an unreadable store leaves
    /// the session anonymous and the entries untouched.
    pub async fn restore_session(&self) -> Session {
        let _op = self.ops.lock().await;

        let token = self.storage.get(&self.keys.token_key).await;
        let user = self.storage.get(&self.keys.user_key).await;

        let session = match (token, user) {
            (Err(e), _) | (_, Err(e)) => {
                error!(error = %e, "Could not read stored session");
                Session::Anonymous
            }
            (Ok(None), Ok(None)) => Session::Anonymous,
            (Ok(Some(token)), Ok(Some(raw))) if !token.trim().is_empty() => {
                match serde_json::from_str::<AdminUser>(&raw) {
                    Ok(user) => {
                        info!(user_id = %user.id, "Restored admin session");
                        Session::Authenticated(user)
                    }
                    Err(e) => {
                        warn!(error = %e, "Stored admin identity is malformed, clearing it");
                        self.wipe().await;
                        Session::Anonymous
                    }
                }
            }
            _ => {
                warn!("Stored admin session is incomplete, clearing it");
                self.wipe().await;
                Session::Anonymous
            }
        };

        self.status().session = session.clone();
        session
    }

    /// Checks a credential and, if it is valid, persists and adopts the identity.
    ///
    /// A wrong credential is `Ok(LoginOutcome::Rejected)` with nothing
    /// written. `Err` means the credential was fine but storage failed.
    pub async fn login(&self, credential: &Credential) -> Result<LoginOutcome, SessionError> {
        let _op = self.ops.lock().await;
        {
            let mut status = self.status();
            status.pending = true;
            status.last_error = None;
        }

        let result = self.try_login(credential).await;

        let mut status = self.status();
        status.pending = false;
        match &result {
            Ok(LoginOutcome::Authenticated(user)) => {
                info!(user_id = %user.id, "Admin logged in");
                status.session = Session::Authenticated(user.clone());
            }
            Ok(LoginOutcome::Rejected) => {
                info!(identifier = %credential.identifier(), "Admin login rejected");
                status.last_error = Some(INVALID_CREDENTIALS.to_string());
            }
            Err(e) => {
                error!(error = %e, "Admin login could not be saved");
                status.last_error = Some(e.to_string());
            }
        }
        result
    }

    async fn try_login(&self, credential: &Credential) -> Result<LoginOutcome, SessionError> {
        let Some(user) = self.verifier.verify(credential).await else {
            return Ok(LoginOutcome::Rejected);
        };

        let token = Uuid::new_v4().to_string();
        let identity = serde_json::to_string(&user)?;

        self.storage
            .set_all(&[
                (self.keys.token_key.as_str(), token.as_str()),
                (self.keys.user_key.as_str(), identity.as_str()),
            ])
            .await?;

        Ok(LoginOutcome::Authenticated(user))
    }

    /// Forgets the session. Always ends anonymous; storage errors are logged.
    pub async fn logout(&self) {
        let _op = self.ops.lock().await;
        self.status().pending = true;

        self.wipe().await;

        let mut status = self.status();
        if let Session::Authenticated(user) = &status.session {
            info!(user_id = %user.id, "Admin logged out");
        }
        *status = Status::default();
    }

    async fn wipe(&self) {
        let keys = [self.keys.token_key.as_str(), self.keys.user_key.as_str()];
        if let Err(e) = self.storage.remove_all(&keys).await {
            error!(error = %e, "Could not clear stored session");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("keys", &self.keys)
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}

/// Shared handle to the [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SessionState {
    store: Arc<SessionStore>,
}

impl SessionState {
    pub fn new(store: SessionStore) -> Self {
        SessionState {
            store: Arc::new(store),
        }
    }
}

impl Deref for SessionState {
    type Target = SessionStore;

    fn deref(&self) -> &SessionStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentialVerifier;
    use async_trait::async_trait;
    use bella_core::AdminRole;
    use bella_db::{Database, DbConfig, MemoryKeyValueStore};
    use tokio::sync::Notify;

    const USER_JSON: &str =
        r#"{"id":"1","name":"Admin User","email":"admin@bellavista.com","role":"admin"}"#;

    fn store_on(kv: Arc<dyn KeyValueStore>) -> SessionStore {
        SessionStore::new(
            kv,
            Arc::new(StaticCredentialVerifier::default()),
            StorageKeys::default(),
        )
    }

    fn memory_store() -> (Arc<MemoryKeyValueStore>, SessionStore) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = store_on(kv.clone());
        (kv, store)
    }

    #[tokio::test]
    async fn test_starts_anonymous() {
        let (_kv, store) = memory_store();
        let snap = store.snapshot();
        assert!(!snap.authenticated);
        assert!(snap.user.is_none());
        assert!(!snap.pending);
        assert!(snap.error.is_none());
    }

    #[tokio::test]
    async fn test_login_persists_both_keys() {
        let (kv, store) = memory_store();

        let outcome = store.login(&Credential::username("user1", "123")).await.unwrap();
        assert!(outcome.is_success());
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().role, AdminRole::Admin);

        let token = kv.get("admin-token").await.unwrap().unwrap();
        assert!(Uuid::parse_str(&token).is_ok());
        let user: AdminUser =
            serde_json::from_str(&kv.get("admin-user").await.unwrap().unwrap()).unwrap();
        assert_eq!(Some(user), store.current_user());
    }

    #[tokio::test]
    async fn test_restore_after_reload() {
        let (kv, store) = memory_store();
        store.login(&Credential::email("admin@bellavista.com", "123")).await.unwrap();
        let before = store.current_user();

        let reloaded = store_on(kv);
        let session = reloaded.restore_session().await;
        assert!(session.is_authenticated());
        assert_eq!(reloaded.current_user(), before);
    }

    #[tokio::test]
    async fn test_rejected_login_writes_nothing() {
        let (kv, store) = memory_store();

        let outcome = store.login(&Credential::username("user1", "wrong")).await.unwrap();
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert!(!store.is_authenticated());
        assert!(kv.is_empty());
        assert_eq!(store.snapshot().error.as_deref(), Some(INVALID_CREDENTIALS));

        // The next attempt clears the error.
        store.login(&Credential::username("user1", "123")).await.unwrap();
        assert!(store.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn test_restore_malformed_user_wipes_keys() {
        let (kv, store) = memory_store();
        kv.set_all(&[("admin-token", "tok"), ("admin-user", "{not json")])
            .await
            .unwrap();

        assert_eq!(store.restore_session().await, Session::Anonymous);
        assert!(kv.is_empty());
    }

    #[tokio::test]
    async fn test_restore_lone_key_wipes() {
        let (kv, store) = memory_store();
        kv.set("admin-user", USER_JSON).await.unwrap();
        assert_eq!(store.restore_session().await, Session::Anonymous);
        assert!(kv.is_empty());

        kv.set("admin-token", "tok").await.unwrap();
        assert_eq!(store.restore_session().await, Session::Anonymous);
        assert!(kv.is_empty());

        kv.set_all(&[("admin-token", "  "), ("admin-user", USER_JSON)])
            .await
            .unwrap();
        assert_eq!(store.restore_session().await, Session::Anonymous);
        assert!(kv.is_empty());
    }

    #[tokio::test]
    async fn test_restore_with_unreadable_storage() {
        let (kv, store) = memory_store();
        kv.set_all(&[("admin-token", "tok"), ("admin-user", USER_JSON)])
            .await
            .unwrap();

        kv.set_failing(true);
        assert_eq!(store.restore_session().await, Session::Anonymous);

        // Entries were not destroyed by a read failure.
        kv.set_failing(false);
        assert_eq!(kv.len(), 2);
        assert!(store.restore_session().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_always_anonymous() {
        let (kv, store) = memory_store();

        store.logout().await;
        assert!(!store.is_authenticated());

        store.login(&Credential::username("user1", "123")).await.unwrap();
        store.logout().await;
        assert!(!store.is_authenticated());
        assert!(kv.is_empty());

        store.login(&Credential::username("user1", "123")).await.unwrap();
        kv.set_failing(true);
        store.logout().await;
        assert!(!store.is_authenticated());
        assert!(!store.snapshot().pending);
    }

    #[tokio::test]
    async fn test_login_storage_failure() {
        let (kv, store) = memory_store();
        kv.set_failing(true);

        let result = store.login(&Credential::username("user1", "123")).await;
        assert!(matches!(result, Err(SessionError::Storage(_))));
        assert!(!store.is_authenticated());
        assert!(store.snapshot().error.is_some());
        assert!(!store.snapshot().pending);
    }

    #[tokio::test]
    async fn test_custom_keys() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let keys = StorageKeys {
            token_key: "isAdminLoggedIn".to_string(),
            user_key: "adminProfile".to_string(),
        };
        let store = SessionStore::new(
            kv.clone(),
            Arc::new(StaticCredentialVerifier::default()),
            keys,
        );

        store.login(&Credential::username("user1", "123")).await.unwrap();
        assert!(kv.get("isAdminLoggedIn").await.unwrap().is_some());
        assert!(kv.get("admin-token").await.unwrap().is_none());
    }

    /// Holds every verification until released.
    struct GatedVerifier {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl CredentialVerifier for GatedVerifier {
        async fn verify(&self, credential: &Credential) -> Option<AdminUser> {
            self.entered.notify_one();
            self.release.notified().await;
            StaticCredentialVerifier::default().verify(credential).await
        }
    }

    #[tokio::test]
    async fn test_pending_while_verifying() {
        let verifier = Arc::new(GatedVerifier {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let store = Arc::new(SessionStore::new(
            Arc::new(MemoryKeyValueStore::new()),
            verifier.clone(),
            StorageKeys::default(),
        ));

        let task = {
            let store = store.clone();
            tokio::spawn(async move { store.login(&Credential::username("user1", "123")).await })
        };

        verifier.entered.notified().await;
        assert!(store.snapshot().pending);
        assert!(!store.snapshot().authenticated);

        verifier.release.notify_one();
        let outcome = task.await.unwrap().unwrap();
        assert!(outcome.is_success());
        assert!(!store.snapshot().pending);
    }

    #[tokio::test]
    async fn test_sqlite_reload() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let store = store_on(Arc::new(db.kv()));
        store.login(&Credential::username("user1", "123")).await.unwrap();

        let reloaded = store_on(Arc::new(db.clone().kv()));
        assert!(reloaded.restore_session().await.is_authenticated());

        reloaded.logout().await;
        let again = store_on(Arc::new(db.kv()));
        assert_eq!(again.restore_session().await, Session::Anonymous);
    }
}
