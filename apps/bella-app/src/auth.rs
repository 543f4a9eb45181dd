//! # Credential Verification
//!
//! Decides whether a login form submission names the admin account.
//!
//! There is no user database: one account is configured at startup. The
//! trait exists so the session store never hard-codes that fact.
//!
//! ```text
//! Credential { username | email, password }
//!        │
//!        ▼
//! CredentialVerifier::verify() ──► Some(AdminUser)  → session authenticated
//!                              └─► None             → "Invalid credentials"
//! ```

use async_trait::async_trait;
use bella_core::{AdminRole, AdminUser, Credential};

/// Checks a credential and returns the identity it proves, if any.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credential: &Credential) -> Option<AdminUser>;
}

/// A verifier that knows exactly one account.
///
/// The account is reachable by username or by email; the password is the
/// same either way.
#[derive(Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    email: String,
    password: String,
    user: AdminUser,
}

impl StaticCredentialVerifier {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        user: AdminUser,
    ) -> Self {
        StaticCredentialVerifier {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            user,
        }
    }

    /// The identity handed out on a successful login.
    pub fn user(&self) -> &AdminUser {
        &self.user
    }

    fn identifier_matches(&self, credential: &Credential) -> bool {
        match credential {
            Credential::UsernamePassword { username, .. } => username.trim() == self.username,
            Credential::EmailPassword { email, .. } => {
                email.trim().eq_ignore_ascii_case(&self.email)
            }
        }
    }
}

impl Default for StaticCredentialVerifier {
    /// `user1` / `admin@bellavista.com`, password `123`.
    fn default() -> Self {
        StaticCredentialVerifier::new(
            "user1",
            "admin@bellavista.com",
            "123",
            AdminUser {
                id: "1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@bellavista.com".to_string(),
                role: AdminRole::Admin,
            },
        )
    }
}

impl std::fmt::Debug for StaticCredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialVerifier")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, credential: &Credential) -> Option<AdminUser> {
        if self.identifier_matches(credential) && credential.password() == self.password {
            Some(self.user.clone())
        } else {
            None
        }
    }
}
