//! # Configuration State
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BELLA_RESTAURANT_NAME, BELLA_DB_PATH,                              │
//! │     BELLA_ADMIN_USERNAME / _EMAIL / _PASSWORD,                         │
//! │     BELLA_TOKEN_KEY, BELLA_USER_KEY                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $BELLA_CONFIG, or bella.toml in the platform config dir            │
//! │     ~/.config/bella-vista/bella.toml (Linux)                           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # bella.toml
//! restaurant_name = "Bella Vista"
//! database_path = "/var/lib/bella/bella.db"
//!
//! [admin]
//! username = "user1"
//! email = "admin@bellavista.com"
//! password = "123"
//! name = "Admin User"
//!
//! [storage]
//! token_key = "admin-token"
//! user_key = "admin-user"
//! ```
//!
//! ## Thread Safety
//! Read-only after startup, so no lock.

use std::path::{Path, PathBuf};

use bella_core::validation::validate_email;
use bella_core::{AdminRole, AdminUser};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::auth::StaticCredentialVerifier;
use crate::state::session::StorageKeys;

/// Errors reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// The single admin account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminAccount {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: AdminRole,
}

impl Default for AdminAccount {
    fn default() -> Self {
        AdminAccount {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            username: "user1".to_string(),
            email: "admin@bellavista.com".to_string(),
            password: "123".to_string(),
            role: AdminRole::Admin,
        }
    }
}

impl AdminAccount {
    pub fn verifier(&self) -> StaticCredentialVerifier {
        StaticCredentialVerifier::new(
            self.username.clone(),
            self.email.clone(),
            self.password.clone(),
            AdminUser {
                id: self.id.clone(),
                name: self.name.clone(),
                email: self.email.clone(),
                role: self.role,
            },
        )
    }
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in the header and in order confirmations.
    pub restaurant_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// SQLite file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    pub admin: AdminAccount,

    pub storage: StorageKeys,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            restaurant_name: "Bella Vista".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            database_path: None,
            admin: AdminAccount::default(),
            storage: StorageKeys::default(),
        }
    }
}

impl ConfigState {
    /// Loads defaults, then the config file, then environment overrides.
    ///
    /// A missing file is fine; an unreadable or invalid one is an error.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = ConfigState::default();

        let path = config_path
            .or_else(|| std::env::var_os("BELLA_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `BELLA_*` overrides. `lookup` is `std::env::var` outside tests.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("BELLA_RESTAURANT_NAME") {
            self.restaurant_name = name;
        }
        if let Some(path) = lookup("BELLA_DB_PATH") {
            self.database_path = Some(PathBuf::from(path));
        }
        if let Some(username) = lookup("BELLA_ADMIN_USERNAME") {
            self.admin.username = username;
        }
        if let Some(email) = lookup("BELLA_ADMIN_EMAIL") {
            self.admin.email = email;
        }
        if let Some(password) = lookup("BELLA_ADMIN_PASSWORD") {
            self.admin.password = password;
        }
        if let Some(key) = lookup("BELLA_TOKEN_KEY") {
            self.storage.token_key = key;
        }
        if let Some(key) = lookup("BELLA_USER_KEY") {
            self.storage.user_key = key;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.token_key.is_empty() || self.storage.user_key.is_empty() {
            return Err(ConfigError::Invalid("storage keys must not be empty".to_string()));
        }
        if self.storage.token_key == self.storage.user_key {
            return Err(ConfigError::Invalid(
                "token and user storage keys must differ".to_string(),
            ));
        }
        if self.admin.password.is_empty() {
            return Err(ConfigError::Invalid("admin password must not be empty".to_string()));
        }
        validate_email(&self.admin.email)
            .map_err(|e| ConfigError::Invalid(format!("admin {}", e)))?;
        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "bellavista", "bella-vista")
            .map(|dirs| dirs.config_dir().join("bella.toml"))
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        let sign = if cents < 0 { "-" } else { "" };
        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, whole.abs());
        }
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            whole.abs(),
            frac,
            width = usize::from(self.currency_decimals)
        )
    }
}
