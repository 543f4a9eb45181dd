//! # Config Commands
//!
//! Commands for retrieving application configuration.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::state::ConfigState;

/// The display settings the presentation layer needs.
///
/// Admin credentials, storage keys and the database path stay on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub restaurant_name: String,
    pub currency_symbol: String,
    pub currency_decimals: u8,
}

impl From<&ConfigState> for ConfigResponse {
    fn from(config: &ConfigState) -> Self {
        ConfigResponse {
            restaurant_name: config.restaurant_name.clone(),
            currency_symbol: config.currency_symbol.clone(),
            currency_decimals: config.currency_decimals,
        }
    }
}

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (header, page titles)
/// - Currency formatting in the cart and order board
pub fn get_config(config: &ConfigState) -> ConfigResponse {
    debug!("get_config command");
    ConfigResponse::from(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_secrets() {
        let mut config = ConfigState::default();
        config.admin.password = "hunter2".to_string();

        let json = serde_json::to_string(&get_config(&config)).unwrap();
        assert!(json.contains("\"restaurantName\":\"Bella Vista\""));
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("admin-token"));
    }
}
