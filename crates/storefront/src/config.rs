//! Store configuration.
//!
//! Identity the render boundary displays in the header and footer. The
//! state machine itself never reads the environment; [`StoreConfig::from_env`]
//! exists for embedders that configure the shop per deployment.
//!
//! # Environment Variables (all optional)
//!
//! - `STORE_NAME` - Display name of the shop
//! - `STORE_CURRENCY` - ISO 4217 code for price display (RUB, USD, EUR)
//! - `STORE_CONTACT_EMAIL` - Contact address shown in the footer
//! - `STORE_CONTACT_PHONE` - Contact phone shown in the footer

use thiserror::Error;

use loomworks_core::{CurrencyCode, Email};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to a value that fails validation.
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Store identity and display configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Display name of the shop.
    pub store_name: String,
    /// Currency used for all price formatting.
    pub currency: CurrencyCode,
    /// Footer contact address.
    pub contact_email: Option<Email>,
    /// Footer contact phone.
    pub contact_phone: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Loomworks".to_owned(),
            currency: CurrencyCode::RUB,
            contact_email: None,
            contact_phone: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a set variable fails
    /// validation (unknown currency code, malformed email).
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("STORE_NAME") {
            let name = name.trim();
            if !name.is_empty() {
                config.store_name = name.to_owned();
            }
        }

        if let Ok(currency) = std::env::var("STORE_CURRENCY") {
            config.currency = currency
                .parse()
                .map_err(|e: loomworks_core::UnknownCurrency| {
                    ConfigError::InvalidEnvVar("STORE_CURRENCY", e.to_string())
                })?;
        }

        if let Ok(email) = std::env::var("STORE_CONTACT_EMAIL") {
            let email = Email::parse(&email)
                .map_err(|e| ConfigError::InvalidEnvVar("STORE_CONTACT_EMAIL", e.to_string()))?;
            config.contact_email = Some(email);
        }

        if let Ok(phone) = std::env::var("STORE_CONTACT_PHONE") {
            config.contact_phone = Some(phone);
        }

        Ok(config)
    }
}
