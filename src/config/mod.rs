//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `PAYMENTS_GATEWAY` prefix and nested sections use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use payments_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod events;
mod payment;
mod server;

pub use error::{ConfigError, ValidationError};
pub use events::EventBusConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment processor configuration (credentials, redirect URLs)
    pub payment: PaymentConfig,

    /// Message bus configuration (pub/sub endpoint, ack policy)
    pub events: EventBusConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads environment variables with the `PAYMENTS_GATEWAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYMENTS_GATEWAY__SERVER__PORT=3003` -> `server.port = 3003`
    /// - `PAYMENTS_GATEWAY__PAYMENT__SECRET_KEY=sk_test_...`
    /// - `PAYMENTS_GATEWAY__EVENTS__URL=redis://...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYMENTS_GATEWAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        self.events.validate()?;
        Ok(())
    }
}
