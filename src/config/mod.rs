use ::config::Environment;
use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::error::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "cinema_manager=warn";
pub const DEFAULT_FULL_PRICE: u32 = 10;
pub const DEFAULT_DISCOUNT_PRICE: u32 = 8;
pub const DEFAULT_SMALL_ROOM_MAX_SEATS: u64 = 60;

// Top-level configuration, one section per concern
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    pub app: AppConfig,
    #[validate(nested)]
    pub pricing: PricingConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

// Ticket pricing rules
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PricingConfig {
    /// Price of every seat in a small room and of the front half of a large one.
    #[validate(range(min = 1))]
    pub full_price: u32,
    /// Price of the back half of a large room.
    #[validate(range(min = 1))]
    pub discount_price: u32,
    /// Rooms with at most this many seats are priced flat.
    pub small_room_max_seats: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                rust_log: DEFAULT_LOG_FILTER.to_string(),
                log_format: LogFormat::Text,
            },
            pricing: PricingConfig::default(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            full_price: DEFAULT_FULL_PRICE,
            discount_price: DEFAULT_DISCOUNT_PRICE,
            small_room_max_seats: DEFAULT_SMALL_ROOM_MAX_SEATS,
        }
    }
}

impl Config {
    /// Loads defaults, then `CINEMA_*` environment variables.
    ///
    /// A plain `RUST_LOG` wins over `CINEMA_APP__RUST_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_environment(Self::environment())?;
        if let Ok(filter) = env::var("RUST_LOG") {
            config.app.rust_log = filter;
        }
        Ok(config)
    }

    fn environment() -> Environment {
        Environment::with_prefix("CINEMA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let config: Config = ::config::Config::builder()
            .set_default("app.rust_log", DEFAULT_LOG_FILTER)?
            .set_default("app.log_format", "text")?
            .set_default("pricing.full_price", i64::from(DEFAULT_FULL_PRICE))?
            .set_default("pricing.discount_price", i64::from(DEFAULT_DISCOUNT_PRICE))?
            .set_default("pricing.small_room_max_seats", DEFAULT_SMALL_ROOM_MAX_SEATS as i64)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
