//! Configuration management

use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE, DEFAULT_THROTTLE_PER_MINUTE,
    MAX_PAGE_SIZE,
};
use crate::error::AppError;
use crate::types::ValidationStrategy;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub listing: ListingSettings,
    pub validation: ValidationSettings,
    pub throttle: ThrottleSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: DatabaseBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ListingSettings {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PAGE_SIZE,
            max_per_page: MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ValidationSettings {
    pub strategy: ValidationStrategy,
    pub min_price: Decimal,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            strategy: ValidationStrategy::CollectAll,
            min_price: DEFAULT_MIN_PRICE.parse().unwrap_or(Decimal::TWO),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ThrottleSettings {
    pub requests_per_minute: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8000)?
            .set_default("app.name", "menu-server")?
            .set_default("database.backend", "postgres")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.run_migrations", true)?
            .set_default("jwt.access_token_expiry", DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("listing.default_per_page", i64::from(DEFAULT_PAGE_SIZE))?
            .set_default("listing.max_per_page", i64::from(MAX_PAGE_SIZE))?
            .set_default("validation.strategy", "collect_all")?
            .set_default("validation.min_price", DEFAULT_MIN_PRICE)?
            .set_default("throttle.requests_per_minute", i64::from(DEFAULT_THROTTLE_PER_MINUTE))?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the listing pipeline and validator cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.listing.default_per_page == 0 {
            return Err(AppError::InvalidSetting {
                key: "listing.default_per_page",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.listing.max_per_page < self.listing.default_per_page {
            return Err(AppError::InvalidSetting {
                key: "listing.max_per_page",
                reason: format!(
                    "must not be below listing.default_per_page ({})",
                    self.listing.default_per_page
                ),
            });
        }
        if self.validation.min_price.is_sign_negative() {
            return Err(AppError::InvalidSetting {
                key: "validation.min_price",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
