//! Error types for courier-quote

use thiserror::Error;

use crate::ParcelType;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Shipping rates don't contain rate for parcel type {0}")]
    MissingRate(ParcelType),

    #[error("Rate table error: {0}")]
    RateTable(String),

    #[error("Order file error: {0}")]
    OrderFile(String),
}

pub type Result<T> = std::result::Result<T, Error>;
