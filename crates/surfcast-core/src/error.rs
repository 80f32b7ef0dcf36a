//! Centralized error types for Surfcast.
//!
//! The crate-level errors carry full diagnostic detail for operators;
//! `user_message()` is what an outer transport layer should expose to
//! callers.

use thiserror::Error;

use surfcast_forecast::ForecastProcessingError;
use surfcast_stormglass::StormGlassError;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("StormGlass client error: {0}")]
    StormGlass(#[from] StormGlassError),

    #[error("Forecast processing error: {0}")]
    Forecast(#[from] ForecastProcessingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a generic message suitable for external callers.
    ///
    /// Processing failures deliberately expose nothing about the cause;
    /// the full detail is logged where the error originates.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::StormGlass(e) => match e {
                StormGlassError::Request(_) => {
                    "Unable to reach the forecast service. Check your connection."
                }
                StormGlassError::Response { .. } => {
                    "The forecast service rejected the request. Try again later."
                }
            },
            AppError::Forecast(_) => "Something went wrong",
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::MissingSetting(_) => "A required setting is missing. Check your settings.",
        }
    }
}
