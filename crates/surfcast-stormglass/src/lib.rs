//! StormGlass marine-weather client for Surfcast.
//!
//! Fetches hourly point forecasts from the StormGlass API, normalizes them
//! to a single source model, and caches them per coordinate pair.

pub mod cache;
pub mod client;
pub mod error;
pub mod types;

pub use cache::TtlCache;
pub use client::{StormGlassClient, StormGlassConfig};
pub use error::StormGlassError;
pub use types::{ForecastPoint, StormGlassForecastResponse, StormGlassPoint};
