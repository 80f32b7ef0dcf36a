//! Surf-condition rating and aggregation for Surfcast.
//!
//! Scores each beach's hourly forecast points against the beach's facing
//! orientation and merges the results into time-grouped, rating-sorted
//! output.

pub mod error;
pub mod processor;
pub mod rating;
pub mod types;

pub use error::ForecastProcessingError;
pub use processor::ForecastProcessor;
pub use rating::Rating;
pub use types::{Beach, BeachForecast, GeoPosition, TimeForecast};
