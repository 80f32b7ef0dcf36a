//! Beach and aggregated forecast types.

use serde::{Deserialize, Serialize};
use surfcast_stormglass::ForecastPoint;

/// Coarse compass quadrant a bearing falls into. This is a bucket, not a
/// precise heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoPosition {
    N,
    E,
    S,
    W,
}

impl GeoPosition {
    /// Bucket a bearing in degrees.
    ///
    /// Exhaustive over [0, 360); anything outside that domain falls back
    /// to E, which no in-domain input can reach.
    pub fn from_degrees(degrees: f64) -> Self {
        if (310.0..360.0).contains(&degrees) || (0.0..50.0).contains(&degrees) {
            Self::N
        } else if (50.0..120.0).contains(&degrees) {
            Self::E
        } else if (120.0..220.0).contains(&degrees) {
            Self::S
        } else if (220.0..310.0).contains(&degrees) {
            Self::W
        } else {
            Self::E
        }
    }

    /// The diametrically opposite quadrant.
    pub fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::S => Self::N,
            Self::E => Self::W,
            Self::W => Self::E,
        }
    }
}

/// A beach as supplied by the caller. Ownership and persistence live
/// outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beach {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    /// The direction the beach faces, toward the sea.
    pub position: GeoPosition,
}

/// One forecast point enriched with beach identity and its computed
/// rating. Built per request and discarded with the response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachForecast {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub position: GeoPosition,
    pub rating: u8,
    #[serde(flatten)]
    pub point: ForecastPoint,
}

/// All beaches' rated points sharing one timestamp, sorted descending by
/// rating.
#[derive(Debug, Clone, Serialize)]
pub struct TimeForecast {
    pub time: String,
    pub forecast: Vec<BeachForecast>,
}
