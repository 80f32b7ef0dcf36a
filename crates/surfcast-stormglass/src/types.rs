//! StormGlass API types and response normalization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The seven measurements requested from the provider, in the order they
/// appear in the `params` query string.
pub const API_PARAMS: [&str; 7] = [
    "swellDirection",
    "swellHeight",
    "swellPeriod",
    "waveDirection",
    "waveHeight",
    "windDirection",
    "windSpeed",
];

/// One raw hourly record. Each measurement maps source-model name
/// (e.g. "noaa") to a value; fields may be missing entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StormGlassPoint {
    pub time: Option<String>,
    pub swell_direction: HashMap<String, f64>,
    pub swell_height: HashMap<String, f64>,
    pub swell_period: HashMap<String, f64>,
    pub wave_direction: HashMap<String, f64>,
    pub wave_height: HashMap<String, f64>,
    pub wind_direction: HashMap<String, f64>,
    pub wind_speed: HashMap<String, f64>,
}

impl StormGlassPoint {
    /// Project this record to a flat point using only `source` values.
    ///
    /// Returns `None` when the record has no timestamp or any measurement
    /// is missing for that source. A zero reading also drops the whole
    /// record; this mirrors the upstream service's observed filtering and
    /// is kept as-is even though it excludes legitimate zero values.
    pub fn flatten(self, source: &str) -> Option<ForecastPoint> {
        let value = |field: &HashMap<String, f64>| {
            field.get(source).copied().filter(|v| *v != 0.0)
        };

        Some(ForecastPoint {
            time: self.time?,
            swell_direction: value(&self.swell_direction)?,
            swell_height: value(&self.swell_height)?,
            swell_period: value(&self.swell_period)?,
            wave_direction: value(&self.wave_direction)?,
            wave_height: value(&self.wave_height)?,
            wind_direction: value(&self.wind_direction)?,
            wind_speed: value(&self.wind_speed)?,
        })
    }
}

/// Raw point-forecast response body: `{ "hours": [ ... ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StormGlassForecastResponse {
    pub hours: Vec<StormGlassPoint>,
}

impl StormGlassForecastResponse {
    /// Drop invalid records and flatten the rest to the configured source,
    /// preserving the provider's chronological order.
    pub fn normalize(self, source: &str) -> Vec<ForecastPoint> {
        self.hours
            .into_iter()
            .filter_map(|point| point.flatten(source))
            .collect()
    }
}

/// A normalized hourly forecast point. Immutable once produced; the
/// timestamp is an opaque ISO-8601 string used only as a grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub time: String,
    pub swell_direction: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub wave_direction: f64,
    pub wave_height: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn raw_point(time: Option<&str>, source: &str, fill: f64) -> StormGlassPoint {
        let field = |v: f64| HashMap::from([(source.to_string(), v)]);
        StormGlassPoint {
            time: time.map(String::from),
            swell_direction: field(fill),
            swell_height: field(fill),
            swell_period: field(fill),
            wave_direction: field(fill),
            wave_height: field(fill),
            wind_direction: field(fill),
            wind_speed: field(fill),
        }
    }

    #[test]
    fn test_flatten_complete_record() {
        let point = raw_point(Some("2020-04-26T00:00:00+00:00"), "noaa", 1.5);
        let flat = point.flatten("noaa").unwrap();

        assert_eq!(flat.time, "2020-04-26T00:00:00+00:00");
        assert_eq!(flat.swell_height, 1.5);
        assert_eq!(flat.wind_speed, 1.5);
    }

    #[test]
    fn test_flatten_rejects_missing_time() {
        let point = raw_point(None, "noaa", 1.5);
        assert!(point.flatten("noaa").is_none());
    }

    #[test]
    fn test_flatten_rejects_missing_measurement() {
        let mut point = raw_point(Some("2020-04-26T00:00:00+00:00"), "noaa", 1.5);
        point.swell_height.clear();
        assert!(point.flatten("noaa").is_none());
    }

    #[test]
    fn test_flatten_rejects_zero_value() {
        // Observed upstream behavior: a zero reading drops the record.
        let mut point = raw_point(Some("2020-04-26T00:00:00+00:00"), "noaa", 1.5);
        point
            .wind_speed
            .insert("noaa".to_string(), 0.0);
        assert!(point.flatten("noaa").is_none());
    }

    #[test]
    fn test_flatten_rejects_other_source_only() {
        let point = raw_point(Some("2020-04-26T00:00:00+00:00"), "sg", 1.5);
        assert!(point.flatten("noaa").is_none());
    }

    #[test]
    fn test_normalize_preserves_order_and_skips_invalid() {
        let response = StormGlassForecastResponse {
            hours: vec![
                raw_point(Some("2020-04-26T00:00:00+00:00"), "noaa", 1.0),
                raw_point(None, "noaa", 1.0),
                raw_point(Some("2020-04-26T01:00:00+00:00"), "noaa", 2.0),
            ],
        };

        let points = response.normalize("noaa");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time, "2020-04-26T00:00:00+00:00");
        assert_eq!(points[1].time, "2020-04-26T01:00:00+00:00");
    }

    #[test]
    fn test_forecast_point_serializes_camel_case() {
        let point = ForecastPoint {
            time: "2020-04-26T00:00:00+00:00".to_string(),
            swell_direction: 64.26,
            swell_height: 0.15,
            swell_period: 3.89,
            wave_direction: 231.38,
            wave_height: 0.47,
            wind_direction: 299.45,
            wind_speed: 100.0,
        };

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["swellDirection"], 64.26);
        assert_eq!(json["windSpeed"], 100.0);
        assert!(json.get("swell_direction").is_none());
    }
}
