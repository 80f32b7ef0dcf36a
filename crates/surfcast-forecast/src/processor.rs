//! Aggregates rated forecasts across beaches into time groups.

use tracing::instrument;

use surfcast_stormglass::{ForecastPoint, StormGlassClient, StormGlassError};

use crate::error::ForecastProcessingError;
use crate::rating::Rating;
use crate::types::{Beach, BeachForecast, TimeForecast};

pub struct ForecastProcessor {
    storm_glass: StormGlassClient,
}

impl ForecastProcessor {
    pub fn new(storm_glass: StormGlassClient) -> Self {
        Self { storm_glass }
    }

    /// Rate every beach's hourly points and group them by timestamp.
    ///
    /// Beaches are fetched one at a time, so at most one upstream request
    /// is outstanding. Any failure aborts the whole batch; no partial
    /// result is returned.
    #[instrument(skip_all, level = "info")]
    pub async fn process(
        &self,
        beaches: &[Beach],
    ) -> Result<Vec<TimeForecast>, ForecastProcessingError> {
        match self.rate_beaches(beaches).await {
            Ok(rated) => {
                let mut grouped = group_by_time(rated);
                for group in &mut grouped {
                    // Stable sort: equal ratings keep beach-processing order.
                    group.forecast.sort_by(|a, b| b.rating.cmp(&a.rating));
                }
                Ok(grouped)
            }
            Err(err) => {
                tracing::error!(error = %err, "forecast processing failed");
                Err(ForecastProcessingError::new(err.to_string()))
            }
        }
    }

    async fn rate_beaches(&self, beaches: &[Beach]) -> Result<Vec<BeachForecast>, StormGlassError> {
        tracing::info!(beaches = beaches.len(), "preparing the forecast");

        let mut rated = Vec::new();
        for beach in beaches {
            let points = self.storm_glass.fetch_points(beach.lat, beach.lng).await?;
            rated.extend(enrich(points, beach));
        }
        Ok(rated)
    }
}

fn enrich(points: Vec<ForecastPoint>, beach: &Beach) -> Vec<BeachForecast> {
    let rating = Rating::new(beach.position);
    points
        .into_iter()
        .map(|point| BeachForecast {
            lat: beach.lat,
            lng: beach.lng,
            name: beach.name.clone(),
            position: beach.position,
            rating: rating.rate(&point),
            point,
        })
        .collect()
}

/// Group by exact timestamp string, keeping the first-seen order of
/// distinct timestamps across the merged sequence.
fn group_by_time(points: Vec<BeachForecast>) -> Vec<TimeForecast> {
    let mut grouped: Vec<TimeForecast> = Vec::new();
    for point in points {
        match grouped.iter_mut().find(|g| g.time == point.point.time) {
            Some(group) => group.forecast.push(point),
            None => grouped.push(TimeForecast {
                time: point.point.time.clone(),
                forecast: vec![point],
            }),
        }
    }
    grouped
}
