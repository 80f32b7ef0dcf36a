//! Pure scoring of forecast points against a beach orientation.
//!
//! All functions here are deterministic and side-effect-free; the only
//! state is the beach facing captured by [`Rating`].

use surfcast_stormglass::ForecastPoint;

use crate::types::GeoPosition;

/// Rating context bound to one beach's facing orientation.
#[derive(Debug, Clone, Copy)]
pub struct Rating {
    position: GeoPosition,
}

impl Rating {
    pub fn new(position: GeoPosition) -> Self {
        Self { position }
    }

    /// Final 1-5 rating for a point: the mean of the alignment, size and
    /// period scores, rounded half away from zero.
    pub fn rate(&self, point: &ForecastPoint) -> u8 {
        let swell = GeoPosition::from_degrees(point.swell_direction);
        let wind = GeoPosition::from_degrees(point.wind_direction);

        let alignment = self.wind_and_wave_score(swell, wind);
        let size = swell_size_score(point.swell_height);
        let period = swell_period_score(point.swell_period);

        let mean = f64::from(u16::from(alignment) + u16::from(size) + u16::from(period)) / 3.0;
        // Components are each in 1..=5, so the rounded mean is too.
        mean.round() as u8
    }

    /// 1 when wind blows with the swell, 5 when it blows offshore square
    /// to this beach, 3 otherwise.
    pub fn wind_and_wave_score(&self, swell: GeoPosition, wind: GeoPosition) -> u8 {
        if swell == wind {
            return 1;
        }
        if self.is_offshore(swell, wind) {
            return 5;
        }
        3
    }

    /// Offshore wind: directly opposite the swell, with the beach facing
    /// the swell square-on.
    fn is_offshore(&self, swell: GeoPosition, wind: GeoPosition) -> bool {
        wind == swell.opposite() && self.position == swell
    }
}

/// Score by swell height in meters. The "head-high" band has no upper
/// bound: anything at or above 2.0 scores 5.
pub fn swell_size_score(height: f64) -> u8 {
    if (0.3..1.0).contains(&height) {
        2
    } else if (1.0..2.0).contains(&height) {
        3
    } else if height >= 2.0 {
        5
    } else {
        1
    }
}

/// Score by swell period in seconds.
pub fn swell_period_score(period: f64) -> u8 {
    if (7.0..10.0).contains(&period) {
        2
    } else if (10.0..14.0).contains(&period) {
        4
    } else if period >= 14.0 {
        5
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn point(swell_direction: f64, wind_direction: f64, height: f64, period: f64) -> ForecastPoint {
        ForecastPoint {
            time: "2020-04-26T00:00:00+00:00".to_string(),
            swell_direction,
            swell_height: height,
            swell_period: period,
            wave_direction: swell_direction,
            wave_height: height,
            wind_direction,
            wind_speed: 10.0,
        }
    }

    #[test]
    fn test_wind_with_swell_scores_one() {
        let rating = Rating::new(GeoPosition::E);
        assert_eq!(
            rating.wind_and_wave_score(GeoPosition::E, GeoPosition::E),
            1
        );
    }

    #[test]
    fn test_offshore_wind_scores_five() {
        // Swell square-on to the beach, wind blowing straight offshore.
        let rating = Rating::new(GeoPosition::E);
        assert_eq!(
            rating.wind_and_wave_score(GeoPosition::E, GeoPosition::W),
            5
        );

        let rating = Rating::new(GeoPosition::S);
        assert_eq!(
            rating.wind_and_wave_score(GeoPosition::S, GeoPosition::N),
            5
        );
    }

    #[test]
    fn test_opposite_wind_without_facing_match_scores_three() {
        // Same opposite pair, but the beach faces another way.
        let rating = Rating::new(GeoPosition::N);
        assert_eq!(
            rating.wind_and_wave_score(GeoPosition::E, GeoPosition::W),
            3
        );
    }

    #[test]
    fn test_cross_wind_scores_three() {
        let rating = Rating::new(GeoPosition::E);
        assert_eq!(
            rating.wind_and_wave_score(GeoPosition::E, GeoPosition::S),
            3
        );
    }

    #[test]
    fn test_swell_size_bands() {
        assert_eq!(swell_size_score(0.2), 1);
        assert_eq!(swell_size_score(0.3), 2);
        assert_eq!(swell_size_score(0.9), 2);
        assert_eq!(swell_size_score(1.0), 3);
        assert_eq!(swell_size_score(1.9), 3);
        assert_eq!(swell_size_score(2.0), 5);
        assert_eq!(swell_size_score(6.5), 5);
    }

    #[test]
    fn test_swell_period_bands() {
        assert_eq!(swell_period_score(5.0), 1);
        assert_eq!(swell_period_score(7.0), 2);
        assert_eq!(swell_period_score(9.9), 2);
        assert_eq!(swell_period_score(10.0), 4);
        assert_eq!(swell_period_score(13.9), 4);
        assert_eq!(swell_period_score(14.0), 5);
        assert_eq!(swell_period_score(25.0), 5);
    }

    #[test]
    fn test_rate_east_beach_offshore_scenario() {
        // Swell 100° (E), wind 280° (W), 1.5 m, 12 s:
        // alignment 5, size 3, period 4 -> mean 4.0 -> 4.
        let rating = Rating::new(GeoPosition::E);
        assert_eq!(rating.rate(&point(100.0, 280.0, 1.5, 12.0)), 4);
    }

    #[test]
    fn test_rate_poor_conditions() {
        // Wind with the swell, tiny and short: (1+1+1)/3 -> 1.
        let rating = Rating::new(GeoPosition::E);
        assert_eq!(rating.rate(&point(100.0, 100.0, 0.1, 5.0)), 1);
    }

    #[test]
    fn test_rate_epic_conditions() {
        // Offshore, overhead, long period: (5+5+5)/3 -> 5.
        let rating = Rating::new(GeoPosition::E);
        assert_eq!(rating.rate(&point(100.0, 280.0, 2.5, 16.0)), 5);
    }

    #[test]
    fn test_rate_rounds_mean() {
        // (3+2+4)/3 = 3.0 -> 3.
        let rating = Rating::new(GeoPosition::N);
        assert_eq!(rating.rate(&point(100.0, 280.0, 0.5, 12.0)), 3);

        // (1+2+2)/3 = 1.67 -> 2.
        let rating = Rating::new(GeoPosition::E);
        assert_eq!(rating.rate(&point(100.0, 100.0, 0.5, 8.0)), 2);

        // (3+3+1)/3 = 2.33 -> 2.
        let rating = Rating::new(GeoPosition::N);
        assert_eq!(rating.rate(&point(100.0, 200.0, 1.5, 5.0)), 2);
    }

    #[test]
    fn test_rate_is_deterministic() {
        let rating = Rating::new(GeoPosition::W);
        let p = point(250.0, 70.0, 1.2, 11.0);
        let first = rating.rate(&p);
        for _ in 0..10 {
            assert_eq!(rating.rate(&p), first);
        }
    }
}
