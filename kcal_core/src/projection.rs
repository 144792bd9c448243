//! Session projection: cumulative kcal per minute at a constant rate.

use crate::input::{is_valid_duration, DEFAULT_DURATION_MINUTES};
use crate::{ProjectionPoint, ProjectionSeries};

/// Project `rate_per_minute` over `duration_minutes`.
///
/// A duration of zero or above `MAX_DURATION_MINUTES` is treated as unset and
/// uses the 30 minute default.
pub fn project(rate_per_minute: f64, duration_minutes: u32) -> ProjectionSeries {
    let duration_minutes = if is_valid_duration(duration_minutes) {
        duration_minutes
    } else {
        tracing::debug!(
            "Duration {} min out of range, using {} min",
            duration_minutes,
            DEFAULT_DURATION_MINUTES
        );
        DEFAULT_DURATION_MINUTES
    };

    let points = (1..=duration_minutes)
        .map(|minute| ProjectionPoint {
            minute,
            cumulative_kcal: rate_per_minute * f64::from(minute),
        })
        .collect();

    ProjectionSeries {
        rate_per_minute,
        duration_minutes,
        total_kcal: rate_per_minute * f64::from(duration_minutes),
        points,
    }
}

impl ProjectionSeries {
    /// Chart x values
    pub fn minutes(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.minute).collect()
    }

    /// Chart y values
    pub fn cumulative(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.cumulative_kcal).collect()
    }
}
