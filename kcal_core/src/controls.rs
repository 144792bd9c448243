//! Control state and recalculation for a presentation layer.
//!
//! [`ControlState`] holds the six inputs as text, the way form controls do.
//! On every input change the presentation calls [`ControlState::recalculate`],
//! which rebuilds a [`RateRequest`], resolves the rate, projects it and returns
//! everything needed to redraw the readout and the chart.

use crate::input::{parse_duration, parse_number};
use crate::projection::project;
use crate::resolver::resolve_rate;
use crate::{ExerciseTable, Profile, ProjectionSeries, RateRequest, TREADMILL_ID};
use serde::{Deserialize, Deserializer, Serialize};

pub const CHART_DATASET_LABEL: &str = "Total kcal burned";
pub const CHART_X_TITLE: &str = "Time (minutes)";
pub const CHART_Y_TITLE: &str = "Calories burned";

/// Raw values of the input controls
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlState {
    pub profile: String,
    pub exercise: String,
    #[serde(deserialize_with = "text_or_number")]
    pub weight: String,
    #[serde(deserialize_with = "text_or_number")]
    pub duration: String,
    #[serde(deserialize_with = "text_or_number")]
    pub speed: String,
    #[serde(deserialize_with = "text_or_number")]
    pub incline: String,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            profile: "custom".into(),
            exercise: TREADMILL_ID.into(),
            weight: "75".into(),
            duration: "30".into(),
            speed: "8.0".into(),
            incline: "0".into(),
        }
    }
}

/// Everything a presentation layer renders after a recalculation
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Readout {
    pub rate_per_minute: f64,
    pub total_kcal: f64,
    pub series: ProjectionSeries,
    pub rate_label: String,
    pub total_label: String,
    pub duration_label: String,
    pub speed_label: String,
    pub incline_label: String,
    pub treadmill_controls_visible: bool,
}

impl ControlState {
    /// Restore every control to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("Controls reset to defaults");
    }

    pub fn treadmill_controls_visible(&self) -> bool {
        self.exercise.trim() == TREADMILL_ID
    }

    /// Build a request from the current control values
    pub fn rate_request(&self) -> RateRequest {
        RateRequest {
            profile: Profile::from_control(&self.profile),
            exercise_id: self.exercise.trim().to_string(),
            weight_kg: parse_number(&self.weight),
            speed_kmh: parse_number(&self.speed),
            incline_percent: parse_number(&self.incline),
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        parse_duration(&self.duration)
    }

    /// Recompute the readout from scratch
    pub fn recalculate(&self, table: &ExerciseTable) -> Readout {
        let request = self.rate_request();
        let rate = resolve_rate(table, &request);
        let series = project(rate, self.duration_minutes());

        Readout {
            rate_per_minute: rate,
            total_kcal: series.total_kcal,
            rate_label: format!("{:.2} kcal", rate),
            total_label: format!("{:.0} kcal", series.total_kcal),
            duration_label: format!("{} min", series.duration_minutes),
            speed_label: format!("{} km/h", self.speed.trim()),
            incline_label: format!("{}%", self.incline.trim()),
            treadmill_controls_visible: self.treadmill_controls_visible(),
            series,
        }
    }
}

/// Accept `weight = 80` as well as `weight = "80"` in config files
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(i) => i.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}
