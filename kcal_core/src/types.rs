//! Core domain types for the calorie-burn estimator.
//!
//! This module defines the value types that flow through the calculation:
//! - Profiles and the two reference individuals
//! - Exercise reference entries and the exercise table
//! - Treadmill MET samples
//! - Rate requests and projection output

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exercise id that selects the treadmill energy model instead of the table.
pub const TREADMILL_ID: &str = "treadmill";

// ============================================================================
// Profiles
// ============================================================================

/// A reference individual whose measured rates calibrate the table
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Individual {
    Jeremy,
    Kevin,
}

impl Individual {
    /// The individual whose rate the custom profile scales from
    pub const ANCHOR: Individual = Individual::Jeremy;

    pub const ALL: [Individual; 2] = [Individual::Jeremy, Individual::Kevin];

    pub fn as_str(self) -> &'static str {
        match self {
            Individual::Jeremy => "jeremy",
            Individual::Kevin => "kevin",
        }
    }
}

/// Who the estimate is for
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Jeremy,
    Kevin,
    /// Weight-scaled estimate anchored on [`Individual::ANCHOR`]
    #[default]
    Custom,
}

impl Profile {
    /// Interpret a profile control value.
    ///
    /// Only the exact values `jeremy` and `kevin` select an individual; anything
    /// else, including `Jeremy`, is the custom profile.
    pub fn from_control(value: &str) -> Self {
        match value {
            "jeremy" => Profile::Jeremy,
            "kevin" => Profile::Kevin,
            _ => Profile::Custom,
        }
    }

    /// The named individual behind this profile, if any
    pub fn individual(self) -> Option<Individual> {
        match self {
            Profile::Jeremy => Some(Individual::Jeremy),
            Profile::Kevin => Some(Individual::Kevin),
            Profile::Custom => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Jeremy => "jeremy",
            Profile::Kevin => "kevin",
            Profile::Custom => "custom",
        }
    }
}

// ============================================================================
// Reference Data
// ============================================================================

/// Measured kcal/minute for one exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseReference {
    pub id: String,
    pub name: String,
    /// kcal/minute per individual; an individual may be missing
    pub rate_per_minute: HashMap<Individual, f64>,
    /// Body weight the rates were measured at
    pub reference_weight_kg: f64,
}

impl ExerciseReference {
    pub fn rate_for(&self, individual: Individual) -> Option<f64> {
        self.rate_per_minute.get(&individual).copied()
    }
}

/// One treadmill calibration point
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetSample {
    pub speed_kmh: f64,
    pub metabolic_equivalent: f64,
}

/// All non-treadmill exercises, keyed by id
#[derive(Clone, Debug, Default)]
pub struct ExerciseTable {
    pub entries: HashMap<String, ExerciseReference>,
}

// ============================================================================
// Requests and Results
// ============================================================================

/// Inputs for one rate calculation.
///
/// Numeric fields are optional: absent or non-finite values are replaced by
/// defaults when the rate is resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateRequest {
    pub profile: Profile,
    pub exercise_id: String,
    pub weight_kg: Option<f64>,
    pub speed_kmh: Option<f64>,
    pub incline_percent: Option<f64>,
}

impl RateRequest {
    pub fn new(profile: Profile, exercise_id: impl Into<String>) -> Self {
        Self {
            profile,
            exercise_id: exercise_id.into(),
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = Some(speed_kmh);
        self
    }

    pub fn with_incline(mut self, incline_percent: f64) -> Self {
        self.incline_percent = Some(incline_percent);
        self
    }

    pub fn is_treadmill(&self) -> bool {
        self.exercise_id == TREADMILL_ID
    }
}

/// Cumulative kcal after a whole minute
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectionPoint {
    pub minute: u32,
    pub cumulative_kcal: f64,
}

/// Cumulative burn over a session at a constant rate
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectionSeries {
    pub rate_per_minute: f64,
    pub duration_minutes: u32,
    pub total_kcal: f64,
    pub points: Vec<ProjectionPoint>,
}
