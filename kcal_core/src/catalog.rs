//! Built-in exercise reference table.
//!
//! Rates are measured kcal/minute for the two reference individuals. The
//! values are calibration data read off published charts; keep them verbatim.

use crate::config::CustomExercise;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Reference weight assumed when an entry does not state one
pub const DEFAULT_REFERENCE_WEIGHT_KG: f64 = 80.0;

/// Cached default table - built once and shared for the life of the process
static DEFAULT_TABLE: Lazy<ExerciseTable> = Lazy::new(build_default_table);

/// Get a reference to the cached default table
pub fn get_default_table() -> &'static ExerciseTable {
    &DEFAULT_TABLE
}

/// (id, name, jeremy, kevin)
const BUILT_IN: [(&str, &str, f64, f64); 10] = [
    // Top 10 charts
    ("sprints", "Sprints", 15.14, 16.28),
    ("devils_press", "Devil's Press", 14.47, 15.35),
    ("boxing", "Boxing", 13.53, 16.61),
    ("burpees", "Burpees", 12.56, 12.59),
    ("assault_bike", "Assault Bike", 12.18, 13.56),
    ("squat_jumps", "Squat Jumps", 12.12, 8.33),
    ("jump_ins", "Jump Ins", 11.77, 12.4),
    // Low intensity; jeremy at 3.5 mph / 6%, kevin at 3 mph / 2%
    ("incline_walking", "Incline Walking", 7.44, 6.13),
    ("elliptical", "Elliptical", 6.77, 8.96),
    ("stairmaster", "Stairmaster", 7.91, 9.55),
];

/// Builds a fresh copy of the built-in table
///
/// **Note**: prefer `get_default_table()` unless the table is going to be
/// extended with custom entries.
pub fn build_default_table() -> ExerciseTable {
    let entries = BUILT_IN
        .iter()
        .map(|&(id, name, jeremy, kevin)| {
            let entry = ExerciseReference {
                id: id.into(),
                name: name.into(),
                rate_per_minute: HashMap::from([
                    (Individual::Jeremy, jeremy),
                    (Individual::Kevin, kevin),
                ]),
                reference_weight_kg: DEFAULT_REFERENCE_WEIGHT_KG,
            };
            (id.to_string(), entry)
        })
        .collect();

    ExerciseTable { entries }
}

impl ExerciseTable {
    pub fn get(&self, id: &str) -> Option<&ExerciseReference> {
        self.entries.get(id)
    }

    /// Exercise ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return a copy of this table with config-defined exercises added.
    ///
    /// A custom entry with an existing id replaces the built-in one.
    pub fn with_custom(&self, custom: &[CustomExercise]) -> ExerciseTable {
        let mut table = self.clone();
        for exercise in custom {
            let entry = exercise.to_reference();
            if table.entries.insert(entry.id.clone(), entry).is_some() {
                tracing::info!("Custom exercise '{}' overrides built-in entry", exercise.id);
            } else {
                tracing::debug!("Added custom exercise '{}'", exercise.id);
            }
        }
        table
    }

    /// Validate the table for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, entry) in &self.entries {
            if id.is_empty() || entry.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if id != &entry.id {
                errors.push(format!(
                    "Exercise key '{}' doesn't match entry.id '{}'",
                    id, entry.id
                ));
            }
            if id == TREADMILL_ID {
                errors.push(format!(
                    "Exercise id '{}' is reserved for the treadmill model",
                    TREADMILL_ID
                ));
            }
            if entry.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", id));
            }
            if !(entry.reference_weight_kg.is_finite() && entry.reference_weight_kg > 0.0) {
                errors.push(format!(
                    "Exercise '{}': reference weight {} must be positive",
                    id, entry.reference_weight_kg
                ));
            }
            if entry.rate_for(Individual::ANCHOR).is_none() {
                errors.push(format!(
                    "Exercise '{}' has no rate for {}, custom profile will read 0",
                    id,
                    Individual::ANCHOR.as_str()
                ));
            }
            for (individual, rate) in &entry.rate_per_minute {
                if !(rate.is_finite() && *rate > 0.0) {
                    errors.push(format!(
                        "Exercise '{}': rate {} for {} must be positive",
                        id,
                        rate,
                        individual.as_str()
                    ));
                }
            }
        }

        errors
    }
}
