//! Calorie rate resolver.
//!
//! Maps a [`RateRequest`] to kcal/minute:
//! 1. **Treadmill**: MET-based energy model on weight, speed and incline
//! 2. **Named individual**: that individual's measured rate from the table
//! 3. **Custom**: the anchor individual's rate scaled by body weight
//!
//! Nothing here fails. Unknown exercises and missing rates resolve to 0.

use crate::catalog::{get_default_table, DEFAULT_REFERENCE_WEIGHT_KG};
use crate::input::{
    nonzero_finite_or, DEFAULT_INCLINE_PERCENT, DEFAULT_SPEED_KMH, DEFAULT_WEIGHT_KG,
};
use crate::treadmill::treadmill_rate;
use crate::{ExerciseTable, Individual, RateRequest};

/// Resolve kcal/minute for a request against `table`
pub fn resolve_rate(table: &ExerciseTable, request: &RateRequest) -> f64 {
    let weight_kg = nonzero_finite_or(request.weight_kg, DEFAULT_WEIGHT_KG);
    let speed_kmh = nonzero_finite_or(request.speed_kmh, DEFAULT_SPEED_KMH);
    let incline_percent = nonzero_finite_or(request.incline_percent, DEFAULT_INCLINE_PERCENT);

    if request.is_treadmill() {
        let rate = treadmill_rate(weight_kg, speed_kmh, incline_percent);
        tracing::debug!(
            "Treadmill rate {:.2} kcal/min ({} kg, {} km/h, {}%)",
            rate,
            weight_kg,
            speed_kmh,
            incline_percent
        );
        return rate;
    }

    let Some(entry) = table.get(&request.exercise_id) else {
        tracing::debug!("Unknown exercise '{}', rate is 0", request.exercise_id);
        return 0.0;
    };

    let rate = match request.profile.individual() {
        Some(individual) => entry.rate_for(individual).unwrap_or(0.0),
        None => {
            let anchor = entry.rate_for(Individual::ANCHOR).unwrap_or(0.0);
            let reference_weight =
                nonzero_finite_or(Some(entry.reference_weight_kg), DEFAULT_REFERENCE_WEIGHT_KG);
            anchor * (weight_kg / reference_weight)
        }
    };

    tracing::debug!(
        "Rate for '{}' ({}): {:.2} kcal/min",
        entry.id,
        request.profile.as_str(),
        rate
    );
    rate
}

/// [`resolve_rate`] against the built-in table
pub fn resolve_rate_default(request: &RateRequest) -> f64 {
    resolve_rate(get_default_table(), request)
}
