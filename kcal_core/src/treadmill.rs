//! Treadmill energy model.
//!
//! kcal/min = (MET(speed) + 0.5 × incline%) × 3.5 × weight(kg) / 200
//!
//! The incline correction is a fixed linear approximation. Inputs are not
//! clamped; callers substitute defaults before calling in.

use crate::met::lookup_met;

/// MET added per percentage point of incline
pub const INCLINE_MET_PER_PERCENT: f64 = 0.5;

/// Treadmill calories per minute for the given body weight, speed and incline
pub fn treadmill_rate(weight_kg: f64, speed_kmh: f64, incline_percent: f64) -> f64 {
    let met = lookup_met(speed_kmh);
    let corrected_met = met + incline_percent * INCLINE_MET_PER_PERCENT;

    met_to_kcal_per_minute(corrected_met, weight_kg)
}

/// Standard MET conversion: MET × 3.5 mL O2/kg/min × kg / 200
pub fn met_to_kcal_per_minute(met: f64, weight_kg: f64) -> f64 {
    (met * 3.5 * weight_kg) / 200.0
}
