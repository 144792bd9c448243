//! Treadmill MET table and nearest-speed lookup.

use crate::types::MetSample;

const fn sample(speed_kmh: f64, metabolic_equivalent: f64) -> MetSample {
    MetSample {
        speed_kmh,
        metabolic_equivalent,
    }
}

/// Calibration points, ascending by speed (km/h)
pub static TREADMILL_MET_TABLE: [MetSample; 8] = [
    sample(4.8, 3.5),
    sample(5.5, 4.3),
    sample(6.5, 6.0),
    sample(8.0, 8.3),
    sample(9.7, 9.8),
    sample(11.0, 11.0),
    sample(12.0, 12.5),
    sample(14.0, 14.5),
];

/// MET for the table sample nearest to `speed_kmh`.
///
/// This is nearest-neighbour, not interpolation: 7.0 km/h reads the 6.5 km/h
/// sample. On an exact tie the earlier sample wins.
pub fn lookup_met(speed_kmh: f64) -> f64 {
    // Built-in table is non-empty
    lookup_met_in(&TREADMILL_MET_TABLE, speed_kmh)
        .unwrap_or(TREADMILL_MET_TABLE[0].metabolic_equivalent)
}

/// Nearest-speed scan over an arbitrary table; `None` only for an empty one.
pub fn lookup_met_in(table: &[MetSample], speed_kmh: f64) -> Option<f64> {
    let (first, rest) = table.split_first()?;

    let mut closest = first;
    let mut min_diff = (speed_kmh - first.speed_kmh).abs();
    for s in rest {
        let diff = (speed_kmh - s.speed_kmh).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = s;
        }
    }

    Some(closest.metabolic_equivalent)
}

/// Validate a MET table: non-empty, strictly increasing speeds, positive values
pub fn validate_met_table(table: &[MetSample]) -> Vec<String> {
    let mut errors = Vec::new();

    if table.is_empty() {
        errors.push("MET table is empty".to_string());
    }

    for (i, s) in table.iter().enumerate() {
        if !(s.speed_kmh.is_finite() && s.speed_kmh > 0.0) {
            errors.push(format!("MET sample {}: speed {} must be positive", i, s.speed_kmh));
        }
        if !(s.metabolic_equivalent.is_finite() && s.metabolic_equivalent > 0.0) {
            errors.push(format!(
                "MET sample {}: MET {} must be positive",
                i, s.metabolic_equivalent
            ));
        }
    }

    for (i, pair) in table.windows(2).enumerate() {
        if pair[1].speed_kmh <= pair[0].speed_kmh {
            errors.push(format!(
                "MET sample {}: speed {} is not above previous speed {}",
                i + 1,
                pair[1].speed_kmh,
                pair[0].speed_kmh
            ));
        }
    }

    errors
}
