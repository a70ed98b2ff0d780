//! Snap-to-grid time quantization for drag and resize gestures.

use chrono::{Duration, NaiveDateTime};

use crate::constants::SNAP_MINUTES;

/// Round a minute value to the nearest multiple of the snap step.
///
/// The boundary sits at half the step: a remainder of 7 rounds down,
/// a remainder of 8 rounds up. Already-snapped values pass through
/// unchanged.
pub fn snap_minutes(minutes: i64) -> i64 {
    let r = minutes.rem_euclid(SNAP_MINUTES);
    if (r as f64) < (SNAP_MINUTES as f64) / 2.0 {
        minutes - r
    } else {
        minutes + (SNAP_MINUTES - r)
    }
}

/// Snap a datetime to the grid, carrying into the hour or day as needed.
pub fn snap_datetime(dt: NaiveDateTime) -> NaiveDateTime {
    let midnight = dt.date().and_hms_opt(0, 0, 0).unwrap();
    let minutes = (dt - midnight).num_minutes();
    midnight + Duration::minutes(snap_minutes(minutes))
}
