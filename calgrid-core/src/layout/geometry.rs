//! Pixel geometry for positioned events.
//!
//! Maps a clipped event's time-of-day and column assignment into the
//! rectangle the renderer paints, and back again for pointer gestures.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::CalendarConfig;
use crate::constants::BASE_Z;
use crate::event::CalendarEvent;
use crate::interval::ClippedEvent;

/// The measured grid a day/week view renders into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Visible hour range `[start_hour, end_hour)`.
    pub start_hour: u32,
    pub end_hour: u32,
    /// Rendered height of one hour, in pixels.
    pub hour_height: f32,
}

impl GridMetrics {
    pub fn from_config(config: &CalendarConfig) -> GridMetrics {
        GridMetrics {
            start_hour: config.start_hour,
            end_hour: config.end_hour,
            hour_height: config.hour_height,
        }
    }

    /// Vertical offset of a time within the grid, in pixels. Uses
    /// fractional hours, measured against the day the grid renders.
    pub fn top_of(&self, dt: NaiveDateTime, date: NaiveDate) -> f32 {
        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        let hours = (dt - midnight).num_minutes() as f32 / 60.0;
        (hours - self.start_hour as f32) * self.hour_height
    }

    /// Inverse of [`top_of`]: the time a vertical offset points at,
    /// clamped to the visible hour range.
    ///
    /// [`top_of`]: GridMetrics::top_of
    pub fn time_at(&self, y: f32, date: NaiveDate) -> NaiveDateTime {
        let hours = self.start_hour as f32 + y / self.hour_height;
        let clamped = hours.clamp(self.start_hour as f32, self.end_hour as f32);
        let minutes = (clamped * 60.0).round() as i64;
        date.and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(minutes)
    }
}

/// A laid-out event for one date: column assignment plus the rectangle
/// the renderer paints. Recomputed on every layout pass.
#[derive(Debug, Clone, Copy)]
pub struct PositionedEvent<'a> {
    pub event: &'a CalendarEvent,
    pub column: usize,
    pub column_count: usize,
    /// Fraction of the day column's width this event occupies.
    pub width_fraction: f32,
    /// Fraction of the day column's width left of this event.
    pub left_fraction: f32,
    pub top: f32,
    pub height: f32,
    pub z_index: i32,
}

/// Compute the rectangle for one clipped event.
///
/// Width and left offset follow the overflow-lane policy: column 0 takes
/// the full width, every later column is inset by 10% per index and
/// drawn at 90% width above the lanes below it. Columns beyond 0 are
/// overflow lanes, not equal partitions of the day column.
pub fn position<'a>(
    clipped: &ClippedEvent<'a>,
    column: usize,
    column_count: usize,
    metrics: &GridMetrics,
) -> PositionedEvent<'a> {
    let (width_fraction, left_fraction) = if column == 0 {
        (1.0, 0.0)
    } else {
        (0.9, column as f32 * 0.1)
    };

    PositionedEvent {
        event: clipped.event,
        column,
        column_count,
        width_fraction,
        left_fraction,
        top: metrics.top_of(clipped.start, clipped.date),
        height: metrics.top_of(clipped.end, clipped.date) - metrics.top_of(clipped.start, clipped.date),
        z_index: BASE_Z + column as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::clip_to_day;
    use chrono::NaiveDate;

    fn metrics() -> GridMetrics {
        GridMetrics {
            start_hour: 8,
            end_hour: 20,
            hour_height: 48.0,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn dt(hour: u32, min: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_top_and_height_use_fractional_hours() {
        let event = CalendarEvent::new("Call", dt(9, 30), dt(10, 15));
        let clipped = clip_to_day(&event, day()).unwrap();
        let positioned = position(&clipped, 0, 1, &metrics());

        assert_eq!(positioned.top, 1.5 * 48.0);
        assert_eq!(positioned.height, 0.75 * 48.0);
    }

    #[test]
    fn test_column_zero_takes_full_width() {
        let event = CalendarEvent::new("Call", dt(9, 0), dt(10, 0));
        let clipped = clip_to_day(&event, day()).unwrap();
        let positioned = position(&clipped, 0, 2, &metrics());

        assert_eq!(positioned.width_fraction, 1.0);
        assert_eq!(positioned.left_fraction, 0.0);
        assert_eq!(positioned.z_index, BASE_Z);
    }

    #[test]
    fn test_overflow_lanes_are_inset_and_raised() {
        let event = CalendarEvent::new("Call", dt(9, 0), dt(10, 0));
        let clipped = clip_to_day(&event, day()).unwrap();

        let first = position(&clipped, 1, 3, &metrics());
        assert_eq!(first.width_fraction, 0.9);
        assert_eq!(first.left_fraction, 0.1);
        assert_eq!(first.z_index, BASE_Z + 1);

        // Lanes past the second keep the 10%-per-column inset even
        // though the fractions no longer partition the width.
        let second = position(&clipped, 2, 3, &metrics());
        assert_eq!(second.width_fraction, 0.9);
        assert!((second.left_fraction - 0.2).abs() < f32::EPSILON);
        assert_eq!(second.z_index, BASE_Z + 2);
    }

    #[test]
    fn test_zero_duration_renders_zero_height() {
        let event = CalendarEvent::new("Ping", dt(9, 0), dt(9, 0));
        let clipped = clip_to_day(&event, day()).unwrap();
        let positioned = position(&clipped, 0, 1, &metrics());

        assert_eq!(positioned.height, 0.0);
    }

    #[test]
    fn test_midnight_end_maps_to_full_day_height() {
        let m = GridMetrics {
            start_hour: 0,
            end_hour: 24,
            hour_height: 48.0,
        };
        let event = CalendarEvent::new("Late", dt(20, 0), day().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
        let clipped = clip_to_day(&event, day()).unwrap();
        let positioned = position(&clipped, 0, 1, &m);

        assert_eq!(positioned.top, 20.0 * 48.0);
        assert_eq!(positioned.height, 4.0 * 48.0);
    }

    #[test]
    fn test_time_at_inverts_top_of() {
        let m = metrics();
        let t = dt(14, 15);
        let y = m.top_of(t, day());
        assert_eq!(m.time_at(y, day()), t);
    }

    #[test]
    fn test_time_at_clamps_to_hour_range() {
        let m = metrics();
        assert_eq!(m.time_at(-500.0, day()), dt(8, 0));
        assert_eq!(m.time_at(1_000_000.0, day()), dt(20, 0));
    }
}
