//! Current-time marker for day and week grids.

use chrono::{NaiveDate, Timelike};

use crate::clock::Clock;
use crate::layout::geometry::GridMetrics;
use crate::window::ViewWindow;

/// Position of the current-time line within a rendered grid. Absent
/// when "now" falls outside the window's dates or visible hours.
///
/// The host re-polls on a fixed interval (once a minute is plenty)
/// while a day or week view is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowMarker {
    pub date: NaiveDate,
    pub top: f32,
}

impl NowMarker {
    pub fn compute(
        window: &ViewWindow,
        metrics: &GridMetrics,
        clock: &impl Clock,
    ) -> Option<NowMarker> {
        let now = clock.now();
        let date = now.date();

        if !window.dates.contains(&date) {
            return None;
        }

        let hour = now.time().hour();
        if hour < metrics.start_hour || hour >= metrics.end_hour {
            return None;
        }

        Some(NowMarker {
            date,
            top: metrics.top_of(now, date),
        })
    }
}
