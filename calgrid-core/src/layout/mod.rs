//! The layout pipeline.
//!
//! Data flows one direction: raw events → view windowing → column
//! packing → coordinate mapping → render records. Every pass is a pure
//! function of its snapshot and is re-run to completion when an input
//! changes; nothing here is persisted between passes.

pub mod columns;
pub mod geometry;
pub mod now;
pub mod overflow;

use chrono::NaiveDate;
use tracing::trace;

use crate::clock::Clock;
use crate::config::CalendarConfig;
use crate::event::CalendarEvent;
use crate::layout::columns::pack_day;
use crate::layout::geometry::{GridMetrics, PositionedEvent, position};
use crate::layout::now::NowMarker;
use crate::window::{BandSegment, DaySlice, ViewKind, ViewWindow};

/// Render records for one date: the all-day band plus positioned timed
/// events.
#[derive(Debug, Clone)]
pub struct DayLayout<'a> {
    pub date: NaiveDate,
    pub outside: bool,
    pub all_day: Vec<BandSegment<'a>>,
    pub events: Vec<PositionedEvent<'a>>,
}

/// A full layout pass over one view window.
#[derive(Debug, Clone)]
pub struct ViewLayout<'a> {
    pub window: ViewWindow,
    pub days: Vec<DayLayout<'a>>,
    pub now: Option<NowMarker>,
}

impl<'a> ViewLayout<'a> {
    /// Lay out a snapshot of events for the view anchored at `anchor`.
    ///
    /// Agenda views omit event-less dates from `days`; the window keeps
    /// its full length regardless.
    pub fn compute(
        events: &'a [CalendarEvent],
        anchor: NaiveDate,
        kind: ViewKind,
        config: &CalendarConfig,
        clock: &impl Clock,
    ) -> ViewLayout<'a> {
        let window = ViewWindow::for_anchor(anchor, kind, config);
        let metrics = GridMetrics::from_config(config);

        let days: Vec<DayLayout<'a>> = DaySlice::collect(&window, events)
            .into_iter()
            .filter(|slice| kind != ViewKind::Agenda || !slice.is_empty())
            .map(|slice| {
                let packed = pack_day(&slice.timed);
                let events = slice
                    .timed
                    .iter()
                    .enumerate()
                    .map(|(i, clipped)| {
                        position(clipped, packed.columns[i], packed.column_count, &metrics)
                    })
                    .collect();

                DayLayout {
                    date: slice.date,
                    outside: slice.outside,
                    all_day: slice.all_day,
                    events,
                }
            })
            .collect();

        let now = match kind {
            ViewKind::Day | ViewKind::Week => NowMarker::compute(&window, &metrics, clock),
            ViewKind::Month | ViewKind::Agenda => None,
        };

        trace!(
            ?kind,
            %anchor,
            dates = window.dates.len(),
            days = days.len(),
            "layout pass"
        );

        ViewLayout { window, days, now }
    }
}
