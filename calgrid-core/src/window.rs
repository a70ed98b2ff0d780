//! View windowing: the ordered dates a view renders and the events
//! relevant to each date.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::event::CalendarEvent;
use crate::interval::{ClippedEvent, clip_to_day};

/// The four calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    Week,
    Month,
    Agenda,
}

/// An ordered run of calendar dates for one view, anchored at a
/// reference date. Recomputed whenever the anchor or view kind changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewWindow {
    pub kind: ViewKind,
    pub anchor: NaiveDate,
    pub dates: Vec<NaiveDate>,
}

fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date - Duration::days(date.weekday().days_since(week_start) as i64)
}

impl ViewWindow {
    pub fn for_anchor(anchor: NaiveDate, kind: ViewKind, config: &CalendarConfig) -> ViewWindow {
        let dates = match kind {
            ViewKind::Day => vec![anchor],
            ViewKind::Week => {
                let start = week_start_of(anchor, config.week_start);
                (0..7).map(|i| start + Duration::days(i)).collect()
            }
            ViewKind::Month => {
                let first_of_month = anchor.with_day(1).unwrap();
                let last_of_month =
                    first_of_month.checked_add_months(Months::new(1)).unwrap() - Duration::days(1);

                let grid_start = week_start_of(first_of_month, config.week_start);
                let grid_end = week_start_of(last_of_month, config.week_start) + Duration::days(6);

                let days = (grid_end - grid_start).num_days();
                (0..=days).map(|i| grid_start + Duration::days(i)).collect()
            }
            ViewKind::Agenda => (0..config.agenda_days as i64)
                .map(|i| anchor + Duration::days(i))
                .collect(),
        };

        ViewWindow {
            kind,
            anchor,
            dates,
        }
    }

    pub fn first(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first() <= date && date <= self.last()
    }
}

/// One segment of an all-day or multi-day event within the band.
///
/// The title is rendered only on the segment flagged `is_first_day`;
/// when the event starts before the window, the first visible day
/// carries the flag instead.
#[derive(Debug, Clone, Copy)]
pub struct BandSegment<'a> {
    pub event: &'a CalendarEvent,
    pub is_first_day: bool,
    pub is_last_day: bool,
}

/// The events relevant to one date of a window: the all-day band plus
/// the timed events clipped to the date.
#[derive(Debug, Clone)]
pub struct DaySlice<'a> {
    pub date: NaiveDate,
    /// Leading/trailing day from an adjacent month in the month grid.
    pub outside: bool,
    pub all_day: Vec<BandSegment<'a>>,
    pub timed: Vec<ClippedEvent<'a>>,
}

impl<'a> DaySlice<'a> {
    pub fn is_empty(&self) -> bool {
        self.all_day.is_empty() && self.timed.is_empty()
    }

    /// Split the events of a window across its dates.
    pub fn collect(window: &ViewWindow, events: &'a [CalendarEvent]) -> Vec<DaySlice<'a>> {
        window
            .dates
            .iter()
            .map(|&date| {
                let outside = window.kind == ViewKind::Month
                    && (date.month() != window.anchor.month()
                        || date.year() != window.anchor.year());

                let mut all_day: Vec<BandSegment<'a>> = events
                    .iter()
                    .filter(|e| e.is_multi_day() && e.touches_day(date))
                    .map(|event| BandSegment {
                        event,
                        is_first_day: date == event.first_day().max(window.first()),
                        is_last_day: date == event.last_day().min(window.last()),
                    })
                    .collect();
                all_day.sort_by(|a, b| {
                    a.event
                        .start
                        .cmp(&b.event.start)
                        .then_with(|| a.event.id.cmp(&b.event.id))
                });

                let mut timed: Vec<ClippedEvent<'a>> = events
                    .iter()
                    .filter(|e| !e.is_multi_day())
                    .filter_map(|e| clip_to_day(e, date))
                    .collect();
                timed.sort_by(|a, b| {
                    a.start
                        .cmp(&b.start)
                        .then_with(|| a.event.id.cmp(&b.event.id))
                });

                DaySlice {
                    date,
                    outside,
                    all_day,
                    timed,
                }
            })
            .collect()
    }
}
