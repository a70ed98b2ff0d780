//! Half-open interval math and day-boundary clipping.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::CalendarEvent;

/// Whether two half-open intervals `[a_start, a_end)` and
/// `[b_start, b_end)` overlap. Touching endpoints do not overlap.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// The `[00:00, +24h)` bounds of a calendar date.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_hms_opt(0, 0, 0).unwrap();
    (start, start + Duration::days(1))
}

/// An event's interval restricted to a single calendar date.
///
/// The edge flags record whether the clipped edge is the event's real
/// edge, so renderers can label only the segment that actually starts
/// or ends the event.
#[derive(Debug, Clone, Copy)]
pub struct ClippedEvent<'a> {
    pub event: &'a CalendarEvent,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub is_event_start: bool,
    pub is_event_end: bool,
}

impl<'a> ClippedEvent<'a> {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Restrict an event to `[day_start, day_start + 24h)`. Returns `None`
/// when no part of the event falls on the date. Zero-duration events
/// clip to a zero-size segment on their start date.
pub fn clip_to_day(event: &CalendarEvent, date: NaiveDate) -> Option<ClippedEvent<'_>> {
    assert!(
        event.end >= event.start,
        "event '{}' reached layout with end before start",
        event.id
    );

    let (day_start, day_end) = day_bounds(date);

    if event.start == event.end {
        if event.start < day_start || event.start >= day_end {
            return None;
        }
        return Some(ClippedEvent {
            event,
            date,
            start: event.start,
            end: event.end,
            is_event_start: true,
            is_event_end: true,
        });
    }

    if !overlaps(event.start, event.end, day_start, day_end) {
        return None;
    }

    let start = event.start.max(day_start);
    let end = event.end.min(day_end);

    Some(ClippedEvent {
        event,
        date,
        start,
        end,
        is_event_start: start == event.start,
        is_event_end: end == event.end,
    })
}
