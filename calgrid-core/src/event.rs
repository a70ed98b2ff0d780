//! Calendar event types.
//!
//! Events are owned by the host's persistence layer; the layout engine
//! borrows them read-only per pass and only ever proposes modified
//! copies back through the store boundary.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalGridError, CalGridResult};

/// A calendar event. Times are local wall-clock with a half-open
/// `[start, end)` interval; `end` is never before `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub color: EventColor,
    pub location: Option<String>,
}

/// Color tag shown on the rendered event block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Sky,
    Amber,
    Violet,
    Rose,
    Emerald,
    Orange,
}

impl CalendarEvent {
    /// Draft a new timed event with a generated id.
    pub fn new(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        CalendarEvent {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: None,
            start,
            end,
            all_day: false,
            color: EventColor::default(),
            location: None,
        }
    }

    /// Reject events that break the `end >= start` contract.
    ///
    /// Event-edit validation happens before events reach this engine, so
    /// a violation here means the upstream contract was breached.
    pub fn validate(&self) -> CalGridResult<()> {
        if self.end < self.start {
            return Err(CalGridError::InvalidEvent(format!(
                "event '{}' ends before it starts ({} < {})",
                self.id, self.end, self.start
            )));
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the event belongs in the all-day band rather than the
    /// timed column grid: either flagged all-day, or its start and end
    /// fall on different calendar dates.
    pub fn is_multi_day(&self) -> bool {
        self.all_day || self.start.date() != self.end.date()
    }

    /// First calendar date the event occupies.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar date the event occupies. The end instant is
    /// exclusive, so an event ending exactly at midnight does not spill
    /// into the next day; zero-duration events occupy their start date.
    pub fn last_day(&self) -> NaiveDate {
        if self.end > self.start {
            (self.end - Duration::seconds(1)).date()
        } else {
            self.start.date()
        }
    }

    /// Whether any part of `[start, end)` falls on the given date.
    pub fn touches_day(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }
}
