//! Persistence collaborator boundary.
//!
//! The engine never mutates shared event state. Finished gestures and
//! host actions are proposed to the store as copies or patches; a
//! rejection means "revert the draft, no retry" on this side, and any
//! retry policy belongs to the collaborator. Last-write-wins is assumed
//! between concurrent editors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::CalGridResult;
use crate::event::{CalendarEvent, EventColor};

/// The commit interface of the external persistence collaborator.
pub trait EventStore {
    fn propose_create(&mut self, event: CalendarEvent) -> CalGridResult<()>;
    fn propose_update(&mut self, event_id: &str, patch: &EventPatch) -> CalGridResult<()>;
    fn propose_delete(&mut self, event_id: &str) -> CalGridResult<()>;
}

/// A partial update to a stored event. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<EventColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EventPatch {
    /// The patch a finished drag or resize gesture produces.
    pub fn reschedule(start: NaiveDateTime, end: NaiveDateTime) -> EventPatch {
        EventPatch {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, event: &mut CalendarEvent) {
        if let Some(ref title) = self.title {
            event.title = title.clone();
        }
        if let Some(ref description) = self.description {
            event.description = Some(description.clone());
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
        if let Some(ref location) = self.location {
            event.location = Some(location.clone());
        }
    }
}
