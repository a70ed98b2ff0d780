//! Core layout engine for the calgrid scheduling surface.
//!
//! Given a snapshot of events, an anchor date, and a view kind, the
//! engine computes a deterministic, non-overlapping placement for every
//! event:
//! - `window` decides which dates a view renders and which events land
//!   on each date
//! - `layout` packs each date's timed events into columns and maps them
//!   to pixel geometry, with overflow budgeting for month cells and the
//!   current-time marker for day/week grids
//! - `reschedule` drives drag/resize gestures against a draft copy and
//!   commits through the `store` boundary
//!
//! The engine owns no events and paints no pixels; it borrows the
//! host's event snapshot per pass and hands render records back.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod interval;
pub mod layout;
pub mod reschedule;
pub mod snap;
pub mod store;
pub mod window;

pub use clock::{Clock, SystemClock};
pub use config::CalendarConfig;
pub use error::{CalGridError, CalGridResult};
pub use event::{CalendarEvent, EventColor};
pub use layout::geometry::{GridMetrics, PositionedEvent};
pub use layout::now::NowMarker;
pub use layout::overflow::CellBudget;
pub use layout::{DayLayout, ViewLayout};
pub use reschedule::{DragState, GestureOutcome, RescheduleController, ResizeEdge};
pub use store::{EventPatch, EventStore};
pub use window::{ViewKind, ViewWindow};
