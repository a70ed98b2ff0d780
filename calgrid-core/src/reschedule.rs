//! Drag-to-move and drag-to-resize gestures.
//!
//! A gesture edits a draft copy of the grabbed event; the host feeds the
//! draft back through the layout pipeline to preview the new placement.
//! Shared event state is only touched through the store boundary when
//! the gesture finishes, and a rejected commit restores the original
//! with no partial state left behind.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::event::CalendarEvent;
use crate::layout::geometry::GridMetrics;
use crate::snap::snap_datetime;
use crate::store::{EventPatch, EventStore};

/// Which edge of the event a resize gesture moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Start,
    End,
}

/// Gesture state. One writer at a time; a new gesture is rejected until
/// the active one returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        event_id: String,
        origin_start: NaiveDateTime,
        /// Where inside the event's rendered box the pointer grabbed it,
        /// as an offset from the event start.
        pointer_offset: Duration,
    },
    Resizing {
        event_id: String,
        edge: ResizeEdge,
    },
}

/// How a finished gesture was settled at the store boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// The store accepted the proposal; the draft is authoritative.
    Committed(CalendarEvent),
    /// The store rejected the proposal; the original event stands.
    RolledBack(CalendarEvent),
}

/// State machine for rescheduling gestures.
#[derive(Debug, Default)]
pub struct RescheduleController {
    state: DragState,
    original: Option<CalendarEvent>,
    draft: Option<CalendarEvent>,
}

impl RescheduleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    /// The in-flight draft, for layout previews during a gesture.
    pub fn draft(&self) -> Option<&CalendarEvent> {
        self.draft.as_ref()
    }

    /// Start moving an event. `pointer_offset` is where within the
    /// event's box the pointer went down, as an offset from its start.
    /// Returns false while another gesture is active.
    pub fn begin_drag(&mut self, event: &CalendarEvent, pointer_offset: Duration) -> bool {
        if self.is_active() {
            return false;
        }

        debug!(event_id = %event.id, "drag started");
        self.state = DragState::Dragging {
            event_id: event.id.clone(),
            origin_start: event.start,
            pointer_offset,
        };
        self.original = Some(event.clone());
        self.draft = Some(event.clone());
        true
    }

    /// Move the draft to follow the pointer, preserving duration and
    /// snapping the start to the grid. Cross-day moves land on `date`.
    pub fn drag_to(&mut self, date: NaiveDate, y: f32, metrics: &GridMetrics) {
        let DragState::Dragging { pointer_offset, .. } = &self.state else {
            return;
        };
        let pointer_offset = *pointer_offset;
        let Some(draft) = self.draft.as_mut() else {
            return;
        };

        let duration = draft.duration();
        let pointer_time = metrics.time_at(y, date);
        let start = snap_datetime(pointer_time - pointer_offset);

        draft.start = start;
        draft.end = start + duration;
    }

    /// Start resizing one edge of an event. Returns false while another
    /// gesture is active.
    pub fn begin_resize(&mut self, event: &CalendarEvent, edge: ResizeEdge) -> bool {
        if self.is_active() {
            return false;
        }

        debug!(event_id = %event.id, ?edge, "resize started");
        self.state = DragState::Resizing {
            event_id: event.id.clone(),
            edge,
        };
        self.original = Some(event.clone());
        self.draft = Some(event.clone());
        true
    }

    /// Move the grabbed edge to follow the pointer, snapped to the
    /// grid. The fixed edge never moves, and the interval clamps to
    /// zero duration instead of inverting.
    pub fn resize_to(&mut self, date: NaiveDate, y: f32, metrics: &GridMetrics) {
        let DragState::Resizing { edge, .. } = &self.state else {
            return;
        };
        let edge = *edge;
        let Some(draft) = self.draft.as_mut() else {
            return;
        };

        let target = snap_datetime(metrics.time_at(y, date));
        match edge {
            ResizeEdge::Start => draft.start = target.min(draft.end),
            ResizeEdge::End => draft.end = target.max(draft.start),
        }
    }

    /// Hand the draft to the store and return to `Idle`. On success the
    /// committed draft is returned; on rejection the draft is discarded
    /// and the original comes back so the host restores the previous
    /// layout. `None` when no gesture was active.
    pub fn finish<S: EventStore>(&mut self, store: &mut S) -> Option<GestureOutcome> {
        if !self.is_active() {
            return None;
        }

        self.state = DragState::Idle;
        let draft = self.draft.take()?;
        let original = self.original.take()?;

        let patch = EventPatch::reschedule(draft.start, draft.end);
        match store.propose_update(&draft.id, &patch) {
            Ok(()) => {
                debug!(event_id = %draft.id, start = %draft.start, "reschedule committed");
                Some(GestureOutcome::Committed(draft))
            }
            Err(e) => {
                debug!(event_id = %draft.id, error = %e, "reschedule rejected, draft discarded");
                Some(GestureOutcome::RolledBack(original))
            }
        }
    }

    /// Abort the active gesture and discard the draft unconditionally.
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("gesture cancelled");
        }
        self.state = DragState::Idle;
        self.draft = None;
        self.original = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalGridError, CalGridResult};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn dt(d: u32, hour: u32, min: u32) -> NaiveDateTime {
        day(d).and_hms_opt(hour, min, 0).unwrap()
    }

    /// Minute-per-pixel grid over the full day, so `y` is just minutes
    /// from midnight.
    fn metrics() -> GridMetrics {
        GridMetrics {
            start_hour: 0,
            end_hour: 24,
            hour_height: 60.0,
        }
    }

    fn minutes(hour: u32, min: u32) -> f32 {
        (hour * 60 + min) as f32
    }

    #[derive(Default)]
    struct RecordingStore {
        reject: bool,
        updates: Vec<(String, EventPatch)>,
    }

    impl EventStore for RecordingStore {
        fn propose_create(&mut self, _event: CalendarEvent) -> CalGridResult<()> {
            Ok(())
        }

        fn propose_update(&mut self, event_id: &str, patch: &EventPatch) -> CalGridResult<()> {
            self.updates.push((event_id.to_string(), patch.clone()));
            if self.reject {
                Err(CalGridError::Commit("backend rejected".into()))
            } else {
                Ok(())
            }
        }

        fn propose_delete(&mut self, _event_id: &str) -> CalGridResult<()> {
            Ok(())
        }
    }

    fn make_event(start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        let mut event = CalendarEvent::new("Supplier call", start, end);
        event.id = "evt-1".to_string();
        event
    }

    #[test]
    fn test_drag_snaps_down_and_preserves_duration() {
        let event = make_event(dt(10, 14, 5), dt(10, 15, 5));
        let mut controller = RescheduleController::new();
        assert!(controller.begin_drag(&event, Duration::zero()));

        // Pointer lands at 14:07; remainder 7 rounds down.
        controller.drag_to(day(10), minutes(14, 7), &metrics());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.start, dt(10, 14, 0));
        assert_eq!(draft.end, dt(10, 15, 0));
    }

    #[test]
    fn test_drag_snaps_up_across_the_hour() {
        let event = make_event(dt(10, 14, 5), dt(10, 15, 5));
        let mut controller = RescheduleController::new();
        controller.begin_drag(&event, Duration::zero());

        // 14:53 has remainder 8; rolls into the next hour.
        controller.drag_to(day(10), minutes(14, 53), &metrics());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.start, dt(10, 15, 0));
        assert_eq!(draft.end, dt(10, 16, 0));
    }

    #[test]
    fn test_drag_honors_grab_offset() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let mut controller = RescheduleController::new();
        // Grabbed 30 minutes into the event body.
        controller.begin_drag(&event, Duration::minutes(30));

        controller.drag_to(day(10), minutes(12, 30), &metrics());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.start, dt(10, 12, 0));
        assert_eq!(draft.end, dt(10, 13, 0));
    }

    #[test]
    fn test_drag_across_days() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let mut controller = RescheduleController::new();
        controller.begin_drag(&event, Duration::zero());

        controller.drag_to(day(12), minutes(16, 0), &metrics());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.start, dt(12, 16, 0));
        assert_eq!(draft.end, dt(12, 17, 0));
    }

    #[test]
    fn test_second_gesture_is_rejected_while_active() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let other = CalendarEvent::new("Other", dt(10, 11, 0), dt(10, 12, 0));

        let mut controller = RescheduleController::new();
        assert!(controller.begin_drag(&event, Duration::zero()));
        assert!(!controller.begin_drag(&other, Duration::zero()));
        assert!(!controller.begin_resize(&other, ResizeEdge::End));

        // The original gesture is untouched.
        match controller.state() {
            DragState::Dragging { event_id, .. } => assert_eq!(event_id, "evt-1"),
            state => panic!("unexpected state {state:?}"),
        }
    }

    #[test]
    fn test_resize_moves_only_the_grabbed_edge() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let mut controller = RescheduleController::new();
        controller.begin_resize(&event, ResizeEdge::End);

        controller.resize_to(day(10), minutes(11, 22), &metrics());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.start, dt(10, 9, 0));
        assert_eq!(draft.end, dt(10, 11, 15));
    }

    #[test]
    fn test_resize_clamps_to_zero_duration() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let mut controller = RescheduleController::new();
        controller.begin_resize(&event, ResizeEdge::End);

        // Dragging the end edge far above the start pins end to start.
        controller.resize_to(day(10), minutes(7, 0), &metrics());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.start, dt(10, 9, 0));
        assert_eq!(draft.end, dt(10, 9, 0));
    }

    #[test]
    fn test_resize_start_edge_clamps_too() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let mut controller = RescheduleController::new();
        controller.begin_resize(&event, ResizeEdge::Start);

        controller.resize_to(day(10), minutes(11, 0), &metrics());

        let draft = controller.draft().unwrap();
        assert_eq!(draft.start, dt(10, 10, 0));
        assert_eq!(draft.end, dt(10, 10, 0));
    }

    #[test]
    fn test_finish_commits_through_the_store() {
        let event = make_event(dt(10, 14, 5), dt(10, 15, 5));
        let mut controller = RescheduleController::new();
        let mut store = RecordingStore::default();

        controller.begin_drag(&event, Duration::zero());
        controller.drag_to(day(10), minutes(14, 53), &metrics());

        let outcome = controller.finish(&mut store).unwrap();
        assert_eq!(
            outcome,
            GestureOutcome::Committed(CalendarEvent {
                start: dt(10, 15, 0),
                end: dt(10, 16, 0),
                ..event.clone()
            })
        );

        assert_eq!(store.updates.len(), 1);
        let (id, patch) = &store.updates[0];
        assert_eq!(id, "evt-1");
        assert_eq!(patch.start, Some(dt(10, 15, 0)));
        assert_eq!(patch.end, Some(dt(10, 16, 0)));

        assert!(!controller.is_active());
        assert!(controller.draft().is_none());
    }

    #[test]
    fn test_rejected_commit_restores_the_original() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let mut controller = RescheduleController::new();
        let mut store = RecordingStore {
            reject: true,
            ..Default::default()
        };

        controller.begin_drag(&event, Duration::zero());
        controller.drag_to(day(10), minutes(16, 0), &metrics());

        let outcome = controller.finish(&mut store).unwrap();
        assert_eq!(outcome, GestureOutcome::RolledBack(event));

        assert!(!controller.is_active());
        assert!(controller.draft().is_none());
    }

    #[test]
    fn test_cancel_discards_draft_unconditionally() {
        let event = make_event(dt(10, 9, 0), dt(10, 10, 0));
        let mut controller = RescheduleController::new();

        controller.begin_drag(&event, Duration::zero());
        controller.drag_to(day(10), minutes(16, 0), &metrics());
        controller.cancel();

        assert!(!controller.is_active());
        assert!(controller.draft().is_none());

        // A fresh gesture may start after cancellation.
        assert!(controller.begin_resize(&event, ResizeEdge::End));
    }

    #[test]
    fn test_finish_without_gesture_is_noop() {
        let mut controller = RescheduleController::new();
        let mut store = RecordingStore::default();

        assert!(controller.finish(&mut store).is_none());
        assert!(store.updates.is_empty());
    }
}
