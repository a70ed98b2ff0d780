//! Shared constants for the layout engine.

/// Quantization step for drag/resize gestures, in minutes.
pub const SNAP_MINUTES: i64 = 15;

/// Number of consecutive days an agenda window covers.
pub const DEFAULT_AGENDA_DAYS: u32 = 30;

/// Default visible hour range `[start, end)`.
pub const DEFAULT_START_HOUR: u32 = 0;
pub const DEFAULT_END_HOUR: u32 = 24;

/// Default rendered height of one hour, in pixels.
pub const DEFAULT_HOUR_HEIGHT: f32 = 48.0;

/// Base stacking order for positioned events. Later columns paint above
/// earlier ones so an event in a higher column is never occluded.
pub const BASE_Z: i32 = 10;
