//! Classification thresholds.
//!
//! Only the flick velocity threshold is tunable at runtime; everything else is
//! fixed. Times are milliseconds, distances are position units.

/// Two downs closer than this form a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// A contact held longer than this without leaving the deadzone is a long tap.
pub const LONG_TAP_WINDOW_MS: u64 = 400;

/// Horizontal displacement below which motion is not considered intentional.
pub const HORIZONTAL_MOVE_DEADZONE: f64 = 80.0;

/// Default flick velocity threshold, position units per millisecond.
pub const DEFAULT_FLICK_VELOCITY_THRESHOLD: f64 = 1.0;
