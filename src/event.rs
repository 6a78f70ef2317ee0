/// Phase of a single pointer observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One observation of the logical touch contact.
///
/// Timestamps are monotonic milliseconds; coordinates are in whatever
/// device-independent position units the input source delivers. The classifier
/// only ever compares values against each other, never against wall-clock time
/// or screen geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub timestamp_ms: u64,
    pub x: f64,
    pub y: f64,
    pub phase: PointerPhase,
}

/// Recognition state of the classifier.
///
/// `Unknown` is the initial state. There is no terminal state; the machine is
/// re-evaluated by every new `Down`, and deliberately keeps its last state
/// across `Up`/`Cancel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Unknown,
    SingleTap,
    SingleLongTap,
    DoubleTap,
    DoubleLongTap,
    SingleSlide,
    DoubleSlide,
    SingleFlick,
    DoubleFlick,
}

/// Discrete gesture notification kind.
///
/// Flick kinds carry the signed velocity that triggered them, in position
/// units per millisecond (negative for leftward motion).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureKind {
    SingleTap,
    DoubleTap,
    SingleTapConfirmed,
    DoubleTapConfirmed,
    SingleLongTap,
    DoubleLongTap,
    SingleHorizontalSlide,
    DoubleHorizontalSlide,
    SingleHorizontalFlick { velocity: f64 },
    DoubleHorizontalFlick { velocity: f64 },
    UnTap,
}

/// A recognized gesture together with the pointer event that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub event: PointerEvent,
}
