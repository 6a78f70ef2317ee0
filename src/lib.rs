//! Touch gesture classifier for single-pointer strip input.
//!
//! `tapstrip` turns a serial stream of timestamped pointer events into a small
//! vocabulary of discrete gestures: single/double taps, long taps, horizontal
//! slides and horizontal flicks. It was written for a transparent status-bar
//! overlay, where one finger at a time traces gestures along a thin strip and
//! the underlying input must never be consumed.
//!
//! Two entry points are provided:
//!
//! - [`GestureClassifier`], push style: owns a [`GestureListener`] and calls
//!   it synchronously from [`handle_event`](GestureClassifier::handle_event).
//! - [`GestureEngine`], pull style: returns the recognized gestures of each
//!   event to the caller instead of dispatching them.
//!
//! ```
//! use tapstrip::{GestureClassifier, GestureListener, PointerEvent, PointerPhase};
//!
//! struct Taps(u32);
//!
//! impl GestureListener for Taps {
//!     fn on_single_tap_confirmed(&mut self, _event: PointerEvent) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut classifier = GestureClassifier::new(Taps(0));
//! for (t, phase) in [(0, PointerPhase::Down), (40, PointerPhase::Up)] {
//!     classifier.handle_event(PointerEvent {
//!         timestamp_ms: t,
//!         x: 10.0,
//!         y: 5.0,
//!         phase,
//!     });
//! }
//! assert_eq!(classifier.listener().0, 1);
//! ```
//!
//! The classifier is single-threaded and never blocks: each event is
//! classified and discarded immediately, with at most one event of lookback
//! (the most recent down). Listener callbacks run inline and delay the next
//! event, so they must be quick.

pub mod config;
pub mod slider;

mod classifier;
mod engine;
mod event;
mod listener;

pub use classifier::GestureClassifier;
pub use engine::{GestureEngine, GestureOutput};
pub use event::{GestureEvent, GestureKind, GestureState, PointerEvent, PointerPhase};
pub use listener::GestureListener;
