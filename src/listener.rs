use crate::event::PointerEvent;

/// Capability set for gesture notifications.
///
/// Every method has a no-op default, so implementors pick only the gestures
/// they care about. Callbacks run inline within
/// [`GestureClassifier::handle_event`](crate::GestureClassifier::handle_event)
/// and block delivery of the next pointer event until they return; keep them
/// fast.
///
/// On a double-escalating down, `on_single_tap` fires before `on_double_tap`.
/// On a release, a confirmation (if any) fires before `on_un_tap`, and
/// `on_un_tap` fires on every release regardless of state.
pub trait GestureListener {
    fn on_single_tap(&mut self, event: PointerEvent) {
        let _ = event;
    }

    fn on_double_tap(&mut self, event: PointerEvent) {
        let _ = event;
    }

    /// The contact lifted while still an unresolved single tap.
    fn on_single_tap_confirmed(&mut self, event: PointerEvent) {
        let _ = event;
    }

    /// The contact lifted while still an unresolved double tap.
    fn on_double_tap_confirmed(&mut self, event: PointerEvent) {
        let _ = event;
    }

    fn on_single_long_tap(&mut self, event: PointerEvent) {
        let _ = event;
    }

    fn on_double_long_tap(&mut self, event: PointerEvent) {
        let _ = event;
    }

    /// Fires on the move that resolves a slide and again on every further move
    /// of the same contact.
    fn on_single_horizontal_slide(&mut self, event: PointerEvent) {
        let _ = event;
    }

    fn on_double_horizontal_slide(&mut self, event: PointerEvent) {
        let _ = event;
    }

    /// `velocity` is signed, in position units per millisecond.
    fn on_single_horizontal_flick(&mut self, event: PointerEvent, velocity: f64) {
        let _ = (event, velocity);
    }

    fn on_double_horizontal_flick(&mut self, event: PointerEvent, velocity: f64) {
        let _ = (event, velocity);
    }

    /// The contact ended, by lift or by cancellation.
    fn on_un_tap(&mut self, event: PointerEvent) {
        let _ = event;
    }
}
