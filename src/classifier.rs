use crate::engine::GestureEngine;
use crate::event::{GestureEvent, GestureKind, GestureState, PointerEvent};
use crate::listener::GestureListener;

/// Push-style front of the classifier: a [`GestureEngine`] plus the listener
/// its gestures are dispatched to.
///
/// Construct it once and hand it to whichever component owns the
/// input-delivery loop. Single-threaded; `handle_event` must not be called
/// concurrently.
pub struct GestureClassifier<L: GestureListener> {
    engine: GestureEngine,
    listener: L,
}

impl<L: GestureListener> GestureClassifier<L> {
    pub fn new(listener: L) -> Self {
        Self {
            engine: GestureEngine::new(),
            listener,
        }
    }

    pub fn with_flick_velocity_threshold(flick_velocity_threshold: f64, listener: L) -> Self {
        Self {
            engine: GestureEngine::with_flick_velocity_threshold(flick_velocity_threshold),
            listener,
        }
    }

    /// Replaces the runtime-tunable flick velocity threshold. Takes effect on
    /// the next move evaluation; no side effects beyond the stored value.
    pub fn configure(&mut self, flick_velocity_threshold: f64) {
        self.engine
            .set_flick_velocity_threshold(flick_velocity_threshold);
    }

    pub fn state(&self) -> GestureState {
        self.engine.state()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Sole entry point. Classifies one pointer event and invokes listener
    /// callbacks synchronously, in emission order, before returning.
    ///
    /// Always returns `false`: the event was observed but never consumed, so
    /// the underlying input stays eligible for other consumers of the hosting
    /// overlay.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        let output = self.engine.handle(event);
        for gesture in output.events.into_iter().flatten() {
            self.dispatch(gesture);
        }
        false
    }

    fn dispatch(&mut self, gesture: GestureEvent) {
        let event = gesture.event;
        match gesture.kind {
            GestureKind::SingleTap => self.listener.on_single_tap(event),
            GestureKind::DoubleTap => self.listener.on_double_tap(event),
            GestureKind::SingleTapConfirmed => self.listener.on_single_tap_confirmed(event),
            GestureKind::DoubleTapConfirmed => self.listener.on_double_tap_confirmed(event),
            GestureKind::SingleLongTap => self.listener.on_single_long_tap(event),
            GestureKind::DoubleLongTap => self.listener.on_double_long_tap(event),
            GestureKind::SingleHorizontalSlide => self.listener.on_single_horizontal_slide(event),
            GestureKind::DoubleHorizontalSlide => self.listener.on_double_horizontal_slide(event),
            GestureKind::SingleHorizontalFlick { velocity } => {
                self.listener.on_single_horizontal_flick(event, velocity)
            }
            GestureKind::DoubleHorizontalFlick { velocity } => {
                self.listener.on_double_horizontal_flick(event, velocity)
            }
            GestureKind::UnTap => self.listener.on_un_tap(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PointerPhase;

    #[derive(Default)]
    struct RecordingListener {
        calls: Vec<String>,
    }

    impl GestureListener for RecordingListener {
        fn on_single_tap(&mut self, _event: PointerEvent) {
            self.calls.push("single_tap".into());
        }

        fn on_double_tap(&mut self, _event: PointerEvent) {
            self.calls.push("double_tap".into());
        }

        fn on_single_tap_confirmed(&mut self, _event: PointerEvent) {
            self.calls.push("single_tap_confirmed".into());
        }

        fn on_double_tap_confirmed(&mut self, _event: PointerEvent) {
            self.calls.push("double_tap_confirmed".into());
        }

        fn on_single_long_tap(&mut self, _event: PointerEvent) {
            self.calls.push("single_long_tap".into());
        }

        fn on_double_long_tap(&mut self, _event: PointerEvent) {
            self.calls.push("double_long_tap".into());
        }

        fn on_single_horizontal_slide(&mut self, _event: PointerEvent) {
            self.calls.push("single_horizontal_slide".into());
        }

        fn on_double_horizontal_slide(&mut self, _event: PointerEvent) {
            self.calls.push("double_horizontal_slide".into());
        }

        fn on_single_horizontal_flick(&mut self, _event: PointerEvent, velocity: f64) {
            self.calls.push(format!("single_horizontal_flick {velocity:.1}"));
        }

        fn on_double_horizontal_flick(&mut self, _event: PointerEvent, velocity: f64) {
            self.calls.push(format!("double_horizontal_flick {velocity:.1}"));
        }

        fn on_un_tap(&mut self, _event: PointerEvent) {
            self.calls.push("un_tap".into());
        }
    }

    fn event(t_ms: u64, x: f64, phase: PointerPhase) -> PointerEvent {
        PointerEvent {
            timestamp_ms: t_ms,
            x,
            y: 0.0,
            phase,
        }
    }

    #[test]
    fn double_tap_dispatches_single_first() {
        let mut classifier = GestureClassifier::new(RecordingListener::default());
        classifier.handle_event(event(0, 10.0, PointerPhase::Down));
        classifier.handle_event(event(150, 10.0, PointerPhase::Down));

        assert_eq!(
            classifier.listener().calls,
            vec!["single_tap", "single_tap", "double_tap"]
        );
    }

    #[test]
    fn release_dispatches_confirmation_before_untap() {
        let mut classifier = GestureClassifier::new(RecordingListener::default());
        classifier.handle_event(event(0, 10.0, PointerPhase::Down));
        classifier.handle_event(event(50, 10.0, PointerPhase::Up));

        assert_eq!(
            classifier.listener().calls,
            vec!["single_tap", "single_tap_confirmed", "un_tap"]
        );
    }

    #[test]
    fn flick_velocity_reaches_the_listener() {
        let mut classifier = GestureClassifier::new(RecordingListener::default());
        classifier.handle_event(event(0, 0.0, PointerPhase::Down));
        classifier.handle_event(event(50, 90.0, PointerPhase::Move));

        assert_eq!(
            classifier.listener().calls,
            vec!["single_tap", "single_horizontal_flick 1.8"]
        );
    }

    #[test]
    fn handle_event_always_returns_false() {
        let mut classifier = GestureClassifier::new(RecordingListener::default());

        assert!(!classifier.handle_event(event(0, 10.0, PointerPhase::Down)));
        assert!(!classifier.handle_event(event(50, 95.0, PointerPhase::Move)));
        assert!(!classifier.handle_event(event(60, 95.0, PointerPhase::Move)));
        assert!(!classifier.handle_event(event(80, 95.0, PointerPhase::Up)));
        assert!(!classifier.handle_event(event(90, 95.0, PointerPhase::Cancel)));
    }

    #[test]
    fn default_listener_methods_are_noops() {
        struct Quiet;
        impl GestureListener for Quiet {}

        let mut classifier = GestureClassifier::new(Quiet);
        classifier.handle_event(event(0, 10.0, PointerPhase::Down));
        classifier.handle_event(event(500, 10.0, PointerPhase::Move));
        classifier.handle_event(event(550, 10.0, PointerPhase::Up));
    }

    #[test]
    fn reconfiguring_with_the_same_threshold_is_idempotent() {
        let trace = [
            event(0, 0.0, PointerPhase::Down),
            event(60, 100.0, PointerPhase::Move),
            event(120, 160.0, PointerPhase::Move),
            event(150, 160.0, PointerPhase::Up),
        ];

        let mut once = GestureClassifier::new(RecordingListener::default());
        once.configure(0.8);
        for e in trace {
            once.handle_event(e);
        }

        let mut twice = GestureClassifier::new(RecordingListener::default());
        twice.configure(0.8);
        twice.configure(0.8);
        for e in trace {
            twice.handle_event(e);
        }

        assert_eq!(once.listener().calls, twice.listener().calls);
    }

    #[test]
    fn configure_applies_to_the_next_move() {
        let mut classifier = GestureClassifier::new(RecordingListener::default());
        classifier.handle_event(event(0, 0.0, PointerPhase::Down));
        classifier.configure(5.0);
        classifier.handle_event(event(50, 90.0, PointerPhase::Move));

        // 1.8 units/ms is below the new threshold, so this resolves as a slide.
        assert_eq!(
            classifier.listener().calls,
            vec!["single_tap", "single_horizontal_slide"]
        );
    }
}
