use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use crate::config::{
    DEFAULT_FLICK_VELOCITY_THRESHOLD, DOUBLE_TAP_WINDOW_MS, HORIZONTAL_MOVE_DEADZONE,
    LONG_TAP_WINDOW_MS,
};
use crate::event::{GestureEvent, GestureKind, GestureState, PointerEvent, PointerPhase};

#[derive(Clone, Copy, Debug)]
enum GestureHsmEvent {
    Pointer {
        event: PointerEvent,
        flick_velocity_threshold: f64,
    },
}

/// Gestures recognized while handling one pointer event, in emission order.
///
/// A single pointer event produces at most two gestures: a down can escalate a
/// tap into a double tap, and a release can confirm a tap before the un-tap.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureOutput {
    pub events: [Option<GestureEvent>; 2],
}

#[derive(Clone, Copy, Debug, Default)]
struct DispatchContext {
    events: [Option<GestureEvent>; 2],
}

impl DispatchContext {
    fn emit(&mut self, event: GestureEvent) {
        for slot in &mut self.events {
            if slot.is_none() {
                *slot = Some(event);
                return;
            }
        }
    }

    fn finish(self) -> GestureOutput {
        GestureOutput {
            events: self.events,
        }
    }
}

/// Pull-style classification core: feed pointer events, drain gestures.
///
/// Single-threaded and synchronous; callers running on more than one thread
/// must serialize access themselves.
pub struct GestureEngine {
    machine: statig::blocking::StateMachine<GestureHsm>,
    flick_velocity_threshold: f64,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::with_flick_velocity_threshold(DEFAULT_FLICK_VELOCITY_THRESHOLD)
    }

    pub fn with_flick_velocity_threshold(flick_velocity_threshold: f64) -> Self {
        Self {
            machine: GestureHsm::new().state_machine(),
            flick_velocity_threshold,
        }
    }

    /// Replaces the flick velocity threshold. Takes effect on the next move
    /// evaluation; has no other side effects.
    pub fn set_flick_velocity_threshold(&mut self, flick_velocity_threshold: f64) {
        self.flick_velocity_threshold = flick_velocity_threshold;
    }

    pub fn flick_velocity_threshold(&self) -> f64 {
        self.flick_velocity_threshold
    }

    /// Current recognition state. Note that the state outlives a release: it
    /// is only re-evaluated by the next down.
    pub fn state(&self) -> GestureState {
        self.machine.inner().state_tag
    }

    pub fn handle(&mut self, event: PointerEvent) -> GestureOutput {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(
            &GestureHsmEvent::Pointer {
                event,
                flick_velocity_threshold: self.flick_velocity_threshold,
            },
            &mut context,
        );
        for gesture in context.events.iter().flatten() {
            log::trace!(
                "recognized {:?} at {} ms",
                gesture.kind,
                gesture.event.timestamp_ms
            );
        }
        context.finish()
    }
}

#[derive(Clone, Copy)]
enum TapCount {
    Single,
    Double,
}

struct GestureHsm {
    last_down: Option<PointerEvent>,
    state_tag: GestureState,
}

impl GestureHsm {
    fn new() -> Self {
        Self {
            last_down: None,
            state_tag: GestureState::Unknown,
        }
    }

    fn emit(context: &mut DispatchContext, kind: GestureKind, event: PointerEvent) {
        context.emit(GestureEvent { kind, event });
    }

    /// A down always opens a fresh candidacy as a single tap; a second down
    /// inside the double-tap window escalates it on top of that, so both
    /// callbacks fire on the same event.
    fn press(&mut self, context: &mut DispatchContext, event: PointerEvent) -> Outcome<State> {
        Self::emit(context, GestureKind::SingleTap, event);

        let doubled = self.last_down.is_some_and(|down| {
            event.timestamp_ms.saturating_sub(down.timestamp_ms) < DOUBLE_TAP_WINDOW_MS
        });
        if doubled {
            Self::emit(context, GestureKind::DoubleTap, event);
        }

        self.last_down = Some(event);

        if doubled {
            self.state_tag = GestureState::DoubleTap;
            Transition(State::double_tap())
        } else {
            self.state_tag = GestureState::SingleTap;
            Transition(State::single_tap())
        }
    }

    /// Motion while intent is still undetermined. Displacement beyond the
    /// deadzone wins over elapsed time and resolves to a flick or a slide;
    /// otherwise an expired long-tap window resolves to a long tap.
    fn classify_motion(
        &mut self,
        context: &mut DispatchContext,
        event: PointerEvent,
        flick_velocity_threshold: f64,
        taps: TapCount,
    ) -> Outcome<State> {
        // Every press records a down, so only `unknown` can see this unset.
        let Some(down) = self.last_down else {
            return Handled;
        };

        let dx = event.x - down.x;
        let elapsed_ms = event.timestamp_ms.saturating_sub(down.timestamp_ms);

        if dx.abs() > HORIZONTAL_MOVE_DEADZONE {
            // Zero elapsed time has no finite velocity; it can never be a flick.
            let velocity = if elapsed_ms > 0 {
                Some(dx / elapsed_ms as f64)
            } else {
                None
            };

            match velocity {
                Some(velocity) if velocity.abs() > flick_velocity_threshold => match taps {
                    TapCount::Single => {
                        Self::emit(
                            context,
                            GestureKind::SingleHorizontalFlick { velocity },
                            event,
                        );
                        self.state_tag = GestureState::SingleFlick;
                        Transition(State::single_flick())
                    }
                    TapCount::Double => {
                        Self::emit(
                            context,
                            GestureKind::DoubleHorizontalFlick { velocity },
                            event,
                        );
                        self.state_tag = GestureState::DoubleFlick;
                        Transition(State::double_flick())
                    }
                },
                _ => match taps {
                    TapCount::Single => {
                        Self::emit(context, GestureKind::SingleHorizontalSlide, event);
                        self.state_tag = GestureState::SingleSlide;
                        Transition(State::single_slide())
                    }
                    TapCount::Double => {
                        Self::emit(context, GestureKind::DoubleHorizontalSlide, event);
                        self.state_tag = GestureState::DoubleSlide;
                        Transition(State::double_slide())
                    }
                },
            }
        } else if elapsed_ms > LONG_TAP_WINDOW_MS {
            match taps {
                TapCount::Single => {
                    Self::emit(context, GestureKind::SingleLongTap, event);
                    self.state_tag = GestureState::SingleLongTap;
                    Transition(State::single_long_tap())
                }
                TapCount::Double => {
                    Self::emit(context, GestureKind::DoubleLongTap, event);
                    self.state_tag = GestureState::DoubleLongTap;
                    Transition(State::double_long_tap())
                }
            }
        } else {
            // Still inside the deadzone and below the long-tap window; wait.
            Handled
        }
    }
}

#[state_machine(initial = "State::unknown()")]
impl GestureHsm {
    /// Phase handling shared by every state: a down re-arms the candidacy and
    /// a release always ends with an un-tap. Motion that no leaf state claims
    /// is ignored here, which is what latches the long-tap and flick states.
    #[superstate]
    fn candidacy(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let GestureHsmEvent::Pointer { event, .. } = *event;
        match event.phase {
            PointerPhase::Down => self.press(context, event),
            PointerPhase::Up | PointerPhase::Cancel => {
                Self::emit(context, GestureKind::UnTap, event);
                Handled
            }
            PointerPhase::Move => Handled,
        }
    }

    #[state(superstate = "candidacy")]
    fn unknown(&mut self, context: &mut DispatchContext, event: &GestureHsmEvent) -> Outcome<State> {
        let _ = context;
        let GestureHsmEvent::Pointer { event, .. } = event;
        match event.phase {
            PointerPhase::Move => {
                log::warn!("move event without a prior down event, ignoring");
                Handled
            }
            _ => Super,
        }
    }

    #[state(superstate = "candidacy")]
    fn single_tap(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let GestureHsmEvent::Pointer {
            event,
            flick_velocity_threshold,
        } = *event;
        match event.phase {
            PointerPhase::Move => {
                self.classify_motion(context, event, flick_velocity_threshold, TapCount::Single)
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                Self::emit(context, GestureKind::SingleTapConfirmed, event);
                Super
            }
            PointerPhase::Down => Super,
        }
    }

    #[state(superstate = "candidacy")]
    fn double_tap(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let GestureHsmEvent::Pointer {
            event,
            flick_velocity_threshold,
        } = *event;
        match event.phase {
            PointerPhase::Move => {
                self.classify_motion(context, event, flick_velocity_threshold, TapCount::Double)
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                Self::emit(context, GestureKind::DoubleTapConfirmed, event);
                Super
            }
            PointerPhase::Down => Super,
        }
    }

    #[state(superstate = "candidacy")]
    fn single_long_tap(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let _ = (context, event);
        Super
    }

    #[state(superstate = "candidacy")]
    fn double_long_tap(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let _ = (context, event);
        Super
    }

    #[state(superstate = "candidacy")]
    fn single_slide(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let GestureHsmEvent::Pointer { event, .. } = *event;
        match event.phase {
            PointerPhase::Move => {
                // Continuous tracking: every move in a slide re-fires the callback.
                Self::emit(context, GestureKind::SingleHorizontalSlide, event);
                Handled
            }
            _ => Super,
        }
    }

    #[state(superstate = "candidacy")]
    fn double_slide(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let GestureHsmEvent::Pointer { event, .. } = *event;
        match event.phase {
            PointerPhase::Move => {
                Self::emit(context, GestureKind::DoubleHorizontalSlide, event);
                Handled
            }
            _ => Super,
        }
    }

    #[state(superstate = "candidacy")]
    fn single_flick(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let _ = (context, event);
        Super
    }

    #[state(superstate = "candidacy")]
    fn double_flick(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        let _ = (context, event);
        Super
    }
}
