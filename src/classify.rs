//! Frame classification.
//!
//! [`PointerClassifier`] turns one frame of [`InputSource`] state into a
//! [`Classification`]. It keeps no history between frames; the only thing it may
//! remember is the environment mode when configured with [`ModeQuery::Once`].

use crate::config::{ModeQuery, MonitorConfig};
use crate::error::MonitorError;
use crate::event::{PointerState, ScreenPoint};
use crate::source::{InputMode, InputSource};

/// Touch slot consulted in touch mode. Other slots are ignored.
pub const PRIMARY_TOUCH_SLOT: usize = 0;

/// Result of classifying a single frame.
///
/// `point` is `Some` exactly when `state` is not [`PointerState::None`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    state: PointerState,
    point: Option<ScreenPoint>,
}

impl Classification {
    pub const NONE: Classification = Classification {
        state: PointerState::None,
        point: None,
    };

    /// An active classification. Passing [`PointerState::None`] yields [`Classification::NONE`].
    pub fn active(state: PointerState, point: ScreenPoint) -> Self {
        if state.is_none() {
            return Self::NONE;
        }
        Self {
            state,
            point: Some(point),
        }
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    #[inline]
    pub fn point(&self) -> Option<ScreenPoint> {
        self.point
    }
}

#[derive(Clone, Debug)]
pub struct PointerClassifier {
    button: u16,
    mode_query: ModeQuery,
    cached_mode: Option<InputMode>,
}

impl PointerClassifier {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            button: config.button,
            mode_query: config.mode_query,
            cached_mode: None,
        }
    }

    pub fn button(&self) -> u16 {
        self.button
    }

    /// Mode to use for this frame, honouring the query policy.
    fn mode<S: InputSource + ?Sized>(&mut self, input: &S) -> InputMode {
        match self.mode_query {
            ModeQuery::EveryFrame => input.mode(),
            ModeQuery::Once => *self.cached_mode.get_or_insert_with(|| input.mode()),
        }
    }

    /// Classify the current frame.
    pub fn classify<S: InputSource + ?Sized>(
        &mut self,
        input: &S,
    ) -> Result<Classification, MonitorError> {
        match self.mode(input) {
            InputMode::Pointer => Ok(classify_pointer(input, self.button)),
            InputMode::Touch => classify_touch(input),
        }
    }
}

impl Default for PointerClassifier {
    fn default() -> Self {
        Self::new(&MonitorConfig::default())
    }
}

/// Pointer-mode rules. A press on this frame wins over "held".
pub fn classify_pointer<S: InputSource + ?Sized>(input: &S, button: u16) -> Classification {
    let state = if input.button_pressed(button) {
        PointerState::Started
    } else if input.button_held(button) {
        PointerState::Moved
    } else if input.button_released(button) {
        PointerState::Ended
    } else {
        return Classification::NONE;
    };
    Classification::active(state, input.pointer_position())
}

/// Touch-mode rules, reading [`PRIMARY_TOUCH_SLOT`] only.
///
/// An empty primary slot is `None` even while other slots hold contacts.
pub fn classify_touch<S: InputSource + ?Sized>(input: &S) -> Result<Classification, MonitorError> {
    if input.touch_count() == 0 {
        return Ok(Classification::NONE);
    }
    let Some(sample) = input.touch(PRIMARY_TOUCH_SLOT) else {
        return Ok(Classification::NONE);
    };
    let phase = sample.phase()?;
    Ok(Classification::active(phase.pointer_state(), sample.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualInput;
    use crate::event::{TouchPhase, TouchSample};

    fn pointer() -> VirtualInput {
        VirtualInput::new(InputMode::Pointer)
    }

    fn touch() -> VirtualInput {
        VirtualInput::new(InputMode::Touch)
    }

    #[test]
    fn idle_pointer_is_none() {
        let c = PointerClassifier::default().classify(&pointer()).unwrap();
        assert_eq!(c, Classification::NONE);
        assert_eq!(c.point(), None);
    }

    #[test]
    fn press_wins_over_held_on_the_same_frame() {
        let mut input = pointer();
        input.move_pointer(ScreenPoint::new(10.0, 20.0));
        input.press(0);
        assert!(input.button_held(0));

        let c = PointerClassifier::default().classify(&input).unwrap();
        assert_eq!(c.state(), PointerState::Started);
        assert_eq!(c.point(), Some(ScreenPoint::new(10.0, 20.0)));
    }

    #[test]
    fn held_without_press_is_moved() {
        let mut input = pointer();
        input.press(0);
        input.next_frame();
        let c = PointerClassifier::default().classify(&input).unwrap();
        assert_eq!(c.state(), PointerState::Moved);
    }

    #[test]
    fn release_is_ended() {
        let mut input = pointer();
        input.press(0);
        input.next_frame();
        input.release(0);
        let c = PointerClassifier::default().classify(&input).unwrap();
        assert_eq!(c.state(), PointerState::Ended);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = pointer();
        input.press(1);
        let c = PointerClassifier::default().classify(&input).unwrap();
        assert_eq!(c.state(), PointerState::None);

        let cfg = MonitorConfig {
            button: 1,
            ..MonitorConfig::default()
        };
        let mut classifier = PointerClassifier::new(&cfg);
        assert_eq!(classifier.button(), 1);
        let c = classifier.classify(&input).unwrap();
        assert_eq!(c.state(), PointerState::Started);
    }

    #[test]
    fn no_touches_is_none() {
        let c = PointerClassifier::default().classify(&touch()).unwrap();
        assert_eq!(c, Classification::NONE);
    }

    #[test]
    fn touch_phases_classify_by_slot_zero() {
        let cases = [
            (TouchPhase::Began, PointerState::Started),
            (TouchPhase::Moved, PointerState::Moved),
            (TouchPhase::Stationary, PointerState::Moved),
            (TouchPhase::Ended, PointerState::Ended),
            (TouchPhase::Canceled, PointerState::Ended),
        ];
        for (phase, expected) in cases {
            let mut input = touch();
            input.set_touch(0, TouchSample::new(phase, ScreenPoint::new(3.0, 4.0)));
            let c = PointerClassifier::default().classify(&input).unwrap();
            assert_eq!(c.state(), expected, "phase {phase:?}");
            assert_eq!(c.point(), Some(ScreenPoint::new(3.0, 4.0)));
        }
    }

    #[test]
    fn extra_touches_do_not_affect_slot_zero() {
        let mut input = touch();
        input.set_touch(0, TouchSample::new(TouchPhase::Stationary, ScreenPoint::new(1.0, 1.0)));
        input.set_touch(1, TouchSample::new(TouchPhase::Began, ScreenPoint::new(9.0, 9.0)));
        let c = PointerClassifier::default().classify(&input).unwrap();
        assert_eq!(c.state(), PointerState::Moved);
        assert_eq!(c.point(), Some(ScreenPoint::new(1.0, 1.0)));
    }

    #[test]
    fn unrecognized_phase_is_not_coerced() {
        let mut input = touch();
        input.set_touch(0, TouchSample::raw(42, ScreenPoint::ZERO));
        let err = PointerClassifier::default().classify(&input).unwrap_err();
        assert_eq!(err, MonitorError::UnrecognizedPhase { code: 42 });
    }

    #[test]
    fn second_finger_outliving_the_first_is_ignored() {
        let mut input = touch();
        let mut classifier = PointerClassifier::default();
        input.set_touch(0, TouchSample::new(TouchPhase::Began, ScreenPoint::new(1.0, 1.0)));
        input.set_touch(1, TouchSample::new(TouchPhase::Began, ScreenPoint::new(9.0, 9.0)));
        assert_eq!(classifier.classify(&input).unwrap().state(), PointerState::Started);
        input.next_frame();

        input.set_touch(0, TouchSample::new(TouchPhase::Ended, ScreenPoint::new(2.0, 2.0)));
        assert_eq!(classifier.classify(&input).unwrap().state(), PointerState::Ended);
        input.next_frame();

        assert_eq!(input.touch_count(), 1);
        for _ in 0..3 {
            assert_eq!(classifier.classify(&input).unwrap(), Classification::NONE);
            input.next_frame();
        }
    }

    #[test]
    fn pointer_mode_ignores_touches() {
        let mut input = pointer();
        input.set_touch(0, TouchSample::new(TouchPhase::Began, ScreenPoint::ZERO));
        let c = PointerClassifier::default().classify(&input).unwrap();
        assert_eq!(c.state(), PointerState::None);
    }

    #[test]
    fn every_frame_query_follows_mode_changes() {
        let mut input = pointer();
        input.press(0);
        input.set_touch(0, TouchSample::new(TouchPhase::Ended, ScreenPoint::ZERO));
        let mut classifier = PointerClassifier::default();

        assert_eq!(classifier.classify(&input).unwrap().state(), PointerState::Started);
        input.set_mode(InputMode::Touch);
        assert_eq!(classifier.classify(&input).unwrap().state(), PointerState::Ended);
    }

    #[test]
    fn once_query_keeps_first_mode() {
        let mut input = pointer();
        input.press(0);
        input.set_touch(0, TouchSample::new(TouchPhase::Ended, ScreenPoint::ZERO));
        let cfg = MonitorConfig {
            mode_query: ModeQuery::Once,
            ..MonitorConfig::default()
        };
        let mut classifier = PointerClassifier::new(&cfg);

        assert_eq!(classifier.classify(&input).unwrap().state(), PointerState::Started);
        input.set_mode(InputMode::Touch);
        assert_eq!(classifier.classify(&input).unwrap().state(), PointerState::Started);
    }

    #[test]
    fn active_with_none_state_collapses_to_none() {
        let c = Classification::active(PointerState::None, ScreenPoint::new(1.0, 2.0));
        assert_eq!(c, Classification::NONE);
    }
}
