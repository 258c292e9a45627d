//! Host input abstraction.
//!
//! [`InputSource`] is everything the monitor needs to know about the current frame.
//! Hosts implement it over their windowing/input layer; tests and demos use
//! [`VirtualInput`](crate::backends::virtual_input::VirtualInput).
//!
//! All queries describe the *current* frame. Edge queries (`button_pressed`,
//! `button_released`) must be true only on the frame the transition happened.

use crate::event::{ScreenPoint, TouchSample};
use serde::{Deserialize, Serialize};

/// Which classification path the environment calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    /// Mouse-like pointer (desktop, editor, simulator).
    Pointer,
    /// Touch-capable surface.
    Touch,
}

pub trait InputSource {
    /// Environment mode for this frame.
    fn mode(&self) -> InputMode;

    /// Called once at the start of every monitor update, before any query.
    ///
    /// Stateful sources latch their per-frame edges here. The default does nothing.
    fn begin_frame(&mut self) {}

    /// `button` went down this frame.
    fn button_pressed(&self, button: u16) -> bool;

    /// `button` is currently down.
    fn button_held(&self, button: u16) -> bool;

    /// `button` went up this frame.
    fn button_released(&self, button: u16) -> bool;

    fn pointer_position(&self) -> ScreenPoint;

    /// Number of active touch contacts.
    fn touch_count(&self) -> usize;

    /// Contact in `slot`, if any.
    ///
    /// Slots are stable per finger and may be sparse: slot 0 can be empty while
    /// higher slots are active. The monitor reads slot 0 only and treats an empty
    /// slot 0 as no touch.
    fn touch(&self, slot: usize) -> Option<TouchSample>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn mode(&self) -> InputMode {
        (**self).mode()
    }
    fn begin_frame(&mut self) {
        (**self).begin_frame()
    }
    fn button_pressed(&self, button: u16) -> bool {
        (**self).button_pressed(button)
    }
    fn button_held(&self, button: u16) -> bool {
        (**self).button_held(button)
    }
    fn button_released(&self, button: u16) -> bool {
        (**self).button_released(button)
    }
    fn pointer_position(&self) -> ScreenPoint {
        (**self).pointer_position()
    }
    fn touch_count(&self) -> usize {
        (**self).touch_count()
    }
    fn touch(&self, slot: usize) -> Option<TouchSample> {
        (**self).touch(slot)
    }
}
