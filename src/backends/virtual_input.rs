//! Scriptable in-memory input source.
//!
//! [`VirtualInput`] plays the role of a host input layer without any hardware. Script a
//! frame with [`press`](VirtualInput::press), [`release`](VirtualInput::release),
//! [`move_pointer`](VirtualInput::move_pointer) and [`set_touch`](VirtualInput::set_touch),
//! run the monitor, then call [`next_frame`](VirtualInput::next_frame) to advance.
//!
//! `next_frame` behaves like a real device between frames:
//! - pressed/released edges are cleared, held buttons stay held
//! - touches that `Began` become `Stationary`
//! - touches that `Ended` or were `Canceled` are removed

use crate::event::{ScreenPoint, TouchPhase, TouchSample};
use crate::source::{InputMode, InputSource};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
pub struct VirtualInput {
    mode: InputMode,
    pressed: BTreeSet<u16>,
    held: BTreeSet<u16>,
    released: BTreeSet<u16>,
    pointer: ScreenPoint,
    touches: BTreeMap<usize, TouchSample>,
    frames_begun: u64,
}

impl VirtualInput {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            pressed: BTreeSet::new(),
            held: BTreeSet::new(),
            released: BTreeSet::new(),
            pointer: ScreenPoint::ZERO,
            touches: BTreeMap::new(),
            frames_begun: 0,
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Press `button` this frame. It stays held until released.
    pub fn press(&mut self, button: u16) {
        self.pressed.insert(button);
        self.held.insert(button);
    }

    /// Release `button` this frame.
    pub fn release(&mut self, button: u16) {
        if self.held.remove(&button) {
            self.released.insert(button);
        }
    }

    pub fn move_pointer(&mut self, to: ScreenPoint) {
        self.pointer = to;
    }

    /// Set or replace the contact in `slot`.
    pub fn set_touch(&mut self, slot: usize, sample: TouchSample) {
        self.touches.insert(slot, sample);
    }

    pub fn clear_touch(&mut self, slot: usize) {
        self.touches.remove(&slot);
    }

    /// Number of times a monitor has started a frame on this source.
    pub fn frames_begun(&self) -> u64 {
        self.frames_begun
    }

    /// Advance to the next frame.
    pub fn next_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.touches.retain(|_, t| match t.phase() {
            Ok(TouchPhase::Ended | TouchPhase::Canceled) => false,
            _ => true,
        });
        for t in self.touches.values_mut() {
            if t.phase == TouchPhase::Began.code() {
                t.phase = TouchPhase::Stationary.code();
            }
        }
    }
}

impl Default for VirtualInput {
    fn default() -> Self {
        Self::new(InputMode::Pointer)
    }
}

impl InputSource for VirtualInput {
    fn mode(&self) -> InputMode {
        self.mode
    }

    fn begin_frame(&mut self) {
        self.frames_begun += 1;
    }

    fn button_pressed(&self, button: u16) -> bool {
        self.pressed.contains(&button)
    }

    fn button_held(&self, button: u16) -> bool {
        self.held.contains(&button)
    }

    fn button_released(&self, button: u16) -> bool {
        self.released.contains(&button)
    }

    fn pointer_position(&self) -> ScreenPoint {
        self.pointer
    }

    fn touch_count(&self) -> usize {
        self.touches.len()
    }

    fn touch(&self, slot: usize) -> Option<TouchSample> {
        self.touches.get(&slot).copied()
    }
}
