#![cfg(target_os = "windows")]

//! Polled Win32 mouse source.
//!
//! `GetAsyncKeyState` only reports whether a button is down *now*, so press/release
//! edges are derived by comparing against the previous sample taken in
//! [`InputSource::begin_frame`]. The monitor calls `begin_frame` once per update, which
//! keeps edges exactly one frame long.
//!
//! Coordinates are virtual-screen pixels with the origin at the top-left of the primary
//! monitor, exactly as `GetCursorPos` reports them.

use crate::event::{ScreenPoint, TouchSample};
use crate::source::{InputMode, InputSource};
use windows_sys::Win32::Foundation::POINT;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, VK_LBUTTON, VK_MBUTTON, VK_RBUTTON, VK_XBUTTON1, VK_XBUTTON2,
};
use windows_sys::Win32::UI::WindowsAndMessaging::GetCursorPos;

/// Button index → virtual key. Index 0 is the primary button.
const BUTTON_KEYS: [u16; 5] = [VK_LBUTTON, VK_RBUTTON, VK_MBUTTON, VK_XBUTTON1, VK_XBUTTON2];

#[derive(Debug, Default)]
pub struct Win32Pointer {
    prev_down: u8,
    down: u8,
    position: ScreenPoint,
}

impl Win32Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn bit(button: u16) -> Option<u8> {
        ((button as usize) < BUTTON_KEYS.len()).then(|| 1u8 << button)
    }

    fn sample_buttons() -> u8 {
        let mut mask = 0u8;
        for (i, vk) in BUTTON_KEYS.iter().enumerate() {
            // High bit set = currently down.
            let state = unsafe { GetAsyncKeyState(*vk as i32) };
            if (state as u16) & 0x8000 != 0 {
                mask |= 1 << i;
            }
        }
        mask
    }

    fn sample_cursor() -> Option<ScreenPoint> {
        let mut pt = POINT { x: 0, y: 0 };
        let ok = unsafe { GetCursorPos(&mut pt) };
        (ok != 0).then(|| ScreenPoint::new(pt.x as f32, pt.y as f32))
    }
}

impl InputSource for Win32Pointer {
    fn mode(&self) -> InputMode {
        InputMode::Pointer
    }

    fn begin_frame(&mut self) {
        self.prev_down = self.down;
        self.down = Self::sample_buttons();
        // Keep the last known position when the desktop is locked or inaccessible.
        if let Some(p) = Self::sample_cursor() {
            self.position = p;
        }
    }

    fn button_pressed(&self, button: u16) -> bool {
        Self::bit(button).is_some_and(|b| self.down & b != 0 && self.prev_down & b == 0)
    }

    fn button_held(&self, button: u16) -> bool {
        Self::bit(button).is_some_and(|b| self.down & b != 0)
    }

    fn button_released(&self, button: u16) -> bool {
        Self::bit(button).is_some_and(|b| self.down & b == 0 && self.prev_down & b != 0)
    }

    fn pointer_position(&self) -> ScreenPoint {
        self.position
    }

    fn touch_count(&self) -> usize {
        0
    }

    fn touch(&self, _slot: usize) -> Option<TouchSample> {
        None
    }
}
