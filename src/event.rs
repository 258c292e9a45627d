//! Pointer states, screen points and touch phases.
//!
//! Every frame the monitor reduces raw input to exactly one [`PointerState`]. When the
//! state is anything other than [`PointerState::None`] it carries a [`ScreenPoint`]
//! taken from the pointer (pointer mode) or from touch slot 0 (touch mode).
//!
//! ## Value conventions
//! - **Screen points** are raw screen-pixel coordinates as reported by the host. No
//!   origin flip, DPI scaling or viewport mapping is applied.
//! - **Touch phases** are delivered by hosts as small integer codes (see [`TouchPhase`]).
//!   Unknown codes are reported as errors rather than silently ignored.

use crate::error::MonitorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-frame classification of the tracked pointer or touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerState {
    /// No pointer or touch activity this frame.
    None,
    /// Button pressed or finger placed this frame.
    Started,
    /// Button held or finger resting/moving on the surface.
    Moved,
    /// Button released or finger lifted (or cancelled) this frame.
    Ended,
}

impl PointerState {
    /// The three states that carry a notification, in lifecycle order.
    pub const NOTIFYING: [PointerState; 3] =
        [PointerState::Started, PointerState::Moved, PointerState::Ended];

    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, PointerState::None)
    }
}

impl fmt::Display for PointerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PointerState::None => "none",
            PointerState::Started => "started",
            PointerState::Moved => "moved",
            PointerState::Ended => "ended",
        };
        f.write_str(s)
    }
}

/// A position in screen-pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const ZERO: ScreenPoint = ScreenPoint { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for ScreenPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Lifecycle stage of a single touch contact.
///
/// Hosts report phases as raw codes; the numeric values are part of the host contract:
///
/// | code | phase        |
/// |------|--------------|
/// | 0    | `Began`      |
/// | 1    | `Moved`      |
/// | 2    | `Stationary` |
/// | 3    | `Ended`      |
/// | 4    | `Canceled`   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TouchPhase {
    Began = 0,
    Moved = 1,
    Stationary = 2,
    Ended = 3,
    Canceled = 4,
}

impl TouchPhase {
    /// Raw host code for this phase.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Pointer state a slot-0 contact in this phase maps to.
    pub fn pointer_state(self) -> PointerState {
        match self {
            TouchPhase::Began => PointerState::Started,
            TouchPhase::Moved | TouchPhase::Stationary => PointerState::Moved,
            TouchPhase::Ended | TouchPhase::Canceled => PointerState::Ended,
        }
    }
}

impl TryFrom<u8> for TouchPhase {
    type Error = MonitorError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TouchPhase::Began),
            1 => Ok(TouchPhase::Moved),
            2 => Ok(TouchPhase::Stationary),
            3 => Ok(TouchPhase::Ended),
            4 => Ok(TouchPhase::Canceled),
            code => Err(MonitorError::UnrecognizedPhase { code }),
        }
    }
}

/// Raw touch contact as reported by an [`InputSource`](crate::source::InputSource).
///
/// `phase` is kept as the host's raw code so that classification, not the host
/// adapter, decides what an unknown value means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub phase: u8,
    pub position: ScreenPoint,
}

impl TouchSample {
    pub fn new(phase: TouchPhase, position: ScreenPoint) -> Self {
        Self {
            phase: phase.code(),
            position,
        }
    }

    /// Build a sample from an arbitrary host code, valid or not.
    pub fn raw(phase: u8, position: ScreenPoint) -> Self {
        Self { phase, position }
    }

    /// Decode the phase code.
    pub fn phase(&self) -> Result<TouchPhase, MonitorError> {
        TouchPhase::try_from(self.phase)
    }
}
