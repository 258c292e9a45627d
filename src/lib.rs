//! singletouch — per-frame single-pointer / single-touch monitor.
//!
//! Polls an [`InputSource`] once per frame, classifies the tracked mouse button or the
//! first touch contact into a [`PointerState`], and notifies the started, moved or ended
//! listeners registered on a [`TouchMonitor`].

pub mod backends;
pub mod classify;
pub mod config;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod monitor;
pub mod scheduler;
pub mod source;

pub use classify::{Classification, PointerClassifier};
pub use config::{ModeQuery, MonitorConfig};
pub use error::{ConfigError, MonitorError};
pub use event::*;
pub use eventbus::{ListenerId, TouchEvents};
pub use monitor::{Lifecycle, TouchMonitor};
pub use scheduler::{FrameHook, FrameScheduler, HookId};
pub use source::{InputMode, InputSource};
