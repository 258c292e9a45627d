//! The touch monitor.
//!
//! [`TouchMonitor`] binds one [`InputSource`] to a [`TouchEvents`] registry. Each call to
//! [`update`](TouchMonitor::update) classifies the frame and notifies at most one listener
//! collection. Hosts drive it directly or attach it to a
//! [`FrameScheduler`](crate::scheduler::FrameScheduler).
//!
//! # Lifecycle
//! `Active → TornDown`, once. Teardown closes the registry first, so any update that
//! still reaches the monitor afterwards finds nothing to notify. Dropping an active
//! monitor tears it down.
//!
//! # Example
//! ```
//! use singletouch::backends::virtual_input::VirtualInput;
//! use singletouch::{InputMode, ScreenPoint, TouchMonitor};
//!
//! let mut monitor = TouchMonitor::new(VirtualInput::new(InputMode::Pointer));
//! monitor.add_started_listener(|p| println!("down at {p}"));
//!
//! monitor.input_mut().move_pointer(ScreenPoint::new(12.0, 34.0));
//! monitor.input_mut().press(0);
//! monitor.update().expect("classify frame");
//! ```

use crate::classify::{Classification, PointerClassifier};
use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::event::ScreenPoint;
use crate::eventbus::{ListenerId, TouchEvents};
use crate::scheduler::FrameHook;
use crate::source::InputSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    TornDown,
}

pub struct TouchMonitor<S: InputSource> {
    input: S,
    classifier: PointerClassifier,
    events: TouchEvents,
    lifecycle: Lifecycle,
}

impl<S: InputSource> TouchMonitor<S> {
    pub fn new(input: S) -> Self {
        Self::with_config(input, MonitorConfig::default())
    }

    pub fn with_config(input: S, config: MonitorConfig) -> Self {
        tracing::debug!(
            button = config.button,
            mode_query = ?config.mode_query,
            "touch monitor created"
        );
        Self {
            input,
            classifier: PointerClassifier::new(&config),
            events: TouchEvents::new(),
            lifecycle: Lifecycle::Active,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Shared handle to this monitor's listeners.
    ///
    /// Clones stay valid after teardown but are inert.
    pub fn events(&self) -> TouchEvents {
        self.events.clone()
    }

    pub fn input(&self) -> &S {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut S {
        &mut self.input
    }

    pub fn add_started_listener(&self, listener: impl Fn(ScreenPoint) + 'static) -> ListenerId {
        self.events.add_started_listener(listener)
    }

    pub fn add_moved_listener(&self, listener: impl Fn(ScreenPoint) + 'static) -> ListenerId {
        self.events.add_moved_listener(listener)
    }

    pub fn add_ended_listener(&self, listener: impl Fn(ScreenPoint) + 'static) -> ListenerId {
        self.events.add_ended_listener(listener)
    }

    pub fn remove_started_listener(&self, id: ListenerId) -> bool {
        self.events.remove_started_listener(id)
    }

    pub fn remove_moved_listener(&self, id: ListenerId) -> bool {
        self.events.remove_moved_listener(id)
    }

    pub fn remove_ended_listener(&self, id: ListenerId) -> bool {
        self.events.remove_ended_listener(id)
    }

    /// Classify the current input without notifying anyone.
    pub fn classify(&mut self) -> Result<Classification, MonitorError> {
        self.classifier.classify(&self.input)
    }

    /// Run one frame: classify, then notify the matching collection.
    ///
    /// Returns the frame's classification. After teardown this returns
    /// [`Classification::NONE`] without touching the input source.
    ///
    /// A panicking listener unwinds out of this call; the monitor holds no borrows
    /// while listeners run, so the next update behaves normally.
    pub fn update(&mut self) -> Result<Classification, MonitorError> {
        if self.lifecycle == Lifecycle::TornDown {
            return Ok(Classification::NONE);
        }

        self.input.begin_frame();
        let frame = self.classifier.classify(&self.input)?;

        let Some(point) = frame.point() else {
            return Ok(frame);
        };

        #[cfg(feature = "debug-log")]
        tracing::trace!(state = %frame.state(), %point, "pointer frame");

        self.events.emit(frame.state(), point);
        Ok(frame)
    }

    /// Tear the monitor down. Listeners are cleared before anything else; later calls
    /// are no-ops.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.events.close();
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!("touch monitor torn down");
    }
}

impl<S: InputSource> FrameHook for TouchMonitor<S> {
    fn on_frame(&mut self) -> Result<(), MonitorError> {
        self.update().map(|_| ())
    }

    fn on_destroy(&mut self) {
        self.teardown();
    }
}

impl<S: InputSource> Drop for TouchMonitor<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
