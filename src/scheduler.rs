//! Frame scheduling.
//!
//! [`FrameHook`] is the host-facing side of a per-frame component: an update hook and a
//! teardown hook. [`FrameScheduler`] is a minimal driver for hosts without their own
//! frame loop (and for tests): it owns attached hooks, ticks them in attach order and
//! destroys them on detach or drop.
//!
//! The scheduler is the error boundary for its hooks. A hook that returns an error is
//! logged and reported from [`tick`](FrameScheduler::tick), but the remaining hooks still
//! run and the failing hook is ticked again next frame.

use crate::error::MonitorError;

/// Per-frame update and teardown hooks.
pub trait FrameHook {
    /// Called once per frame while attached.
    fn on_frame(&mut self) -> Result<(), MonitorError>;

    /// Called exactly once when the hook is detached or its scheduler is dropped.
    fn on_destroy(&mut self);
}

/// Identifies an attached hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HookId(u64);

/// A hook failure collected during [`FrameScheduler::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameFailure {
    pub hook: HookId,
    pub error: MonitorError,
}

#[derive(Default)]
pub struct FrameScheduler {
    next_id: u64,
    frame: u64,
    hooks: Vec<(HookId, Box<dyn FrameHook>)>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a hook. It is ticked from the next [`tick`](Self::tick) on.
    pub fn attach<H: FrameHook + 'static>(&mut self, hook: H) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        self.hooks.push((id, Box::new(hook)));
        tracing::debug!(hook = id.0, "frame hook attached");
        id
    }

    /// Detach and destroy a hook. Returns `false` if `id` is not attached.
    pub fn detach(&mut self, id: HookId) -> bool {
        let Some(idx) = self.hooks.iter().position(|(hid, _)| *hid == id) else {
            return false;
        };
        let (_, mut hook) = self.hooks.remove(idx);
        hook.on_destroy();
        tracing::debug!(hook = id.0, "frame hook detached");
        true
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run every attached hook once. Returns the failures of this frame, if any.
    pub fn tick(&mut self) -> Vec<FrameFailure> {
        let mut failures = Vec::new();
        for (id, hook) in self.hooks.iter_mut() {
            if let Err(error) = hook.on_frame() {
                tracing::warn!(hook = id.0, frame = self.frame, %error, "frame hook failed");
                failures.push(FrameFailure { hook: *id, error });
            }
        }
        self.frame += 1;
        failures
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        for (_, hook) in self.hooks.iter_mut() {
            hook.on_destroy();
        }
    }
}
