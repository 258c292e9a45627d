//! Listener registry.
//!
//! [`TouchEvents`] owns three ordered listener collections, one per notifying
//! [`PointerState`]. It is a cheap, cloneable handle over shared storage so listeners
//! can capture a clone and subscribe or unsubscribe from inside a notification.
//!
//! # Reentrancy
//! [`emit`](TouchEvents::emit) snapshots the target collection and releases its borrow
//! before calling anything. Changes made by a listener apply from the next emit:
//! - a listener removed mid-emit still receives the in-progress call
//! - a listener added mid-emit is first called on the next emit
//!
//! # Teardown
//! After [`close`](TouchEvents::close) every collection is empty, `emit` does nothing and
//! new subscriptions are accepted but never stored.

use crate::event::{PointerState, ScreenPoint};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the frame's screen point.
pub type TouchListener = Rc<dyn Fn(ScreenPoint)>;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
struct ListenerSet {
    on_started: Vec<(ListenerId, TouchListener)>,
    on_moved: Vec<(ListenerId, TouchListener)>,
    on_ended: Vec<(ListenerId, TouchListener)>,
}

impl ListenerSet {
    /// Collection for a notifying state; `None` has no collection.
    fn slot_mut(&mut self, state: PointerState) -> Option<&mut Vec<(ListenerId, TouchListener)>> {
        match state {
            PointerState::None => None,
            PointerState::Started => Some(&mut self.on_started),
            PointerState::Moved => Some(&mut self.on_moved),
            PointerState::Ended => Some(&mut self.on_ended),
        }
    }

    fn slot(&self, state: PointerState) -> Option<&Vec<(ListenerId, TouchListener)>> {
        match state {
            PointerState::None => None,
            PointerState::Started => Some(&self.on_started),
            PointerState::Moved => Some(&self.on_moved),
            PointerState::Ended => Some(&self.on_ended),
        }
    }

    fn clear(&mut self) {
        self.on_started.clear();
        self.on_moved.clear();
        self.on_ended.clear();
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    closed: bool,
    listeners: ListenerSet,
}

#[derive(Clone, Default)]
pub struct TouchEvents {
    inner: Rc<RefCell<Registry>>,
}

impl TouchEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to `state`.
    ///
    /// Subscribing to [`PointerState::None`] or to a closed registry returns an id that
    /// refers to nothing.
    pub fn add_listener(
        &self,
        state: PointerState,
        listener: impl Fn(ScreenPoint) + 'static,
    ) -> ListenerId {
        let mut reg = self.inner.borrow_mut();
        let id = ListenerId(reg.next_id);
        reg.next_id += 1;
        if reg.closed {
            return id;
        }
        if let Some(slot) = reg.listeners.slot_mut(state) {
            let listener: TouchListener = Rc::new(listener);
            slot.push((id, listener));
        }
        id
    }

    /// Unsubscribe `id` from `state`. Returns `true` if it was subscribed.
    pub fn remove_listener(&self, state: PointerState, id: ListenerId) -> bool {
        let mut reg = self.inner.borrow_mut();
        let Some(slot) = reg.listeners.slot_mut(state) else {
            return false;
        };
        match slot.iter().position(|(lid, _)| *lid == id) {
            Some(idx) => {
                slot.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn add_started_listener(&self, listener: impl Fn(ScreenPoint) + 'static) -> ListenerId {
        self.add_listener(PointerState::Started, listener)
    }

    pub fn add_moved_listener(&self, listener: impl Fn(ScreenPoint) + 'static) -> ListenerId {
        self.add_listener(PointerState::Moved, listener)
    }

    pub fn add_ended_listener(&self, listener: impl Fn(ScreenPoint) + 'static) -> ListenerId {
        self.add_listener(PointerState::Ended, listener)
    }

    pub fn remove_started_listener(&self, id: ListenerId) -> bool {
        self.remove_listener(PointerState::Started, id)
    }

    pub fn remove_moved_listener(&self, id: ListenerId) -> bool {
        self.remove_listener(PointerState::Moved, id)
    }

    pub fn remove_ended_listener(&self, id: ListenerId) -> bool {
        self.remove_listener(PointerState::Ended, id)
    }

    pub fn listener_count(&self, state: PointerState) -> usize {
        self.inner.borrow().listeners.slot(state).map_or(0, Vec::len)
    }

    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// Notify every listener of `state`, in subscription order. Returns how many ran.
    pub fn emit(&self, state: PointerState, point: ScreenPoint) -> usize {
        let snapshot: Vec<TouchListener> = {
            let reg = self.inner.borrow();
            if reg.closed {
                return 0;
            }
            match reg.listeners.slot(state) {
                Some(slot) => slot.iter().map(|(_, l)| Rc::clone(l)).collect(),
                None => return 0,
            }
        };
        for listener in &snapshot {
            listener(point);
        }
        snapshot.len()
    }

    /// Drop every listener and refuse new ones. Irreversible.
    pub fn close(&self) {
        let mut reg = self.inner.borrow_mut();
        reg.listeners.clear();
        reg.closed = true;
    }
}

impl fmt::Debug for TouchEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reg = self.inner.borrow();
        f.debug_struct("TouchEvents")
            .field("started", &reg.listeners.on_started.len())
            .field("moved", &reg.listeners.on_moved.len())
            .field("ended", &reg.listeners.on_ended.len())
            .field("closed", &reg.closed)
            .finish()
    }
}
