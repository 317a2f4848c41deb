//! FIFO of translated key events between the poll tick and the frame loop.

use std::collections::VecDeque;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::translate::AppKey;

/// A translated key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub pressed: bool,
    pub code: AppKey,
}

impl KeyEvent {
    pub fn press(code: AppKey) -> Self {
        Self {
            pressed: true,
            code,
        }
    }

    pub fn release(code: AppKey) -> Self {
        Self {
            pressed: false,
            code,
        }
    }
}

/// What to do with an event that arrives while the queue is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Never drop; capacity is ignored.
    Unbounded,
    /// Evict the oldest queued event to make room.
    #[default]
    DropOldest,
    /// Discard the incoming event.
    DropNewest,
}

/// Single-producer, single-consumer event queue with an overflow policy.
///
/// Dropped events are counted until [`EventQueue::take_overflow`] is called.
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<KeyEvent>,
    capacity: usize,
    policy: OverflowPolicy,
    dropped: usize,
}

impl EventQueue {
    /// Bounded policies hold at least one event; a zero `capacity` is
    /// raised to 1.
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        let (capacity, reserve) = match policy {
            OverflowPolicy::Unbounded => (capacity, 0),
            _ => (capacity.max(1), capacity.max(1)),
        };
        Self {
            events: VecDeque::with_capacity(reserve),
            capacity,
            policy,
            dropped: 0,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(0, OverflowPolicy::Unbounded)
    }

    /// Append an event, applying the overflow policy if full.
    ///
    /// Returns `false` if the incoming event itself was discarded.
    pub fn enqueue(&mut self, event: KeyEvent) -> bool {
        if self.policy == OverflowPolicy::Unbounded || self.events.len() < self.capacity {
            self.events.push_back(event);
            return true;
        }

        self.record_drop();
        match self.policy {
            OverflowPolicy::DropOldest => {
                self.events.pop_front();
                self.events.push_back(event);
                true
            }
            _ => false,
        }
    }

    /// Remove the oldest event. `None` once the queue is drained.
    pub fn dequeue(&mut self) -> Option<KeyEvent> {
        self.events.pop_front()
    }

    pub fn peek(&self) -> Option<&KeyEvent> {
        self.events.front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard queued events. The overflow count is kept.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Whether any event was dropped since the last [`take_overflow`](Self::take_overflow).
    pub fn overflowed(&self) -> bool {
        self.dropped > 0
    }

    /// Number of events dropped since the last call, resetting the count.
    pub fn take_overflow(&mut self) -> usize {
        std::mem::take(&mut self.dropped)
    }

    fn record_drop(&mut self) {
        if self.dropped == 0 {
            warn!(
                "Key event queue full ({} events, {:?}); dropping input",
                self.capacity, self.policy
            );
        }
        self.dropped += 1;
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::unbounded()
    }
}
