//! Virtual-clock timer queue.
//!
//! Timers are fire-once callbacks ordered by deadline, ties broken by
//! scheduling order. The clock only moves when the owner advances it, so
//! tests and scripted replays are deterministic; the desktop shell feeds
//! it wall-clock time.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::dom::NodeId;

/// Work a timer performs when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Drop the `show-tip` marker from a certificate card
    HideTip { card: NodeId },
}

/// Handle to a pending timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle {
    deadline: Duration,
    seq: u64,
}

impl TimerHandle {
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<TimerHandle, TimerTask>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading, measured from page-ready.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a timer that fires `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle {
        let handle = TimerHandle {
            deadline: self.now + delay,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(handle, task);
        handle
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(TimerHandle::deadline)
    }

    /// Remove the earliest timer whose deadline the clock has passed by
    /// `until`, moving the clock to that deadline. A timer is still pending
    /// at the exact instant of its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerTask> {
        let (&handle, _) = self.pending.first_key_value()?;
        if handle.deadline >= until {
            return None;
        }
        let task = self.pending.remove(&handle)?;
        self.now = self.now.max(handle.deadline);
        Some(task)
    }

    /// Move the clock forward to `until` once every due timer has been
    /// popped. The clock never runs backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
