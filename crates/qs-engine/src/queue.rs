//! Virtual clock and pending-event queue.
//!
//! # Design
//!
//! The queue owns the clock: `now` advances only when an event is popped
//! for dispatch, so a handler always observes the virtual time its event
//! was scheduled for.  Pending events form a min-heap ordered by
//! (time, insertion seq); the seq tie-break makes same-instant dispatch
//! FIFO, which is also what routes a released server to the
//! longest-waiting customer.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use qs_core::SimTime;

use crate::event::{Event, ScheduledEvent};

/// Priority queue of pending events plus the virtual clock.
pub struct EventQueue {
    heap:     BinaryHeap<Reverse<ScheduledEvent>>,
    next_seq: u64,
    now:      SimTime,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            heap:     BinaryHeap::new(),
            next_seq: 0,
            now:      SimTime::ZERO,
        }
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Insert `event` for dispatch at absolute time `at`.
    ///
    /// `at == now` is allowed; the event dispatches after everything
    /// already scheduled for this instant and before anything later.
    pub fn schedule(&mut self, at: SimTime, event: Event) {
        debug_assert!(at >= self.now, "cannot schedule into the past");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledEvent { time: at, seq, event }));
    }

    /// Insert `event` at the current instant.
    pub fn schedule_now(&mut self, event: Event) {
        self.schedule(self.now, event);
    }

    /// Pop the earliest event if it is due at or before `until`, advancing
    /// the clock to its timestamp.  Events past the horizon stay queued
    /// and are simply dropped with the queue when the run ends.
    pub fn pop_due(&mut self, until: SimTime) -> Option<(SimTime, Event)> {
        if self.heap.peek()?.0.time > until {
            return None;
        }
        let Reverse(entry) = self.heap.pop()?;
        self.now = entry.time;
        Some((entry.time, entry.event))
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
