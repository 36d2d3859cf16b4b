//! Cancellable delayed tasks driven by an explicit clock.
//!
//! Nothing here reads wall-clock time: the owner advances the clock with
//! `advance` and receives the tasks that came due. Dropping the scheduler
//! drops every pending task with it.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Duration,
    seq: u64,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        self.schedule_at(self.now + delay, task);
    }

    /// Queue `task` at an absolute clock time. A time in the past fires on
    /// the next drain.
    pub fn schedule_at(&mut self, due: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { due, seq, task });
    }

    /// Drop every pending task.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Advance the clock. Drain due tasks afterwards with `pop_due`; tasks
    /// queued while handling a due task are seen by the same drain.
    pub fn advance(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }

    /// Remove and return the earliest task due at the current time, with
    /// the time it was due. Ties fire in scheduling order.
    pub fn pop_due(&mut self) -> Option<(Duration, T)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= self.now)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let fired = self.pending.swap_remove(idx);
        Some((fired.due, fired.task))
    }
}
