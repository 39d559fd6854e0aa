//! Keyed virtual-time timer queue.
//!
//! The core never sleeps. Components schedule tasks at absolute deadlines
//! (milliseconds on the host clock) and the host drains due tasks with
//! [`TimerQueue::pop_due`]. Tasks compare by value, which doubles as the
//! timer key: [`TimerQueue::restart`] replaces a pending equal task, which is
//! exactly `clearTimeout` followed by `setTimeout` for debounces.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

#[derive(Debug)]
struct Scheduled<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    pending: Vec<Scheduled<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self { pending: Vec::new(), next_seq: 0 }
    }
}

impl<T: PartialEq> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task; equal tasks may coexist.
    pub fn schedule(&mut self, due_ms: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due_ms, seq, task });
    }

    /// Cancel any pending equal task, then schedule this one.
    pub fn restart(&mut self, due_ms: u64, task: T) {
        self.cancel(&task);
        self.schedule(due_ms, task);
    }

    /// Drop every pending task equal to `task`; returns whether any existed.
    pub fn cancel(&mut self, task: &T) -> bool {
        let before = self.pending.len();
        self.pending.retain(|scheduled| &scheduled.task != task);
        self.pending.len() != before
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|scheduled| scheduled.due_ms).min()
    }

    /// Remove and return the earliest task due at or before `now_ms`, with
    /// its deadline. Tasks sharing a deadline come out in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, T)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due_ms <= now_ms)
            .min_by_key(|(_, scheduled)| (scheduled.due_ms, scheduled.seq))
            .map(|(index, _)| index)?;
        let scheduled = self.pending.remove(index);
        Some((scheduled.due_ms, scheduled.task))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
