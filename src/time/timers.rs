//! Kind-keyed cancellable timer service.
//!
//! Every delayed behavior in the board owns exactly one logical timer slot,
//! identified by [`TimerKind`]. Arming a kind stores a deadline; arming it
//! again replaces the pending deadline (the previous one is cancelled);
//! advancing the clock drains every due deadline in order. Cancelling a kind
//! whose timer has already fired is a no-op.
//!
//! The service never reads a clock. Its notion of "now" is whatever the last
//! [`TimerService::advance`] call said, which makes expiry fully
//! deterministic under test.

use std::collections::BTreeMap;

/// The logical timer slots the board uses.
///
/// One slot per concern: a later arm of the same kind supersedes the earlier
/// one, which is the single-slot semantics debounce and notification
/// replacement are built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Trailing edge of the search debounce window.
    SearchDebounce,

    /// Auto-hide deadline of the visible notification.
    NotificationHide,

    /// Delay between closing one overlay and opening the next.
    OverlaySwitch,

    /// The live update simulator's tick.
    LiveUpdate,
}

/// Deadline bookkeeping for all timer kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerService {
    /// The instant of the most recent `advance` call, in milliseconds.
    now_ms: u64,

    /// Pending deadlines, at most one per kind.
    armed: BTreeMap<TimerKind, u64>,
}

impl TimerService {
    /// Creates a service with its clock at zero and nothing armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The service's current instant in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Arms `kind` to expire `delay_ms` from the current instant.
    ///
    /// Replaces any pending deadline for the same kind; the replaced timer
    /// will never fire. Returns the armed deadline.
    pub fn arm(&mut self, kind: TimerKind, delay_ms: u64) -> u64 {
        let deadline = self.now_ms + delay_ms;
        let replaced = self.armed.insert(kind, deadline);

        tracing::trace!(
            kind = ?kind,
            deadline = deadline,
            replaced = replaced.is_some(),
            "timer armed"
        );

        deadline
    }

    /// Cancels the pending timer for `kind`, if any.
    ///
    /// Returns whether a pending timer existed. Cancelling a kind whose
    /// timer already fired (or was never armed) is a no-op.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let cancelled = self.armed.remove(&kind).is_some();
        if cancelled {
            tracing::trace!(kind = ?kind, "timer cancelled");
        }
        cancelled
    }

    /// Whether `kind` currently has a pending deadline.
    #[must_use]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.armed.contains_key(&kind)
    }

    /// The pending deadline for `kind`, if armed.
    #[must_use]
    pub fn deadline(&self, kind: TimerKind) -> Option<u64> {
        self.armed.get(&kind).copied()
    }

    /// Advances the clock to `now_ms` and drains every due timer.
    ///
    /// Returns the expired kinds ordered by deadline (kind order breaks
    /// exact ties deterministically). The clock never moves backwards; an
    /// earlier instant leaves it where it was and only fires what is due.
    /// Each kind fires at most once per call; a handler that re-arms
    /// during processing gets a fresh, future deadline.
    pub fn advance(&mut self, now_ms: u64) -> Vec<TimerKind> {
        self.now_ms = self.now_ms.max(now_ms);

        let mut due: Vec<(u64, TimerKind)> = self
            .armed
            .iter()
            .filter(|(_, &deadline)| deadline <= self.now_ms)
            .map(|(&kind, &deadline)| (deadline, kind))
            .collect();
        due.sort_unstable();

        for (_, kind) in &due {
            self.armed.remove(kind);
        }

        if !due.is_empty() {
            tracing::trace!(now = self.now_ms, fired = due.len(), "timers fired");
        }

        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod tests;
