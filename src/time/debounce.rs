//! Trailing-edge search debouncer.
//!
//! Text input arrives keystroke by keystroke; recomputing the projection on
//! every keystroke would thrash. The debouncer holds the most recent term and
//! relies on the timer service's replace-on-arm semantics: each keystroke
//! re-arms [`crate::time::TimerKind::SearchDebounce`], cancelling the pending
//! deadline, so only the final keystroke in a burst ever fires. When the
//! timer expires the handler takes the pending term and runs the recompute:
//! exactly one execution per burst, using the last value supplied.

/// Pending-term holder for the search debounce window.
///
/// The deadline itself lives in the timer service; this type only remembers
/// what to apply when the deadline fires and how long the window is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDebouncer {
    /// Debounce window length in milliseconds.
    delay_ms: u64,

    /// The most recent term, waiting for the window to close.
    pending: Option<String>,
}

impl SearchDebouncer {
    /// Creates a debouncer with the given window length.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// The debounce window length in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a new input, superseding any pending term.
    ///
    /// The caller re-arms the debounce timer alongside this call.
    pub fn set_pending(&mut self, term: String) {
        tracing::trace!(term_len = term.len(), "search input pending");
        self.pending = Some(term);
    }

    /// Takes the pending term when the debounce timer fires.
    ///
    /// Returns `None` if nothing is pending (a stale expiry after the term
    /// was already consumed).
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// The term currently waiting, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}
