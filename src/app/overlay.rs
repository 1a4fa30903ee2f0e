//! Overlay (modal) state machine.
//!
//! The board shows at most one overlay at a time, the login or the
//! registration dialog. This module makes that invariant explicit instead
//! of trusting call sites: the controller is a two-state machine
//! (`Closed` / `Open(overlay)`) and every transition is a method that either
//! happens or reports that it did not.
//!
//! Switching between overlays is not an atomic swap. `switch` closes the
//! current overlay immediately, remembers the target, and the target opens
//! only when the host's switch-delay timer fires. The close transition
//! fully completes before the open begins, which is what lets a close
//! animation finish before the next dialog mounts.
//!
//! Opening while another overlay is already open is rejected (not queued):
//! the ≤ 1 invariant stays locally checkable and `switch` remains the one
//! sanctioned path from dialog to dialog.

use std::fmt;

/// The overlays the board can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// The sign-in dialog.
    Login,

    /// The account-creation dialog.
    Register,
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Login => "login",
            Self::Register => "register",
        };
        write!(f, "{name}")
    }
}

/// Visibility state of the overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// No overlay visible.
    #[default]
    Closed,

    /// Exactly one overlay visible.
    Open(Overlay),
}

/// State machine guarding the single-overlay invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayController {
    /// Current visibility state.
    state: OverlayState,

    /// Switch target waiting for the switch-delay timer.
    pending: Option<Overlay>,
}

impl OverlayController {
    /// Creates a controller with everything closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The overlay currently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<Overlay> {
        match self.state {
            OverlayState::Closed => None,
            OverlayState::Open(overlay) => Some(overlay),
        }
    }

    /// Whether any overlay is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    /// The switch target waiting on the delay timer, if any.
    #[must_use]
    pub fn pending_switch(&self) -> Option<Overlay> {
        self.pending
    }

    /// Opens `overlay` from the closed state.
    ///
    /// Returns `false` (and changes nothing) when another overlay is
    /// already open. A direct open supersedes any pending switch target:
    /// the user acted again before the delayed open happened, so the stale
    /// target is dropped.
    pub fn open(&mut self, overlay: Overlay) -> bool {
        match self.state {
            OverlayState::Closed => {
                self.pending = None;
                self.state = OverlayState::Open(overlay);
                tracing::debug!(overlay = %overlay, "overlay opened");
                true
            }
            OverlayState::Open(existing) => {
                tracing::debug!(
                    overlay = %overlay,
                    open = %existing,
                    "open rejected, another overlay is visible"
                );
                false
            }
        }
    }

    /// Closes `overlay` if it is the one currently shown.
    ///
    /// Returns whether the state changed. Closing an overlay that is not
    /// open is a no-op, which makes backdrop-click handlers safe to wire
    /// to every dialog unconditionally.
    pub fn close(&mut self, overlay: Overlay) -> bool {
        if self.state == OverlayState::Open(overlay) {
            self.state = OverlayState::Closed;
            tracing::debug!(overlay = %overlay, "overlay closed");
            true
        } else {
            false
        }
    }

    /// Forces everything closed: the visible overlay and any pending switch.
    ///
    /// Used by escape-key and backdrop handling. Returns whether anything
    /// was dismissed. The caller also cancels the switch-delay timer.
    pub fn close_all(&mut self) -> bool {
        let dismissed = self.is_open() || self.pending.is_some();
        self.state = OverlayState::Closed;
        self.pending = None;

        if dismissed {
            tracing::debug!("all overlays dismissed");
        }

        dismissed
    }

    /// Begins a switch from `from` to `to`.
    ///
    /// Closes `from` immediately and records `to` as the pending target;
    /// the caller arms the switch-delay timer and later calls
    /// [`OverlayController::take_pending`] when it fires. Returns `false`
    /// when `from` is not the overlay currently shown.
    pub fn begin_switch(&mut self, from: Overlay, to: Overlay) -> bool {
        if self.state != OverlayState::Open(from) {
            tracing::debug!(from = %from, to = %to, "switch rejected, source not open");
            return false;
        }

        self.state = OverlayState::Closed;
        self.pending = Some(to);
        tracing::debug!(from = %from, to = %to, "overlay switch begun");
        true
    }

    /// Takes the pending switch target when the delay timer fires.
    ///
    /// Returns `None` for a stale expiry (the switch was superseded or
    /// dismissed while the timer ran).
    pub fn take_pending(&mut self) -> Option<Overlay> {
        self.pending.take()
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
