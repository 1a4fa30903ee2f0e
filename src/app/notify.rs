//! Single-slot transient notification surface.
//!
//! Feedback messages ("Filtered by votes", "Found 2 results") share one
//! display slot. A new message replaces whatever is showing and restarts the
//! auto-hide countdown: last writer wins, nothing queues. The countdown
//! itself is the [`crate::time::TimerKind::NotificationHide`] timer; this
//! module only holds what is visible and when it is due to disappear.

use std::fmt;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine confirmation feedback.
    Success,

    /// Something failed; state was left as it was.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text shown to the user.
    pub message: String,

    /// Severity, controlling presentation.
    pub severity: Severity,

    /// Timer-service instant (ms) at which the message auto-hides.
    pub hide_at: u64,
}

/// The single notification slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing any in-flight one.
    ///
    /// The caller re-arms the hide timer to match `hide_at`; the replaced
    /// message's deadline dies with it.
    pub fn show(&mut self, notification: Notification) {
        tracing::debug!(
            message = %notification.message,
            severity = %notification.severity,
            hide_at = notification.hide_at,
            replaced = self.current.is_some(),
            "notification shown"
        );
        self.current = Some(notification);
    }

    /// Clears the slot when the hide timer fires.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The visible notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Whether a notification is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
