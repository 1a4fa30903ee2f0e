//! View model types representing renderable board state.
//!
//! View models are immutable snapshots computed from `AppState`, containing
//! only display-ready data: formatted ages, a pre-built page strip, the
//! resolved empty state. They carry no business logic, which keeps render
//! adapters trivial and the computation testable without a surface.

use crate::app::notify::Severity;
use crate::app::overlay::Overlay;
use crate::pipeline::PageControl;

/// Complete view model for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardViewModel {
    /// Cards for the visible page of the list screen.
    ///
    /// Empty on the detail screen or when the projection has no matches.
    pub cards: Vec<QuestionCard>,

    /// Pager controls; empty when there is at most one page.
    pub page_strip: Vec<PageControl>,

    /// The (clamped) page being shown.
    pub current_page: usize,

    /// Total page count; 0 for an empty projection.
    pub total_pages: usize,

    /// Size of the full projection, for "Found N results" style headers.
    pub result_count: usize,

    /// Explicit empty-state copy when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// The question shown on the detail screen, if that screen is active.
    pub detail: Option<QuestionCard>,

    /// The visible notification, if any.
    pub notification: Option<NotificationView>,

    /// The open overlay, if any.
    pub overlay: Option<Overlay>,

    /// Signed-in username for the header, if any.
    pub user: Option<String>,
}

/// Display information for a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    /// Record identifier, for navigation callbacks.
    pub id: u64,

    /// Headline text.
    pub title: String,

    /// Body preview.
    pub excerpt: String,

    /// Topic tags in display order.
    pub tags: Vec<String>,

    /// Asker's display name.
    pub author: String,

    /// Pre-formatted relative age ("2h ago").
    pub age: String,

    /// Net vote score.
    pub votes: i64,

    /// Answer count.
    pub answers: u32,

    /// View count.
    pub views: u64,
}

/// Empty-state message shown when no questions match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No questions found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Display information for the notification slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    /// Message text.
    pub message: String,

    /// Severity, controlling presentation.
    pub severity: Severity,
}
