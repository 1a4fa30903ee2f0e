//! Board state container and view model computation.
//!
//! This module defines [`AppState`], which owns the record store, the query
//! state, and the derived projection, along with pagination bookkeeping and
//! view model generation. It is the single source of truth for everything
//! the renderer shows.
//!
//! # Architecture
//!
//! `AppState` separates source data (the record store) from derived state
//! (the projection and the current page) and transient UI state (overlay,
//! notification, pending search input). Derived state is recomputed, never
//! patched: any change that could invalidate the projection re-derives it
//! through the pure pipeline.
//!
//! # State Components
//!
//! - **Record store**: the source question collection
//! - **Query state**: filter mode, applied search term, current page
//! - **Projection**: the derived filtered/sorted/searched view
//! - **Overlay / notification**: transient surfaces, orthogonal to the list
//! - **Timers / debouncer / simulator**: time-coupled machinery

use crate::app::modes::{FilterMode, Screen};
use crate::app::notify::{Notification, NotificationSlot, Severity};
use crate::app::overlay::OverlayController;
use crate::domain::Question;
use crate::live::{LiveUpdateSimulator, ThreadRandom};
use crate::pipeline;
use crate::store::RecordStore;
use crate::time::{SearchDebouncer, TimerKind, TimerService};
use crate::ui::viewmodel::{BoardViewModel, EmptyState, NotificationView, QuestionCard};
use crate::Config;

/// Central state container for the board.
///
/// Mutated exclusively by the event handler; hosts read it through the view
/// model. Construction arms the live update ticker, so a freshly created
/// state is already "running" once the host starts advancing the clock.
#[derive(Debug)]
pub struct AppState {
    /// Source collection of question records.
    pub store: RecordStore,

    /// Active filter/sort mode.
    pub filter: FilterMode,

    /// The search term currently applied to the projection.
    ///
    /// Pending (not yet debounced) input lives in `debouncer`, not here.
    pub search_term: String,

    /// Current 1-based page number.
    pub page: usize,

    /// The derived projection for the current query state.
    ///
    /// Recomputed by [`AppState::recompute`] on every invalidating change.
    /// Pagination navigation only re-slices it.
    pub projection: Vec<Question>,

    /// Which screen is showing (list or a question's detail view).
    pub screen: Screen,

    /// Overlay (modal) state machine.
    pub overlays: OverlayController,

    /// Single-slot notification surface.
    pub notifications: NotificationSlot,

    /// Pending search input and its debounce window.
    pub debouncer: SearchDebouncer,

    /// Simulated external activity on the store.
    pub simulator: LiveUpdateSimulator,

    /// Deadline bookkeeping for every delayed behavior.
    pub timers: TimerService,

    /// Signed-in username, if any.
    pub user: Option<String>,

    /// Behavior knobs (page size, delays, probabilities).
    pub config: Config,
}

impl AppState {
    /// Creates a new application state over an initial record collection.
    ///
    /// Computes the initial projection and arms the live update ticker.
    /// The state starts on page 1, unfiltered, with no search term.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackit_board::app::AppState;
    /// use stackit_board::Config;
    ///
    /// let state = AppState::new(vec![], Config::default());
    /// assert_eq!(state.page, 1);
    /// assert!(state.projection.is_empty());
    /// ```
    #[must_use]
    pub fn new(questions: Vec<Question>, config: Config) -> Self {
        let simulator = LiveUpdateSimulator::new(
            config.live_update_chance,
            config.live_bump_max,
            Box::new(ThreadRandom),
        );

        let mut state = Self {
            store: RecordStore::new(questions),
            filter: FilterMode::default(),
            search_term: String::new(),
            page: 1,
            projection: Vec::new(),
            screen: Screen::default(),
            overlays: OverlayController::new(),
            notifications: NotificationSlot::new(),
            debouncer: SearchDebouncer::new(config.debounce_ms),
            simulator,
            timers: TimerService::new(),
            user: None,
            config,
        };

        state.recompute();
        state.timers.arm(TimerKind::LiveUpdate, state.config.live_tick_ms);
        state
    }

    /// Re-derives the projection from the store and the current query state.
    ///
    /// Pure pipeline call; does not touch the page number. Callers decide
    /// whether their change resets pagination.
    pub fn recompute(&mut self) {
        self.projection = pipeline::project(self.store.records(), self.filter, &self.search_term);
    }

    /// Total page count for the current projection.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        pipeline::total_pages(self.projection.len(), self.config.page_size)
    }

    /// Clamps and applies a page navigation request.
    ///
    /// Out-of-range requests (including page 0) are silently clamped into
    /// `[1, max(1, total_pages)]`. Returns the page actually landed on.
    pub fn go_to_page(&mut self, requested: usize) -> usize {
        self.page = pipeline::paginate::clamp_page(requested, self.total_pages());
        self.page
    }

    /// Shows a notification and (re-)arms its auto-hide timer.
    ///
    /// A message already in the slot is replaced and its hide deadline
    /// superseded; the new message gets the full display duration.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let hide_at = self.timers.arm(TimerKind::NotificationHide, self.config.notification_ms);
        self.notifications.show(Notification {
            message: message.into(),
            severity,
            hide_at,
        });
    }

    /// Computes the renderable view model for the current state.
    ///
    /// `now` is the wall-clock Unix timestamp used for age labels; passing
    /// it in keeps the computation reproducible.
    ///
    /// # Structure
    ///
    /// - List screen: the current page's cards plus the page strip; an
    ///   explicit empty state when the projection is empty.
    /// - Detail screen: the selected question as `detail`, list fields
    ///   empty.
    /// - Notification and overlay state ride along on both screens.
    #[must_use]
    pub fn compute_viewmodel(&self, now: i64) -> BoardViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", screen = ?self.screen).entered();

        let notification = self.notifications.current().map(|n| NotificationView {
            message: n.message.clone(),
            severity: n.severity,
        });

        if let Screen::Question(id) = self.screen {
            if let Some(question) = self.store.get(id) {
                return BoardViewModel {
                    cards: Vec::new(),
                    page_strip: Vec::new(),
                    current_page: self.page,
                    total_pages: self.total_pages(),
                    result_count: self.projection.len(),
                    empty_state: None,
                    detail: Some(Self::card_for(question, now)),
                    notification,
                    overlay: self.overlays.current(),
                    user: self.user.clone(),
                };
            }
            // Stale detail id (record replaced underneath); fall through to
            // the list so the user is not stranded on a blank screen.
            tracing::debug!(id = id, "detail record missing, rendering list");
        }

        let page = pipeline::paginate(&self.projection, self.config.page_size, self.page);

        let empty_state = if page.items.is_empty() {
            Some(EmptyState {
                message: "No questions found".to_string(),
                subtitle: "Try adjusting your search or filter criteria".to_string(),
            })
        } else {
            None
        };

        BoardViewModel {
            cards: page.items.iter().map(|q| Self::card_for(q, now)).collect(),
            page_strip: pipeline::page_strip(page.current_page, page.total_pages),
            current_page: page.current_page,
            total_pages: page.total_pages,
            result_count: self.projection.len(),
            empty_state,
            detail: None,
            notification,
            overlay: self.overlays.current(),
            user: self.user.clone(),
        }
    }

    /// Builds the display card for one question.
    fn card_for(question: &Question, now: i64) -> QuestionCard {
        QuestionCard {
            id: question.id,
            title: question.title.clone(),
            excerpt: question.excerpt.clone(),
            tags: question.tags.clone(),
            author: question.author.clone(),
            age: question.age_label(now),
            votes: question.votes,
            answers: question.answers,
            views: question.views,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
