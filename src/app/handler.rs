//! Event handling and state transitions.
//!
//! This module is the board's control-flow coordinator: it takes user input,
//! timer expirations, and source collaborator responses as events and turns
//! them into state changes plus a list of side effects for the host.
//!
//! # Architecture
//!
//! Data flows one way through the handler:
//! 1. Events arrive from the host or from the timer pump
//! 2. [`handle_event`] matches on the event and mutates `AppState`
//! 3. A render flag and actions are returned for the host to execute
//!
//! # Time
//!
//! There is no ambient clock. Hosts advance time explicitly with
//! [`Event::ClockAdvanced`]; the handler drains every due timer and
//! processes each expiry to completion before the next, so one cooperative
//! step never interleaves with another. Tests feed instants as literals.
//!
//! # Example
//!
//! ```
//! use stackit_board::app::{handle_event, AppState, Event, FilterMode};
//! use stackit_board::Config;
//!
//! let mut state = AppState::new(vec![], Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::SetFilter(FilterMode::Votes))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), stackit_board::domain::BoardError>(())
//! ```

use crate::app::modes::{FilterMode, Screen};
use crate::app::notify::Severity;
use crate::app::overlay::Overlay;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::source::{SourceRequest, SourceResponse};
use crate::store::RecordStore;
use crate::time::TimerKind;

/// Events triggered by user input, time passing, or collaborator responses.
///
/// Every stimulus the board reacts to is one of these variants. The handler
/// processes events strictly in arrival order, so state transitions are
/// deterministic for a given event sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Applies a filter/sort mode; resets to page 1 and recomputes.
    SetFilter(FilterMode),

    /// Records search input; the recompute waits for the debounce window.
    SearchInput(String),

    /// Navigates to a page; out-of-range numbers are clamped silently.
    GoToPage(usize),

    /// Navigates forward one page.
    NextPage,

    /// Navigates back one page.
    PrevPage,

    /// Opens the detail screen for a question.
    ViewQuestion(u64),

    /// Returns from the detail screen to the list.
    CloseQuestion,

    /// Opens an overlay (rejected while another is open).
    OpenOverlay(Overlay),

    /// Closes the named overlay if it is the one shown.
    CloseOverlay(Overlay),

    /// Closes `from` now, opens `to` after the switch delay.
    SwitchOverlay {
        /// The overlay being left; must be the one currently open.
        from: Overlay,
        /// The overlay to open once the delay elapses.
        to: Overlay,
    },

    /// Dismisses any overlay and any pending switch (escape / backdrop).
    CloseAllOverlays,

    /// Submits the login form. Field presence only; no real auth here.
    SubmitLogin {
        /// Account email; the part before `@` becomes the display name.
        email: String,
        /// Password, checked for presence only.
        password: String,
    },

    /// Submits the registration form. Field presence only.
    SubmitRegister {
        /// Desired display name.
        username: String,
        /// Account email.
        email: String,
        /// Password, checked for presence only.
        password: String,
    },

    /// Signs the current user out.
    Logout,

    /// Asks the host to fetch the question collection.
    Refresh,

    /// Delivers the outcome of a source collaborator fetch.
    SourceResponse(SourceResponse),

    /// Advances the board clock, firing every due timer.
    ClockAdvanced {
        /// The new instant in milliseconds.
        now_ms: u64,
    },
}

/// Processes an event, mutates application state, and returns what the host
/// must do next.
///
/// The boolean is the render flag: `true` means the visible state changed
/// and the host should recompute the view model and call its render
/// adapter. The action list carries imperative side effects (scrolling,
/// fetch requests) in execution order.
///
/// # Errors
///
/// Currently no transition fails; the `Result` is the seam through which
/// fallible collaborator handling grows without breaking hosts.
///
/// # Example
///
/// ```
/// use stackit_board::app::{handle_event, AppState, Event};
/// use stackit_board::Config;
///
/// let mut state = AppState::new(vec![], Config::default());
/// let (render, _) = handle_event(&mut state, &Event::GoToPage(3))?;
/// assert!(render);
/// assert_eq!(state.page, 1); // clamped: there is nothing to paginate
/// # Ok::<(), stackit_board::domain::BoardError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetFilter(mode) => {
            tracing::debug!(mode = %mode, "filter applied");
            state.filter = *mode;
            state.page = 1;
            state.recompute();
            state.notify(format!("Filtered by {mode}"), Severity::Success);
            Ok((true, vec![]))
        }
        Event::SearchInput(term) => {
            state.debouncer.set_pending(term.clone());
            let delay = state.debouncer.delay_ms();
            state.timers.arm(TimerKind::SearchDebounce, delay);
            Ok((false, vec![]))
        }
        Event::GoToPage(requested) => {
            let landed = state.go_to_page(*requested);
            tracing::debug!(requested = requested, landed = landed, "page navigation");
            Ok((true, vec![Action::ScrollToTop]))
        }
        Event::NextPage => {
            let landed = state.go_to_page(state.page + 1);
            tracing::debug!(landed = landed, "next page");
            Ok((true, vec![Action::ScrollToTop]))
        }
        Event::PrevPage => {
            let landed = state.go_to_page(state.page.saturating_sub(1));
            tracing::debug!(landed = landed, "previous page");
            Ok((true, vec![Action::ScrollToTop]))
        }
        Event::ViewQuestion(id) => {
            if state.store.get(*id).is_some() {
                state.screen = Screen::Question(*id);
                Ok((true, vec![]))
            } else {
                tracing::debug!(id = id, "unknown question id, staying on list");
                Ok((false, vec![]))
            }
        }
        Event::CloseQuestion => {
            if state.screen == Screen::List {
                Ok((false, vec![]))
            } else {
                state.screen = Screen::List;
                Ok((true, vec![]))
            }
        }
        Event::OpenOverlay(overlay) => {
            let opened = state.overlays.open(*overlay);
            if opened {
                // A direct open supersedes any half-finished switch.
                state.timers.cancel(TimerKind::OverlaySwitch);
            }
            Ok((opened, vec![]))
        }
        Event::CloseOverlay(overlay) => {
            let closed = state.overlays.close(*overlay);
            Ok((closed, vec![]))
        }
        Event::SwitchOverlay { from, to } => {
            if state.overlays.begin_switch(*from, *to) {
                let delay = state.config.overlay_switch_ms;
                state.timers.arm(TimerKind::OverlaySwitch, delay);
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::CloseAllOverlays => {
            let dismissed = state.overlays.close_all();
            state.timers.cancel(TimerKind::OverlaySwitch);
            Ok((dismissed, vec![]))
        }
        Event::SubmitLogin { email, password } => {
            let email = email.trim();
            if email.is_empty() || password.trim().is_empty() {
                tracing::debug!("login submitted with missing fields");
                return Ok((false, vec![]));
            }

            let username = email.split('@').next().unwrap_or(email).to_string();
            tracing::debug!(username = %username, "user signed in");

            state.user = Some(username);
            state.overlays.close(Overlay::Login);
            state.notify("Welcome back!", Severity::Success);
            Ok((true, vec![]))
        }
        Event::SubmitRegister {
            username,
            email,
            password,
        } => {
            let username = username.trim();
            if username.is_empty() || email.trim().is_empty() || password.trim().is_empty() {
                tracing::debug!("registration submitted with missing fields");
                return Ok((false, vec![]));
            }

            tracing::debug!(username = %username, "account created");

            state.user = Some(username.to_string());
            state.overlays.close(Overlay::Register);
            state.notify("Account created successfully!", Severity::Success);
            Ok((true, vec![]))
        }
        Event::Logout => {
            if state.user.take().is_some() {
                tracing::debug!("user signed out");
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::Refresh => Ok((false, vec![Action::Fetch(SourceRequest::LoadQuestions)])),
        Event::SourceResponse(response) => handle_source_response(state, response),
        Event::ClockAdvanced { now_ms } => {
            let due = state.timers.advance(*now_ms);

            let mut render = false;
            let mut actions = Vec::new();
            for kind in due {
                let (fired_render, mut fired_actions) = handle_timer(state, kind);
                render |= fired_render;
                actions.append(&mut fired_actions);
            }

            Ok((render, actions))
        }
    }
}

/// Applies a source collaborator response.
///
/// A successful load replaces the store wholesale and restarts the view on
/// page 1; a failure touches nothing except the notification slot.
fn handle_source_response(
    state: &mut AppState,
    response: &SourceResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        SourceResponse::Loaded { questions } => {
            tracing::debug!(count = questions.len(), "questions loaded from source");
            state.store = RecordStore::new(questions.clone());
            state.page = 1;
            state.recompute();
            Ok((true, vec![]))
        }
        SourceResponse::Failed { message } => {
            tracing::debug!(error = %message, "source fetch failed, keeping current state");
            state.notify(message.clone(), Severity::Error);
            Ok((true, vec![]))
        }
    }
}

/// Processes one timer expiry.
///
/// Runs to completion before the next due timer is looked at, so every
/// expiry owns its whole cooperative step.
fn handle_timer(state: &mut AppState, kind: TimerKind) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_timer", kind = ?kind).entered();

    match kind {
        TimerKind::SearchDebounce => {
            let Some(term) = state.debouncer.take() else {
                return (false, vec![]);
            };

            tracing::debug!(term = %term, "debounced search applied");

            state.search_term = term;
            state.page = 1;
            state.recompute();

            if !state.search_term.trim().is_empty() {
                let count = state.projection.len();
                state.notify(format!("Found {count} results"), Severity::Success);
            }

            (true, vec![])
        }
        TimerKind::NotificationHide => {
            state.notifications.clear();
            (true, vec![])
        }
        TimerKind::OverlaySwitch => match state.overlays.take_pending() {
            Some(target) => {
                let opened = state.overlays.open(target);
                (opened, vec![])
            }
            None => (false, vec![]),
        },
        TimerKind::LiveUpdate => {
            state.timers.arm(TimerKind::LiveUpdate, state.config.live_tick_ms);

            let Some(bump) = state.simulator.tick(state.store.len()) else {
                return (false, vec![]);
            };

            state.store.bump_views(bump.index, bump.delta);

            if state.filter.depends_on_views() {
                state.recompute();
                (true, vec![])
            } else {
                // The user keeps their stale projection; the fresh count
                // shows up on the next recompute.
                (false, vec![])
            }
        }
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
