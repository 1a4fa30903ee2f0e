//! Integration tests for the event handler.
//!
//! These drive the board the way a host would: dispatch events, advance the
//! virtual clock with `ClockAdvanced`, and observe state, render flags, and
//! actions. The live update simulator is scripted (or its probability zeroed)
//! so every run is deterministic.

use super::*;
use crate::live::scripted::ScriptedRandom;
use crate::live::LiveUpdateSimulator;
use crate::store::seed::sample_questions;
use crate::Config;

const NOW: i64 = 1_700_000_000;

fn quiet_config() -> Config {
    // A zero chance makes every live tick a deterministic miss.
    Config {
        live_update_chance: 0.0,
        ..Config::default()
    }
}

fn board() -> AppState {
    AppState::new(sample_questions(NOW).unwrap(), quiet_config())
}

fn dispatch(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn tick(state: &mut AppState, now_ms: u64) -> (bool, Vec<Action>) {
    dispatch(state, Event::ClockAdvanced { now_ms })
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn set_filter_orders_resets_page_and_notifies() {
    let mut state = board();
    dispatch(&mut state, Event::GoToPage(2));
    assert_eq!(state.page, 2);

    let (render, actions) = dispatch(&mut state, Event::SetFilter(FilterMode::Votes));

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.page, 1);
    let votes: Vec<i64> = state.projection.iter().map(|q| q.votes).collect();
    assert_eq!(votes, vec![15, 12, 9, 8, 6, 4]);

    let notification = state.notifications.current().unwrap();
    assert_eq!(notification.message, "Filtered by votes");
    assert_eq!(notification.severity, Severity::Success);
}

#[test]
fn set_filter_twice_yields_identical_projection() {
    let mut state = board();

    dispatch(&mut state, Event::SetFilter(FilterMode::Votes));
    let first = state.projection.clone();
    dispatch(&mut state, Event::SetFilter(FilterMode::Votes));

    assert_eq!(state.projection, first);
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn page_navigation_clamps_and_scrolls() {
    let config = Config {
        page_size: 2,
        ..quiet_config()
    };
    let mut state = AppState::new(sample_questions(NOW).unwrap(), config);
    assert_eq!(state.total_pages(), 3);

    let (render, actions) = dispatch(&mut state, Event::GoToPage(0));
    assert!(render);
    assert_eq!(actions, vec![Action::ScrollToTop]);
    assert_eq!(state.page, 1);

    dispatch(&mut state, Event::GoToPage(9999));
    assert_eq!(state.page, 3);

    dispatch(&mut state, Event::NextPage);
    assert_eq!(state.page, 3);

    dispatch(&mut state, Event::PrevPage);
    assert_eq!(state.page, 2);
}

#[test]
fn page_navigation_reslices_without_recomputing() {
    let mut state = board();

    // Mutate the store underneath the projection; navigation must keep
    // serving the stale derived view.
    state.store.bump_views(0, 50);
    dispatch(&mut state, Event::GoToPage(2));

    assert_eq!(state.projection[0].views, 156);
    assert_eq!(state.store.records()[0].views, 206);
}

#[test]
fn every_page_of_every_mode_fits_the_page_size() {
    let modes = [
        FilterMode::All,
        FilterMode::Newest,
        FilterMode::Unanswered,
        FilterMode::Active,
        FilterMode::Votes,
        FilterMode::Views,
    ];

    for mode in modes {
        let mut state = board();
        dispatch(&mut state, Event::SetFilter(mode));
        for page in 0..5 {
            dispatch(&mut state, Event::GoToPage(page));
            let vm = state.compute_viewmodel(NOW);
            assert!(vm.cards.len() <= state.config.page_size);
        }
    }
}

// ---------------------------------------------------------------------------
// Search debounce
// ---------------------------------------------------------------------------

#[test]
fn rapid_search_input_coalesces_into_one_recompute() {
    let mut state = board();

    dispatch(&mut state, Event::SearchInput("re".to_string()));
    tick(&mut state, 100);
    dispatch(&mut state, Event::SearchInput("rea".to_string()));
    tick(&mut state, 200);
    dispatch(&mut state, Event::SearchInput("react".to_string()));

    // Inside the window nothing has been applied yet.
    let (render, _) = tick(&mut state, 499);
    assert!(!render);
    assert_eq!(state.search_term, "");
    assert_eq!(state.projection.len(), 6);

    // The final input's window closes at 200 + 300.
    let (render, _) = tick(&mut state, 500);
    assert!(render);
    assert_eq!(state.search_term, "react");
    assert_eq!(state.projection.len(), 2);
    assert_eq!(state.page, 1);

    let notification = state.notifications.current().unwrap();
    assert_eq!(notification.message, "Found 2 results");

    // The window fired exactly once; nothing is pending anymore.
    assert!(state.debouncer.pending().is_none());
    assert!(!state.timers.is_armed(TimerKind::SearchDebounce));
}

#[test]
fn search_results_keep_store_order_without_a_sort_mode() {
    let mut state = board();

    dispatch(&mut state, Event::SearchInput("react".to_string()));
    tick(&mut state, 300);

    let ids: Vec<u64> = state.projection.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 6]);
}

#[test]
fn blank_search_recomputes_without_a_notification() {
    let mut state = board();

    dispatch(&mut state, Event::SearchInput(String::new()));
    let (render, _) = tick(&mut state, 300);

    assert!(render);
    assert_eq!(state.projection.len(), 6);
    assert!(state.notifications.current().is_none());
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[test]
fn later_notification_supersedes_the_earlier_hide_deadline() {
    let mut state = board();

    dispatch(&mut state, Event::SetFilter(FilterMode::Votes));
    tick(&mut state, 1000);
    dispatch(&mut state, Event::SetFilter(FilterMode::Newest));

    // The first message's deadline (3000) must not clear the second.
    let (render, _) = tick(&mut state, 3999);
    assert!(!render);
    let notification = state.notifications.current().unwrap();
    assert_eq!(notification.message, "Filtered by newest");

    let (render, _) = tick(&mut state, 4000);
    assert!(render);
    assert!(state.notifications.current().is_none());
}

// ---------------------------------------------------------------------------
// Live updates
// ---------------------------------------------------------------------------

#[test]
fn live_bump_is_silent_under_unanswered_and_visible_after_switching() {
    let mut questions = sample_questions(NOW).unwrap();
    questions[3].answers = 0;

    let config = Config {
        live_update_chance: 0.05,
        ..Config::default()
    };
    let mut state = AppState::new(questions, config);
    state.simulator = LiveUpdateSimulator::new(
        0.05,
        5,
        Box::new(ScriptedRandom::new([0.01], [2], [5])),
    );

    dispatch(&mut state, Event::SetFilter(FilterMode::Unanswered));
    let ids: Vec<u64> = state.projection.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![4]);

    // Drain the filter notification's hide timer first.
    tick(&mut state, 3000);

    // The live tick lands on record index 2 (id 3, 234 views) with +5.
    let (render, actions) = tick(&mut state, 5000);
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.store.get(3).unwrap().views, 239);

    // Switching to a view-dependent filter surfaces the new count.
    dispatch(&mut state, Event::SetFilter(FilterMode::Views));
    assert_eq!(state.projection[0].id, 3);
    assert_eq!(state.projection[0].views, 239);
}

#[test]
fn live_bump_rerenders_under_a_view_dependent_filter() {
    let config = Config {
        live_update_chance: 0.05,
        ..Config::default()
    };
    let mut state = AppState::new(sample_questions(NOW).unwrap(), config);
    state.simulator = LiveUpdateSimulator::new(
        0.05,
        5,
        Box::new(ScriptedRandom::new([0.01], [0], [4])),
    );

    dispatch(&mut state, Event::SetFilter(FilterMode::Views));
    tick(&mut state, 3000);

    let (render, _) = tick(&mut state, 5000);

    assert!(render);
    let bumped = state.projection.iter().find(|q| q.id == 1).unwrap();
    assert_eq!(bumped.views, 160);
}

#[test]
fn live_ticker_rearms_after_every_expiry() {
    let mut state = board();

    tick(&mut state, 5000);
    assert_eq!(state.timers.deadline(TimerKind::LiveUpdate), Some(10_000));

    tick(&mut state, 10_000);
    assert_eq!(state.timers.deadline(TimerKind::LiveUpdate), Some(15_000));
}

#[test]
fn live_miss_changes_nothing() {
    let mut state = board();
    let before: Vec<u64> = state.store.records().iter().map(|q| q.views).collect();

    let (render, _) = tick(&mut state, 5000);

    assert!(!render);
    let after: Vec<u64> = state.store.records().iter().map(|q| q.views).collect();
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

#[test]
fn switch_closes_now_and_opens_after_the_delay() {
    let mut state = board();

    dispatch(&mut state, Event::OpenOverlay(Overlay::Login));
    assert_eq!(state.overlays.current(), Some(Overlay::Login));

    let (render, _) = dispatch(
        &mut state,
        Event::SwitchOverlay {
            from: Overlay::Login,
            to: Overlay::Register,
        },
    );
    assert!(render);
    assert_eq!(state.overlays.current(), None);

    let (render, _) = tick(&mut state, 299);
    assert!(!render);
    assert_eq!(state.overlays.current(), None);

    let (render, _) = tick(&mut state, 300);
    assert!(render);
    assert_eq!(state.overlays.current(), Some(Overlay::Register));
}

#[test]
fn open_while_open_is_rejected_by_the_handler() {
    let mut state = board();

    dispatch(&mut state, Event::OpenOverlay(Overlay::Login));
    let (render, _) = dispatch(&mut state, Event::OpenOverlay(Overlay::Register));

    assert!(!render);
    assert_eq!(state.overlays.current(), Some(Overlay::Login));
}

#[test]
fn close_all_cancels_a_pending_switch() {
    let mut state = board();

    dispatch(&mut state, Event::OpenOverlay(Overlay::Login));
    dispatch(
        &mut state,
        Event::SwitchOverlay {
            from: Overlay::Login,
            to: Overlay::Register,
        },
    );
    let (render, _) = dispatch(&mut state, Event::CloseAllOverlays);
    assert!(render);

    tick(&mut state, 1000);
    assert_eq!(state.overlays.current(), None);
    assert!(!state.timers.is_armed(TimerKind::OverlaySwitch));
}

#[test]
fn close_all_with_nothing_open_renders_nothing() {
    let mut state = board();
    let (render, _) = dispatch(&mut state, Event::CloseAllOverlays);
    assert!(!render);
}

// ---------------------------------------------------------------------------
// Auth session
// ---------------------------------------------------------------------------

#[test]
fn login_closes_the_overlay_and_greets() {
    let mut state = board();
    dispatch(&mut state, Event::OpenOverlay(Overlay::Login));

    let (render, _) = dispatch(
        &mut state,
        Event::SubmitLogin {
            email: "dev@stackit.io".to_string(),
            password: "hunter2".to_string(),
        },
    );

    assert!(render);
    assert_eq!(state.user.as_deref(), Some("dev"));
    assert_eq!(state.overlays.current(), None);
    assert_eq!(
        state.notifications.current().unwrap().message,
        "Welcome back!"
    );
}

#[test]
fn login_with_missing_fields_keeps_the_overlay_open() {
    let mut state = board();
    dispatch(&mut state, Event::OpenOverlay(Overlay::Login));

    let (render, _) = dispatch(
        &mut state,
        Event::SubmitLogin {
            email: "  ".to_string(),
            password: "hunter2".to_string(),
        },
    );

    assert!(!render);
    assert_eq!(state.user, None);
    assert_eq!(state.overlays.current(), Some(Overlay::Login));
}

#[test]
fn register_creates_the_session() {
    let mut state = board();
    dispatch(&mut state, Event::OpenOverlay(Overlay::Register));

    let (render, _) = dispatch(
        &mut state,
        Event::SubmitRegister {
            username: "ferris".to_string(),
            email: "ferris@stackit.io".to_string(),
            password: "crab".to_string(),
        },
    );

    assert!(render);
    assert_eq!(state.user.as_deref(), Some("ferris"));
    assert_eq!(state.overlays.current(), None);
    assert_eq!(
        state.notifications.current().unwrap().message,
        "Account created successfully!"
    );
}

#[test]
fn logout_clears_the_session() {
    let mut state = board();
    state.user = Some("dev".to_string());

    let (render, _) = dispatch(&mut state, Event::Logout);
    assert!(render);
    assert_eq!(state.user, None);

    let (render, _) = dispatch(&mut state, Event::Logout);
    assert!(!render);
}

// ---------------------------------------------------------------------------
// Source collaborator
// ---------------------------------------------------------------------------

#[test]
fn refresh_asks_the_host_to_fetch() {
    let mut state = board();

    let (render, actions) = dispatch(&mut state, Event::Refresh);

    assert!(!render);
    assert_eq!(actions, vec![Action::Fetch(SourceRequest::LoadQuestions)]);
}

#[test]
fn loaded_response_replaces_the_store() {
    let mut state = board();
    dispatch(&mut state, Event::GoToPage(2));

    let fresh = vec![crate::domain::Question::new(
        1,
        "fresh".to_string(),
        "from the server".to_string(),
        "api".to_string(),
        NOW,
    )];
    let (render, _) = dispatch(
        &mut state,
        Event::SourceResponse(SourceResponse::Loaded { questions: fresh }),
    );

    assert!(render);
    assert_eq!(state.store.len(), 1);
    assert_eq!(state.projection.len(), 1);
    assert_eq!(state.page, 1);
}

#[test]
fn failed_response_notifies_and_leaves_state_untouched() {
    let mut state = board();
    dispatch(&mut state, Event::SetFilter(FilterMode::Votes));
    let store_before = state.store.clone();
    let projection_before = state.projection.clone();

    let error = crate::source::ApiError::Http { status: 500 };
    let (render, _) = dispatch(
        &mut state,
        Event::SourceResponse(SourceResponse::from_error(&error)),
    );

    assert!(render);
    assert_eq!(state.store, store_before);
    assert_eq!(state.projection, projection_before);

    let notification = state.notifications.current().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, "HTTP error: status 500");
}

// ---------------------------------------------------------------------------
// Detail screen
// ---------------------------------------------------------------------------

#[test]
fn detail_screen_round_trip() {
    let mut state = board();

    let (render, _) = dispatch(&mut state, Event::ViewQuestion(3));
    assert!(render);
    assert_eq!(state.screen, Screen::Question(3));

    let vm = state.compute_viewmodel(NOW);
    assert_eq!(vm.detail.unwrap().id, 3);
    assert!(vm.cards.is_empty());

    let (render, _) = dispatch(&mut state, Event::CloseQuestion);
    assert!(render);
    assert_eq!(state.screen, Screen::List);
}

#[test]
fn unknown_question_id_is_ignored() {
    let mut state = board();

    let (render, _) = dispatch(&mut state, Event::ViewQuestion(404));

    assert!(!render);
    assert_eq!(state.screen, Screen::List);
}
