//! StackIt board core: the client-side state engine behind the question list.
//!
//! This crate owns everything on the StackIt browse page that actually has
//! behavior: the record store of questions, the derived
//! filtered/sorted/searched projection, pagination, the search debounce,
//! the overlay (modal) state machine, the single-slot notification surface,
//! and the simulated live updates that bump view counters while the user
//! watches. Markup, styling, and network transport stay in the host.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (DOM shell, terminal, test harness)           │  ← drives events,
//! └─────────────────────────────────────────────────────┘    executes actions
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Event handling        - Overlay state machine    │
//! │  - Action dispatching    - Notification slot        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                  │                  │
//! ┌───────────────┐  ┌───────────────┐  ┌───────────────┐
//! │ Pipeline      │  │ Time Layer    │  │ Live Updates  │
//! │ (pipeline/)   │  │ (time/)       │  │ (live/)       │
//! │ - project     │  │ - timers      │  │ - simulator   │
//! │ - paginate    │  │ - debounce    │  │ - randomness  │
//! └───────────────┘  └───────────────┘  └───────────────┘
//!         │                  │                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  Store, Domain & Collaborator Boundaries            │
//! │  - Record store + seed (store/)                     │
//! │  - Question model, errors (domain/)                 │
//! │  - Source protocol (source/), render seam (ui/)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Question, errors)
//! - [`store`]: Record store and embedded seed data
//! - [`pipeline`]: Pure projection and pagination functions
//! - [`time`]: Clock capability, cancellable timers, search debounce
//! - [`live`]: Simulated out-of-band store activity
//! - [`source`]: Request/response protocol for the data-fetching collaborator
//! - [`ui`]: View models and the render adapter seam
//! - [`observability`]: Tracing subscriber setup
//!
//! # Driving the board
//!
//! 1. **Initialize**: build a [`Config`] (defaults or a TOML file), call
//!    [`initialize`] to get an [`app::AppState`] seeded with the sample set.
//! 2. **Advance time**: before delivering input, send
//!    `Event::ClockAdvanced { now_ms }` so due timers (debounce,
//!    notification auto-hide, overlay switch, live ticker) fire first.
//! 3. **Dispatch events**: feed user input as [`app::Event`] values to
//!    [`app::handle_event`].
//! 4. **Render**: when the handler returns `render = true`, call
//!    [`app::AppState::compute_viewmodel`] and pass the result to your
//!    [`ui::Render`] implementation; execute any returned [`app::Action`]s.
//!
//! # Example
//!
//! ```
//! use stackit_board::app::{handle_event, Event, FilterMode};
//! use stackit_board::{initialize, Config};
//!
//! let config = Config::default();
//! let mut state = initialize(&config, 1_700_000_000);
//!
//! let (render, _) = handle_event(&mut state, &Event::SetFilter(FilterMode::Votes))?;
//! assert!(render);
//! assert_eq!(state.projection[0].votes, 15);
//!
//! let vm = state.compute_viewmodel(1_700_000_000);
//! assert_eq!(vm.cards.len(), 5); // page size 5 over 6 records
//! assert_eq!(vm.total_pages, 2);
//! # Ok::<(), stackit_board::domain::BoardError>(())
//! ```

pub mod app;
pub mod domain;
pub mod live;
pub mod observability;
pub mod pipeline;
pub mod source;
pub mod store;
pub mod time;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FilterMode, Overlay, Screen, Severity};
pub use domain::{BoardError, Question, Result};
pub use ui::{BoardViewModel, Render};

use serde::Deserialize;
use std::path::Path;

/// Default page size for the question list.
const DEFAULT_PAGE_SIZE: usize = 5;

/// Default search debounce window in milliseconds.
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default notification display duration in milliseconds.
const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// Default overlay switch delay in milliseconds.
const DEFAULT_OVERLAY_SWITCH_MS: u64 = 300;

/// Default live update tick interval in milliseconds.
const DEFAULT_LIVE_TICK_MS: u64 = 5000;

/// Default per-tick probability of a simulated view bump.
const DEFAULT_LIVE_UPDATE_CHANCE: f64 = 0.05;

/// Default upper bound of a simulated view bump.
const DEFAULT_LIVE_BUMP_MAX: u32 = 5;

/// Behavior configuration for the board.
///
/// Every knob has a sensible default matching the product's reference
/// behavior; hosts override what they need, typically from a TOML file.
///
/// # Example
///
/// ```toml
/// # board.toml
/// page_size = 10
/// debounce_ms = 150
/// trace_filter = "stackit_board=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Questions shown per page. Must be at least 1.
    pub page_size: usize,

    /// Search debounce window in milliseconds.
    pub debounce_ms: u64,

    /// How long a notification stays visible, in milliseconds.
    pub notification_ms: u64,

    /// Delay between closing one overlay and opening the next,
    /// in milliseconds. Exists so a close animation can finish.
    pub overlay_switch_ms: u64,

    /// Live update simulator tick interval in milliseconds.
    pub live_tick_ms: u64,

    /// Per-tick probability of a simulated view bump, in `[0, 1]`.
    pub live_update_chance: f64,

    /// Upper bound of a simulated view bump. Must be at least 1.
    pub live_bump_max: u32,

    /// Tracing filter for [`observability::init_tracing`], if set.
    pub trace_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            overlay_switch_ms: DEFAULT_OVERLAY_SWITCH_MS,
            live_tick_ms: DEFAULT_LIVE_TICK_MS,
            live_update_chance: DEFAULT_LIVE_UPDATE_CHANCE,
            live_bump_max: DEFAULT_LIVE_BUMP_MAX,
            trace_filter: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected
    /// so typos surface instead of silently meaning "default".
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Io`] if the file cannot be read,
    /// [`BoardError::Config`] if it fails to parse or a value is out of
    /// range (`page_size` 0, `live_bump_max` 0, a probability outside
    /// `[0, 1]`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| BoardError::Config(format!("failed to parse {}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BoardError::Config("page_size must be at least 1".to_string()));
        }
        if self.live_bump_max == 0 {
            return Err(BoardError::Config("live_bump_max must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.live_update_chance) {
            return Err(BoardError::Config(
                "live_update_chance must be within [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Initializes board state seeded with the bundled sample questions.
///
/// `now` is the current Unix timestamp in seconds, used to resolve the
/// seed's relative ages. If the embedded seed fails to decode the board
/// starts empty rather than failing; a host can still populate it through
/// the source collaborator.
///
/// # Example
///
/// ```
/// use stackit_board::{initialize, Config};
///
/// let state = initialize(&Config::default(), 1_700_000_000);
/// assert_eq!(state.store.len(), 6);
/// ```
#[must_use]
pub fn initialize(config: &Config, now: i64) -> AppState {
    tracing::debug!("initializing board");

    let questions = store::seed::sample_questions(now).unwrap_or_else(|e| {
        tracing::error!(error = %e, "seed data unavailable, starting empty");
        Vec::new()
    });

    AppState::new(questions, config.clone())
}
