//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! host (a DOM shell, a terminal, a test harness) and the domain/pipeline
//! layers. It implements the event-driven architecture that powers the
//! interactive board.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input / Timers → Events → Event Handler → State Mutations
//!                                      │
//!                                      ▼
//!                        (render flag, Actions) → Host side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Filter mode and screen state types
//! - [`notify`]: Single-slot notification surface
//! - [`overlay`]: Overlay (modal) state machine
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use stackit_board::app::{handle_event, AppState, Event};
//! use stackit_board::Config;
//!
//! let mut state = AppState::new(vec![], Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::CloseAllOverlays)?;
//! assert!(!render); // nothing was open
//! assert!(actions.is_empty());
//! # Ok::<(), stackit_board::domain::BoardError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod notify;
pub mod overlay;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FilterMode, Screen};
pub use notify::{Notification, NotificationSlot, Severity};
pub use overlay::{Overlay, OverlayController, OverlayState};
pub use state::AppState;
