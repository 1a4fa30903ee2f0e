//! Presentation layer: view models and the render adapter seam.
//!
//! Business logic never talks to a concrete rendering surface. State is
//! transformed into an immutable [`viewmodel::BoardViewModel`] and handed to
//! whatever implements [`renderer::Render`]: the product's DOM layer, a
//! terminal, or a test double.
//!
//! ```text
//! AppState → compute_viewmodel → BoardViewModel → Render::render
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready state snapshots
//! - [`renderer`]: the render adapter trait
//! - [`text`]: a plain-text adapter writing to any `io::Write`

pub mod renderer;
pub mod text;
pub mod viewmodel;

pub use renderer::Render;
pub use text::TextRenderer;
pub use viewmodel::{BoardViewModel, EmptyState, NotificationView, QuestionCard};
