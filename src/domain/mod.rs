//! Domain layer for the StackIt board core.
//!
//! This module contains the core domain types shared by every other layer,
//! independent of rendering, timing, or collaborator concerns. It keeps the
//! question model and the crate-wide error vocabulary isolated from the
//! state machinery that consumes them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`question`]: Question record model and age formatting
//!
//! # Examples
//!
//! ```
//! use stackit_board::domain::{Question, Result};
//!
//! fn first_question() -> Result<Question> {
//!     Ok(Question::new(
//!         1,
//!         "How do I ask a question?".to_string(),
//!         "Meta, but someone has to.".to_string(),
//!         "newbie".to_string(),
//!         1_700_000_000,
//!     ))
//! }
//! ```

pub mod error;
pub mod question;

pub use error::{BoardError, Result};
pub use question::Question;
