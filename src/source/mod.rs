//! Source collaborator protocol.
//!
//! The board does not perform network I/O. A host-side source collaborator
//! (the product's request layer) fetches question data and reports back
//! through the message types defined here; the board consumes responses as
//! events and emits requests as actions. Failures never mutate board state:
//! they surface to the user through an error notification and the last
//! known-good view stands.
//!
//! # Modules
//!
//! - [`messages`]: request/response enums and the collaborator error type

pub mod messages;

pub use messages::{ApiError, SourceRequest, SourceResponse};
