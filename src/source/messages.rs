//! Message types for the source collaborator boundary.
//!
//! This module defines the request and response protocol between the board
//! core and the host's data-fetching layer. Messages are serde-serializable
//! so hosts that bridge to another runtime (a worker thread, a JS shim) can
//! ship them as JSON.

use crate::domain::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures the source collaborator can report.
///
/// The split mirrors the two ways a fetch goes wrong: the server answered
/// with a failure status, or the request never completed at all. The board
/// treats both identically (notify the user, keep current state), so the
/// distinction exists for hosts and logs, not for recovery strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// The server responded with a non-success HTTP status.
    #[error("HTTP error: status {status}")]
    Http {
        /// The response status code.
        status: u16,
    },

    /// The request failed before a response arrived.
    #[error("Network error: {0}")]
    Network(String),
}

/// Requests the board asks the collaborator to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceRequest {
    /// Fetch the full question collection.
    LoadQuestions,
}

/// Responses the collaborator delivers back to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceResponse {
    /// Questions were fetched successfully.
    Loaded {
        /// The fetched collection, in server order.
        questions: Vec<Question>,
    },

    /// The fetch failed; current board state is left untouched.
    Failed {
        /// Human-readable failure description, shown in the notification.
        message: String,
    },
}

impl SourceResponse {
    /// Builds a failure response from a collaborator error.
    #[must_use]
    pub fn from_error(error: &ApiError) -> Self {
        Self::Failed {
            message: error.to_string(),
        }
    }
}
