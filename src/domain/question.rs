//! Question domain model and operations.
//!
//! This module defines the core `Question` type representing one listed entry on
//! the board: a title, an excerpt, engagement counters, tags, and an author.
//! Questions carry a creation timestamp and provide user-friendly relative-age
//! formatting for display.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Represents one question listed on the board.
///
/// A question is immutable once created, with a single exception: the view
/// counter, which the live update simulator increments as simulated readers
/// arrive. Identifiers are unique within a store and are never reused, even
/// after records are replaced.
///
/// # Fields
///
/// - `id`: Stable unique identifier
/// - `title`: Headline shown in the list
/// - `excerpt`: Short body preview
/// - `votes`: Net vote score (may be negative)
/// - `answers`: Number of posted answers
/// - `views`: View counter, bumped by the live update simulator
/// - `tags`: Topic tags in display order
/// - `author`: Display name of the asker
/// - `asked_at`: Unix timestamp of creation, drives "newest" ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub votes: i64,
    pub answers: u32,
    pub views: u64,
    pub tags: Vec<String>,
    pub author: String,
    pub asked_at: i64,
}

impl Question {
    /// Creates a new question with zeroed engagement counters and no tags.
    ///
    /// Counters and tags are usually filled in from seed data or a source
    /// collaborator response; this constructor covers the freshly-asked case.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackit_board::domain::Question;
    ///
    /// let q = Question::new(
    ///     7,
    ///     "Why is my borrow checker angry?".to_string(),
    ///     "It keeps pointing at line 42.".to_string(),
    ///     "rustacean".to_string(),
    ///     1_700_000_000,
    /// );
    /// assert_eq!(q.id, 7);
    /// assert_eq!(q.votes, 0);
    /// assert!(q.tags.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: u64, title: String, excerpt: String, author: String, asked_at: i64) -> Self {
        Self {
            id,
            title,
            excerpt,
            votes: 0,
            answers: 0,
            views: 0,
            tags: Vec::new(),
            author,
            asked_at,
        }
    }

    /// Returns a human-readable string describing how long ago the question was asked.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    ///
    /// The reference instant is passed in rather than read from the wall clock
    /// so view models stay reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackit_board::domain::Question;
    ///
    /// let now = 1_700_000_000;
    /// let q = Question::new(1, "t".into(), "e".into(), "a".into(), now - 7200);
    /// assert_eq!(q.age_label(now), "2h ago");
    /// ```
    #[must_use]
    pub fn age_label(&self, now: i64) -> String {
        let diff = now - self.asked_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

#[cfg(test)]
#[path = "question_tests.rs"]
mod tests;
