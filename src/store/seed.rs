//! Embedded sample data for the board.
//!
//! The board ships with the six sample questions the product demos with, so a
//! host can render something meaningful before (or without) a source
//! collaborator. Ages in the seed file are stored relative ("asked N hours
//! ago") and resolved against a supplied reference instant at load time, which
//! keeps "newest" ordering correct no matter when the board starts.

use crate::domain::error::{BoardError, Result};
use crate::domain::Question;
use serde::Deserialize;

/// Raw seed file format.
///
/// Matches [`Question`] except for the age field, which is relative.
#[derive(Debug, Deserialize)]
struct SeedQuestion {
    id: u64,
    title: String,
    excerpt: String,
    votes: i64,
    answers: u32,
    views: u64,
    tags: Vec<String>,
    author: String,
    asked_hours_ago: i64,
}

/// The bundled sample set, embedded at compile time.
const SEED_JSON: &str = include_str!("seed.json");

/// Loads the sample questions, resolving ages against `now` (Unix seconds).
///
/// # Errors
///
/// Returns [`BoardError::Seed`] if the embedded JSON fails to decode.
///
/// # Examples
///
/// ```
/// use stackit_board::store::seed::sample_questions;
///
/// let questions = sample_questions(1_700_000_000).unwrap();
/// assert_eq!(questions.len(), 6);
/// assert_eq!(questions[0].votes, 12);
/// ```
pub fn sample_questions(now: i64) -> Result<Vec<Question>> {
    let seeds: Vec<SeedQuestion> = serde_json::from_str(SEED_JSON)
        .map_err(|e| BoardError::Seed(format!("failed to parse seed JSON: {e}")))?;

    tracing::debug!(count = seeds.len(), "seed data loaded");

    Ok(seeds
        .into_iter()
        .map(|seed| Question {
            id: seed.id,
            title: seed.title,
            excerpt: seed.excerpt,
            votes: seed.votes,
            answers: seed.answers,
            views: seed.views,
            tags: seed.tags,
            author: seed.author,
            asked_at: now - seed.asked_hours_ago * 3600,
        })
        .collect())
}
