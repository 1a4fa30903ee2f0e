//! Search and filter/sort projection over the record store.
//!
//! [`project`] is the first pipeline stage: it narrows the store by the
//! search term, then orders or filters the survivors by the active mode.
//! It is a pure function of its inputs and never panics on well-formed
//! records, which is what makes the whole view re-derivable on demand.

use crate::app::modes::FilterMode;
use crate::domain::Question;

/// Derives the projection for the given query state.
///
/// # Stages
///
/// 1. **Search**: when `term` is non-empty, keep records whose title,
///    excerpt, or any tag contains the term as a case-insensitive substring.
///    Plain containment, no tokenization.
/// 2. **Filter/sort**: apply the mode to the (possibly narrowed) set.
///    `Unanswered` filters; the sorting modes order descending by their key;
///    `All` leaves store order untouched.
///
/// Sorting goes through `sort_by`, which is a stable sort, so records with
/// equal keys keep their relative store order. That guarantee is relied on by
/// callers (ties under `votes` must not reorder) and by the tests.
///
/// # Examples
///
/// ```
/// use stackit_board::app::FilterMode;
/// use stackit_board::pipeline::project;
/// use stackit_board::store::seed::sample_questions;
///
/// let records = sample_questions(1_700_000_000).unwrap();
/// let by_votes = project(&records, FilterMode::Votes, "");
/// assert_eq!(by_votes[0].votes, 15);
/// ```
#[must_use]
pub fn project(records: &[Question], mode: FilterMode, term: &str) -> Vec<Question> {
    let needle = term.trim().to_lowercase();

    let mut projection: Vec<Question> = records
        .iter()
        .filter(|q| needle.is_empty() || matches_term(q, &needle))
        .cloned()
        .collect();

    match mode {
        FilterMode::All => {}
        FilterMode::Newest => projection.sort_by(|a, b| b.asked_at.cmp(&a.asked_at)),
        FilterMode::Unanswered => projection.retain(|q| q.answers == 0),
        FilterMode::Active => projection.sort_by(|a, b| b.answers.cmp(&a.answers)),
        FilterMode::Votes => projection.sort_by(|a, b| b.votes.cmp(&a.votes)),
        FilterMode::Views => projection.sort_by(|a, b| b.views.cmp(&a.views)),
    }

    tracing::debug!(
        mode = %mode,
        term_len = needle.len(),
        total = records.len(),
        projected = projection.len(),
        "projection derived"
    );

    projection
}

/// Case-insensitive substring match over title, excerpt, and tags.
///
/// `needle` must already be lowercased and trimmed.
fn matches_term(question: &Question, needle: &str) -> bool {
    question.title.to_lowercase().contains(needle)
        || question.excerpt.to_lowercase().contains(needle)
        || question
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
