//! Unit tests for the record store and seed loading.

use super::seed::sample_questions;
use super::*;

const NOW: i64 = 1_700_000_000;

#[test]
fn seed_parses_the_six_sample_questions() {
    let questions = sample_questions(NOW).unwrap();

    assert_eq!(questions.len(), 6);
    let votes: Vec<i64> = questions.iter().map(|q| q.votes).collect();
    assert_eq!(votes, vec![12, 8, 15, 6, 9, 4]);
}

#[test]
fn seed_resolves_ages_against_the_reference_instant() {
    let questions = sample_questions(NOW).unwrap();

    assert_eq!(questions[0].asked_at, NOW - 2 * 3600);
    assert_eq!(questions[5].asked_at, NOW - 24 * 3600);
    assert_eq!(questions[0].age_label(NOW), "2h ago");
    assert_eq!(questions[5].age_label(NOW), "1d ago");
}

#[test]
fn append_allocates_past_the_highest_id() {
    let mut store = RecordStore::new(sample_questions(NOW).unwrap());

    let q = Question::new(0, "t".into(), "e".into(), "a".into(), NOW);
    let id = store.append(q);

    assert_eq!(id, 7);
    assert_eq!(store.len(), 7);
    assert_eq!(store.get(7).unwrap().title, "t");
}

#[test]
fn ids_are_never_reused() {
    let mut store = RecordStore::new(vec![]);
    let first = store.append(Question::new(0, "a".into(), String::new(), "x".into(), NOW));
    let second = store.append(Question::new(0, "b".into(), String::new(), "x".into(), NOW));

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_ne!(store.get(first).unwrap().title, store.get(second).unwrap().title);
}

#[test]
fn bump_views_increments_only_the_target() {
    let mut store = RecordStore::new(sample_questions(NOW).unwrap());
    let before: Vec<u64> = store.records().iter().map(|q| q.views).collect();

    store.bump_views(2, 5);

    let after: Vec<u64> = store.records().iter().map(|q| q.views).collect();
    assert_eq!(after[2], before[2] + 5);
    for i in [0usize, 1, 3, 4, 5] {
        assert_eq!(after[i], before[i]);
    }
}

#[test]
fn bump_views_out_of_range_is_ignored() {
    let mut store = RecordStore::new(sample_questions(NOW).unwrap());
    let before = store.clone();

    store.bump_views(99, 3);

    assert_eq!(store, before);
}
