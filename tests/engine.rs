//! End-to-end tests driving the review service over an in-memory store.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tekrar_core::{
    ItemCategory, MasteryLevel, MemoryStore, ProgressStore, Rating, ReviewService, Sm2,
};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 8, 0, 0).unwrap()
}

#[test]
fn full_study_cycle() {
    let mut svc = ReviewService::new(MemoryStore::new());

    // Day 1: nothing stored yet, so the session queue is empty.
    let session = svc.start_session(Some(ItemCategory::Word), day(1), 20).unwrap();
    assert!(session.is_finished());

    // Three fresh words get their first review.
    for id in ["huwa", "qala", "rabb"] {
        let record = svc
            .record_review(id, ItemCategory::Word, Rating::Good, day(1))
            .unwrap();
        assert_eq!(record.interval, 1);
        assert_eq!(record.mastery_level, MasteryLevel::Learning);
    }

    let stats = svc.stats(Some(ItemCategory::Word), day(1)).unwrap();
    assert_eq!(stats.progress.total, 3);
    assert_eq!(stats.progress.learning, 3);
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.today_reviewed, 3);

    // Day 2: everything is due again; one lapse.
    let due = svc.due_items(Some(ItemCategory::Word), day(2), 20).unwrap();
    assert_eq!(due.len(), 3);

    let lapsed = svc
        .record_review("huwa", ItemCategory::Word, Rating::Again, day(2))
        .unwrap();
    assert_eq!(lapsed.repetitions, 0);
    assert_eq!(lapsed.interval, 1);
    assert_eq!(lapsed.mastery_level, MasteryLevel::New);

    let kept = svc
        .record_review("qala", ItemCategory::Word, Rating::Good, day(2))
        .unwrap();
    assert_eq!(kept.interval, 6);
    assert_eq!(kept.repetitions, 2);

    let stats = svc.stats(Some(ItemCategory::Word), day(2)).unwrap();
    assert_eq!(stats.streak, 2);
    assert_eq!(stats.today_reviewed, 2);

    // Day 3: the lapsed word is due and, being new again, outranks the
    // learning word that is also due.
    let due = svc.due_items(Some(ItemCategory::Word), day(3), 20).unwrap();
    assert_eq!(due[0], "huwa");
    assert!(due.contains(&"rabb".to_string()));
    assert!(!due.contains(&"qala".to_string()), "qala is 6 days out");
}

#[test]
fn categories_do_not_interfere() {
    let mut svc = ReviewService::new(MemoryStore::new());
    svc.record_review("huwa", ItemCategory::Word, Rating::Again, day(1))
        .unwrap();
    svc.record_review("qala-rabbi", ItemCategory::TwoWordPhrase, Rating::Again, day(1))
        .unwrap();

    let words = svc.due_items(Some(ItemCategory::Word), day(3), 20).unwrap();
    assert_eq!(words, vec!["huwa".to_string()]);
    let phrases = svc
        .due_items(Some(ItemCategory::TwoWordPhrase), day(3), 20)
        .unwrap();
    assert_eq!(phrases, vec!["qala-rabbi".to_string()]);
}

#[test]
fn streak_survives_service_restart() {
    let mut svc = ReviewService::new(MemoryStore::new());
    svc.record_review("huwa", ItemCategory::Word, Rating::Good, day(1))
        .unwrap();
    svc.record_review("huwa", ItemCategory::Word, Rating::Good, day(2))
        .unwrap();
    let streak = svc.streak().clone();

    // A new service restored from persisted state keeps counting.
    let mut svc = ReviewService::new(MemoryStore::new()).with_streak(streak);
    svc.record_review("huwa", ItemCategory::Word, Rating::Good, day(3))
        .unwrap();
    assert_eq!(svc.streak().streak(), 3);
}

#[test]
fn durable_record_shape() {
    let now = day(1);
    let record = Sm2::default().initial_progress("huwa", ItemCategory::Word, now);
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["id"], "huwa");
    assert_eq!(json["category"], "word");
    assert_eq!(json["repetitions"], 0);
    assert_eq!(json["ease_factor"], 2.5);
    assert_eq!(json["interval"], 0);
    assert_eq!(json["mastery_level"], "new");
    // Timestamps serialize as ISO-8601 strings.
    let ts = json["next_review_date"].as_str().unwrap();
    assert!(ts.starts_with("2024-03-01T08:00:00"));

    let back: tekrar_core::ProgressRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn store_contract_is_last_write_wins() {
    let sm2 = Sm2::default();
    let mut store = MemoryStore::new();
    let first = sm2.initial_progress("huwa", ItemCategory::Word, day(1));
    let second = sm2.next_review(&first, Rating::Easy.to_quality(), day(1));

    store.set(first).unwrap();
    store.set(second.clone()).unwrap();
    assert_eq!(store.get("huwa").unwrap(), Some(second));
    assert_eq!(store.all().unwrap().len(), 1);
}
