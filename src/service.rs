//! Review service: the engine's entry point for callers.
//!
//! Owns a progress store, the scheduler, and the streak tracker, so
//! callers hold one value instead of wiring the pieces themselves.
//! Constructed with an injected store to keep it unit-testable with an
//! in-memory stand-in.

use crate::error::Result;
use crate::queue::{select_due, ReviewSession};
use crate::scheduler::Sm2;
use crate::stats::aggregate;
use crate::store::ProgressStore;
use crate::streak::StreakTracker;
use crate::types::{ItemCategory, LearningStats, ProgressRecord, Rating};
use chrono::{DateTime, Utc};

pub const DEFAULT_DUE_LIMIT: usize = 20;
pub const DEFAULT_DAILY_GOAL: u32 = 20;

/// Spaced repetition review service over a pluggable store.
pub struct ReviewService<S: ProgressStore> {
    store: S,
    scheduler: Sm2,
    streak: StreakTracker,
    daily_goal: u32,
}

impl<S: ProgressStore> ReviewService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            scheduler: Sm2::default(),
            streak: StreakTracker::new(),
            daily_goal: DEFAULT_DAILY_GOAL,
        }
    }

    pub fn with_daily_goal(mut self, daily_goal: u32) -> Self {
        self.daily_goal = daily_goal;
        self
    }

    /// Restore previously persisted streak state.
    pub fn with_streak(mut self, streak: StreakTracker) -> Self {
        self.streak = streak;
        self
    }

    pub fn scheduler(&self) -> &Sm2 {
        &self.scheduler
    }

    pub fn streak(&self) -> &StreakTracker {
        &self.streak
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one rating to an item and persist the outcome.
    ///
    /// Items without a stored record are initialized on the spot, so the
    /// caller never has to pre-register anything. Also counts the review
    /// toward today's tally and the streak.
    pub fn record_review(
        &mut self,
        id: &str,
        category: ItemCategory,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> Result<ProgressRecord> {
        let current = match self.store.get(id)? {
            Some(record) => record,
            None => self.scheduler.initial_progress(id, category, now),
        };

        let updated = self
            .scheduler
            .next_review(&current, rating.to_quality(), now);
        self.store.set(updated.clone())?;

        self.streak.record_review(now);
        self.streak.record_study_event(now);

        Ok(updated)
    }

    /// Ids due for review at `now`, most urgent first, at most `limit`.
    pub fn due_items(
        &self,
        category: Option<ItemCategory>,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<String>> {
        let records = self.snapshot(category)?;
        Ok(select_due(&records, now, limit))
    }

    /// Build a session over the currently due items.
    pub fn start_session(
        &self,
        category: Option<ItemCategory>,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<ReviewSession> {
        let items = self.due_items(category, now, limit)?;
        Ok(ReviewSession::new(category, items, now))
    }

    /// Preview strings for every rating, for the "next review in ..."
    /// buttons. Unreviewed items preview from the initial state.
    pub fn preview_intervals(
        &self,
        id: &str,
        category: ItemCategory,
        now: DateTime<Utc>,
    ) -> Result<Vec<(Rating, String)>> {
        let record = match self.store.get(id)? {
            Some(record) => record,
            None => self.scheduler.initial_progress(id, category, now),
        };
        Ok(Rating::ALL
            .iter()
            .map(|&rating| (rating, self.scheduler.estimate_interval(&record, rating)))
            .collect())
    }

    /// Aggregate counts plus streak state, recomputed on demand.
    pub fn stats(&self, category: Option<ItemCategory>, now: DateTime<Utc>) -> Result<LearningStats> {
        let records = self.snapshot(None)?;
        Ok(LearningStats {
            progress: aggregate(&records, category, now),
            streak: self.streak.streak(),
            last_study_date: self.streak.last_study_date(),
            today_reviewed: self.streak.today_reviewed(now),
            daily_goal: self.daily_goal,
        })
    }

    fn snapshot(&self, category: Option<ItemCategory>) -> Result<Vec<ProgressRecord>> {
        let mut records = self.store.all()?;
        if let Some(category) = category {
            records.retain(|r| r.category == category);
        }
        Ok(records)
    }
}
