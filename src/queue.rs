//! Due-item selection and the ephemeral review session.

use crate::types::{ItemCategory, ProgressRecord};
use chrono::{DateTime, Utc};

/// Select the ids due for review at `now`, most urgent first.
///
/// New items outrank learning, reviewing, then mastered, however overdue
/// the later stages are; within a stage the most overdue comes first, and
/// ties break on id so the ordering is reproducible for a fixed snapshot.
pub fn select_due(records: &[ProgressRecord], now: DateTime<Utc>, limit: usize) -> Vec<String> {
    let mut due: Vec<&ProgressRecord> = records.iter().filter(|r| r.is_due(now)).collect();

    due.sort_by(|a, b| {
        a.mastery_level
            .priority()
            .cmp(&b.mastery_level.priority())
            .then_with(|| a.next_review_date.cmp(&b.next_review_date))
            .then_with(|| a.id.cmp(&b.id))
    });

    due.into_iter().take(limit).map(|r| r.id.clone()).collect()
}

/// One study session: an ordered queue of due ids, a cursor, and running
/// tallies. Ephemeral, never persisted.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    category: Option<ItemCategory>,
    items: Vec<String>,
    cursor: usize,
    correct: usize,
    incorrect: usize,
    started_at: DateTime<Utc>,
}

impl ReviewSession {
    pub fn new(
        category: Option<ItemCategory>,
        items: Vec<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            items,
            cursor: 0,
            correct: 0,
            incorrect: 0,
            started_at,
        }
    }

    /// Id under the cursor, or `None` once the queue is exhausted.
    pub fn current(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    /// Tally the answer for the current item and advance the cursor.
    pub fn record_answer(&mut self, correct: bool) {
        if self.cursor >= self.items.len() {
            return;
        }
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        self.cursor += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.items.len()
    }

    /// (answered, total) progress through the queue.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.items.len())
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect
    }

    pub fn category(&self) -> Option<ItemCategory> {
        self.category
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
