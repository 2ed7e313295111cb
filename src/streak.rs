//! Daily study streak tracking.
//!
//! Calendar-day state machine: one streak increment per day at most, a
//! gap of more than one day resets the streak, and a companion counter
//! tracks how many reviews happened today.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Consecutive-day study streak plus today's review counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakTracker {
    streak: u32,
    last_study_date: Option<NaiveDate>,
    today_reviewed: u32,
    today_date: Option<NaiveDate>,
}

impl Default for StreakTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StreakTracker {
    pub fn new() -> Self {
        Self {
            streak: 0,
            last_study_date: None,
            today_reviewed: 0,
            today_date: None,
        }
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_study_date(&self) -> Option<NaiveDate> {
        self.last_study_date
    }

    /// Reviews recorded on the calendar day of `now`. Zero if the counter
    /// was last touched on an earlier day.
    pub fn today_reviewed(&self, now: DateTime<Utc>) -> u32 {
        if self.today_date == Some(now.date_naive()) {
            self.today_reviewed
        } else {
            0
        }
    }

    /// Register a study event for streak purposes. Idempotent within a
    /// calendar day.
    pub fn record_study_event(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();

        match self.last_study_date {
            None => {
                self.streak = 1;
            }
            Some(last) if last == today => return,
            Some(last) if today - last == chrono::Duration::days(1) => {
                self.streak += 1;
            }
            Some(_) => {
                self.streak = 1;
            }
        }
        self.last_study_date = Some(today);
    }

    /// Count one review toward today, rolling the counter over on the
    /// first event of a new calendar day.
    pub fn record_review(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();
        if self.today_date != Some(today) {
            self.today_date = Some(today);
            self.today_reviewed = 1;
        } else {
            self.today_reviewed += 1;
        }
    }

    /// Reset today's counter without recording a review.
    pub fn reset_daily(&mut self, now: DateTime<Utc>) {
        self.today_date = Some(now.date_naive());
        self.today_reviewed = 0;
    }
}
