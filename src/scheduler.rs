//! SM-2 spaced repetition scheduling.
//!
//! Based on SuperMemo 2 with configurable parameters. All functions are
//! pure; the caller supplies `now` so scheduling stays deterministic.

use crate::types::{ItemCategory, MasteryLevel, ProgressRecord, Rating};
use chrono::{DateTime, Duration, Utc};

/// SM-2 scheduler with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval after the first correct review, in days.
    pub first_interval: u32,
    /// Interval after the second consecutive correct review, in days.
    pub second_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            first_interval: 1,
            second_interval: 6,
        }
    }
}

impl Sm2 {
    /// Initial progress for an item that has never been reviewed.
    pub fn initial_progress(
        &self,
        id: impl Into<String>,
        category: ItemCategory,
        now: DateTime<Utc>,
    ) -> ProgressRecord {
        ProgressRecord {
            id: id.into(),
            category,
            repetitions: 0,
            ease_factor: self.initial_ease,
            interval: 0,
            next_review_date: now,
            last_review_date: now,
            mastery_level: MasteryLevel::New,
        }
    }

    /// Apply one review and compute the next state.
    ///
    /// Quality >= 3 counts as a correct response (including "hard");
    /// anything below is a lapse that resets repetitions and forces a
    /// 1-day interval. Quality outside the 0-5 scale is clamped, not
    /// rejected.
    pub fn next_review(
        &self,
        record: &ProgressRecord,
        quality: u8,
        now: DateTime<Utc>,
    ) -> ProgressRecord {
        let quality = quality.min(5);
        let mut repetitions = record.repetitions;
        let mut interval = record.interval;

        if quality >= 3 {
            interval = if repetitions == 0 {
                self.first_interval
            } else if repetitions == 1 {
                self.second_interval
            } else {
                // Grown from the pre-update ease factor; f64::round ties
                // away from zero.
                (f64::from(interval) * record.ease_factor).round() as u32
            };
            repetitions += 1;
        } else {
            repetitions = 0;
            interval = 1;
        }

        // The ease factor moves on every review, lapse or not, floored at
        // minimum_ease and kept to 2 decimal places.
        let q = f64::from(quality);
        let ease_factor = (record.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)))
            .max(self.minimum_ease);
        let ease_factor = (ease_factor * 100.0).round() / 100.0;

        ProgressRecord {
            id: record.id.clone(),
            category: record.category,
            repetitions,
            ease_factor,
            interval,
            next_review_date: now + Duration::days(i64::from(interval)),
            last_review_date: now,
            mastery_level: MasteryLevel::classify(repetitions, interval),
        }
    }

    /// Preview the interval a rating would produce, as a display string.
    ///
    /// Runs the transition and discards everything but the interval,
    /// bucketed into days, weeks, or months.
    pub fn estimate_interval(&self, record: &ProgressRecord, rating: Rating) -> String {
        let updated = self.next_review(record, rating.to_quality(), record.next_review_date);

        match updated.interval {
            0 | 1 => "1 day".to_string(),
            n if n < 7 => format!("{n} days"),
            n if n < 30 => {
                let weeks = (f64::from(n) / 7.0).round() as u32;
                format!("{} week{}", weeks, if weeks > 1 { "s" } else { "" })
            }
            n => {
                let months = (f64::from(n) / 30.0).round() as u32;
                format!("{} month{}", months, if months > 1 { "s" } else { "" })
            }
        }
    }
}
