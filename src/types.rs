//! Core types for the review engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content category of a learning item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Word,
    TwoWordPhrase,
    ThreeWordPhrase,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::TwoWordPhrase => "two_word_phrase",
            Self::ThreeWordPhrase => "three_word_phrase",
        }
    }
}

/// Rating for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Map to the SM-2 quality score (0-5 scale).
    ///
    /// Again is a lapse (1), the rest count as correct. The value 2 is
    /// never produced by this mapping.
    pub fn to_quality(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Hard => 3,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "again" => Some(Self::Again),
            "hard" => Some(Self::Hard),
            "good" => Some(Self::Good),
            "easy" => Some(Self::Easy),
            _ => None,
        }
    }

    /// All ratings in presentation order, hardest to easiest.
    pub const ALL: [Rating; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];
}

/// Derived learning stage of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl Default for MasteryLevel {
    fn default() -> Self {
        Self::New
    }
}

impl MasteryLevel {
    /// Classify from repetitions and interval. Repetitions take precedence:
    /// an item with fewer than 3 consecutive correct reviews is at most
    /// `Learning` no matter how long its interval is.
    pub fn classify(repetitions: u32, interval: u32) -> Self {
        if repetitions == 0 {
            Self::New
        } else if repetitions < 3 {
            Self::Learning
        } else if interval < 21 {
            Self::Reviewing
        } else {
            Self::Mastered
        }
    }

    /// Review priority rank: lower goes first in the due queue.
    pub fn priority(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Learning => 1,
            Self::Reviewing => 2,
            Self::Mastered => 3,
        }
    }
}

/// Per-item spaced repetition state, keyed by the item's id.
///
/// `mastery_level` is always derived from `(repetitions, interval)` via
/// [`MasteryLevel::classify`]; the only constructors are
/// `Sm2::initial_progress` and `Sm2::next_review`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: String,
    pub category: ItemCategory,
    pub repetitions: u32,
    pub ease_factor: f64,
    /// Days until the next review.
    pub interval: u32,
    pub next_review_date: DateTime<Utc>,
    pub last_review_date: DateTime<Utc>,
    pub mastery_level: MasteryLevel,
}

impl ProgressRecord {
    /// Whether this item is due at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_date <= now
    }
}

/// Aggregate counts over a set of progress records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub reviewing: usize,
    pub mastered: usize,
    pub due_now: usize,
    /// Whole percent of mastered items; 0 when there are no records.
    pub mastery_percent: u32,
}

/// Stats reported to the UI layer: aggregate counts plus streak state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStats {
    #[serde(flatten)]
    pub progress: ProgressStats,
    pub streak: u32,
    pub last_study_date: Option<chrono::NaiveDate>,
    pub today_reviewed: u32,
    pub daily_goal: u32,
}
