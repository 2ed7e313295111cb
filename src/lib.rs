//! Spaced repetition review engine for vocabulary memorization.
//!
//! Provides:
//! - SM-2 scheduling (per-item progress records, interval/ease updates)
//! - Due-item selection with mastery-based priority ordering
//! - Interval preview strings for rating buttons
//! - On-demand progress statistics
//! - Daily study streak tracking
//!
//! Everything is synchronous and pure; callers inject `now` for all date
//! math and plug in a [`store::ProgressStore`] for persistence.

pub mod error;
pub mod queue;
pub mod scheduler;
pub mod service;
pub mod stats;
pub mod store;
pub mod streak;
pub mod types;

pub use error::{Result, StoreError};
pub use queue::{select_due, ReviewSession};
pub use scheduler::Sm2;
pub use service::{ReviewService, DEFAULT_DAILY_GOAL, DEFAULT_DUE_LIMIT};
pub use stats::aggregate;
pub use store::{MemoryStore, ProgressStore};
pub use streak::StreakTracker;
pub use types::{
    ItemCategory, LearningStats, MasteryLevel, ProgressRecord, ProgressStats, Rating,
};
