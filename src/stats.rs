//! On-demand progress statistics.

use crate::types::{ItemCategory, MasteryLevel, ProgressRecord, ProgressStats};
use chrono::{DateTime, Utc};

/// Count records per mastery level, recomputed from scratch each call.
///
/// `category` narrows the count to one content category; `None` counts
/// everything.
pub fn aggregate(
    records: &[ProgressRecord],
    category: Option<ItemCategory>,
    now: DateTime<Utc>,
) -> ProgressStats {
    let mut stats = ProgressStats::default();

    for record in records {
        if category.is_some_and(|c| record.category != c) {
            continue;
        }
        stats.total += 1;
        match record.mastery_level {
            MasteryLevel::New => stats.new += 1,
            MasteryLevel::Learning => stats.learning += 1,
            MasteryLevel::Reviewing => stats.reviewing += 1,
            MasteryLevel::Mastered => stats.mastered += 1,
        }
        if record.is_due(now) {
            stats.due_now += 1;
        }
    }

    stats.mastery_percent = if stats.total > 0 {
        ((stats.mastered as f64 / stats.total as f64) * 100.0).round() as u32
    } else {
        0
    };

    stats
}
