use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completed focus sessions per local calendar day.
///
/// Append-only: counts are only ever incremented, never rewritten, and
/// the log grows unboundedly across the widget's lifetime. Serializes to
/// the persisted `pomodoro_stats` record (`{"YYYY-MM-DD": n}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionLog {
    counts: BTreeMap<NaiveDate, u32>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one completed focus session to `day`. Call exactly once per
    /// completion event, never on pause or reset.
    pub fn record_completion(&mut self, day: NaiveDate) {
        *self.counts.entry(day).or_insert(0) += 1;
    }

    /// Sessions logged on `day` (0 when absent).
    pub fn count_on(&self, day: NaiveDate) -> u32 {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    /// All-time maximum daily count, floored at 1.
    ///
    /// Heatmap intensity normalizes against the whole log rather than
    /// the visible window; the floor keeps an empty log well-defined.
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0).max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total sessions across all days.
    pub fn total_sessions(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}
