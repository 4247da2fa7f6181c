//! Productivity heatmap view.
//!
//! A read-only projection over the [`SessionLog`]: the last N calendar
//! days, each bucketed into a discrete intensity tier relative to the
//! all-time maximum daily count. Recomputed on every render, never
//! persisted.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::session_log::SessionLog;

/// Default window length: 12 weeks of days.
pub const WINDOW_DAYS: usize = 84;

/// Discrete visual tier for one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Empty,
    Level1,
    Level2,
    Level3,
    Level4,
}

/// One day in the heatmap window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u32,
    pub intensity: Intensity,
}

/// Bucket a count against the normalization denominator.
///
/// Tiers: 0 is empty, then quartiles of `count / max_count` with
/// half-open upper bounds. Integer comparisons only.
fn intensity(count: u32, max_count: u32) -> Intensity {
    if count == 0 {
        return Intensity::Empty;
    }
    let count = u64::from(count);
    let max = u64::from(max_count.max(1));
    if count * 4 > max * 3 {
        Intensity::Level4
    } else if count * 2 > max {
        Intensity::Level3
    } else if count * 4 > max {
        Intensity::Level2
    } else {
        Intensity::Level1
    }
}

/// The last `days` consecutive calendar days ending at `today`, oldest
/// first, each with its logged count and intensity tier.
///
/// Intensity normalizes against the entire log's maximum, not just the
/// window's. This matches the reference widget; see DESIGN.md.
pub fn window_view(log: &SessionLog, today: NaiveDate, days: usize) -> Vec<DayCell> {
    let max_count = log.max_count();
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
        .map(|date| {
            let count = log.count_on(date);
            DayCell {
                date,
                count,
                intensity: intensity(count, max_count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_log_yields_84_empty_cells_ending_today() {
        let today = day("2026-08-30");
        let cells = window_view(&SessionLog::new(), today, WINDOW_DAYS);
        assert_eq!(cells.len(), 84);
        assert_eq!(cells.last().unwrap().date, today);
        assert_eq!(cells.first().unwrap().date, day("2026-06-08"));
        assert!(cells.iter().all(|c| c.intensity == Intensity::Empty));
    }

    #[test]
    fn dates_are_consecutive_and_ascending() {
        let cells = window_view(&SessionLog::new(), day("2026-08-30"), WINDOW_DAYS);
        for pair in cells.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn buckets_follow_quartiles_of_max() {
        // max_count = 8, so tiers break at 2, 4 and 6.
        let mut log = SessionLog::new();
        for (d, n) in [
            ("2026-08-24", 1),
            ("2026-08-25", 2),
            ("2026-08-26", 3),
            ("2026-08-27", 4),
            ("2026-08-28", 5),
            ("2026-08-29", 6),
            ("2026-08-30", 8),
        ] {
            for _ in 0..n {
                log.record_completion(day(d));
            }
        }
        let cells = window_view(&log, day("2026-08-30"), 7);
        let tiers: Vec<Intensity> = cells.iter().map(|c| c.intensity).collect();
        assert_eq!(
            tiers,
            vec![
                Intensity::Level1, // 1/8
                Intensity::Level1, // 2/8 = 25%, inclusive upper bound
                Intensity::Level2, // 3/8
                Intensity::Level2, // 4/8 = 50%
                Intensity::Level3, // 5/8
                Intensity::Level3, // 6/8 = 75%
                Intensity::Level4, // 8/8
            ]
        );
    }

    #[test]
    fn normalizes_against_all_time_max_not_window_max() {
        let mut log = SessionLog::new();
        // A heavy day far outside the window.
        for _ in 0..10 {
            log.record_completion(day("2020-01-01"));
        }
        log.record_completion(day("2026-08-30"));
        let cells = window_view(&log, day("2026-08-30"), 7);
        // 1/10 would be Level4 against the window max of 1.
        assert_eq!(cells.last().unwrap().intensity, Intensity::Level1);
    }

    #[test]
    fn count_equal_to_max_is_level4() {
        let mut log = SessionLog::new();
        log.record_completion(day("2026-08-30"));
        let cells = window_view(&log, day("2026-08-30"), 1);
        assert_eq!(cells[0].count, 1);
        assert_eq!(cells[0].intensity, Intensity::Level4);
    }
}
