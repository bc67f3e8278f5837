//! Streaks for BUILD habits: consecutive days on which the habit was done.

use crate::models::streak::StreakStats;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

pub fn build_streaks(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakStats {
    let Some(&most_recent) = dates.last() else {
        return StreakStats::default();
    };

    StreakStats::new(current_run(dates, most_recent, today), longest_run(dates))
}

/// Length of the run ending at `most_recent`, or 0 when the last log is
/// older than yesterday.
fn current_run(dates: &BTreeSet<NaiveDate>, most_recent: NaiveDate, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    if most_recent != today && most_recent != yesterday {
        return 0;
    }

    let mut count = 0;
    let mut day = most_recent;
    while dates.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

fn longest_run(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &d in dates {
        run = match prev {
            Some(p) if (d - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(d);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn set(offsets: &[i64]) -> BTreeSet<NaiveDate> {
        offsets
            .iter()
            .map(|n| today() + Duration::days(*n))
            .collect()
    }

    #[test]
    fn no_logs_is_zero() {
        assert_eq!(build_streaks(&set(&[]), today()), StreakStats::new(0, 0));
    }

    #[test]
    fn yesterday_and_today() {
        assert_eq!(build_streaks(&set(&[-1, 0]), today()), StreakStats::new(2, 2));
    }

    #[test]
    fn missed_day_breaks_streak() {
        assert_eq!(build_streaks(&set(&[-2, 0]), today()), StreakStats::new(1, 1));
    }

    #[test]
    fn longest_from_the_past() {
        let s = build_streaks(&set(&[-10, -9, -8, -1, 0]), today());
        assert_eq!(s, StreakStats::new(2, 3));
    }

    #[test]
    fn streak_ending_yesterday_is_alive() {
        let s = build_streaks(&set(&[-3, -2, -1]), today());
        assert_eq!(s, StreakStats::new(3, 3));
    }

    #[test]
    fn stale_streak_is_zero_but_longest_kept() {
        let s = build_streaks(&set(&[-5, -4, -3, -2]), today());
        assert_eq!(s, StreakStats::new(0, 4));
    }

    #[test]
    fn single_log_today() {
        assert_eq!(build_streaks(&set(&[0]), today()), StreakStats::new(1, 1));
    }

    #[test]
    fn future_log_makes_current_stale() {
        // most recent log is tomorrow: neither today nor yesterday
        let s = build_streaks(&set(&[-1, 0, 1]), today());
        assert_eq!(s, StreakStats::new(0, 3));
    }

    #[test]
    fn run_across_month_boundary() {
        // 2025-02-27, 02-28, 03-01
        let s = build_streaks(&set(&[-2, -1, 0]), today());
        assert_eq!(s, StreakStats::new(3, 3));
    }
}
