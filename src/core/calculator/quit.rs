//! Streaks for QUIT habits: clean days between relapses.
//!
//! A log on a QUIT habit marks a relapse. Relapses dated after `today` are
//! ignored.

use super::days_between;
use crate::models::streak::StreakStats;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

pub fn quit_streaks(
    created_on: NaiveDate,
    dates: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> StreakStats {
    let relapses: Vec<NaiveDate> = dates.range(..=today).copied().collect();

    let Some(&last_relapse) = relapses.last() else {
        // never relapsed: creation day and today both count
        let clean = if today < created_on {
            0
        } else {
            days_between(created_on, today) + 1
        };
        return StreakStats::new(clean, clean);
    };

    let current = days_between(last_relapse, today);

    let mut longest = 0;
    let mut earlier = created_on - Duration::days(1);
    for &relapse in &relapses {
        longest = longest.max(gap(earlier, relapse));
        earlier = relapse;
    }
    // The closing interval runs through today, so it equals the current streak.
    longest = longest.max(current);

    StreakStats::new(current, longest)
}

/// Clean days strictly between two relapse markers.
fn gap(earlier: NaiveDate, later: NaiveDate) -> u32 {
    days_between(earlier, later).saturating_sub(1)
}
