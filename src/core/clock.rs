//! Source of "today" for streak computation.
//!
//! The time zone is always explicit: either a fixed UTC offset from the
//! configuration, or the local zone of the machine.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, TimeZone, Utc};

pub trait Clock {
    /// Current instant in the clock's zone.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Calendar date of `ts` in the clock's zone.
    fn date_of(&self, ts: &DateTime<FixedOffset>) -> NaiveDate;

    /// First instant of `day` in the clock's zone, with the offset in force
    /// on that day (not today's).
    fn start_of_day(&self, day: NaiveDate) -> Option<DateTime<FixedOffset>>;

    fn today(&self) -> NaiveDate {
        self.date_of(&self.now())
    }
}

/// Wall clock, optionally pinned to a fixed UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }

    pub fn local() -> Self {
        Self { offset: None }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(off) => Utc::now().with_timezone(&off),
            None => Local::now().fixed_offset(),
        }
    }

    fn date_of(&self, ts: &DateTime<FixedOffset>) -> NaiveDate {
        match self.offset {
            Some(off) => ts.with_timezone(&off).date_naive(),
            None => ts.with_timezone(&Local).date_naive(),
        }
    }

    fn start_of_day(&self, day: NaiveDate) -> Option<DateTime<FixedOffset>> {
        let midnight = day.and_hms_opt(0, 0, 0)?;
        match self.offset {
            Some(off) => off.from_local_datetime(&midnight).single(),
            None => Local
                .from_local_datetime(&midnight)
                .earliest()
                // zones whose DST switch skips midnight start that day at 01:00
                .or_else(|| Local.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
                .map(|dt| dt.fixed_offset()),
        }
    }
}

/// Clock frozen on a given day (hidden `--today` flag and tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(today: NaiveDate, offset: Option<FixedOffset>) -> Self {
        Self {
            today,
            offset: offset.unwrap_or_else(|| *Local::now().offset()),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let noon = self.today.and_hms_opt(12, 0, 0).unwrap_or_default();
        // Noon keeps the instant on the same day for any offset within ±12h.
        DateTime::from_naive_utc_and_offset(noon - self.offset, self.offset)
    }

    fn date_of(&self, ts: &DateTime<FixedOffset>) -> NaiveDate {
        ts.with_timezone(&self.offset).date_naive()
    }

    fn start_of_day(&self, day: NaiveDate) -> Option<DateTime<FixedOffset>> {
        let midnight = day.and_hms_opt(0, 0, 0)?;
        self.offset.from_local_datetime(&midnight).single()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Parse a `+HH:MM` / `-HH:MM` offset (also `Z` / `UTC`).
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let raw = s.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidOffset(s.to_string()));
    }

    let (sign, rest) = match raw.chars().next() {
        Some('+') => (1, &raw[1..]),
        Some('-') => (-1, &raw[1..]),
        _ => return Err(AppError::InvalidOffset(s.to_string())),
    };

    let (h, m) = rest
        .split_once(':')
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))?;

    let hours: i32 = h.parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    let minutes: i32 = m.parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;

    if h.len() != 2 || m.len() != 2 || hours > 14 || minutes > 59 {
        return Err(AppError::InvalidOffset(s.to_string()));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offsets() {
        assert_eq!(parse_utc_offset("+02:00").unwrap().local_minus_utc(), 7200);
        assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -19800);
        assert_eq!(parse_utc_offset("UTC").unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn rejects_bad_offsets() {
        assert!(parse_utc_offset("02:00").is_err());
        assert!(parse_utc_offset("+2:00").is_err());
        assert!(parse_utc_offset("+15:00").is_err());
        assert!(parse_utc_offset("+02:75").is_err());
    }

    #[test]
    fn fixed_clock_reports_its_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        for off in ["+12:00", "-11:00", "+00:00"] {
            let clock = FixedClock::new(day, Some(parse_utc_offset(off).unwrap()));
            assert_eq!(clock.today(), day);
            assert_eq!(clock.date_of(&clock.now()), day);
        }
    }

    #[test]
    fn system_clock_truncates_in_its_zone() {
        let tokyo = parse_utc_offset("+09:00").unwrap();
        let clock = SystemClock::new(Some(tokyo));
        // 2025-01-01 20:00 UTC is already Jan 2nd in Tokyo
        let ts = DateTime::parse_from_rfc3339("2025-01-01T20:00:00+00:00").unwrap();
        assert_eq!(
            clock.date_of(&ts),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
        );
    }

    #[test]
    fn start_of_day_maps_back_to_the_same_day() {
        let plus_half = parse_utc_offset("+05:30").unwrap();
        let clocks: [&dyn Clock; 3] = [
            &SystemClock::local(),
            &SystemClock::new(Some(plus_half)),
            &FixedClock::new(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(), Some(plus_half)),
        ];

        // one day per month, so both sides of any local DST switch are hit
        for clock in clocks {
            for month in 1..=12 {
                let day = NaiveDate::from_ymd_opt(2026, month, 15).unwrap();
                let start = clock.start_of_day(day).unwrap();
                assert_eq!(clock.date_of(&start), day, "month {month}");
            }
        }
    }

    #[test]
    fn start_of_day_uses_the_fixed_offset() {
        let clock = SystemClock::new(Some(parse_utc_offset("-03:00").unwrap()));
        let start = clock
            .start_of_day(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
            .unwrap();
        assert_eq!(start.to_rfc3339(), "2026-01-15T00:00:00-03:00");
    }
}
