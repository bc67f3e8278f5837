use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Parse `YYYY-MM-DD`, or the keywords `today` / `yesterday`.
pub fn parse_day(s: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => today
            .pred_opt()
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        _ => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_day("2024-02-29", today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse_day("today", today()).unwrap(), today());
        assert_eq!(
            parse_day("Yesterday", today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_day("2025-13-01", today()), Err(AppError::InvalidDate(_))));
        assert!(matches!(parse_day("01/02/2025", today()), Err(AppError::InvalidDate(_))));
    }
}
