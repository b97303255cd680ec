//! Reporting period
//!
//! An inclusive `[start, end]` window used to filter transactions before
//! analysis.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

use crate::error::{SpendwiseError, SpendwiseResult};

/// Inclusive date-time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Period {
    /// Create a period; fails with `InvalidPeriod` when `start > end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> SpendwiseResult<Self> {
        if start > end {
            return Err(SpendwiseError::InvalidPeriod {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Period covering whole calendar days, from midnight of `start` to the
    /// last second of `end`
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> SpendwiseResult<Self> {
        let start = start.and_hms_opt(0, 0, 0).map(|d| d.and_utc());
        let end = end.and_hms_opt(23, 59, 59).map(|d| d.and_utc());

        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(SpendwiseError::Validation("Invalid calendar date".into())),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the period in days, rounded up
    pub fn days(&self) -> i64 {
        let seconds = (self.end - self.start).num_seconds();
        (seconds + 86_399) / 86_400
    }

    /// Check whether a date falls inside the period (both ends inclusive)
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_reversed_period_is_rejected() {
        let result = Period::new(at(31, 0), at(1, 0));
        assert!(matches!(result, Err(SpendwiseError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_single_instant_period() {
        let period = Period::new(at(5, 0), at(5, 0)).unwrap();
        assert!(period.contains(at(5, 0)));
        assert_eq!(period.days(), 0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = Period::new(at(1, 0), at(31, 0)).unwrap();
        assert!(period.contains(at(1, 0)));
        assert!(period.contains(at(15, 12)));
        assert!(period.contains(at(31, 0)));
        assert!(!period.contains(at(31, 1)));
    }

    #[test]
    fn test_days_rounds_up() {
        assert_eq!(Period::new(at(1, 0), at(31, 0)).unwrap().days(), 30);
        assert_eq!(Period::new(at(1, 0), at(2, 1)).unwrap().days(), 2);
    }

    #[test]
    fn test_from_dates_covers_whole_days() {
        let period = Period::from_dates(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();

        assert!(period.contains(at(31, 23)));
        assert_eq!(period.to_string(), "2024-01-01 to 2024-01-31");
    }

    #[test]
    fn test_parse_datetime() {
        let d = parse_datetime("2024-01-15").unwrap();
        assert_eq!(d.to_rfc3339(), "2024-01-15T00:00:00+00:00");

        let d = parse_datetime("2024-01-15T10:30:00-03:00").unwrap();
        assert_eq!(d.to_rfc3339(), "2024-01-15T13:30:00+00:00");

        assert!(parse_datetime("15/01/2024").is_none());
        assert!(parse_datetime("").is_none());
    }
}
