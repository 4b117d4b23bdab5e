//! Time-range resolution for summary queries.
//!
//! Maps a symbolic range selector to a concrete `[start, end]` instant pair.
//! The reference instant is injected by the caller rather than read from the
//! system clock, so queries stay deterministic and testable.

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Symbolic time window for a summary query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRangeSelector {
    /// The reference day, from midnight to the reference instant
    Today,
    /// The last 7 calendar days
    Week,
    /// The last calendar month
    Month,
    /// The last calendar year
    Year,
    /// Everything up to the reference instant
    All,
}

impl TimeRangeSelector {
    /// Nominal period length in days, used as the averaging denominator
    /// under [`AveragingPolicy::NominalPeriod`](crate::AveragingPolicy).
    ///
    /// `All` has no fixed length and returns `None`; averages for it are
    /// taken over the records actually present.
    pub fn nominal_period_days(&self) -> Option<u32> {
        match self {
            TimeRangeSelector::Today => Some(1),
            TimeRangeSelector::Week => Some(7),
            TimeRangeSelector::Month => Some(30),
            TimeRangeSelector::Year => Some(365),
            TimeRangeSelector::All => None,
        }
    }
}

/// Concrete `[start, end]` window resolved from a selector.
///
/// Derived state: recomputed on every query, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ResolvedRange {
    /// Check whether a calendar day falls within the window.
    ///
    /// Records are keyed by calendar day, so containment is tested at day
    /// granularity, inclusive at both ends: a record dated on the same day
    /// as either endpoint is in range.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.start.date_naive() <= day && day <= self.end.date_naive()
    }
}

/// Resolve a selector against a reference instant.
///
/// `Month` and `Year` use calendar arithmetic (a month back from March 31st
/// lands on the last day of February), not fixed 30/365-day offsets.
pub fn resolve_range(selector: TimeRangeSelector, now: DateTime<Utc>) -> ResolvedRange {
    let start = match selector {
        TimeRangeSelector::Today => now.date_naive().and_time(NaiveTime::MIN).and_utc(),
        TimeRangeSelector::Week => now - Duration::days(7),
        TimeRangeSelector::Month => now
            .checked_sub_months(Months::new(1))
            .unwrap_or(DateTime::UNIX_EPOCH),
        TimeRangeSelector::Year => now
            .checked_sub_months(Months::new(12))
            .unwrap_or(DateTime::UNIX_EPOCH),
        TimeRangeSelector::All => DateTime::UNIX_EPOCH,
    };
    ResolvedRange { start, end: now }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn test_today_starts_at_midnight() {
        let now = instant(2024, 3, 15, 18);
        let range = resolve_range(TimeRangeSelector::Today, now);

        assert_eq!(range.start, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(range.end, now);
    }

    #[test]
    fn test_week_spans_seven_days() {
        let now = instant(2024, 3, 15, 18);
        let range = resolve_range(TimeRangeSelector::Week, now);

        assert_eq!(range.start, now - Duration::days(7));
        assert_eq!(range.start.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
    }

    #[test]
    fn test_month_uses_calendar_arithmetic() {
        // One month back from March 31st clamps to the end of February
        let now = instant(2024, 3, 31, 12);
        let range = resolve_range(TimeRangeSelector::Month, now);

        assert_eq!(range.start.date_naive(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_year_spans_twelve_calendar_months() {
        let now = instant(2024, 2, 29, 12);
        let range = resolve_range(TimeRangeSelector::Year, now);

        assert_eq!(range.start.date_naive(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_all_starts_at_epoch() {
        let now = instant(2024, 3, 15, 18);
        let range = resolve_range(TimeRangeSelector::All, now);

        assert_eq!(range.start, DateTime::UNIX_EPOCH);
        assert_eq!(range.end, now);
    }

    #[test]
    fn test_contains_day_inclusive_at_both_ends() {
        let now = instant(2024, 3, 15, 18);
        let range = resolve_range(TimeRangeSelector::Week, now);

        assert!(range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()));
        assert!(range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
        assert!(!range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()));
        assert!(!range.contains_day(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
    }

    #[test]
    fn test_nominal_period_days() {
        assert_eq!(TimeRangeSelector::Today.nominal_period_days(), Some(1));
        assert_eq!(TimeRangeSelector::Week.nominal_period_days(), Some(7));
        assert_eq!(TimeRangeSelector::Month.nominal_period_days(), Some(30));
        assert_eq!(TimeRangeSelector::Year.nominal_period_days(), Some(365));
        assert_eq!(TimeRangeSelector::All.nominal_period_days(), None);
    }
}
