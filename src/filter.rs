//! Date-window filtering of record collections.
//!
//! Both collections are filtered independently by the same day-granularity
//! rule; no cross-referencing between them happens at this stage.

use crate::range::ResolvedRange;
use crate::{ActivitySessionRecord, DailyMetricRecord};

/// Select the metric records whose day falls within the window.
///
/// Pure function of its inputs; preserves the original relative order.
pub fn filter_metrics(
    records: &[DailyMetricRecord],
    range: &ResolvedRange,
) -> Vec<DailyMetricRecord> {
    records
        .iter()
        .filter(|r| range.contains_day(r.date))
        .cloned()
        .collect()
}

/// Select the activity sessions whose day falls within the window.
///
/// Pure function of its inputs; preserves the original relative order.
pub fn filter_activities(
    records: &[ActivitySessionRecord],
    range: &ResolvedRange,
) -> Vec<ActivitySessionRecord> {
    records
        .iter()
        .filter(|r| range.contains_day(r.date))
        .cloned()
        .collect()
}
