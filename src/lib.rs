//! # Activity Summary
//!
//! Time-windowed summary statistics for a user's step and activity history.
//!
//! This library provides:
//! - Symbolic time-range resolution against an injected reference instant
//! - Inclusive date-window filtering of daily metrics and activity sessions
//! - Snapshot aggregation: totals, per-day averages, best/worst day and a
//!   per-type session breakdown
//!
//! The record store is handed in explicitly and treated as read-only; the
//! whole pipeline is a pure function of the records, the selector and the
//! reference instant, so identical queries yield identical snapshots.
//!
//! ## Quick Start
//!
//! ```rust
//! use activity_summary::{
//!     compute_snapshot, DailyMetricRecord, InMemoryRecordStore, TimeRangeSelector,
//! };
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let record = DailyMetricRecord {
//!     id: "m-1".to_string(),
//!     date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!     step_count: 5000,
//!     calories_burned: 210.0,
//!     distance_km: 3.4,
//!     source: "manual".to_string(),
//! };
//! let store = InMemoryRecordStore::new(vec![record], vec![]).unwrap();
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
//! let snapshot = compute_snapshot(&store, TimeRangeSelector::Today, now);
//! assert_eq!(snapshot.total_steps, 5000);
//! assert_eq!(snapshot.average_steps, 5000);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, SummaryError};

// Time-range resolution
pub mod range;
pub use range::{resolve_range, ResolvedRange, TimeRangeSelector};

// Date-window filtering
pub mod filter;
pub use filter::{filter_activities, filter_metrics};

// Snapshot aggregation and query entry points
pub mod aggregate;
pub use aggregate::{
    aggregate, compute_snapshot, compute_snapshot_with_config, AggregationSnapshot,
    AveragingPolicy, StatsConfig,
};

// Record storage and ingestion
pub mod store;
pub use store::{InMemoryRecordStore, RecordStore};

// ============================================================================
// Core Types
// ============================================================================

/// One day of aggregated metrics from a single data source.
///
/// Immutable once created; owned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetricRecord {
    pub id: String,
    /// Calendar day the record covers (unique per day within a store)
    pub date: NaiveDate,
    /// Steps recorded for the day
    pub step_count: u32,
    /// Calories burned in kcal (0 when the source did not report it)
    #[serde(default)]
    pub calories_burned: f64,
    /// Distance covered in kilometers (0 when the source did not report it)
    #[serde(default)]
    pub distance_km: f64,
    /// Tag identifying where the record came from (e.g. "manual", "watch")
    pub source: String,
}

impl DailyMetricRecord {
    /// Check that the numeric fields satisfy the record invariants.
    pub fn is_valid(&self) -> bool {
        self.calories_burned.is_finite()
            && self.calories_burned >= 0.0
            && self.distance_km.is_finite()
            && self.distance_km >= 0.0
    }
}

/// A discrete activity session (a run, a swim, a gym visit).
///
/// Immutable once created; owned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySessionRecord {
    pub id: String,
    /// Calendar day the session took place
    pub date: NaiveDate,
    /// Free-form category label (e.g. "run", "swim")
    pub activity_type: String,
    /// Session length in seconds
    pub duration_secs: u32,
    /// Opaque source-specific payload, carried through untouched
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DailyMetricRecord {
        DailyMetricRecord {
            id: "m-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            step_count: 5000,
            calories_burned: 210.0,
            distance_km: 3.4,
            source: "watch".to_string(),
        }
    }

    #[test]
    fn test_metric_record_validation() {
        assert!(record().is_valid());

        let mut negative = record();
        negative.calories_burned = -1.0;
        assert!(!negative.is_valid());

        let mut nan = record();
        nan.distance_km = f64::NAN;
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_metric_record_camel_case_round_trip() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains("stepCount"));
        assert!(json.contains("distanceKm"));

        let back: DailyMetricRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record());
    }
}
