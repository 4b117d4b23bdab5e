//! Record storage and ingestion.
//!
//! The summary core never reaches for ambient state: callers hand it a
//! read-only view of the record history through [`RecordStore`]. The
//! in-memory implementation validates records up front so the aggregation
//! pipeline downstream stays a total function.

use std::collections::HashSet;

use log::info;

use crate::error::{Result, SummaryError};
use crate::{ActivitySessionRecord, DailyMetricRecord};

/// Read-only view of a user's record history.
///
/// Both collections are ordered; the pipeline preserves their relative
/// order when filtering. No write interface is required by the core.
pub trait RecordStore {
    fn all_metric_records(&self) -> &[DailyMetricRecord];
    fn all_activity_records(&self) -> &[ActivitySessionRecord];
}

/// In-memory record store backed by validated vectors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    metrics: Vec<DailyMetricRecord>,
    activities: Vec<ActivitySessionRecord>,
}

impl InMemoryRecordStore {
    /// Build a store from record collections, validating every record.
    ///
    /// A record with negative or non-finite numeric fields, or a second
    /// metric record for an already-seen day, fails the whole load. Dropping
    /// it instead would corrupt later totals without signal.
    pub fn new(
        metrics: Vec<DailyMetricRecord>,
        activities: Vec<ActivitySessionRecord>,
    ) -> Result<Self> {
        let mut seen_days = HashSet::new();
        for record in &metrics {
            if !record.is_valid() {
                return Err(SummaryError::InvalidRecord {
                    id: record.id.clone(),
                    message: "negative or non-finite metric values".to_string(),
                });
            }
            if !seen_days.insert(record.date) {
                return Err(SummaryError::InvalidRecord {
                    id: record.id.clone(),
                    message: format!("duplicate metric record for {}", record.date),
                });
            }
        }

        info!(
            "[RecordStore] Loaded {} metric records, {} sessions",
            metrics.len(),
            activities.len()
        );

        Ok(Self {
            metrics,
            activities,
        })
    }

    /// Build a store from JSON payloads, each an array of records.
    ///
    /// An unparseable payload — including a record whose date does not
    /// parse — surfaces as [`SummaryError::MalformedRecord`] rather than
    /// being skipped.
    pub fn from_json(metrics_json: &str, activities_json: &str) -> Result<Self> {
        let metrics: Vec<DailyMetricRecord> =
            serde_json::from_str(metrics_json).map_err(|e| SummaryError::MalformedRecord {
                message: e.to_string(),
            })?;
        let activities: Vec<ActivitySessionRecord> =
            serde_json::from_str(activities_json).map_err(|e| SummaryError::MalformedRecord {
                message: e.to_string(),
            })?;
        Self::new(metrics, activities)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn all_metric_records(&self) -> &[DailyMetricRecord] {
        &self.metrics
    }

    fn all_activity_records(&self) -> &[ActivitySessionRecord] {
        &self.activities
    }
}
