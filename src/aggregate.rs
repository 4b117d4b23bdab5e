//! Snapshot aggregation over filtered record sets.
//!
//! This module computes the totals, per-day averages, best/worst day and
//! per-type session breakdown that the presentation layer displays. The
//! whole pipeline is recomputed from scratch on every query: inputs are
//! small (bounded by one user's history) and each call is O(n log n) in the
//! extrema sort, so there is no incremental state to invalidate and the
//! computation stays re-entrant.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::filter::{filter_activities, filter_metrics};
use crate::range::{resolve_range, TimeRangeSelector};
use crate::store::RecordStore;
use crate::{ActivitySessionRecord, DailyMetricRecord};

/// Policy for the denominator of the per-day averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AveragingPolicy {
    /// Divide by the nominal period length of the selector (1/7/30/365;
    /// `All` falls back to the filtered record count). Understates the true
    /// daily average when the window is sparsely populated. Default, for
    /// compatibility with existing consumers.
    NominalPeriod,
    /// Divide by the number of metric records actually in the window.
    RecordedDays,
}

/// Configuration for snapshot computation.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// How the per-day average denominator is chosen
    pub averaging: AveragingPolicy,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            averaging: AveragingPolicy::NominalPeriod,
        }
    }
}

/// Fully derived summary of one time window.
///
/// A value type: recomputed from scratch on every query, no identity, no
/// mutation. Serialized with camelCase keys for presentation consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationSnapshot {
    /// Sum of `step_count` over the window
    pub total_steps: u64,
    /// Sum of `calories_burned` over the window
    pub total_calories: f64,
    /// Sum of `distance_km` over the window
    pub total_distance_km: f64,
    /// Number of activity sessions in the window
    pub total_activity_count: u32,
    /// Per-day step average, rounded to the nearest integer (ties away from zero)
    pub average_steps: u64,
    /// Per-day calorie average, rounded to the nearest integer (ties away from zero)
    pub average_calories: u64,
    /// Highest-step record in the window (absent when the window is empty)
    pub best_day: Option<DailyMetricRecord>,
    /// Lowest-step record in the window (absent when the window is empty)
    pub worst_day: Option<DailyMetricRecord>,
    /// Session count per activity type, keyed by the free-form type label
    pub activity_breakdown: BTreeMap<String, u32>,
}

/// Aggregate pre-filtered record sets into a snapshot.
///
/// The selector is still needed here: under
/// [`AveragingPolicy::NominalPeriod`] it chooses the averaging denominator.
/// Empty inputs yield zeroed sums, absent extrema and an empty breakdown —
/// not an error.
pub fn aggregate(
    metrics: &[DailyMetricRecord],
    activities: &[ActivitySessionRecord],
    selector: TimeRangeSelector,
    config: &StatsConfig,
) -> AggregationSnapshot {
    let total_steps: u64 = metrics.iter().map(|r| u64::from(r.step_count)).sum();
    let total_calories: f64 = metrics.iter().map(|r| r.calories_burned).sum();
    let total_distance_km: f64 = metrics.iter().map(|r| r.distance_km).sum();

    let denominator = match config.averaging {
        AveragingPolicy::NominalPeriod => selector
            .nominal_period_days()
            .map(|days| days as usize)
            .unwrap_or(metrics.len()),
        AveragingPolicy::RecordedDays => metrics.len(),
    };
    let average_steps = per_day_average(total_steps as f64, denominator);
    let average_calories = per_day_average(total_calories, denominator);

    // Stable sort: records tied on steps keep their original relative order,
    // so best/worst are deterministic for a given input.
    let mut ranked: Vec<&DailyMetricRecord> = metrics.iter().collect();
    ranked.sort_by(|a, b| b.step_count.cmp(&a.step_count));
    let best_day = ranked.first().map(|r| (*r).clone());
    let worst_day = ranked.last().map(|r| (*r).clone());

    let mut activity_breakdown: BTreeMap<String, u32> = BTreeMap::new();
    for session in activities {
        *activity_breakdown
            .entry(session.activity_type.clone())
            .or_insert(0) += 1;
    }

    AggregationSnapshot {
        total_steps,
        total_calories,
        total_distance_km,
        total_activity_count: activities.len() as u32,
        average_steps,
        average_calories,
        best_day,
        worst_day,
        activity_breakdown,
    }
}

/// Nearest-integer per-day average (ties away from zero); zero when the
/// denominator is zero.
fn per_day_average(total: f64, denominator: usize) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (total / denominator as f64).round() as u64
}

/// Compute a snapshot for a selector with the default configuration.
///
/// The query entry point for the presentation layer: resolve the window,
/// filter both collections, aggregate. Pure function of its inputs — the
/// store is read-only for the duration of the call and identical inputs
/// yield identical snapshots.
pub fn compute_snapshot(
    store: &dyn RecordStore,
    selector: TimeRangeSelector,
    now: DateTime<Utc>,
) -> AggregationSnapshot {
    compute_snapshot_with_config(store, selector, now, &StatsConfig::default())
}

/// Compute a snapshot with an explicit configuration.
pub fn compute_snapshot_with_config(
    store: &dyn RecordStore,
    selector: TimeRangeSelector,
    now: DateTime<Utc>,
    config: &StatsConfig,
) -> AggregationSnapshot {
    let range = resolve_range(selector, now);
    let metrics = filter_metrics(store.all_metric_records(), &range);
    let activities = filter_activities(store.all_activity_records(), &range);

    debug!(
        "[Summary] {:?}: {} metric records, {} sessions in range",
        selector,
        metrics.len(),
        activities.len()
    );

    aggregate(&metrics, &activities, selector, config)
}
