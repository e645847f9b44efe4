//! Activity duration aggregation for a single participant.
//!
//! A non-positive interval (end <= start) is counted differently per metric:
//! - category rollups clamp a non-positive interval to 0,
//! - the participant total reads it as an overnight session (+1440).

use crate::models::{
    ActivityInterval, CategoryTable, FieldValue, MetricKind, ParticipantId, Record,
};
use crate::utils::time::DurationPolicy;

pub const USER_ID_COLUMN: &str = "user_id";
pub const TOTAL_COLUMN: &str = "activityMinutes";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMetric {
    pub column: String,
    pub value: FieldValue,
}

/// Derived metrics for one participant's activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityMetrics {
    /// One entry per configured category, in table order.
    pub categories: Vec<CategoryMetric>,
    /// All intervals, categorized or not, overnight-corrected.
    pub total_minutes: i64,
}

impl ActivityMetrics {
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.categories
            .iter()
            .find(|m| m.column == column)
            .map(|m| &m.value)
    }

    /// Row of the activity summary table: `user_id` followed by the categories.
    pub fn to_summary_record(&self, id: &ParticipantId) -> Record {
        let mut record = Record::new();
        record.set(USER_ID_COLUMN, FieldValue::text(id.name()));
        for metric in &self.categories {
            record.set(&metric.column, metric.value.clone());
        }
        record
    }
}

pub fn aggregate(intervals: &[ActivityInterval], table: &CategoryTable) -> ActivityMetrics {
    ActivityMetrics {
        categories: category_rollup(intervals, table),
        total_minutes: total_active_minutes(intervals),
    }
}

/// Per-category minutes (clamped) or event counts.
pub fn category_rollup(intervals: &[ActivityInterval], table: &CategoryTable) -> Vec<CategoryMetric> {
    table
        .categories()
        .iter()
        .map(|category| {
            let matching = intervals
                .iter()
                .filter(|i| i.activity_code.is_some_and(|code| category.matches(code)));

            let value = match category.kind {
                MetricKind::Duration => FieldValue::Minutes(
                    matching
                        .map(|i| i.minutes(DurationPolicy::ClampToZero))
                        .sum(),
                ),
                MetricKind::Events => FieldValue::Count(matching.count()),
            };

            CategoryMetric {
                column: category.column(),
                value,
            }
        })
        .collect()
}

pub fn total_active_minutes(intervals: &[ActivityInterval]) -> i64 {
    intervals
        .iter()
        .map(|i| i.minutes(DurationPolicy::OvernightWrap))
        .sum()
}
