use crate::models::{Bucket, StatusBuckets};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One flattened classification row, as written to CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub bucket: &'static str,
    pub operator: String,
    pub kind: &'static str,
    pub start: String,
    pub end: String,
}

/// Whole-snapshot document, as written to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot<'a> {
    pub now: String,
    #[serde(flatten)]
    pub buckets: &'a StatusBuckets,
}

impl<'a> StatusSnapshot<'a> {
    pub fn new(now: NaiveDateTime, buckets: &'a StatusBuckets) -> Self {
        Self {
            now: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            buckets,
        }
    }
}

/// Flatten the buckets in panel order, keeping each bucket's own order.
pub fn status_rows(buckets: &StatusBuckets) -> Vec<StatusRow> {
    Bucket::ALL
        .iter()
        .flat_map(|&bucket| {
            buckets.get(bucket).iter().map(move |e| StatusRow {
                bucket: bucket.as_str(),
                operator: e.operator_name.clone(),
                kind: e.break_item.kind.badge(),
                start: e.break_item.start_str(),
                end: e.break_item.end_str(),
            })
        })
        .collect()
}
