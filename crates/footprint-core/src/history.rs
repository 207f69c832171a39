use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::FootprintResult;
use crate::rounding::round2;

/// A calculation stored in an owner's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintRecord {
    pub id: Uuid,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: FootprintResult,
}

impl FootprintRecord {
    pub fn new(owner_id: impl Into<String>, result: FootprintResult) -> Self {
        Self::recorded_at(owner_id, result, Utc::now())
    }

    pub fn recorded_at(
        owner_id: impl Into<String>,
        result: FootprintResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            created_at,
            result,
        }
    }

    pub fn total(&self) -> f64 {
        self.result.total_footprint
    }
}

/// Oldest first. Records with the same timestamp keep their relative order.
pub fn sort_chronologically(records: &mut [FootprintRecord]) {
    records.sort_by_key(|record| record.created_at);
}

/// Most recent record; on equal timestamps the one appended last wins.
pub fn latest(records: &[FootprintRecord]) -> Option<&FootprintRecord> {
    records
        .iter()
        .enumerate()
        .max_by_key(|(idx, record)| (record.created_at, *idx))
        .map(|(_, record)| record)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub created_at: DateTime<Utc>,
    pub total_footprint: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub count: usize,
    pub first: f64,
    pub latest: f64,
    pub average: f64,
    /// `latest - first`
    pub change: f64,
    /// Relative to `first`. `None` with fewer than two records or a zero start.
    pub change_percent: Option<f64>,
    pub points: Vec<TrendPoint>,
}

impl TrendSummary {
    /// Summarises an owner's history. Returns `None` for an empty history.
    pub fn from_records(records: &[FootprintRecord]) -> Option<Self> {
        let mut ordered: Vec<&FootprintRecord> = records.iter().collect();
        ordered.sort_by_key(|record| record.created_at);

        let first = ordered.first()?.total();
        let last = ordered.last()?.total();
        let count = ordered.len();
        let average = ordered.iter().map(|r| r.total()).sum::<f64>() / count as f64;

        let change_percent = if count >= 2 && first != 0.0 {
            Some(round2((last - first) / first * 100.0))
        } else {
            None
        };

        Some(Self {
            count,
            first,
            latest: last,
            average: round2(average),
            change: round2(last - first),
            change_percent,
            points: ordered
                .iter()
                .map(|record| TrendPoint {
                    created_at: record.created_at,
                    total_footprint: record.total(),
                })
                .collect(),
        })
    }
}
