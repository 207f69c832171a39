use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FootprintError, Result};
use crate::history::FootprintRecord;
use crate::rounding::round2;

pub const MIN_REDUCTION_PERCENT: f64 = 1.0;
pub const MAX_REDUCTION_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionGoal {
    pub id: Uuid,
    pub owner_id: String,
    pub reduction_percent: f64,
    pub created_at: DateTime<Utc>,
}

impl ReductionGoal {
    pub fn new(owner_id: impl Into<String>, reduction_percent: f64) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            reduction_percent: validate_reduction_percent(reduction_percent)?,
            created_at: Utc::now(),
        })
    }
}

pub fn validate_reduction_percent(percent: f64) -> Result<f64> {
    if percent.is_finite() && (MIN_REDUCTION_PERCENT..=MAX_REDUCTION_PERCENT).contains(&percent) {
        Ok(percent)
    } else {
        Err(FootprintError::Validation(
            "Please enter a valid percentage (1-100)".to_string(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub current: f64,
    pub target: f64,
    pub target_reduction: f64,
}

impl GoalProgress {
    pub fn new(current_total: f64, reduction_percent: f64) -> Self {
        let fraction = reduction_percent / 100.0;
        Self {
            current: round2(current_total),
            target: round2(current_total * (1.0 - fraction)),
            target_reduction: round2(current_total * fraction),
        }
    }
}

/// What a goals view needs: the active goal, the latest calculation and, when
/// both exist, how far the owner has to go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub goal: Option<ReductionGoal>,
    pub latest_footprint: Option<FootprintRecord>,
    pub progress: Option<GoalProgress>,
}

impl GoalOverview {
    pub fn new(goal: Option<ReductionGoal>, latest_footprint: Option<FootprintRecord>) -> Self {
        let progress = match (&goal, &latest_footprint) {
            (Some(goal), Some(latest)) => {
                Some(GoalProgress::new(latest.total(), goal.reduction_percent))
            }
            _ => None,
        };
        Self {
            goal,
            latest_footprint,
            progress,
        }
    }
}
