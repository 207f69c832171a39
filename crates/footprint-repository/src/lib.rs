//! Storage for footprint history and reduction goals.
//!
//! Callers depend on the [`FootprintRepository`] and [`GoalRepository`]
//! traits; [`InMemoryRepository`] is the bundled implementation.

pub mod seed;

use std::collections::HashMap;

use async_trait::async_trait;
use footprint_core::goals::ReductionGoal;
use footprint_core::history::{sort_chronologically, FootprintRecord};
use footprint_core::{FootprintError, FootprintResult};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("owner id must not be blank")]
    InvalidOwner,

    #[error("invalid goal: {0}")]
    InvalidGoal(#[from] FootprintError),

    #[error("invalid seed data: {0}")]
    Seed(String),
}

#[async_trait]
pub trait FootprintRepository: Send + Sync {
    /// Stores a calculation, assigning it an id and creation time.
    async fn append(
        &self,
        owner_id: &str,
        result: FootprintResult,
    ) -> Result<FootprintRecord, RepositoryError>;

    /// The owner's history, oldest first.
    async fn list(&self, owner_id: &str) -> Result<Vec<FootprintRecord>, RepositoryError>;
}

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Validates and stores a goal, replacing any previous one.
    async fn set_goal(
        &self,
        owner_id: &str,
        reduction_percent: f64,
    ) -> Result<ReductionGoal, RepositoryError>;

    async fn goal(&self, owner_id: &str) -> Result<Option<ReductionGoal>, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    footprints: RwLock<Vec<FootprintRecord>>,
    goals: RwLock<HashMap<String, ReductionGoal>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record exactly as given, keeping its id and timestamp.
    pub async fn insert_record(&self, record: FootprintRecord) -> Result<(), RepositoryError> {
        validate_owner(&record.owner_id)?;
        self.footprints.write().await.push(record);
        Ok(())
    }

    /// Stores a goal exactly as given.
    pub async fn insert_goal(&self, goal: ReductionGoal) -> Result<(), RepositoryError> {
        validate_owner(&goal.owner_id)?;
        footprint_core::goals::validate_reduction_percent(goal.reduction_percent)?;
        self.goals.write().await.insert(goal.owner_id.clone(), goal);
        Ok(())
    }
}

fn validate_owner(owner_id: &str) -> Result<(), RepositoryError> {
    if owner_id.trim().is_empty() {
        Err(RepositoryError::InvalidOwner)
    } else {
        Ok(())
    }
}

#[async_trait]
impl FootprintRepository for InMemoryRepository {
    async fn append(
        &self,
        owner_id: &str,
        result: FootprintResult,
    ) -> Result<FootprintRecord, RepositoryError> {
        validate_owner(owner_id)?;
        let record = FootprintRecord::new(owner_id, result);
        self.footprints.write().await.push(record.clone());
        info!(
            owner_id,
            record_id = %record.id,
            total = record.total(),
            "Stored footprint"
        );
        Ok(record)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<FootprintRecord>, RepositoryError> {
        validate_owner(owner_id)?;
        let mut records: Vec<FootprintRecord> = self
            .footprints
            .read()
            .await
            .iter()
            .filter(|record| record.owner_id == owner_id)
            .cloned()
            .collect();
        sort_chronologically(&mut records);
        Ok(records)
    }
}

#[async_trait]
impl GoalRepository for InMemoryRepository {
    async fn set_goal(
        &self,
        owner_id: &str,
        reduction_percent: f64,
    ) -> Result<ReductionGoal, RepositoryError> {
        validate_owner(owner_id)?;
        let goal = ReductionGoal::new(owner_id, reduction_percent)?;
        self.goals
            .write()
            .await
            .insert(owner_id.to_string(), goal.clone());
        info!(owner_id, reduction_percent, "Stored reduction goal");
        Ok(goal)
    }

    async fn goal(&self, owner_id: &str) -> Result<Option<ReductionGoal>, RepositoryError> {
        validate_owner(owner_id)?;
        Ok(self.goals.read().await.get(owner_id).cloned())
    }
}
