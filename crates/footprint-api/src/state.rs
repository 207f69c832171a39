use std::sync::Arc;

use footprint_core::EmissionFactors;
use footprint_repository::{FootprintRepository, GoalRepository, InMemoryRepository};

/// Shared handler state. The emission factors are fixed for the lifetime of
/// the server.
#[derive(Clone)]
pub struct AppState {
    factors: EmissionFactors,
    footprints: Arc<dyn FootprintRepository>,
    goals: Arc<dyn GoalRepository>,
}

impl AppState {
    pub fn new<R>(repository: Arc<R>, factors: EmissionFactors) -> Self
    where
        R: FootprintRepository + GoalRepository + 'static,
    {
        Self {
            factors,
            footprints: repository.clone(),
            goals: repository,
        }
    }

    pub fn in_memory(factors: EmissionFactors) -> Self {
        Self::new(Arc::new(InMemoryRepository::new()), factors)
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn footprints(&self) -> &Arc<dyn FootprintRepository> {
        &self.footprints
    }

    pub fn goals(&self) -> &Arc<dyn GoalRepository> {
        &self.goals
    }
}
