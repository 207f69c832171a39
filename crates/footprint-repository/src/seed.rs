use chrono::{DateTime, TimeZone, Utc};
use footprint_core::goals::ReductionGoal;
use footprint_core::history::FootprintRecord;
use footprint_core::{Breakdown, FootprintResult, RawInput};
use tracing::info;
use uuid::Uuid;

use crate::{InMemoryRepository, RepositoryError};

pub const DEMO_OWNER: &str = "user_1";

struct DemoMonth {
    month: u32,
    total: f64,
    breakdown: Breakdown,
}

fn demo_months() -> [DemoMonth; 3] {
    [
        DemoMonth {
            month: 8,
            total: 1050.75,
            breakdown: Breakdown {
                energy: 250.0,
                transport: 180.5,
                flights: 200.0,
                diet: 195.0,
                waste: 225.25,
            },
        },
        DemoMonth {
            month: 9,
            total: 980.5,
            breakdown: Breakdown {
                energy: 220.0,
                transport: 150.5,
                flights: 200.0,
                diet: 185.0,
                waste: 225.0,
            },
        },
        DemoMonth {
            month: 10,
            total: 950.0,
            breakdown: Breakdown {
                energy: 210.0,
                transport: 140.0,
                flights: 190.0,
                diet: 185.0,
                waste: 225.0,
            },
        },
    ]
}

fn demo_timestamp(month: u32, day: u32) -> Result<DateTime<Utc>, RepositoryError> {
    Utc.with_ymd_and_hms(2025, month, day, 10, 0, 0)
        .single()
        .ok_or_else(|| RepositoryError::Seed(format!("no timestamp for 2025-{month}-{day}")))
}

/// Inserts three months of history and a 15% goal for [`DEMO_OWNER`].
pub async fn seed_demo(repo: &InMemoryRepository) -> Result<(), RepositoryError> {
    for demo in demo_months() {
        let record = FootprintRecord {
            id: Uuid::new_v4(),
            owner_id: DEMO_OWNER.to_string(),
            created_at: demo_timestamp(demo.month, 15)?,
            result: FootprintResult {
                total_footprint: demo.total,
                breakdown: demo.breakdown,
                inputs: RawInput::default(),
            },
        };
        repo.insert_record(record).await?;
    }

    repo.insert_goal(ReductionGoal {
        id: Uuid::new_v4(),
        owner_id: DEMO_OWNER.to_string(),
        reduction_percent: 15.0,
        created_at: demo_timestamp(10, 16)?,
    })
    .await?;

    info!(owner_id = DEMO_OWNER, "Seeded demo history");
    Ok(())
}
