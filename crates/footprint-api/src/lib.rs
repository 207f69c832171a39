//! HTTP surface over the footprint calculator and its history store.

pub mod error;
mod extract;
mod routes;
mod state;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

pub use error::ApiError;
pub use extract::{ApiJson, ApiQuery};
pub use routes::{GlobalQuery, GoalRequest, MealQuery};
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/factors", get(routes::factors))
        .route("/calculate", post(routes::calculate))
        .route(
            "/users/{owner_id}/footprints",
            get(routes::list_footprints).post(routes::create_footprint),
        )
        .route("/users/{owner_id}/trend", get(routes::trend))
        .route(
            "/users/{owner_id}/goal",
            get(routes::goal_overview).put(routes::set_goal),
        )
        .route("/users/{owner_id}/goal/plan", get(routes::goal_plan_for))
        .route("/users/{owner_id}/tips", get(routes::tips))
        .route("/meal-ideas", get(routes::meals))
        .route("/global-emissions", get(routes::global_emissions))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}
