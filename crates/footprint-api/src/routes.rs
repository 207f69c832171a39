use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use footprint_core::advice::{goal_plan, meal_ideas, reduction_tips};
use footprint_core::global::{EmissionsMetric, GlobalEmissions};
use footprint_core::goals::{GoalOverview, ReductionGoal};
use footprint_core::history::{latest, FootprintRecord, TrendSummary};
use footprint_core::{compute_with, Diet, EmissionFactors, FootprintResult, RawInput};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::AppState;

type ApiResult<T> = Result<T, ApiError>;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn factors(State(state): State<AppState>) -> Json<EmissionFactors> {
    Json(*state.factors())
}

pub async fn calculate(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RawInput>,
) -> Json<FootprintResult> {
    Json(compute_with(input, state.factors()))
}

pub async fn create_footprint(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    ApiJson(input): ApiJson<RawInput>,
) -> ApiResult<(StatusCode, Json<FootprintRecord>)> {
    let result = compute_with(input, state.factors());
    let record = state.footprints().append(&owner_id, result).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_footprints(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Json<Vec<FootprintRecord>>> {
    Ok(Json(state.footprints().list(&owner_id).await?))
}

pub async fn trend(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Json<TrendSummary>> {
    let records = state.footprints().list(&owner_id).await?;
    TrendSummary::from_records(&records)
        .map(Json)
        .ok_or_else(|| no_history(&owner_id))
}

pub async fn goal_overview(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Json<GoalOverview>> {
    let goal = state.goals().goal(&owner_id).await?;
    let records = state.footprints().list(&owner_id).await?;
    let latest_footprint = latest(&records).cloned();
    Ok(Json(GoalOverview::new(goal, latest_footprint)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub reduction_percent: f64,
}

pub async fn set_goal(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    ApiJson(payload): ApiJson<GoalRequest>,
) -> ApiResult<Json<ReductionGoal>> {
    let goal = state
        .goals()
        .set_goal(&owner_id, payload.reduction_percent)
        .await?;
    Ok(Json(goal))
}

pub async fn goal_plan_for(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let goal = state
        .goals()
        .goal(&owner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Set a goal first to get a plan".to_string()))?;
    let records = state.footprints().list(&owner_id).await?;
    let newest = latest(&records).ok_or_else(|| no_history(&owner_id))?;

    info!(
        owner_id = %owner_id,
        reduction_percent = goal.reduction_percent,
        "Generating goal plan"
    );
    let plan = goal_plan(
        goal.reduction_percent,
        newest.result.total_footprint,
        &newest.result.breakdown,
    );
    Ok(Json(json!({ "plan": plan })))
}

pub async fn tips(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let records = state.footprints().list(&owner_id).await?;
    let newest = latest(&records).ok_or_else(|| no_history(&owner_id))?;
    let tips = reduction_tips(&newest.result.breakdown, newest.result.total_footprint);
    Ok(Json(json!({ "tips": tips })))
}

#[derive(Debug, Deserialize)]
pub struct MealQuery {
    pub diet: Option<String>,
}

pub async fn meals(ApiQuery(query): ApiQuery<MealQuery>) -> Json<Value> {
    let diet = query.diet.as_deref().and_then(Diet::from_key);
    Json(json!({ "ideas": meal_ideas(diet) }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalQuery {
    pub rank_by: Option<EmissionsMetric>,
}

pub async fn global_emissions(ApiQuery(query): ApiQuery<GlobalQuery>) -> Json<GlobalEmissions> {
    let reference = GlobalEmissions::reference();
    Json(match query.rank_by {
        Some(metric) => reference.ranked_by(metric),
        None => reference,
    })
}

fn no_history(owner_id: &str) -> ApiError {
    ApiError::NotFound(format!("No footprint history for '{owner_id}'"))
}
