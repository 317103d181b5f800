use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, state::AppState};

use super::dto::{WeightRecord, WeightRequest};

pub fn weight_routes() -> Router<AppState> {
    Router::new()
        .route("/weight", post(record_weight))
        .route("/weight/today", get(today_weight))
}

#[instrument(skip(state, payload))]
pub async fn record_weight(
    State(state): State<AppState>,
    payload: Result<Json<WeightRequest>, JsonRejection>,
) -> Result<Json<WeightRecord>, AppError> {
    let Json(req) = payload?;
    let date = state.clock.today();

    let previous = state.weights.record(date, req.weight).await;
    info!(%date, weight = req.weight, ?previous, "weight recorded");

    Ok(Json(WeightRecord {
        date,
        weight: req.weight,
    }))
}

#[instrument(skip(state))]
pub async fn today_weight(State(state): State<AppState>) -> Result<Json<WeightRecord>, AppError> {
    let date = state.clock.today();
    state
        .weights
        .get(date)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("No weight entry for today"))
}
