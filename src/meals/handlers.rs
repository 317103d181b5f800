use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::AppError, state::AppState};

use super::dto::{MealRecord, MealRequest, TodayMealsResponse};
use super::services::{scale, totals};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/meals/today", get(today_meals))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/meals", post(log_meal))
}

// --- handlers ---

#[instrument(skip(state, payload))]
pub async fn log_meal(
    State(state): State<AppState>,
    payload: Result<Json<MealRequest>, JsonRejection>,
) -> Result<Json<MealRecord>, AppError> {
    let Json(req) = payload?;
    let meal = scale(req);
    let date = state.clock.today();

    state.meals.append(date, meal.clone()).await;
    info!(%date, name = %meal.name, servings = meal.servings, calories = meal.calories, "meal logged");

    Ok(Json(meal))
}

#[instrument(skip(state))]
pub async fn today_meals(State(state): State<AppState>) -> Json<TodayMealsResponse> {
    let meals = state.meals.list_for(state.clock.today()).await;
    let totals = totals(&meals);
    Json(TodayMealsResponse { meals, totals })
}
