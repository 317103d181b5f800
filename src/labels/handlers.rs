use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::{error::AppError, meals::dto::MealRequest, state::AppState};

use super::services::parse_label;

/// Text already extracted from a nutrition label photo.
#[derive(Debug, Deserialize)]
pub struct LabelText {
    pub text: String,
}

pub fn label_routes() -> Router<AppState> {
    Router::new().route("/nutrition-label", post(scan_label))
}

/// `POST /nutrition-label` takes the label's text as JSON, not the photo.
/// Callers run OCR themselves; a multipart image upload is not accepted here.
#[instrument(skip(payload))]
pub async fn scan_label(
    payload: Result<Json<LabelText>, JsonRejection>,
) -> Result<Json<MealRequest>, AppError> {
    let Json(label) = payload?;
    if label.text.trim().is_empty() {
        warn!("empty label text");
        return Err(AppError::BadRequest("No text found in label"));
    }

    let req = parse_label(&label.text);
    info!(
        protein = req.protein_per_serving,
        carbs = req.carbs_per_serving,
        fat = req.fat_per_serving,
        calories = req.calories_per_serving,
        "label parsed"
    );
    Ok(Json(req))
}
