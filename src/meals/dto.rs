use serde::{Deserialize, Serialize};

/// Request body for `POST /meals`: a per-serving quote plus how much was eaten.
/// Also what the label parser hands back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRequest {
    pub name: String,
    pub protein_per_serving: f64,
    pub carbs_per_serving: f64,
    pub fat_per_serving: f64,
    pub calories_per_serving: f64,
    pub servings: f64,
}

/// A logged meal, nutrition already scaled to absolute values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecord {
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
    pub servings: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_calories: f64,
}

/// Response for `GET /meals/today`.
#[derive(Debug, Serialize)]
pub struct TodayMealsResponse {
    pub meals: Vec<MealRecord>,
    #[serde(flatten)]
    pub totals: DailyTotals,
}
