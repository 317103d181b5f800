use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WeightRequest {
    pub weight: f64,
}

/// A day's weight, as stored and as returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRecord {
    pub date: NaiveDate,
    pub weight: f64,
}
