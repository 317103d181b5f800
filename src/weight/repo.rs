use std::collections::HashMap;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::weight::dto::WeightRecord;

/// One weight per day; the latest write wins.
#[derive(Debug, Default)]
pub struct WeightStore {
    days: RwLock<HashMap<NaiveDate, f64>>,
}

impl WeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value it replaced, if any.
    pub async fn record(&self, date: NaiveDate, weight: f64) -> Option<f64> {
        self.days.write().await.insert(date, weight)
    }

    pub async fn get(&self, date: NaiveDate) -> Option<WeightRecord> {
        self.days
            .read()
            .await
            .get(&date)
            .map(|&weight| WeightRecord { date, weight })
    }
}
