use std::collections::HashMap;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::debug;

use crate::meals::dto::MealRecord;

/// Append-only meal log, one ordered list per day.
#[derive(Debug, Default)]
pub struct MealStore {
    days: RwLock<HashMap<NaiveDate, Vec<MealRecord>>>,
}

impl MealStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, date: NaiveDate, meal: MealRecord) {
        let mut days = self.days.write().await;
        let list = days.entry(date).or_default();
        list.push(meal);
        debug!(%date, count = list.len(), "meal appended");
    }

    /// Snapshot of the day's meals in insertion order; empty if none were logged.
    pub async fn list_for(&self, date: NaiveDate) -> Vec<MealRecord> {
        self.days
            .read()
            .await
            .get(&date)
            .cloned()
            .unwrap_or_default()
    }
}
