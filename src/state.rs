use chrono::Local;

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::meals::repo::MealStore;
use crate::weight::repo::WeightStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub weights: Arc<WeightStore>,
    pub meals: Arc<MealStore>,
}

impl AppState {
    pub fn init(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = match config.utc_offset {
            Some(offset) => Arc::new(SystemClock::new(offset)),
            None => Arc::new(SystemClock::new(Local)),
        };
        Self::from_parts(
            clock,
            Arc::new(WeightStore::new()),
            Arc::new(MealStore::new()),
        )
    }

    pub fn from_parts(
        clock: Arc<dyn Clock>,
        weights: Arc<WeightStore>,
        meals: Arc<MealStore>,
    ) -> Self {
        Self {
            clock,
            weights,
            meals,
        }
    }

    /// Empty stores, pinned to `today`.
    #[cfg(test)]
    pub fn fake(today: chrono::NaiveDate) -> Self {
        use crate::clock::FixedClock;

        Self::from_parts(
            Arc::new(FixedClock(today)),
            Arc::new(WeightStore::new()),
            Arc::new(MealStore::new()),
        )
    }
}
