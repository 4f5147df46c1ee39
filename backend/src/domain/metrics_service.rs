use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::traits::{MealStorage, UserStorage};
use shared::Meal;

/// Aggregate adherence statistics for one session's journal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealMetrics {
    pub total_meals: u32,
    pub total_on_diet: u32,
    pub total_off_diet: u32,
    /// Longest run of chronologically consecutive on-diet meals
    pub best_streak: u32,
}

/// Derives totals and the best on-diet streak from one session's records
#[derive(Clone)]
pub struct MetricsService {
    users: Arc<dyn UserStorage>,
    meals: Arc<dyn MealStorage>,
}

impl MetricsService {
    pub fn new(users: Arc<dyn UserStorage>, meals: Arc<dyn MealStorage>) -> Self {
        Self { users, meals }
    }

    /// Compute metrics over the session's meals in chronological order.
    ///
    /// An empty journal yields all zeros.
    pub async fn compute_metrics(&self, session_token: &str) -> DomainResult<MealMetrics> {
        let user = self
            .users
            .get_user_by_session(session_token)
            .await?
            .ok_or(DomainError::NoLinkedUser)?;

        let meals = self.meals.list_meals_chronological(&user.id).await?;
        let metrics = Self::summarize(&meals);

        info!(
            "Computed metrics for user {}: {} meals, best streak {}",
            user.id, metrics.total_meals, metrics.best_streak
        );
        Ok(metrics)
    }

    /// Single left-to-right scan: the running counter increments on an
    /// on-diet meal and resets on an off-diet one, tracking the maximum.
    /// O(n) time, O(1) extra space. `meals` must be in ascending date order.
    fn summarize(meals: &[Meal]) -> MealMetrics {
        let mut metrics = MealMetrics::default();
        let mut run = 0u32;
        for meal in meals {
            metrics.total_meals += 1;
            if meal.is_on_diet {
                metrics.total_on_diet += 1;
                run += 1;
                metrics.best_streak = metrics.best_streak.max(run);
            } else {
                metrics.total_off_diet += 1;
                run = 0;
            }
        }
        metrics
    }
}
