use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::traits::{MealStorage, UserStorage};
use shared::{parse_date_millis, CreateMealRequest, Meal, UpdateMealRequest};

/// Session-scoped CRUD over meal records.
///
/// Every operation resolves the session's user first; id-scoped queries then
/// filter on both the meal id and the owning user, so one session can never
/// observe or mutate another session's records.
#[derive(Clone)]
pub struct MealService {
    users: Arc<dyn UserStorage>,
    meals: Arc<dyn MealStorage>,
}

impl MealService {
    pub fn new(users: Arc<dyn UserStorage>, meals: Arc<dyn MealStorage>) -> Self {
        Self { users, meals }
    }

    /// Create a meal owned by the session's user.
    ///
    /// Fails with [`DomainError::NoLinkedUser`] before anything is written
    /// when the session has no registered user.
    pub async fn create_meal(
        &self,
        session_token: &str,
        request: CreateMealRequest,
    ) -> DomainResult<Meal> {
        let user = self.linked_user(session_token).await?;
        let date = Self::validate_fields(&request.name, &request.date)?;

        let meal = Meal {
            id: Uuid::new_v4().to_string(),
            user_id: user.id,
            name: request.name.trim().to_string(),
            description: request.description,
            is_on_diet: request.is_on_diet,
            date,
        };
        self.meals.store_meal(&meal).await?;

        info!("Created meal {} for user {}", meal.id, meal.user_id);
        Ok(meal)
    }

    /// List the session's meals, most recent `date` first.
    ///
    /// Never fails for a session with a linked user; an empty journal is an
    /// empty vec.
    pub async fn list_meals(&self, session_token: &str) -> DomainResult<Vec<Meal>> {
        let user = self.linked_user(session_token).await?;
        Ok(self.meals.list_meals(&user.id).await?)
    }

    /// Fetch a single meal by id, scoped to the session's user
    pub async fn get_meal(&self, session_token: &str, meal_id: &str) -> DomainResult<Meal> {
        let user = self.linked_user(session_token).await?;
        self.meals
            .get_meal(&user.id, meal_id)
            .await?
            .ok_or(DomainError::NotFound("meal"))
    }

    /// Replace every field of an existing meal.
    ///
    /// The write is scoped by both meal id and owner; a meal belonging to a
    /// different session reads as [`DomainError::NotFound`].
    pub async fn update_meal(
        &self,
        session_token: &str,
        meal_id: &str,
        request: UpdateMealRequest,
    ) -> DomainResult<Meal> {
        let user = self.linked_user(session_token).await?;
        let date = Self::validate_fields(&request.name, &request.date)?;

        let existing = self
            .meals
            .get_meal(&user.id, meal_id)
            .await?
            .ok_or(DomainError::NotFound("meal"))?;

        let meal = Meal {
            id: existing.id,
            user_id: existing.user_id,
            name: request.name.trim().to_string(),
            description: request.description,
            is_on_diet: request.is_on_diet,
            date,
        };
        self.meals.update_meal(&meal).await?;

        info!("Updated meal {} for user {}", meal.id, meal.user_id);
        Ok(meal)
    }

    /// Delete a meal by id, scoped to the session's user.
    ///
    /// Deleting an already-deleted id yields the same [`DomainError::NotFound`].
    pub async fn delete_meal(&self, session_token: &str, meal_id: &str) -> DomainResult<()> {
        let user = self.linked_user(session_token).await?;
        let deleted = self.meals.delete_meal(&user.id, meal_id).await?;
        if !deleted {
            return Err(DomainError::NotFound("meal"));
        }
        info!("Deleted meal {} for user {}", meal_id, user.id);
        Ok(())
    }

    async fn linked_user(&self, session_token: &str) -> DomainResult<shared::User> {
        self.users
            .get_user_by_session(session_token)
            .await?
            .ok_or(DomainError::NoLinkedUser)
    }

    /// Defensive re-validation of boundary-supplied fields; returns the
    /// parsed date as epoch milliseconds
    fn validate_fields(name: &str, date: &str) -> DomainResult<i64> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("meal name cannot be empty"));
        }
        parse_date_millis(date)
            .map_err(|_| DomainError::validation("date must be an RFC 3339 timestamp"))
    }
}
