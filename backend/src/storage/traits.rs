//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against any
//! durable backend. Ownership scoping is part of the contract: every
//! id-scoped meal operation takes the owning user id and must filter on
//! both.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Meal, User};

/// Interface for journal user storage
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Store a new user
    async fn store_user(&self, user: &User) -> Result<()>;

    /// Retrieve the user bound to a session token
    async fn get_user_by_session(&self, session_id: &str) -> Result<Option<User>>;

    /// Retrieve a user by email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Interface for meal record storage
#[async_trait]
pub trait MealStorage: Send + Sync {
    /// Store a new meal
    async fn store_meal(&self, meal: &Meal) -> Result<()>;

    /// Retrieve a meal by id, scoped to its owner
    async fn get_meal(&self, user_id: &str, meal_id: &str) -> Result<Option<Meal>>;

    /// List a user's meals ordered by date descending (most recent first).
    /// Equal dates keep insertion order on every call.
    async fn list_meals(&self, user_id: &str) -> Result<Vec<Meal>>;

    /// List a user's meals ordered by date ascending (oldest first), the
    /// order the streak scan requires. Equal dates keep insertion order.
    async fn list_meals_chronological(&self, user_id: &str) -> Result<Vec<Meal>>;

    /// Overwrite an existing meal; the write is scoped by id and owner
    async fn update_meal(&self, meal: &Meal) -> Result<()>;

    /// Delete a meal scoped to its owner.
    /// Returns true if the meal was found and deleted, false otherwise.
    async fn delete_meal(&self, user_id: &str, meal_id: &str) -> Result<bool>;
}
