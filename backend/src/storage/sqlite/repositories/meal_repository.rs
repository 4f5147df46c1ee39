use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::MealStorage;
use shared::Meal;

/// Repository for meal records.
///
/// Every id-scoped statement filters on both `id` and `user_id`; ownership
/// is enforced here, not above.
#[derive(Clone)]
pub struct MealRepository {
    db: DbConnection,
}

impl MealRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_meal(row: &sqlx::sqlite::SqliteRow) -> Meal {
        Meal {
            id: row.get("id"),
            user_id: row.get("user_id"),
            name: row.get("name"),
            description: row.get("description"),
            is_on_diet: row.get("is_on_diet"),
            date: row.get("date"),
        }
    }
}

#[async_trait]
impl MealStorage for MealRepository {
    async fn store_meal(&self, meal: &Meal) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO meals (id, name, description, is_on_diet, date, user_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&meal.id)
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.is_on_diet)
        .bind(meal.date)
        .bind(&meal.user_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_meal(&self, user_id: &str, meal_id: &str) -> Result<Option<Meal>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, is_on_diet, date, user_id
            FROM meals
            WHERE user_id = ? AND id = ?
            "#,
        )
        .bind(user_id)
        .bind(meal_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::row_to_meal))
    }

    async fn list_meals(&self, user_id: &str) -> Result<Vec<Meal>> {
        // ROWID keeps equal-date records in insertion order on every call
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, is_on_diet, date, user_id
            FROM meals
            WHERE user_id = ?
            ORDER BY date DESC, ROWID ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_meal).collect())
    }

    async fn list_meals_chronological(&self, user_id: &str) -> Result<Vec<Meal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, is_on_diet, date, user_id
            FROM meals
            WHERE user_id = ?
            ORDER BY date ASC, ROWID ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_meal).collect())
    }

    async fn update_meal(&self, meal: &Meal) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE meals
            SET name = ?, description = ?, is_on_diet = ?, date = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.is_on_diet)
        .bind(meal.date)
        .bind(&meal.id)
        .bind(&meal.user_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_meal(&self, user_id: &str, meal_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM meals WHERE user_id = ? AND id = ?
            "#,
        )
        .bind(user_id)
        .bind(meal_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> MealRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        MealRepository::new(db)
    }

    fn meal(id: &str, user_id: &str, is_on_diet: bool, date: i64) -> Meal {
        Meal {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: format!("Meal {id}"),
            description: "test meal".to_string(),
            is_on_diet,
            date,
        }
    }

    #[tokio::test]
    async fn test_store_and_get_meal() {
        let repo = setup_test().await;
        let stored = meal("meal-1", "user-1", true, 1704100000000);

        repo.store_meal(&stored).await.expect("Failed to store meal");

        let found = repo.get_meal("user-1", "meal-1").await.expect("Query failed");
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_get_meal_is_owner_scoped() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", true, 1704100000000))
            .await
            .unwrap();

        // Same id under a different owner reads as absent
        let found = repo.get_meal("user-2", "meal-1").await.expect("Query failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_meals_newest_first() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", true, 1_000)).await.unwrap();
        repo.store_meal(&meal("meal-2", "user-1", false, 3_000)).await.unwrap();
        repo.store_meal(&meal("meal-3", "user-1", true, 2_000)).await.unwrap();

        let meals = repo.list_meals("user-1").await.expect("Query failed");
        let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["meal-2", "meal-3", "meal-1"]);
    }

    #[tokio::test]
    async fn test_list_meals_chronological_oldest_first() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", true, 2_000)).await.unwrap();
        repo.store_meal(&meal("meal-2", "user-1", false, 1_000)).await.unwrap();

        let meals = repo
            .list_meals_chronological("user-1")
            .await
            .expect("Query failed");
        let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["meal-2", "meal-1"]);
    }

    #[tokio::test]
    async fn test_equal_dates_keep_insertion_order() {
        let repo = setup_test().await;
        for id in ["meal-1", "meal-2", "meal-3"] {
            repo.store_meal(&meal(id, "user-1", true, 5_000)).await.unwrap();
        }

        let chronological = repo.list_meals_chronological("user-1").await.unwrap();
        let ids: Vec<&str> = chronological.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["meal-1", "meal-2", "meal-3"]);

        // Stable across calls
        let again = repo.list_meals_chronological("user-1").await.unwrap();
        assert_eq!(chronological, again);
    }

    #[tokio::test]
    async fn test_list_meals_filters_by_owner() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", true, 1_000)).await.unwrap();
        repo.store_meal(&meal("meal-2", "user-2", true, 2_000)).await.unwrap();

        let meals = repo.list_meals("user-1").await.expect("Query failed");
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id, "meal-1");
    }

    #[tokio::test]
    async fn test_list_meals_empty() {
        let repo = setup_test().await;
        let meals = repo.list_meals("user-1").await.expect("Query failed");
        assert!(meals.is_empty());
    }

    #[tokio::test]
    async fn test_update_meal_overwrites_fields() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", false, 1_000)).await.unwrap();

        let mut updated = meal("meal-1", "user-1", true, 9_000);
        updated.name = "Renamed".to_string();
        repo.update_meal(&updated).await.expect("Failed to update");

        let found = repo.get_meal("user-1", "meal-1").await.unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_meal_is_owner_scoped() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", false, 1_000)).await.unwrap();

        // A write carrying the wrong owner touches nothing
        let foreign = meal("meal-1", "user-2", true, 9_000);
        repo.update_meal(&foreign).await.expect("Update should not error");

        let found = repo.get_meal("user-1", "meal-1").await.unwrap().unwrap();
        assert!(!found.is_on_diet);
        assert_eq!(found.date, 1_000);
    }

    #[tokio::test]
    async fn test_delete_meal_twice() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", true, 1_000)).await.unwrap();

        let deleted = repo.delete_meal("user-1", "meal-1").await.expect("Delete failed");
        assert!(deleted, "Meal should have been deleted");

        let deleted_again = repo.delete_meal("user-1", "meal-1").await.expect("Delete failed");
        assert!(!deleted_again, "Meal should no longer exist");
    }

    #[tokio::test]
    async fn test_delete_meal_is_owner_scoped() {
        let repo = setup_test().await;
        repo.store_meal(&meal("meal-1", "user-1", true, 1_000)).await.unwrap();

        let deleted = repo.delete_meal("user-2", "meal-1").await.expect("Delete failed");
        assert!(!deleted);
        assert!(repo.get_meal("user-1", "meal-1").await.unwrap().is_some());
    }
}
