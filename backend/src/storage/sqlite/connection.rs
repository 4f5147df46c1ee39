use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

/// DbConnection manages the sqlite pool.
///
/// Opened once at startup with an explicit url, injected into the
/// repositories, and closed when the last clone is dropped. Nothing else in
/// the process holds storage state.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection, creating the database and schema
    /// if they do not exist yet
    pub async fn new(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?;
        }

        let pool = SqlitePool::connect(url).await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Unique shared-cache in-memory database per test
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // One user per session, one session per user
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                session_id TEXT NOT NULL UNIQUE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS meals (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                is_on_diet INTEGER NOT NULL,
                date INTEGER NOT NULL,
                user_id TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Both listing directions filter by owner and order by date
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_meals_user_date
            ON meals(user_id, date);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying sqlite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
