use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::UserStorage;
use shared::User;

/// Repository for journal user rows
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStorage for UserRepository {
    async fn store_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, session_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.session_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_user_by_session(&self, session_id: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, session_id
            FROM users
            WHERE session_id = ?
            "#,
        )
        .bind(session_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(User {
                id: r.get("id"),
                name: r.get("name"),
                email: r.get("email"),
                session_id: r.get("session_id"),
            })),
            None => Ok(None),
        }
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, session_id
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(User {
                id: r.get("id"),
                name: r.get("name"),
                email: r.get("email"),
                session_id: r.get("session_id"),
            })),
            None => Ok(None),
        }
    }
}
