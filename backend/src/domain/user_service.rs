use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::traits::UserStorage;
use shared::{CreateUserRequest, User};

/// Service for registering the single user a session may own
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStorage>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStorage>) -> Self {
        Self { users }
    }

    /// Register a user under the given session token.
    ///
    /// Email uniqueness and the one-user-per-session rule are both enforced
    /// at creation time.
    pub async fn create_user(
        &self,
        session_token: &str,
        request: CreateUserRequest,
    ) -> DomainResult<User> {
        info!("Creating user: name={}", request.name);

        let name = request.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let email = request.email.trim();
        if !Self::is_valid_email(email) {
            return Err(DomainError::validation("email is not a valid address"));
        }

        if self.users.get_user_by_email(email).await?.is_some() {
            return Err(DomainError::validation("email is already registered"));
        }
        if self.users.get_user_by_session(session_token).await?.is_some() {
            return Err(DomainError::validation(
                "this session already has a registered user",
            ));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            session_id: session_token.to_string(),
        };
        self.users.store_user(&user).await?;

        info!("Created user {} for session", user.id);
        Ok(user)
    }

    /// Resolve the user linked to a session token.
    ///
    /// A valid session token with no user record is a [`DomainError::NoLinkedUser`],
    /// distinct from a missing record.
    pub async fn user_for_session(&self, session_token: &str) -> DomainResult<User> {
        self.users
            .get_user_by_session(session_token)
            .await?
            .ok_or(DomainError::NoLinkedUser)
    }

    /// Structural email check: one `@`, non-empty local part, dotted domain
    fn is_valid_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !email.contains(char::is_whitespace)
            && !domain.contains('@')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::connection::DbConnection;
    use crate::storage::sqlite::repositories::UserRepository;

    async fn create_test_service() -> UserService {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        UserService::new(Arc::new(UserRepository::new(db)))
    }

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_and_resolve_by_session() {
        let service = create_test_service().await;

        let user = service
            .create_user("session-1", request("A", "a@x.com"))
            .await
            .unwrap();
        assert_eq!(user.name, "A");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.session_id, "session-1");

        let resolved = service.user_for_session("session-1").await.unwrap();
        assert_eq!(resolved.id, user.id);
    }

    #[tokio::test]
    async fn test_session_without_user_is_no_linked_user() {
        let service = create_test_service().await;

        let error = service.user_for_session("unknown-session").await.unwrap_err();
        assert!(matches!(error, DomainError::NoLinkedUser));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let service = create_test_service().await;

        for email in ["", "plainaddress", "missing@domain", "a @x.com", "a@@x.com"] {
            let error = service
                .create_user("session-1", request("A", email))
                .await
                .unwrap_err();
            assert!(matches!(error, DomainError::Validation(_)), "email: {email:?}");
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let service = create_test_service().await;

        service
            .create_user("session-1", request("A", "a@x.com"))
            .await
            .unwrap();
        let error = service
            .create_user("session-2", request("B", "a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_one_user_per_session() {
        let service = create_test_service().await;

        service
            .create_user("session-1", request("A", "a@x.com"))
            .await
            .unwrap();
        let error = service
            .create_user("session-1", request("B", "b@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let service = create_test_service().await;

        let error = service
            .create_user("session-1", request("   ", "a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::Validation(_)));
    }
}
