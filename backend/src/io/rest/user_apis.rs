//! # REST API for User Registration
//!
//! A user is created under the caller's session; the session token is
//! minted here when the client arrives without one.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::io::rest::mappers::UserMapper;
use crate::io::rest::session::{with_session_cookie, SessionCookie};
use crate::io::rest::error_response;
use crate::AppState;
use shared::CreateUserRequest;

/// Create a new user bound to the current session
pub async fn create_user(
    State(state): State<AppState>,
    cookie: SessionCookie,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    info!("POST /api/users - name: {}", request.name);

    let session = state.session_service.ensure_session(cookie.token());
    let response = match state.user_service.create_user(&session.token, request).await {
        Ok(user) => (StatusCode::CREATED, Json(UserMapper::to_response(user))).into_response(),
        Err(e) => error_response("Failed to create user", e),
    };
    with_session_cookie(response, &session)
}
