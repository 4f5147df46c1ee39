//! # REST API for Meal Management
//!
//! Endpoints for creating, listing, retrieving, updating, and deleting the
//! session's meal entries. Every operation is scoped to the session found
//! in (or minted for) the request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::io::rest::mappers::MealMapper;
use crate::io::rest::session::{with_session_cookie, SessionCookie};
use crate::io::rest::error_response;
use crate::AppState;
use shared::{CreateMealRequest, UpdateMealRequest};

/// Create a meal for the current session
pub async fn create_meal(
    State(state): State<AppState>,
    cookie: SessionCookie,
    Json(request): Json<CreateMealRequest>,
) -> impl IntoResponse {
    info!("POST /api/meals - name: {}", request.name);

    let session = state.session_service.ensure_session(cookie.token());
    let response = match state.meal_service.create_meal(&session.token, request).await {
        Ok(meal) => (StatusCode::CREATED, Json(MealMapper::to_response(meal))).into_response(),
        Err(e) => error_response("Failed to create meal", e),
    };
    with_session_cookie(response, &session)
}

/// List the session's meals, most recent first
pub async fn list_meals(
    State(state): State<AppState>,
    cookie: SessionCookie,
) -> impl IntoResponse {
    info!("GET /api/meals");

    let session = state.session_service.ensure_session(cookie.token());
    let response = match state.meal_service.list_meals(&session.token).await {
        Ok(meals) => (StatusCode::OK, Json(MealMapper::to_list_response(meals))).into_response(),
        Err(e) => error_response("Failed to list meals", e),
    };
    with_session_cookie(response, &session)
}

/// Get one of the session's meals by id
pub async fn get_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<String>,
    cookie: SessionCookie,
) -> impl IntoResponse {
    info!("GET /api/meals/{}", meal_id);

    let session = state.session_service.ensure_session(cookie.token());
    let response = match state.meal_service.get_meal(&session.token, &meal_id).await {
        Ok(meal) => (StatusCode::OK, Json(MealMapper::to_response(meal))).into_response(),
        Err(e) => error_response("Failed to get meal", e),
    };
    with_session_cookie(response, &session)
}

/// Replace every field of one of the session's meals
pub async fn update_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<String>,
    cookie: SessionCookie,
    Json(request): Json<UpdateMealRequest>,
) -> impl IntoResponse {
    info!("PUT /api/meals/{}", meal_id);

    let session = state.session_service.ensure_session(cookie.token());
    let response = match state
        .meal_service
        .update_meal(&session.token, &meal_id, request)
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("Failed to update meal", e),
    };
    with_session_cookie(response, &session)
}

/// Delete one of the session's meals
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<String>,
    cookie: SessionCookie,
) -> impl IntoResponse {
    info!("DELETE /api/meals/{}", meal_id);

    let session = state.session_service.ensure_session(cookie.token());
    let response = match state.meal_service.delete_meal(&session.token, &meal_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("Failed to delete meal", e),
    };
    with_session_cookie(response, &session)
}
