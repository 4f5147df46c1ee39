//! # REST API for Adherence Metrics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::io::rest::session::{with_session_cookie, SessionCookie};
use crate::io::rest::error_response;
use crate::AppState;
use shared::MetricsResponse;

/// Totals and best on-diet streak for the current session
pub async fn get_metrics(
    State(state): State<AppState>,
    cookie: SessionCookie,
) -> impl IntoResponse {
    info!("GET /api/meals/metrics");

    let session = state.session_service.ensure_session(cookie.token());
    let response = match state.metrics_service.compute_metrics(&session.token).await {
        Ok(metrics) => {
            let body = MetricsResponse {
                total_meals: metrics.total_meals,
                total_meals_on_diet: metrics.total_on_diet,
                total_meals_off_diet: metrics.total_off_diet,
                best_on_diet_sequence: metrics.best_streak,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response("Failed to compute metrics", e),
    };
    with_session_cookie(response, &session)
}
