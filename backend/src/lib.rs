//! # Diet Journal Backend
//!
//! Anonymous diet-tracking journal: each client session owns a private list
//! of meal entries and a derived adherence summary.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//! ```text
//! IO Layer (REST API, session cookie handling)
//!     ↓
//! Domain Layer (identity, meal CRUD, metrics services)
//!     ↓
//! Storage Layer (sqlite repositories behind traits)
//! ```
//!
//! All state lives in [`AppState`], built once at startup from a [`Config`]
//! and injected into the router; there are no ambient globals.

pub mod domain;
pub mod io;
pub mod storage;

use std::env;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{MealService, MetricsService, SessionService, UserService};
use crate::storage::traits::{MealStorage, UserStorage};
use crate::storage::{DbConnection, MealRepository, UserRepository};

const DEFAULT_DATABASE_URL: &str = "sqlite:diet_journal.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Process configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub user_service: UserService,
    pub meal_service: MealService,
    pub metrics_service: MetricsService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(build_state(db))
}

fn build_state(db: DbConnection) -> AppState {
    let users: Arc<dyn UserStorage> = Arc::new(UserRepository::new(db.clone()));
    let meals: Arc<dyn MealStorage> = Arc::new(MealRepository::new(db));

    AppState {
        session_service: SessionService::new(),
        user_service: UserService::new(Arc::clone(&users)),
        meal_service: MealService::new(Arc::clone(&users), Arc::clone(&meals)),
        metrics_service: MetricsService::new(users, meals),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow a local frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/users", post(io::rest::user_apis::create_user))
        .route(
            "/meals",
            get(io::rest::meal_apis::list_meals).post(io::rest::meal_apis::create_meal),
        )
        .route("/meals/metrics", get(io::rest::metrics_apis::get_metrics))
        .route(
            "/meals/:meal_id",
            get(io::rest::meal_apis::get_meal)
                .put(io::rest::meal_apis::update_meal)
                .delete(io::rest::meal_apis::delete_meal),
        );

    Router::new().nest("/api", api_routes).layer(cors).with_state(app_state)
}
