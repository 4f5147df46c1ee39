//! # Domain Module
//!
//! Business logic for the diet journal.
//!
//! This module encapsulates the core rules of the journal: session identity,
//! user registration, session-scoped meal CRUD, and adherence metrics. It
//! operates independently of the REST layer and of any specific storage
//! backend.
//!
//! ## Module Organization
//!
//! - **session_service**: Issues and recognizes anonymous session tokens
//! - **user_service**: Registers the single user a session may own
//! - **meal_service**: Session-scoped CRUD over meal records
//! - **metrics_service**: Totals and best on-diet streak for one session
//! - **errors**: Typed error kinds crossing the domain boundary
//!
//! ## Business Rules
//!
//! - Every meal belongs to exactly one user, and a user to exactly one session
//! - Id-scoped reads and writes always filter on both meal id and owner
//! - Meal dates are caller supplied; listing is newest-first, metrics scan
//!   oldest-first
//! - A session without a linked user is reported distinctly from a missing
//!   record

pub mod errors;
pub mod meal_service;
pub mod metrics_service;
pub mod session_service;
pub mod user_service;

pub use errors::{DomainError, DomainResult};
pub use meal_service::MealService;
pub use metrics_service::{MealMetrics, MetricsService};
pub use session_service::{EnsuredSession, SessionService, SESSION_TTL_SECONDS};
pub use user_service::UserService;
