//! # Storage Module
//!
//! Data persistence for the diet journal.
//!
//! The domain layer depends only on the traits in [`traits`]; the sqlite
//! implementation behind them can be swapped without touching business
//! logic. The durable tables are the only shared mutable resource in the
//! process — records are never cached in memory across calls.
//!
//! ## Current Implementation
//!
//! - **Primary storage**: SQLite via sqlx with an async connection pool
//! - **Lifecycle**: one [`connection::DbConnection`] opened at startup and
//!   injected into the repositories; dropped on shutdown
//! - **Tests**: each test gets a uniquely named in-memory database

pub mod sqlite;
pub mod traits;

pub use sqlite::connection::DbConnection;
pub use sqlite::repositories::{MealRepository, UserRepository};
