//! SQLite storage backend: connection lifecycle and repositories

pub mod connection;
pub mod repositories;
