//! # IO Module
//!
//! Interface layer that exposes the domain over HTTP. Pure translation: no
//! business logic lives here.

pub mod rest;
