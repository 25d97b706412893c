//! Flashcards API server library.
//!
//! Exposes the core building blocks (config, state, error handling, services,
//! routes) so integration tests and the binary entrypoint can both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
