//! Bakehouse API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! services) so integration tests, the seeder, and the binary entrypoint can
//! all access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
