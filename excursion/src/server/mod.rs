//! HTTP surface of the excursion backend.
//!
//! The logic is split into focused modules:
//! - `handlers`: the concrete request handlers and their DTOs.
//! - `routes`: composes handlers into an axum `Router`.
//! - `auth`: the token-validator seam and role model.
//! - `storage`: the object-store seam plus a directory-backed store.
//! - `cors`: builds a `CorsLayer` from configured origin patterns.
//!
//! `building_server` owns lifecycle concerns only: configuration ingestion,
//! middleware, listening, graceful shutdown.

pub mod auth;
mod building_server;
mod cors;
mod handlers;
mod routes;
pub mod storage;

pub use building_server::{AppState, BuildingServer};
pub use routes::build_router;
