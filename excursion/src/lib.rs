//! # Excursion backend
//!
//! HTTP backend for map excursions: serves the building catalog (polygon
//! centroids, boundaries and proximity queries) and stored 3D model
//! binaries to the map viewer.
//!
//! The heavy lifting lives in the workspace libraries:
//! - `excursion_geometry`: centroid math, regional correction, bounds.
//! - `excursion_catalog`: dataset loading, the TTL snapshot cache and the
//!   catalog queries.
//!
//! This crate adds the outer shell: YAML configuration, the axum server
//! with its middleware stack, and the trait seams for the external
//! collaborators (token validation, object storage).

pub mod config;
pub mod server;

pub use config::Config;
pub use server::BuildingServer;
