//! Building catalog pipeline for the excursion backend.
//!
//! The pipeline turns a raw polygon dataset into an immutable in-memory
//! catalog and answers proximity queries over it:
//!
//! - [`CatalogLoader`]: locates and parses the raw dataset, converting each
//!   record into a [`Building`] (centroid, regional correction, stable id).
//! - [`BuildingCache`]: holds the converted catalog as an atomic snapshot
//!   with time-based invalidation.
//! - [`query`]: radius and address lookups over a snapshot.
//!
//! Loading failures are absorbed here: a missing or malformed dataset yields
//! an empty catalog and a warning, never a startup failure. Only
//! [`CatalogError::InvalidRegion`] is meant to reach API callers.

mod building;
mod cache;
mod error;
mod identity;
mod loader;
pub mod query;
mod record;

pub use building::{Building, CatalogSnapshot};
pub use cache::{BuildingCache, CatalogSource, DEFAULT_CACHE_TTL};
pub use error::CatalogError;
pub use identity::derive_stable_id;
pub use loader::{CatalogLoader, DATASET_FILE_NAME, DATASET_PATH_ENV};
pub use record::RawBuildingRecord;
