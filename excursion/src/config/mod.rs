//! Server configuration.
//!
//! Deserialized from a YAML file (`excursion.yml`) and merged with command
//! line flags; flags win. Submodules:
//! - [`Config`]: top-level loader.
//! - [`ServerConfig`]: network settings.
//! - [`CorsConfig`]: allowed origins.
//! - [`DatasetConfig`]: raw dataset path and cache TTL.
//! - [`StorageConfig`]: model binary storage directory.

mod cors;
mod dataset;
mod main;
mod server;
mod storage;

pub use cors::CorsConfig;
pub use dataset::DatasetConfig;
pub use main::Config;
pub use server::ServerConfig;
pub use storage::StorageConfig;
