use thiserror::Error;

/// Failure conditions of the catalog pipeline.
///
/// `SourceNotFound`, `Io` and `Parse` are absorbed inside
/// [`CatalogLoader::load_catalog`](crate::CatalogLoader::load_catalog) and
/// downgraded to an empty catalog plus a warning. `InvalidRegion` is a
/// client input problem and is the only variant that should surface through
/// the HTTP boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("building dataset not found in any candidate location")]
	SourceNotFound,

	#[error("failed to read building dataset: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse building dataset: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("query point [{x}, {z}] lies outside the valid projection area")]
	InvalidRegion { x: f64, z: f64 },
}
