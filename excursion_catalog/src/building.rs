use excursion_geometry::Point;
use std::time::Instant;
use uuid::Uuid;

/// A converted building in the catalog's coordinate system.
///
/// Created once per load cycle and immutable afterwards; a cache refresh
/// replaces the whole list instead of mutating individual entries.
/// `boundary` is never empty — records without boundary nodes are dropped
/// during loading.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
	/// Deterministic id derived from `source_id`; stable across reloads.
	pub stable_id: Uuid,
	/// Identifier of the record in the raw dataset.
	pub source_id: String,
	/// Corrected polygon centroid.
	pub center: Point,
	pub address: Option<String>,
	pub height: Option<f64>,
	/// Corrected polygon vertices, in dataset order, for rendering.
	pub boundary: Vec<Point>,
}

/// Immutable point-in-time view of the full catalog.
///
/// Owned by [`BuildingCache`](crate::BuildingCache) and shared as an `Arc`;
/// readers never observe a partially populated snapshot.
#[derive(Debug)]
pub struct CatalogSnapshot {
	pub buildings: Vec<Building>,
	pub loaded_at: Instant,
}

impl CatalogSnapshot {
	pub fn new(buildings: Vec<Building>) -> Self {
		Self {
			buildings,
			loaded_at: Instant::now(),
		}
	}
}
