//! Read-only queries over a catalog snapshot.
//!
//! All queries are linear scans over the immutable building list. The
//! catalog holds tens of thousands of entries at most, which a scan handles
//! comfortably; there is deliberately no spatial index.

use crate::{building::Building, error::CatalogError};
use excursion_geometry::{within_projection_bounds, BBox, Point};
use itertools::Itertools;

/// Buildings whose center lies within `radius` of `center`, in catalog
/// order.
///
/// The boundary is inclusive; `radius == 0` is legal and matches only
/// exactly coincident centers.
pub fn find_within_radius<'a>(buildings: &'a [Building], center: &Point, radius: f64) -> Vec<&'a Building> {
	buildings
		.iter()
		.filter(|building| building.center.distance_to(center) <= radius)
		.collect()
}

/// The HTTP-facing variant of [`find_within_radius`]: validates the query
/// point, pre-filters by bounding box and sorts ascending by distance.
///
/// A center outside the valid projection area (the dataset's "unknown
/// terrain" sentinel region) is rejected with
/// [`CatalogError::InvalidRegion`] before the catalog is touched.
pub fn find_nearby<'a>(
	buildings: &'a [Building],
	center: &Point,
	radius: f64,
) -> Result<Vec<&'a Building>, CatalogError> {
	if !within_projection_bounds(center) {
		return Err(CatalogError::InvalidRegion { x: center.x, z: center.z });
	}

	let bbox = BBox::from_center_radius(*center, radius);
	Ok(
		buildings
			.iter()
			.filter(|building| bbox.contains(&building.center))
			.map(|building| (building.center.distance_to(center), building))
			.filter(|(distance, _)| *distance <= radius)
			.sorted_by(|a, b| a.0.total_cmp(&b.0))
			.map(|(_, building)| building)
			.collect(),
	)
}

/// Case-insensitive exact address lookup.
pub fn find_by_address<'a>(buildings: &'a [Building], address: &str) -> Option<&'a Building> {
	buildings
		.iter()
		.find(|building| match &building.address {
			Some(candidate) => candidate.eq_ignore_ascii_case(address),
			None => false,
		})
}
