use crate::Point;

/// Largest coordinate magnitude the source projection can express.
///
/// The raw dataset marks positions outside the mapped area with coordinates
/// beyond this limit ("unknown terrain"), so any query point past it is a
/// client error rather than a far-away location.
pub const COORDINATE_LIMIT: f64 = 100.0;

/// Fixed sign correction for this deployment's source dataset.
///
/// The regional dataset stores X with an inverted sign relative to the
/// catalog's canonical coordinate system; flipping it here keeps centroids
/// and boundary vertices consistent. This is a dataset-specific quirk, not a
/// geodetic transform — a second region would swap in its own correction.
///
/// The flip is its own inverse.
pub fn apply_regional_correction(p: Point) -> Point {
	Point::new(-p.x, p.z)
}

/// Whether `p` lies inside the valid projection area (boundary inclusive).
pub fn within_projection_bounds(p: &Point) -> bool {
	p.x.abs() <= COORDINATE_LIMIT && p.z.abs() <= COORDINATE_LIMIT
}
