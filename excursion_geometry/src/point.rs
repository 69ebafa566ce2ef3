use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A position on the catalog's `x`/`z` plane.
///
/// The vertical axis (`y` in the viewer) never enters the catalog pipeline,
/// so points are strictly two-dimensional.
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub z: f64,
}

impl Point {
	pub fn new(x: f64, z: f64) -> Self {
		Self { x, z }
	}

	/// Euclidean distance to another point.
	pub fn distance_to(&self, other: &Point) -> f64 {
		((self.x - other.x).powi(2) + (self.z - other.z).powi(2)).sqrt()
	}
}

impl From<[f64; 2]> for Point {
	fn from(value: [f64; 2]) -> Self {
		Self::new(value[0], value[1])
	}
}

impl Debug for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}]", self.x, self.z)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance() {
		let a = Point::new(0.0, 0.0);
		let b = Point::new(3.0, 4.0);
		assert_eq!(a.distance_to(&b), 5.0);
		assert_eq!(b.distance_to(&a), 5.0);
		assert_eq!(a.distance_to(&a), 0.0);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Point::new(1.5, -2.0)), "[1.5, -2]");
	}
}
