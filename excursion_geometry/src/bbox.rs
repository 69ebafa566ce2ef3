use crate::Point;

/// Axis-aligned bounding box on the `x`/`z` plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
	pub min: Point,
	pub max: Point,
}

impl BBox {
	pub fn new(min: Point, max: Point) -> Self {
		Self { min, max }
	}

	/// The square circumscribing a circle of `radius` around `center`.
	pub fn from_center_radius(center: Point, radius: f64) -> Self {
		Self {
			min: Point::new(center.x - radius, center.z - radius),
			max: Point::new(center.x + radius, center.z + radius),
		}
	}

	/// Smallest box containing every point, or `None` for an empty slice.
	pub fn from_points(points: &[Point]) -> Option<Self> {
		let first = points.first()?;
		let mut bbox = Self::new(*first, *first);
		for p in &points[1..] {
			bbox.include(p);
		}
		Some(bbox)
	}

	pub fn include(&mut self, p: &Point) {
		self.min.x = self.min.x.min(p.x);
		self.min.z = self.min.z.min(p.z);
		self.max.x = self.max.x.max(p.x);
		self.max.z = self.max.z.max(p.z);
	}

	/// Boundary-inclusive containment test.
	pub fn contains(&self, p: &Point) -> bool {
		p.x >= self.min.x && p.x <= self.max.x && p.z >= self.min.z && p.z <= self.max.z
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_center_radius_contains_boundary() {
		let bbox = BBox::from_center_radius(Point::new(1.0, 2.0), 3.0);
		assert_eq!(bbox.min, Point::new(-2.0, -1.0));
		assert_eq!(bbox.max, Point::new(4.0, 5.0));
		assert!(bbox.contains(&Point::new(4.0, 5.0)));
		assert!(bbox.contains(&Point::new(1.0, 2.0)));
		assert!(!bbox.contains(&Point::new(4.1, 2.0)));
	}

	#[test]
	fn from_points() {
		assert_eq!(BBox::from_points(&[]), None);
		let bbox = BBox::from_points(&[
			Point::new(3.0, -1.0),
			Point::new(-2.0, 4.0),
			Point::new(0.0, 0.0),
		])
		.unwrap();
		assert_eq!(bbox.min, Point::new(-2.0, -1.0));
		assert_eq!(bbox.max, Point::new(3.0, 4.0));
	}
}
