use crate::Point;

/// Representative center of an ordered vertex list.
///
/// For three or more vertices this is the signed-area (shoelace) centroid of
/// the closed polygon, walking edges in index order and wrapping at the end.
/// Winding direction does not matter: the cross terms and the area carry the
/// same sign and cancel.
///
/// One or two vertices have no defined signed area, so those fall back to
/// the arithmetic mean of the coordinates. The same fallback applies when
/// the accumulated area is exactly zero (collinear vertices, or a ring that
/// retraces itself), where the shoelace factor `1/(6*area)` is undefined.
///
/// Returns `Point::default()` for an empty slice; loaders drop empty rings
/// before calling.
pub fn centroid(vertices: &[Point]) -> Point {
	if vertices.is_empty() {
		return Point::default();
	}
	if vertices.len() < 3 {
		return arithmetic_mean(vertices);
	}

	let mut area = 0f64;
	let mut cx = 0f64;
	let mut cz = 0f64;
	for (i, p1) in vertices.iter().enumerate() {
		let p2 = &vertices[(i + 1) % vertices.len()];
		let cross = p1.x * p2.z - p2.x * p1.z;
		area += cross;
		cx += (p1.x + p2.x) * cross;
		cz += (p1.z + p2.z) * cross;
	}
	area /= 2.0;

	if area == 0.0 {
		return arithmetic_mean(vertices);
	}

	let factor = 1.0 / (6.0 * area);
	Point::new(cx * factor, cz * factor)
}

fn arithmetic_mean(vertices: &[Point]) -> Point {
	let n = vertices.len() as f64;
	Point::new(
		vertices.iter().map(|p| p.x).sum::<f64>() / n,
		vertices.iter().map(|p| p.z).sum::<f64>() / n,
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn points(coords: &[[f64; 2]]) -> Vec<Point> {
		coords.iter().map(|c| Point::from(*c)).collect()
	}

	#[test]
	fn triangle_matches_vertex_mean() {
		// For a triangle the shoelace centroid equals the vertex mean.
		let c = centroid(&points(&[[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]));
		assert!((c.x - 4.0 / 3.0).abs() < 1e-12);
		assert!((c.z - 4.0 / 3.0).abs() < 1e-12);
	}

	#[test]
	fn winding_direction_is_irrelevant() {
		let cw = centroid(&points(&[[0.0, 0.0], [0.0, 4.0], [4.0, 0.0]]));
		let ccw = centroid(&points(&[[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]));
		assert_eq!(cw, ccw);
	}

	#[test]
	fn unit_square_off_origin() {
		let c = centroid(&points(&[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 3.0]]));
		assert!((c.x - 2.5).abs() < 1e-12);
		assert!((c.z - 2.5).abs() < 1e-12);
	}

	#[test]
	fn concave_polygon_differs_from_vertex_mean() {
		// L-shape: the shoelace centroid sits inside the mass, the vertex
		// mean does not.
		let c = centroid(&points(&[
			[0.0, 0.0],
			[2.0, 0.0],
			[2.0, 1.0],
			[1.0, 1.0],
			[1.0, 2.0],
			[0.0, 2.0],
		]));
		assert!((c.x - 5.0 / 6.0).abs() < 1e-12);
		assert!((c.z - 5.0 / 6.0).abs() < 1e-12);
	}

	#[rstest]
	#[case(&[[2.0, 3.0]], [2.0, 3.0])]
	#[case(&[[0.0, 0.0], [2.0, 2.0]], [1.0, 1.0])]
	fn degenerate_falls_back_to_mean(#[case] input: &[[f64; 2]], #[case] expected: [f64; 2]) {
		assert_eq!(centroid(&points(input)), Point::from(expected));
	}

	#[test]
	fn collinear_ring_falls_back_to_mean() {
		// Three collinear vertices have zero signed area.
		let c = centroid(&points(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]));
		assert_eq!(c, Point::new(1.0, 1.0));
	}

	#[test]
	fn empty_input_yields_origin() {
		assert_eq!(centroid(&[]), Point::default());
	}
}
