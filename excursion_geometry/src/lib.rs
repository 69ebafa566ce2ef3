//! Pure 2D geometry for the excursion building catalog.
//!
//! Everything in this crate operates on the catalog's internal coordinate
//! system: a flat `x`/`z` plane as used by the 3D viewer. The crate contains
//! no I/O; all functions are deterministic given identical floating-point
//! inputs and summation order.

mod bbox;
mod centroid;
mod point;
mod projection;

pub use bbox::BBox;
pub use centroid::centroid;
pub use point::Point;
pub use projection::{apply_regional_correction, within_projection_bounds, COORDINATE_LIMIT};
