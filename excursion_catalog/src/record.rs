use excursion_geometry::Point;
use serde::Deserialize;

/// Top-level shape of the raw dataset file.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDataset {
	pub buildings: Vec<RawBuildingRecord>,
}

/// One building as stored in the raw dataset.
///
/// `nodes` order is significant: it defines the polygon winding and is
/// preserved through conversion. Records may legitimately lack an address
/// or a height; a record without nodes is degenerate and gets dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBuildingRecord {
	pub id: String,
	#[serde(default)]
	pub nodes: Vec<Point>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub height: Option<f64>,
}
