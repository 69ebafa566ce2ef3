//! End-to-end pipeline test: dataset file → loader → cache → query.

use excursion_catalog::{query, BuildingCache, CatalogLoader};
use excursion_geometry::Point;
use std::{fs::File, io::Write, time::Duration};
use tempfile::TempDir;

const DATASET: &str = r#"{
	"buildings": [
		{
			"id": "way/100",
			"nodes": [{"x": -10.0, "z": 10.0}, {"x": -14.0, "z": 10.0}, {"x": -14.0, "z": 14.0}, {"x": -10.0, "z": 14.0}],
			"address": "Main Street 123",
			"height": 21.0
		},
		{
			"id": "way/200",
			"nodes": [{"x": -40.0, "z": 40.0}, {"x": -44.0, "z": 40.0}, {"x": -44.0, "z": 44.0}, {"x": -40.0, "z": 44.0}],
			"address": null,
			"height": 7.5
		},
		{"id": "way/300", "nodes": [], "address": "no geometry"}
	]
}"#;

fn cache_over(dataset: &str) -> (BuildingCache, TempDir) {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("buildings.json");
	File::create(&path).unwrap().write_all(dataset.as_bytes()).unwrap();
	let cache = BuildingCache::new(CatalogLoader::with_path(path), Duration::from_secs(3600));
	(cache, dir)
}

#[test]
fn dataset_is_served_through_cache_and_query() {
	let (cache, _dir) = cache_over(DATASET);
	let snapshot = cache.snapshot();

	// The degenerate record is dropped, the others arrive corrected: raw
	// X was negative, the regional correction flips it positive.
	assert_eq!(snapshot.buildings.len(), 2);
	let first = &snapshot.buildings[0];
	assert_eq!(first.source_id, "way/100");
	assert_eq!(first.center, Point::new(12.0, 12.0));
	assert_eq!(first.boundary[0], Point::new(10.0, 10.0));

	// Near the first building only.
	let hits = query::find_nearby(&snapshot.buildings, &Point::new(12.0, 12.0), 5.0).unwrap();
	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0].source_id, "way/100");

	// Wide enough to see both, ordered by distance.
	let hits = query::find_nearby(&snapshot.buildings, &Point::new(12.0, 12.0), 100.0).unwrap();
	let ids: Vec<&str> = hits.iter().map(|b| b.source_id.as_str()).collect();
	assert_eq!(ids, vec!["way/100", "way/200"]);

	// Address lookup hits the same snapshot.
	let by_address = query::find_by_address(&snapshot.buildings, "main street 123").unwrap();
	assert_eq!(by_address.stable_id, first.stable_id);
}

#[test]
fn snapshot_is_shared_until_expiry() {
	let (cache, _dir) = cache_over(DATASET);
	let first = cache.snapshot();
	let second = cache.snapshot();
	assert!(std::sync::Arc::ptr_eq(&first, &second));
}
