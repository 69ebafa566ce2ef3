use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
	/// Path to the raw dataset file. When unset, the loader searches its
	/// conventional locations (working directory, parents, executable
	/// directory, `data/` subdirectory, `BUILDINGS_JSON_PATH`).
	#[serde()]
	pub path: Option<PathBuf>,

	/// Catalog cache validity window in seconds. Default: 300.
	#[serde()]
	pub cache_ttl_seconds: Option<u64>,
}

impl DatasetConfig {
	pub fn override_optional_path(&mut self, path: &Option<PathBuf>) {
		if path.is_some() {
			self.path = path.clone();
		}
	}
	pub fn override_optional_cache_ttl_seconds(&mut self, seconds: &Option<u64>) {
		if seconds.is_some() {
			self.cache_ttl_seconds = *seconds;
		}
	}
}
