use crate::{
	building::Building,
	error::CatalogError,
	identity::derive_stable_id,
	record::{RawBuildingRecord, RawDataset},
};
use excursion_geometry::{apply_regional_correction, centroid};
use std::{
	env,
	fs::File,
	io::BufReader,
	path::{Path, PathBuf},
};

/// Conventional file name of the raw dataset.
pub const DATASET_FILE_NAME: &str = "buildings.json";

/// Environment variable holding a full path to the raw dataset.
/// When set and existing it wins over every conventional location.
pub const DATASET_PATH_ENV: &str = "BUILDINGS_JSON_PATH";

/// Locates, parses and converts the raw building dataset.
///
/// All failures on the way to a catalog are absorbed in
/// [`load_catalog`](CatalogLoader::load_catalog): the system keeps serving an
/// empty catalog instead of failing startup when the dataset is missing or
/// malformed.
#[derive(Debug, Default)]
pub struct CatalogLoader {
	/// Configured dataset path; searched before all conventional locations.
	explicit_path: Option<PathBuf>,
}

impl CatalogLoader {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_path(path: PathBuf) -> Self {
		Self {
			explicit_path: Some(path),
		}
	}

	/// Candidate dataset locations in search order.
	///
	/// Explicit configuration first, then the environment override, then the
	/// working directory and its two parents, then the executable's
	/// directory and its `data/` subdirectory.
	fn candidate_paths(&self) -> Vec<PathBuf> {
		let mut candidates = Vec::new();

		if let Some(path) = &self.explicit_path {
			candidates.push(path.clone());
		}
		if let Some(path) = env::var_os(DATASET_PATH_ENV) {
			candidates.push(PathBuf::from(path));
		}

		for prefix in ["", "..", "../.."] {
			candidates.push(Path::new(prefix).join(DATASET_FILE_NAME));
		}

		if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
			candidates.push(exe_dir.join(DATASET_FILE_NAME));
			candidates.push(exe_dir.join("data").join(DATASET_FILE_NAME));
		}

		candidates
	}

	/// First existing candidate location.
	pub fn locate(&self) -> Result<PathBuf, CatalogError> {
		self
			.candidate_paths()
			.into_iter()
			.find(|path| path.is_file())
			.ok_or(CatalogError::SourceNotFound)
	}

	/// Deserialize the raw records of a dataset file.
	pub fn load(path: &Path) -> Result<Vec<RawBuildingRecord>, CatalogError> {
		let file = File::open(path)?;
		let dataset: RawDataset = serde_json::from_reader(BufReader::new(file))?;
		Ok(dataset.buildings)
	}

	/// Convert one raw record into a [`Building`].
	///
	/// Returns `None` for a record without boundary nodes; such records are
	/// skipped, not treated as errors. The regional correction is applied to
	/// the centroid and to every boundary vertex so both share one sign
	/// convention.
	pub fn convert(raw: RawBuildingRecord) -> Option<Building> {
		if raw.nodes.is_empty() {
			log::debug!("skipping building '{}': no boundary nodes", raw.id);
			return None;
		}

		let center = apply_regional_correction(centroid(&raw.nodes));
		let boundary = raw.nodes.into_iter().map(apply_regional_correction).collect();

		Some(Building {
			stable_id: derive_stable_id(&raw.id),
			source_id: raw.id,
			center,
			address: raw.address,
			height: raw.height,
			boundary,
		})
	}

	/// Produce the full catalog, absorbing load failures.
	pub fn load_catalog(&self) -> Vec<Building> {
		let result = self.locate().and_then(|path| {
			log::info!("loading building dataset from {path:?}");
			Self::load(&path)
		});

		match result {
			Ok(records) => {
				let total = records.len();
				let buildings: Vec<Building> = records.into_iter().filter_map(Self::convert).collect();
				if buildings.len() < total {
					log::info!("skipped {} degenerate building records", total - buildings.len());
				}
				log::info!("catalog loaded: {} buildings", buildings.len());
				buildings
			}
			Err(error) => {
				log::warn!("serving empty building catalog: {error}");
				Vec::new()
			}
		}
	}
}
