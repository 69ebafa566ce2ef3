use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
	/// Directory where uploaded 3D model binaries are kept.
	/// Default: `./models`
	#[serde()]
	pub models_dir: Option<PathBuf>,
}
