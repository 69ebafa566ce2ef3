use super::{CorsConfig, DatasetConfig, ServerConfig, StorageConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// HTTP server configuration
	#[serde(default)]
	pub server: ServerConfig,

	/// Cross-Origin Resource Sharing (CORS) settings
	#[serde(default)]
	pub cors: CorsConfig,

	/// Raw building dataset settings
	#[serde(default)]
	pub dataset: DatasetConfig,

	/// 3D model binary storage settings
	#[serde(default)]
	pub storage: StorageConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::path::PathBuf;

	#[test]
	fn parse_full_config() {
		let cfg = Config::from_string(
			r#"
server:
  ip: 127.0.0.1
  port: 51234
cors:
  allowed_origins:
    - "https://viewer.example.org"
    - "*.example.org"
dataset:
  path: ./data/buildings.json
  cache_ttl_seconds: 120
storage:
  models_dir: ./models
"#,
		)
		.unwrap();

		assert_eq!(
			cfg,
			Config {
				server: ServerConfig {
					ip: Some("127.0.0.1".to_string()),
					port: Some(51234),
				},
				cors: CorsConfig {
					allowed_origins: vec!["https://viewer.example.org".to_string(), "*.example.org".to_string()],
				},
				dataset: DatasetConfig {
					path: Some(PathBuf::from("./data/buildings.json")),
					cache_ttl_seconds: Some(120),
				},
				storage: StorageConfig {
					models_dir: Some(PathBuf::from("./models")),
				},
			}
		);
	}

	#[test]
	fn empty_config_is_all_defaults() {
		let cfg = Config::from_string("{}").unwrap();
		assert_eq!(cfg, Config::default());
	}

	#[test]
	fn unknown_fields_are_rejected() {
		assert!(Config::from_string("tiles: []").is_err());
	}
}
