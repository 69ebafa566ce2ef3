use anyhow::Result;
use excursion::{BuildingServer, Config};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Path to a configuration file (YAML format).
	/// Command line arguments override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	pub config: Option<PathBuf>,

	/// Serve via socket ip. Default: 0.0.0.0
	#[arg(short = 'i', long, display_order = 0)]
	pub ip: Option<String>,

	/// Serve via port. Default: 8080
	#[arg(short, long, display_order = 0)]
	pub port: Option<u16>,

	/// Path to the raw building dataset (buildings.json).
	/// Without it the conventional locations are searched.
	#[arg(short = 'd', long, value_name = "FILE", display_order = 1)]
	pub dataset: Option<PathBuf>,

	/// Building catalog cache validity window in seconds. Default: 300
	#[arg(long, value_name = "SECONDS", display_order = 2)]
	pub cache_ttl: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = if let Some(config_path) = &arguments.config {
		Config::from_path(config_path)?
	} else {
		Config::default()
	};

	config.server.override_optional_ip(&arguments.ip);
	config.server.override_optional_port(&arguments.port);
	config.dataset.override_optional_path(&arguments.dataset);
	config.dataset.override_optional_cache_ttl_seconds(&arguments.cache_ttl);

	let mut server = BuildingServer::standalone(&config)?;
	server.start().await?;

	tokio::signal::ctrl_c().await?;
	server.stop().await;

	Ok(())
}
