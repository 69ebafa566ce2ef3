use anyhow::Result;
use excursion_catalog::CatalogLoader;
use excursion_geometry::BBox;
use itertools::Itertools;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Path to the raw building dataset (buildings.json).
	/// Without it the conventional locations are searched.
	#[arg(short = 'd', long, value_name = "FILE")]
	pub dataset: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let loader = match &arguments.dataset {
		Some(path) => CatalogLoader::with_path(path.clone()),
		None => CatalogLoader::new(),
	};

	let catalog = loader.load_catalog();
	println!("buildings: {}", catalog.len());
	println!(
		"with address: {}",
		catalog.iter().filter(|b| b.address.is_some()).count()
	);

	let centers = catalog.iter().map(|b| b.center).collect_vec();
	match BBox::from_points(&centers) {
		Some(bbox) => println!("center bbox: {:?} .. {:?}", bbox.min, bbox.max),
		None => println!("center bbox: empty catalog"),
	}

	Ok(())
}
