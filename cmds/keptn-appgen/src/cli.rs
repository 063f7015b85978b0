//! Command-line interface.

use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use keptn_app::{BumpMode, VersionOptions};
use tracing::debug;

use crate::{
	config::AppGenConfig,
	generate::{generate, GenerateOpts},
	output::write_summary,
};

const DEFAULT_INPUT_PATH: &str = "manifests";
const DEFAULT_OUTPUT_PATH: &str = "output";

#[derive(Debug, Parser)]
#[command(name = "keptn-appgen")]
#[command(about = "Generate KeptnApp descriptors from Kubernetes workload manifests", long_about = None)]
pub struct Cli {
	/// Bump major, minor or patch [default: patch]
	#[arg(long, env = "KEPTN_APPGEN_BUMP")]
	pub bump: Option<BumpMode>,

	/// Directory scanned for .yaml/.yml manifests
	#[arg(long, alias = "inputPath", default_value = DEFAULT_INPUT_PATH)]
	pub input_path: PathBuf,

	/// Directory holding app-<name>.yaml descriptors, read for prior versions and written to [default: output]
	#[arg(long, alias = "outputPath")]
	pub output_path: Option<PathBuf>,

	/// Use this version for every application instead of bumping
	#[arg(long = "version", env = "KEPTN_APPGEN_VERSION")]
	pub version_override: Option<String>,

	/// Config file; defaults to the nearest .keptn-appgen.yaml above the input path
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Log level (possible values: error, warn, info, debug, trace)
	#[arg(long, env = "KEPTN_APPGEN_LOG_LEVEL")]
	pub log_level: Option<String>,
}

impl Cli {
	fn load_config(&self) -> Result<AppGenConfig> {
		let config = match &self.config {
			Some(path) => Some(AppGenConfig::load_from_file(path)?),
			None => AppGenConfig::load_from_directory(&self.input_path)?,
		};
		Ok(config.unwrap_or_default())
	}

	/// Merge flags over the config file over built-in defaults.
	pub fn resolve(&self) -> Result<GenerateOpts> {
		let config = self.load_config()?;
		debug!(?config, "loaded config");

		Ok(GenerateOpts {
			input_path: self.input_path.clone(),
			output_path: self
				.output_path
				.clone()
				.or(config.output_path)
				.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
			versions: VersionOptions {
				bump: self.bump.or(config.bump).unwrap_or_default(),
				version_override: self.version_override.clone().or(config.version),
			},
		})
	}
}

pub fn run<W: Write>(cli: &Cli, writer: W) -> Result<()> {
	let opts = cli.resolve()?;
	let apps = generate(&opts)?;
	write_summary(&apps, writer)?;
	Ok(())
}
