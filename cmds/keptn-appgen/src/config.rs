//! Configuration file support.
//!
//! A `.keptn-appgen.yaml` file supplies defaults for the command-line flags. It
//! is looked up from the input directory upward, unless `--config` names one.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use keptn_app::BumpMode;
use serde::Deserialize;

/// The name of the config file searched for
pub const CONFIG_FILE_NAME: &str = ".keptn-appgen.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppGenConfig {
	#[serde(default)]
	pub bump: Option<BumpMode>,
	/// Version override applied to every application
	#[serde(default)]
	pub version: Option<String>,
	#[serde(default)]
	pub output_path: Option<PathBuf>,
}

impl AppGenConfig {
	/// Load config by searching from the given directory upward
	pub fn load_from_directory(start_dir: &Path) -> Result<Option<Self>> {
		find_config_file(start_dir)
			.map(|path| Self::load_from_file(&path))
			.transpose()
	}

	pub fn load_from_file(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path)
			.with_context(|| format!("failed to read config file: {}", path.display()))?;
		let config: AppGenConfig = serde_yaml_with_quirks::from_str(&content)
			.with_context(|| format!("failed to parse config file: {}", path.display()))?;
		Ok(config)
	}
}

/// Search for a config file starting from `start_dir` and walking up to the filesystem root
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
	let start = start_dir
		.canonicalize()
		.unwrap_or_else(|_| start_dir.to_path_buf());

	start
		.ancestors()
		.map(|dir| dir.join(CONFIG_FILE_NAME))
		.find(|candidate| candidate.is_file())
}
