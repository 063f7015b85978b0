//! Prior application versions, read back from a previous run's output.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use anyhow::Context;
use keptn_app::VersionStore;
use serde::Deserialize;

use crate::output::descriptor_path;

/// Reads `app-<name>.yaml` files from an output directory.
#[derive(Debug, Clone)]
pub struct FsVersionStore {
	output_dir: PathBuf,
}

impl FsVersionStore {
	pub fn new(output_dir: impl Into<PathBuf>) -> Self {
		Self {
			output_dir: output_dir.into(),
		}
	}
}

/// Only the part of a prior descriptor the version bump depends on.
#[derive(Debug, Default, Deserialize)]
struct PriorDescriptor {
	#[serde(default)]
	spec: PriorSpec,
}

#[derive(Debug, Default, Deserialize)]
struct PriorSpec {
	#[serde(default)]
	version: String,
}

impl VersionStore for FsVersionStore {
	fn prior_version(&self, app: &str) -> anyhow::Result<Option<String>> {
		read_prior_version(&descriptor_path(&self.output_dir, app)?)
	}
}

fn read_prior_version(path: &Path) -> anyhow::Result<Option<String>> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
		Err(e) => {
			return Err(e).with_context(|| format!("failed to read {}", path.display()));
		}
	};
	let prior: PriorDescriptor = serde_yaml_with_quirks::from_str(&content)
		.with_context(|| format!("failed to parse {}", path.display()))?;
	Ok(Some(prior.spec.version))
}
