//! Writing finalized descriptors and the run summary.

use std::{
	fs,
	io::Write,
	path::{Path, PathBuf},
};

use anyhow::Context;
use keptn_app::{DescriptorSink, FinalizedApp};
use tabwriter::TabWriter;
use tracing::debug;

use crate::yaml::to_yaml;

/// `<output_dir>/app-<name>.yaml`
///
/// Names come from manifest labels; ones containing a path separator would
/// land outside `output_dir` and are rejected.
pub fn descriptor_path(output_dir: &Path, app: &str) -> anyhow::Result<PathBuf> {
	if app.contains(['/', '\\']) {
		anyhow::bail!("application name {app:?} contains a path separator");
	}
	Ok(output_dir.join(format!("app-{app}.yaml")))
}

/// Writes each descriptor to its own file, replacing earlier output.
#[derive(Debug, Clone)]
pub struct FsDescriptorSink {
	output_dir: PathBuf,
}

impl FsDescriptorSink {
	pub fn new(output_dir: impl Into<PathBuf>) -> Self {
		Self {
			output_dir: output_dir.into(),
		}
	}
}

impl DescriptorSink for FsDescriptorSink {
	fn write(&mut self, app: &FinalizedApp) -> anyhow::Result<()> {
		fs::create_dir_all(&self.output_dir).with_context(|| {
			format!("failed to create output directory {}", self.output_dir.display())
		})?;

		let path = descriptor_path(&self.output_dir, app.app.name())?;
		let rendered = to_yaml(&app.app)
			.with_context(|| format!("failed to render {}", app.app.name()))?;
		fs::write(&path, rendered).with_context(|| format!("failed to write {}", path.display()))?;

		debug!(path = %path.display(), "wrote descriptor");
		Ok(())
	}
}

/// Tab-aligned table of every generated application.
pub fn write_summary<W: Write>(apps: &[FinalizedApp], writer: W) -> std::io::Result<()> {
	let mut tw = TabWriter::new(writer);
	writeln!(tw, "APP\tVERSION\tWORKLOADS\tFINGERPRINT")?;
	for app in apps {
		writeln!(
			tw,
			"{}\t{}\t{}\t{}",
			app.app.name(),
			app.app.spec.version,
			app.app.spec.workloads.len(),
			app.fingerprint
		)?;
	}
	tw.flush()
}
