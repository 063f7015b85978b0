//! One generation run: scan manifests, group workloads, version and write apps.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use keptn_app::{emit, extract, finalize, AppAggregator, FinalizedApp, VersionOptions};
use tracing::{debug, info, instrument};

use crate::{
	discover::find_manifests, manifest::load_workloads, output::FsDescriptorSink,
	state::FsVersionStore,
};

#[derive(Debug, Clone)]
pub struct GenerateOpts {
	pub input_path: PathBuf,
	pub output_path: PathBuf,
	pub versions: VersionOptions,
}

/// Counters gathered while scanning the input tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
	pub files: usize,
	/// Workload resources grouped into an application
	pub workloads: usize,
	/// Workload resources without a workload name
	pub skipped: usize,
}

/// Scan `input` and group every identifiable workload by application.
#[instrument(skip_all, fields(input = %input.display()))]
pub fn collect(input: &Path) -> Result<(AppAggregator, ScanStats)> {
	let mut aggregator = AppAggregator::new();
	let mut stats = ScanStats::default();

	for path in find_manifests(input)? {
		stats.files += 1;
		for workload in load_workloads(&path)? {
			let Some(extracted) = extract(&workload) else {
				debug!(
					path = %path.display(),
					kind = workload.kind(),
					name = workload.resource_name().unwrap_or_default(),
					"no workload name annotation or label, skipping"
				);
				stats.skipped += 1;
				continue;
			};
			debug!(
				path = %path.display(),
				app = %extracted.application,
				workload = %extracted.workload.name,
				version = %extracted.workload.version,
				"found workload"
			);
			stats.workloads += 1;
			aggregator.add_extracted(extracted);
		}
	}

	Ok((aggregator, stats))
}

/// Run a full generation and return the applications that were written.
///
/// Every prior version is read and every fingerprint computed before the first
/// descriptor is written, so a failing application leaves the output untouched.
pub fn generate(opts: &GenerateOpts) -> Result<Vec<FinalizedApp>> {
	let (aggregator, stats) = collect(&opts.input_path)?;
	info!(
		files = stats.files,
		workloads = stats.workloads,
		skipped = stats.skipped,
		apps = aggregator.len(),
		"scanned manifests"
	);

	let store = FsVersionStore::new(&opts.output_path);
	let apps = finalize(aggregator, &store, &opts.versions)?;

	let mut sink = FsDescriptorSink::new(&opts.output_path);
	emit(&apps, &mut sink).with_context(|| {
		format!("failed to write descriptors to {}", opts.output_path.display())
	})?;

	Ok(apps)
}
