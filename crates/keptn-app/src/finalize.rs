//! Assigning versions and fingerprints to aggregated applications.

use tracing::{info, instrument, warn};

use crate::{
	aggregate::AppAggregator,
	bump::{next_version, BumpError, BumpMode},
	descriptor::FinalizedApp,
	error::{Error, Result},
	fingerprint::fingerprint,
};

/// Source of versions recorded by earlier runs.
pub trait VersionStore {
	/// `Ok(None)` means the application has no prior descriptor.
	/// A prior descriptor without a version reports `Some("")`.
	fn prior_version(&self, app: &str) -> anyhow::Result<Option<String>>;
}

/// Destination for finalized descriptors.
pub trait DescriptorSink {
	fn write(&mut self, app: &FinalizedApp) -> anyhow::Result<()>;
}

/// A store that has never seen any application.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPriorVersions;

impl VersionStore for NoPriorVersions {
	fn prior_version(&self, _app: &str) -> anyhow::Result<Option<String>> {
		Ok(None)
	}
}

/// How application versions advance within a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionOptions {
	pub bump: BumpMode,
	/// Used verbatim for every application when set and non-empty.
	pub version_override: Option<String>,
}

impl VersionOptions {
	fn effective_override(&self) -> Option<&str> {
		self.version_override.as_deref().filter(|v| !v.is_empty())
	}
}

/// Attach a version and fingerprint to every aggregated application.
///
/// Fails on the first application whose prior version doesn't parse or whose
/// workloads can't be hashed; nothing is returned for the run in that case.
#[instrument(skip_all, fields(apps = aggregator.len(), bump = %opts.bump))]
pub fn finalize(
	aggregator: AppAggregator,
	store: &dyn VersionStore,
	opts: &VersionOptions,
) -> Result<Vec<FinalizedApp>> {
	let version_override = opts.effective_override();
	let mut finalized = Vec::with_capacity(aggregator.len());

	for mut app in aggregator.into_apps() {
		let name = app.name().to_string();
		let prior = store
			.prior_version(&name)
			.map_err(|source| Error::Store {
				app: name.clone(),
				source,
			})?;

		if let (Some(prior), Some(version)) = (&prior, version_override) {
			warn!(app = %name, prior = %prior, version = %version, "overriding existing application version");
		}

		app.spec.version = next_version(prior.as_deref(), version_override, opts.bump).map_err(
			|source| {
				let app = name.clone();
				let version = prior.clone().unwrap_or_default();
				match source {
					BumpError::Parse(source) => Error::InvalidVersionFormat {
						app,
						version,
						source,
					},
					overflow @ BumpError::Overflow { .. } => Error::VersionOverflow {
						app,
						version,
						source: overflow,
					},
				}
			},
		)?;
		let fingerprint = fingerprint(&app.spec.workloads)?;

		info!(
			app = %name,
			version = %app.spec.version,
			workloads = app.spec.workloads.len(),
			fingerprint = %fingerprint,
			"finalized application"
		);
		finalized.push(FinalizedApp { app, fingerprint });
	}

	Ok(finalized)
}

/// Hand every finalized application to the sink, in order.
pub fn emit(apps: &[FinalizedApp], sink: &mut dyn DescriptorSink) -> Result<()> {
	for app in apps {
		sink.write(app).map_err(|source| Error::Sink {
			app: app.app.name().to_string(),
			source,
		})?;
	}
	Ok(())
}
