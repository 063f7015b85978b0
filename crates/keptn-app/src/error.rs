use thiserror::Error;

use crate::bump::BumpError;

/// Errors that abort finalization of a run.
///
/// Skipped documents (unsupported kinds, workloads without identity) are not
/// errors and never show up here.
#[derive(Debug, Error)]
pub enum Error {
	#[error("application {app}: prior version {version:?} is not a valid semantic version")]
	InvalidVersionFormat {
		app: String,
		version: String,
		#[source]
		source: semver::Error,
	},

	#[error("application {app}: cannot bump prior version {version:?}")]
	VersionOverflow {
		app: String,
		version: String,
		#[source]
		source: BumpError,
	},

	#[error("workload {workload}: failed to encode for hashing")]
	HashComputation {
		workload: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("application {app}: reading prior descriptor")]
	Store {
		app: String,
		#[source]
		source: anyhow::Error,
	},

	#[error("application {app}: writing descriptor")]
	Sink {
		app: String,
		#[source]
		source: anyhow::Error,
	},
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
