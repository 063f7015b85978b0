//! KeptnApp descriptor records (lifecycle.keptn.sh/v1alpha2).

use serde::{Deserialize, Serialize};

pub const KEPTN_APP_API_VERSION: &str = "lifecycle.keptn.sh/v1alpha2";
pub const KEPTN_APP_KIND: &str = "KeptnApp";

/// One workload and its resolved version.
///
/// Field order is part of the fingerprint encoding, see [`crate::fingerprint`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkloadRef {
	pub name: String,
	pub version: String,
}

impl WorkloadRef {
	pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			version: version.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeptnApp {
	pub api_version: String,
	pub kind: String,
	pub metadata: AppMetadata,
	pub spec: AppSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSpec {
	#[serde(default)]
	pub version: String,
	#[serde(default)]
	pub workloads: Vec<WorkloadRef>,
}

impl KeptnApp {
	/// A descriptor with no version assigned yet.
	pub fn new(name: impl Into<String>, workloads: Vec<WorkloadRef>) -> Self {
		Self {
			api_version: KEPTN_APP_API_VERSION.to_string(),
			kind: KEPTN_APP_KIND.to_string(),
			metadata: AppMetadata { name: name.into() },
			spec: AppSpec {
				version: String::new(),
				workloads,
			},
		}
	}

	pub fn name(&self) -> &str {
		&self.metadata.name
	}
}

/// A descriptor with its version assigned, plus the workload-set fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedApp {
	pub app: KeptnApp,
	pub fingerprint: String,
}
