//! Grouping of extracted workloads into applications.

use indexmap::{map::Entry, IndexMap};

use crate::{
	descriptor::{KeptnApp, WorkloadRef},
	workload::ExtractedWorkload,
};

/// Per-run accumulator of applications, keyed by name.
///
/// Applications iterate in the order their first workload was added, and each
/// application's workloads keep insertion order. Repeated `(name, version)`
/// pairs are kept as-is.
#[derive(Debug, Default)]
pub struct AppAggregator {
	apps: IndexMap<String, KeptnApp>,
}

impl AppAggregator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, application: &str, workload: WorkloadRef) {
		match self.apps.entry(application.to_string()) {
			Entry::Occupied(mut entry) => entry.get_mut().spec.workloads.push(workload),
			Entry::Vacant(entry) => {
				entry.insert(KeptnApp::new(application, vec![workload]));
			}
		}
	}

	pub fn add_extracted(&mut self, extracted: ExtractedWorkload) {
		self.add(&extracted.application, extracted.workload);
	}

	pub fn get(&self, application: &str) -> Option<&KeptnApp> {
		self.apps.get(application)
	}

	pub fn len(&self) -> usize {
		self.apps.len()
	}

	pub fn is_empty(&self) -> bool {
		self.apps.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &KeptnApp> {
		self.apps.values()
	}

	pub fn into_apps(self) -> impl Iterator<Item = KeptnApp> {
		self.apps.into_values()
	}
}
