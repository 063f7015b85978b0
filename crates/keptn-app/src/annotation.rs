//! Metadata lookups with a primary Keptn key and a recommended Kubernetes fallback.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

pub const WORKLOAD_ANNOTATION: &str = "keptn.sh/workload";
pub const VERSION_ANNOTATION: &str = "keptn.sh/version";
pub const APP_ANNOTATION: &str = "keptn.sh/app";
pub const K8S_RECOMMENDED_WORKLOAD_ANNOTATION: &str = "app.kubernetes.io/name";
pub const K8S_RECOMMENDED_VERSION_ANNOTATION: &str = "app.kubernetes.io/version";
pub const K8S_RECOMMENDED_APP_ANNOTATION: &str = "app.kubernetes.io/part-of";

/// A pair of metadata keys, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupKeys {
	pub primary: &'static str,
	/// Empty disables the fallback.
	pub secondary: &'static str,
}

impl LookupKeys {
	pub const WORKLOAD: Self = Self {
		primary: WORKLOAD_ANNOTATION,
		secondary: K8S_RECOMMENDED_WORKLOAD_ANNOTATION,
	};
	pub const VERSION: Self = Self {
		primary: VERSION_ANNOTATION,
		secondary: K8S_RECOMMENDED_VERSION_ANNOTATION,
	};
	pub const APP: Self = Self {
		primary: APP_ANNOTATION,
		secondary: K8S_RECOMMENDED_APP_ANNOTATION,
	};

	pub fn resolve<'m>(&self, meta: &'m ObjectMeta) -> Option<&'m str> {
		resolve(meta, self.primary, self.secondary)
	}
}

/// Resolve a value from annotations or labels.
///
/// Lookup order: `annotations[primary]`, `labels[primary]`, then the same for
/// `secondary` unless it is empty. Empty values count as absent.
pub fn resolve<'m>(meta: &'m ObjectMeta, primary: &str, secondary: &str) -> Option<&'m str> {
	lookup(meta, primary).or_else(|| {
		if secondary.is_empty() {
			None
		} else {
			lookup(meta, secondary)
		}
	})
}

fn lookup<'m>(meta: &'m ObjectMeta, key: &str) -> Option<&'m str> {
	[&meta.annotations, &meta.labels]
		.into_iter()
		.flatten()
		.filter_map(|map| map.get(key))
		.map(String::as_str)
		.find(|v| !v.is_empty())
}
