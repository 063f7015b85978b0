//! Workload kinds and extraction of their Keptn identity.

use k8s_openapi::{
	api::{
		apps::v1::{DaemonSet, Deployment, StatefulSet},
		core::v1::PodTemplateSpec,
	},
	apimachinery::pkg::apis::meta::v1::ObjectMeta,
};

use crate::{annotation::LookupKeys, descriptor::WorkloadRef, version};

/// The resource kinds that carry a pod template Keptn can track.
#[derive(Debug, Clone)]
pub enum Workload {
	Deployment(Deployment),
	StatefulSet(StatefulSet),
	DaemonSet(DaemonSet),
}

impl Workload {
	pub fn kind(&self) -> &'static str {
		match self {
			Workload::Deployment(_) => "Deployment",
			Workload::StatefulSet(_) => "StatefulSet",
			Workload::DaemonSet(_) => "DaemonSet",
		}
	}

	/// Name of the resource itself, for logging.
	pub fn resource_name(&self) -> Option<&str> {
		match self {
			Workload::Deployment(d) => d.metadata.name.as_deref(),
			Workload::StatefulSet(s) => s.metadata.name.as_deref(),
			Workload::DaemonSet(d) => d.metadata.name.as_deref(),
		}
	}

	pub fn pod_template(&self) -> Option<&PodTemplateSpec> {
		match self {
			Workload::Deployment(d) => d.spec.as_ref().map(|s| &s.template),
			Workload::StatefulSet(s) => s.spec.as_ref().map(|s| &s.template),
			Workload::DaemonSet(d) => d.spec.as_ref().map(|s| &s.template),
		}
	}
}

impl From<Deployment> for Workload {
	fn from(value: Deployment) -> Self {
		Workload::Deployment(value)
	}
}

impl From<StatefulSet> for Workload {
	fn from(value: StatefulSet) -> Self {
		Workload::StatefulSet(value)
	}
}

impl From<DaemonSet> for Workload {
	fn from(value: DaemonSet) -> Self {
		Workload::DaemonSet(value)
	}
}

/// A workload reference together with the application it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedWorkload {
	pub application: String,
	pub workload: WorkloadRef,
}

/// Resolve a workload's name, version and application from its pod template.
///
/// Returns `None` when neither `keptn.sh/workload` nor `app.kubernetes.io/name`
/// is set; such resources are not tracked.
pub fn extract(workload: &Workload) -> Option<ExtractedWorkload> {
	let template = workload.pod_template()?;
	extract_from_template(template)
}

pub fn extract_from_template(template: &PodTemplateSpec) -> Option<ExtractedWorkload> {
	let default_meta = ObjectMeta::default();
	let meta = template.metadata.as_ref().unwrap_or(&default_meta);

	let name = LookupKeys::WORKLOAD.resolve(meta)?;
	let version = LookupKeys::VERSION
		.resolve(meta)
		.map_or_else(|| version::infer(template), str::to_string);
	let application = LookupKeys::APP.resolve(meta).unwrap_or(name);

	Some(ExtractedWorkload {
		application: application.to_string(),
		workload: WorkloadRef::new(name, version),
	})
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use k8s_openapi::api::apps::v1::{DaemonSetSpec, DeploymentSpec, StatefulSetSpec};
	use rstest::rstest;

	use super::*;
	use crate::version::tests::{container, template};

	fn annotated_template(
		annotations: &[(&str, &str)],
		labels: &[(&str, &str)],
		image: &str,
	) -> PodTemplateSpec {
		let to_map = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
			pairs
				.iter()
				.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
				.collect()
		};
		let mut tpl = template(vec![container("main", image, &[])]);
		tpl.metadata = Some(ObjectMeta {
			annotations: Some(to_map(annotations)),
			labels: Some(to_map(labels)),
			..Default::default()
		});
		tpl
	}

	fn deployment(template: PodTemplateSpec) -> Workload {
		Deployment {
			spec: Some(DeploymentSpec {
				template,
				..Default::default()
			}),
			..Default::default()
		}
		.into()
	}

	fn stateful_set(template: PodTemplateSpec) -> Workload {
		StatefulSet {
			spec: Some(StatefulSetSpec {
				template,
				..Default::default()
			}),
			..Default::default()
		}
		.into()
	}

	fn daemon_set(template: PodTemplateSpec) -> Workload {
		DaemonSet {
			spec: Some(DaemonSetSpec {
				template,
				..Default::default()
			}),
			..Default::default()
		}
		.into()
	}

	#[test]
	fn test_deployment_with_app_annotation() {
		let tpl = annotated_template(
			&[("keptn.sh/workload", "checkout"), ("keptn.sh/app", "shop")],
			&[],
			"checkout:1.0.0",
		);
		assert_eq!(
			extract(&deployment(tpl)),
			Some(ExtractedWorkload {
				application: "shop".to_string(),
				workload: WorkloadRef::new("checkout", "1.0.0"),
			})
		);
	}

	#[rstest]
	#[case::deployment(deployment as fn(PodTemplateSpec) -> Workload)]
	#[case::stateful_set(stateful_set as fn(PodTemplateSpec) -> Workload)]
	#[case::daemon_set(daemon_set as fn(PodTemplateSpec) -> Workload)]
	fn test_all_kinds_share_rules(#[case] build: fn(PodTemplateSpec) -> Workload) {
		let tpl = annotated_template(
			&[],
			&[
				("app.kubernetes.io/name", "cart"),
				("app.kubernetes.io/version", "3.1.4"),
				("app.kubernetes.io/part-of", "shop"),
			],
			"cart:ignored",
		);
		let extracted = extract(&build(tpl)).unwrap();
		assert_eq!(extracted.application, "shop");
		assert_eq!(extracted.workload, WorkloadRef::new("cart", "3.1.4"));
	}

	#[test]
	fn test_missing_identity_is_skipped() {
		let tpl = annotated_template(&[("keptn.sh/app", "shop")], &[("tier", "web")], "x:1");
		assert_eq!(extract(&daemon_set(tpl)), None);
	}

	#[test]
	fn test_missing_spec_is_skipped() {
		assert_eq!(extract(&Workload::Deployment(Deployment::default())), None);
	}

	#[test]
	fn test_application_defaults_to_workload_name() {
		let tpl = annotated_template(&[("keptn.sh/workload", "solo")], &[], "solo:2.0.0");
		let extracted = extract(&stateful_set(tpl)).unwrap();
		assert_eq!(extracted.application, "solo");
	}

	#[test]
	fn test_version_falls_back_to_inference() {
		let tpl = annotated_template(&[("keptn.sh/workload", "web")], &[], "nginx:latest");
		let expected = version::infer(&tpl);
		let extracted = extract(&deployment(tpl)).unwrap();
		assert_eq!(extracted.workload.version, expected);
		assert_ne!(extracted.workload.version, "latest");
	}

	#[test]
	fn test_explicit_version_beats_image_tag() {
		let tpl = annotated_template(
			&[("keptn.sh/workload", "web"), ("keptn.sh/version", "9.9.9")],
			&[],
			"nginx:1.25",
		);
		assert_eq!(extract(&deployment(tpl)).unwrap().workload.version, "9.9.9");
	}
}
