//! Workload version inference from the pod template.

use k8s_openapi::api::core::v1::{Container, PodTemplateSpec};

use crate::hash::fnv1a_32;

/// Infer a version for a workload that doesn't declare one.
///
/// A single container with a usable image tag (present, non-empty, not `latest`)
/// yields that tag. Anything else yields the decimal FNV-1a-32 fingerprint of
/// every container's name, image and env vars in declaration order.
pub fn infer(template: &PodTemplateSpec) -> String {
	let containers = containers(template);

	if let [container] = containers {
		if let Some(tag) = image_tag(container) {
			return tag.to_string();
		}
	}

	fnv1a_32(&container_fingerprint_input(containers)).to_string()
}

fn containers(template: &PodTemplateSpec) -> &[Container] {
	template
		.spec
		.as_ref()
		.map(|spec| spec.containers.as_slice())
		.unwrap_or_default()
}

/// Second `:`-separated segment of the image reference.
///
/// `registry:5000/img:v1` is split the same way, yielding `5000/img`.
fn image_tag(container: &Container) -> Option<&str> {
	let tag = container.image.as_deref()?.split(':').nth(1)?;
	if tag.is_empty() || tag == "latest" {
		return None;
	}
	Some(tag)
}

fn container_fingerprint_input(containers: &[Container]) -> Vec<u8> {
	let mut buf = Vec::new();
	for container in containers {
		buf.extend_from_slice(container.name.as_bytes());
		buf.extend_from_slice(container.image.as_deref().unwrap_or_default().as_bytes());
		for env in container.env.iter().flatten() {
			buf.extend_from_slice(env.name.as_bytes());
			buf.extend_from_slice(env.value.as_deref().unwrap_or_default().as_bytes());
		}
	}
	buf
}
