//! Splitting manifest files into documents and decoding workload kinds.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use k8s_openapi::{
	api::apps::v1::{DaemonSet, Deployment, StatefulSet},
	Resource,
};
use keptn_app::Workload;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_yaml_with_quirks as serde_yaml;
use tracing::trace;

/// Split a (possibly multi-document) YAML stream into JSON values.
///
/// Empty documents are dropped.
pub fn split_documents(content: &str) -> Result<Vec<JsonValue>, serde_yaml::Error> {
	let mut docs = Vec::new();
	for document in serde_yaml::Deserializer::from_str(content) {
		let value = JsonValue::deserialize(document)?;
		if !value.is_null() {
			docs.push(value);
		}
	}
	Ok(docs)
}

fn is_kind<R: Resource>(api_version: &str, kind: &str) -> bool {
	api_version == R::API_VERSION && kind == R::KIND
}

/// Decode a document into a [`Workload`] if it is one of the tracked kinds.
///
/// Other kinds, and documents without `apiVersion`/`kind`, return `Ok(None)`.
pub fn decode_workload(doc: JsonValue) -> Result<Option<Workload>, serde_json::Error> {
	let api_version = doc.get("apiVersion").and_then(JsonValue::as_str).unwrap_or_default();
	let kind = doc.get("kind").and_then(JsonValue::as_str).unwrap_or_default();

	let workload = if is_kind::<Deployment>(api_version, kind) {
		Workload::Deployment(serde_json::from_value(doc)?)
	} else if is_kind::<StatefulSet>(api_version, kind) {
		Workload::StatefulSet(serde_json::from_value(doc)?)
	} else if is_kind::<DaemonSet>(api_version, kind) {
		Workload::DaemonSet(serde_json::from_value(doc)?)
	} else {
		trace!(api_version, kind, "skipping unsupported kind");
		return Ok(None);
	};
	Ok(Some(workload))
}

/// Read a manifest file and decode every workload it contains, in document order.
pub fn load_workloads(path: &Path) -> Result<Vec<Workload>> {
	let content =
		fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	let docs = split_documents(&content)
		.with_context(|| format!("failed to parse YAML in {}", path.display()))?;

	let mut workloads = Vec::new();
	for (index, doc) in docs.into_iter().enumerate() {
		if let Some(workload) = decode_workload(doc).with_context(|| {
			format!("failed to decode document {index} in {}", path.display())
		})? {
			workloads.push(workload);
		}
	}
	Ok(workloads)
}
