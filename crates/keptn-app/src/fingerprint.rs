//! Change-detection fingerprint over an application's workload list.
//!
//! Not collision resistant. Equal ordered workload lists always produce the
//! same fingerprint; reordering or editing a workload changes it with high
//! probability.

use std::hash::Hasher;

use fnv::FnvHasher;

use crate::{
	descriptor::WorkloadRef,
	error::{Error, Result},
	hash::fnv1a_64,
};

/// Structural hash of a single workload: FNV-1a-64 over its canonical JSON
/// encoding (`{"name":…,"version":…}`, fields in declaration order).
pub fn workload_hash(workload: &WorkloadRef) -> Result<u64> {
	let encoded = serde_json::to_vec(workload).map_err(|source| Error::HashComputation {
		workload: workload.name.clone(),
		source,
	})?;
	Ok(fnv1a_64(&encoded))
}

/// Fold every workload hash, as 8 little-endian bytes, into one FNV-1a-64
/// accumulator and render it in decimal.
pub fn fingerprint(workloads: &[WorkloadRef]) -> Result<String> {
	let mut acc = FnvHasher::default();
	for workload in workloads {
		acc.write(&workload_hash(workload)?.to_le_bytes());
	}
	Ok(acc.finish().to_string())
}
