//! Derive [KeptnApp](descriptor::KeptnApp) descriptors from Kubernetes workloads.
//!
//! Workloads ([`Workload`]) are resolved to a name, version and application via
//! their pod template metadata, grouped by application ([`AppAggregator`]), and
//! finally versioned and fingerprinted ([`finalize`]).
//!
//! ```
//! use keptn_app::{extract_from_template, AppAggregator};
//! # use k8s_openapi::api::core::v1::PodTemplateSpec;
//! # let template = PodTemplateSpec::default();
//! let mut aggregator = AppAggregator::new();
//! if let Some(extracted) = extract_from_template(&template) {
//! 	aggregator.add_extracted(extracted);
//! }
//! assert!(aggregator.is_empty());
//! ```

pub mod aggregate;
pub mod annotation;
pub mod bump;
pub mod descriptor;
mod error;
pub mod finalize;
pub mod fingerprint;
mod hash;
pub mod version;
pub mod workload;

pub use aggregate::AppAggregator;
pub use bump::{next_version, BumpError, BumpMode, SEED_VERSION};
pub use descriptor::{FinalizedApp, KeptnApp, WorkloadRef};
pub use error::{Error, Result};
pub use finalize::{emit, finalize, DescriptorSink, NoPriorVersions, VersionOptions, VersionStore};
pub use fingerprint::fingerprint;
pub use workload::{extract, extract_from_template, ExtractedWorkload, Workload};
