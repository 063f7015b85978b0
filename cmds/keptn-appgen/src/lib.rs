//! Generate KeptnApp descriptors from a directory of Kubernetes manifests.

pub mod cli;
pub mod config;
pub mod discover;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod state;
pub mod telemetry;
pub mod util;
pub mod yaml;
