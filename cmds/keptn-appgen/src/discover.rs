//! Discovery of manifest files under an input path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;
use walkdir::WalkDir;

const MANIFEST_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Find every `.yaml`/`.yml` file below `root`.
///
/// Entries are visited in file-name order at every level so the result, and
/// with it workload order, is the same on every run. Hidden directories are
/// skipped.
pub fn find_manifests(root: &Path) -> Result<Vec<PathBuf>> {
	if !root.exists() {
		anyhow::bail!("input path {} does not exist", root.display());
	}

	let walker = WalkDir::new(root)
		.follow_links(true)
		.sort_by_file_name()
		.into_iter()
		.filter_entry(|e| {
			if e.depth() == 0 || !e.file_type().is_dir() {
				return true;
			}
			!e.file_name().to_string_lossy().starts_with('.')
		});

	let mut manifests = Vec::new();
	for entry in walker {
		let entry = entry.with_context(|| format!("walking {}", root.display()))?;
		if !entry.file_type().is_file() || !is_manifest(entry.path()) {
			continue;
		}
		trace!(path = %entry.path().display(), "found manifest");
		manifests.push(entry.into_path());
	}
	Ok(manifests)
}

fn is_manifest(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| MANIFEST_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::TempDir;

	use super::*;

	fn touch(root: &Path, rel: &str) {
		let path = root.join(rel);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, "").unwrap();
	}

	fn relative(root: &Path, found: &[PathBuf]) -> Vec<String> {
		found
			.iter()
			.map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
			.collect()
	}

	#[test]
	fn test_finds_yaml_sorted() {
		let temp = TempDir::new().unwrap();
		touch(temp.path(), "z.yaml");
		touch(temp.path(), "b/deploy.yml");
		touch(temp.path(), "a.yaml");
		touch(temp.path(), "README.md");
		touch(temp.path(), "b/values.json");

		let found = find_manifests(temp.path()).unwrap();
		assert_eq!(relative(temp.path(), &found), ["a.yaml", "b/deploy.yml", "z.yaml"]);
	}

	#[test]
	fn test_skips_hidden_directories() {
		let temp = TempDir::new().unwrap();
		touch(temp.path(), ".git/config.yaml");
		touch(temp.path(), "app/.cache/x.yaml");
		touch(temp.path(), "app/deploy.yaml");

		let found = find_manifests(temp.path()).unwrap();
		assert_eq!(relative(temp.path(), &found), ["app/deploy.yaml"]);
	}

	#[test]
	fn test_single_file_root() {
		let temp = TempDir::new().unwrap();
		touch(temp.path(), "deploy.yaml");
		let file = temp.path().join("deploy.yaml");
		assert_eq!(find_manifests(&file).unwrap(), [file]);
	}

	#[test]
	fn test_missing_root() {
		let temp = TempDir::new().unwrap();
		let err = find_manifests(&temp.path().join("nope")).unwrap_err();
		assert!(err.to_string().contains("does not exist"), "{err}");
	}
}
