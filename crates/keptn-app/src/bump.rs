//! Application version bumping.

use std::{fmt, str::FromStr};

use semver::{BuildMetadata, Prerelease, Version};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version assigned to an application seen for the first time.
pub const SEED_VERSION: &str = "0.0.1";

/// Semver component to increment between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpMode {
	Major,
	Minor,
	#[default]
	Patch,
}

impl fmt::Display for BumpMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BumpMode::Major => write!(f, "major"),
			BumpMode::Minor => write!(f, "minor"),
			BumpMode::Patch => write!(f, "patch"),
		}
	}
}

#[derive(Debug, Error)]
#[error("unknown bump mode '{0}', expected one of: major, minor, patch")]
pub struct ParseBumpModeError(String);

impl FromStr for BumpMode {
	type Err = ParseBumpModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"major" => Ok(BumpMode::Major),
			"minor" => Ok(BumpMode::Minor),
			"patch" => Ok(BumpMode::Patch),
			other => Err(ParseBumpModeError(other.to_string())),
		}
	}
}

/// Why a prior version could not be bumped.
#[derive(Debug, Error)]
pub enum BumpError {
	#[error(transparent)]
	Parse(#[from] semver::Error),

	#[error("{mode} component of {version} cannot be incremented any further")]
	Overflow { version: Version, mode: BumpMode },
}

impl BumpMode {
	/// Increment the selected component, zeroing lower ones.
	///
	/// Pre-release and build metadata are dropped. Fails instead of wrapping
	/// when the component is already `u64::MAX`.
	pub fn apply(self, version: &Version) -> Result<Version, BumpError> {
		let bumped = match self {
			BumpMode::Major => version.major.checked_add(1).map(|major| (major, 0, 0)),
			BumpMode::Minor => version
				.minor
				.checked_add(1)
				.map(|minor| (version.major, minor, 0)),
			BumpMode::Patch => version
				.patch
				.checked_add(1)
				.map(|patch| (version.major, version.minor, patch)),
		};
		let Some((major, minor, patch)) = bumped else {
			return Err(BumpError::Overflow {
				version: version.clone(),
				mode: self,
			});
		};
		Ok(Version {
			major,
			minor,
			patch,
			pre: Prerelease::EMPTY,
			build: BuildMetadata::EMPTY,
		})
	}
}

/// Compute the next application version.
///
/// A non-empty `version_override` always wins. Without a prior version the
/// application gets [`SEED_VERSION`]. Otherwise `prior` must parse as semver
/// and is bumped according to `mode`.
pub fn next_version(
	prior: Option<&str>,
	version_override: Option<&str>,
	mode: BumpMode,
) -> Result<String, BumpError> {
	if let Some(version) = version_override.filter(|v| !v.is_empty()) {
		return Ok(version.to_string());
	}
	let Some(prior) = prior else {
		return Ok(SEED_VERSION.to_string());
	};
	let prior = Version::parse(prior)?;
	Ok(mode.apply(&prior)?.to_string())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::patch(BumpMode::Patch, "1.2.4")]
	#[case::minor(BumpMode::Minor, "1.3.0")]
	#[case::major(BumpMode::Major, "2.0.0")]
	fn test_bump(#[case] mode: BumpMode, #[case] expected: &str) {
		assert_eq!(next_version(Some("1.2.3"), None, mode).unwrap(), expected);
		assert_eq!(next_version(Some("1.2.3"), Some(""), mode).unwrap(), expected);
	}

	#[rstest]
	#[case::patch(BumpMode::Patch)]
	#[case::minor(BumpMode::Minor)]
	#[case::major(BumpMode::Major)]
	fn test_first_run_seeds(#[case] mode: BumpMode) {
		assert_eq!(next_version(None, None, mode).unwrap(), "0.0.1");
	}

	#[rstest]
	#[case::with_prior(Some("1.2.3"))]
	#[case::without_prior(None)]
	#[case::with_garbage_prior(Some("not-a-version"))]
	fn test_override_wins(#[case] prior: Option<&str>) {
		assert_eq!(
			next_version(prior, Some("2.0.0"), BumpMode::Minor).unwrap(),
			"2.0.0"
		);
	}

	#[test]
	fn test_prerelease_and_build_dropped() {
		assert_eq!(
			next_version(Some("1.2.3-rc.1+build.5"), None, BumpMode::Patch).unwrap(),
			"1.2.4"
		);
	}

	#[rstest]
	#[case::empty("")]
	#[case::v_prefix("v1.2.3")]
	#[case::two_components("1.2")]
	#[case::words("latest")]
	fn test_invalid_prior(#[case] prior: &str) {
		assert!(next_version(Some(prior), None, BumpMode::Patch).is_err());
	}

	#[rstest]
	#[case::overflow_major(BumpMode::Major, format!("{}.0.0", u64::MAX))]
	#[case::overflow_minor(BumpMode::Minor, format!("1.{}.0", u64::MAX))]
	#[case::overflow_patch(BumpMode::Patch, format!("1.2.{}", u64::MAX))]
	fn test_component_at_max_is_rejected(#[case] mode: BumpMode, #[case] prior: String) {
		let err = next_version(Some(prior.as_str()), None, mode).unwrap_err();
		assert!(
			matches!(&err, BumpError::Overflow { mode: m, .. } if *m == mode),
			"{err:?}"
		);
	}

	#[test]
	fn test_lower_components_at_max_still_bump() {
		let prior = format!("1.{max}.{max}", max = u64::MAX);
		assert_eq!(
			next_version(Some(prior.as_str()), None, BumpMode::Major).unwrap(),
			"2.0.0"
		);
	}

	#[test]
	fn test_invalid_prior_is_parse_error() {
		assert!(matches!(
			next_version(Some("nope"), None, BumpMode::Patch),
			Err(BumpError::Parse(_))
		));
	}

	#[test]
	fn test_mode_parse_roundtrip() {
		for mode in [BumpMode::Major, BumpMode::Minor, BumpMode::Patch] {
			assert_eq!(mode.to_string().parse::<BumpMode>().unwrap(), mode);
		}
		assert!("micro".parse::<BumpMode>().is_err());
		assert_eq!(BumpMode::default(), BumpMode::Patch);
	}
}
