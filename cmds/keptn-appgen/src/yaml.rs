//! YAML rendering for generated descriptors.

use serde::Serialize;
use tracing::instrument;

/// Serialize a value to block-style YAML with 2-space indentation.
///
/// Struct fields keep declaration order, which for [`keptn_app::KeptnApp`]
/// is also alphabetical, matching what kubectl-style printers emit.
#[instrument(skip_all)]
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, serde_saphyr::ser_error::Error> {
	let options = serde_saphyr::SerializerOptions {
		indent_step: 2,
		indent_array: Some(0),
		prefer_block_scalars: true,
		empty_map_as_braces: true,
		empty_array_as_brackets: true,
		line_width: Some(80),
		quote_ambiguous_keys: true,
		quote_numeric_strings: true,
		..Default::default()
	};

	let mut output = String::new();
	serde_saphyr::to_fmt_writer_with_options(&mut output, value, options)?;
	Ok(output)
}
