use std::path::Path;

use cursortab_diff::{DiffOptions, MAX_FINE_DIFF_LEN};
use cursortab_primitives::Convention;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Session tunables, read from TOML. Every field has a default.
///
/// ```toml
/// history_len = 3
/// accept_key = "<Tab>"
///
/// [editor_convention]
/// line = "one"
/// column = "zero"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
	/// Number of committed edits kept in the diff history sent with requests.
	pub history_len: usize,
	/// Longest side, in chars, refined below line granularity.
	pub max_fine_diff_len: usize,
	/// Drop suggestions that would edit text before the cursor.
	pub reject_edits_before_cursor: bool,
	/// Key fed back to the editor when accept has nothing to commit.
	pub accept_key: String,
	/// Index bases of editor cursor and line numbers.
	pub editor_convention: Convention,
	/// Index bases of completion service cursor and line numbers.
	pub service_convention: Convention,
	/// Opaque workspace identifier forwarded with every request.
	pub workspace_id: String,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			history_len: 3,
			max_fine_diff_len: MAX_FINE_DIFF_LEN,
			reject_edits_before_cursor: true,
			accept_key: "<Tab>".to_string(),
			editor_convention: Convention::ONE_BASED_LINES,
			service_convention: Convention::ONE_BASED_LINES,
			workspace_id: String::new(),
		}
	}
}

impl SessionConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(src: &str) -> Result<Self> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and parses the TOML file at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&src)?;
		tracing::debug!(path = %path.display(), "session.config.loaded");
		Ok(config)
	}

	/// Options for the diff engine used to vet suggestions.
	pub fn diff_options(&self) -> DiffOptions {
		DiffOptions {
			max_fine_len: self.max_fine_diff_len,
			..DiffOptions::default()
		}
	}

	fn validate(&self) -> Result<()> {
		if self.accept_key.is_empty() {
			return Err(ConfigError::Invalid {
				field: "accept_key",
				reason: "must not be empty".to_string(),
			});
		}
		Ok(())
	}
}
