//! Error types for the session layer.

use std::path::PathBuf;

use cursortab_primitives::BufferId;
use thiserror::Error;

/// Failure reported by the [`EditorHost`](crate::EditorHost).
#[derive(Debug, Error)]
pub enum HostError {
	/// The host rejected or failed a call.
	#[error("editor call `{call}` failed: {message}")]
	Call {
		/// Name of the host operation.
		call: &'static str,
		/// Host-provided description.
		message: String,
	},

	/// The buffer is not (or no longer) loaded.
	#[error("{0} is not loaded")]
	UnknownBuffer(BufferId),
}

impl HostError {
	/// Shorthand for [`HostError::Call`].
	pub fn call(call: &'static str, message: impl Into<String>) -> Self {
		Self::Call {
			call,
			message: message.into(),
		}
	}
}

/// Failure reported by the [`CompletionService`](crate::CompletionService).
#[derive(Debug, Error)]
pub enum ServiceError {
	/// The request could not be started.
	#[error("completion request failed: {0}")]
	Request(String),

	/// The response stream broke off.
	#[error("completion stream failed: {0}")]
	Stream(String),
}

/// Errors that can occur when loading a [`SessionConfig`](crate::SessionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or a field value.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A field parsed but holds an unusable value.
	#[error("invalid value for `{field}`: {reason}")]
	Invalid {
		/// Offending field.
		field: &'static str,
		/// Why the value is rejected.
		reason: String,
	},
}

/// Why a fetch produced no pending operation.
#[derive(Debug, Error)]
pub enum FetchError {
	/// A newer trigger superseded this fetch.
	#[error("fetch was superseded")]
	Cancelled,

	#[error(transparent)]
	Service(#[from] ServiceError),

	#[error(transparent)]
	Host(#[from] HostError),

	/// The response carried nothing that changes the buffer.
	#[error("completion service returned no usable suggestion")]
	EmptyResponse,

	/// The suggestion would edit text before the cursor.
	#[error("suggestion edits text before the cursor at line {line}")]
	BeforeCursor {
		/// Zero-based cursor line at capture time.
		line: u32,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
