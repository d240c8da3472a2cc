use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use cursortab_primitives::RawPosition;
use futures::stream::BoxStream;

use crate::ServiceError;

/// Why a suggestion was requested. Forwarded to the service verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentTag {
	Typing,
	LineChange,
	Unspecified,
	LinterErrors,
	ParameterHints,
	CursorPrediction,
	ManualTrigger,
	EditorChange,
	LspSuggestions,
}

impl IntentTag {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Typing => "typing",
			Self::LineChange => "line_change",
			Self::Unspecified => "unspecified",
			Self::LinterErrors => "linter_errors",
			Self::ParameterHints => "parameter_hints",
			Self::CursorPrediction => "cursor_prediction",
			Self::ManualTrigger => "manual_trigger",
			Self::EditorChange => "editor_change",
			Self::LspSuggestions => "lsp_suggestions",
		}
	}
}

impl fmt::Display for IntentTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// What the service is asked to predict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
	/// Replacement text for a line range near the cursor.
	Completion,
	/// The line the user is likely to edit next.
	CursorPrediction,
}

/// Everything the service sees of the editor. Coordinates are in the
/// service's convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
	pub kind: RequestKind,
	pub intent: IntentTag,
	pub text: Arc<str>,
	pub cursor: RawPosition,
	pub path: Arc<str>,
	pub version: u64,
	/// Recent committed edits, oldest first.
	pub diff_history: Vec<String>,
	pub workspace_id: String,
}

/// Lines a completion replaces, inclusive on both ends, in the service's
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplaceRange {
	pub start_line: u32,
	pub end_line_inclusive: u32,
}

/// One unit of a streamed response. Later values override earlier ones;
/// `text` accumulates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionChunk {
	pub text: String,
	pub replace_range: Option<ReplaceRange>,
	/// Stops consumption once set.
	pub done: bool,
	/// Set on cursor predictions that point outside the current buffer.
	pub out_of_range: bool,
	pub target_line: Option<u32>,
	/// Offset added to the replace range start.
	pub suggestion_start_line: Option<u32>,
}

pub type ChunkStream = BoxStream<'static, Result<CompletionChunk, ServiceError>>;

/// Remote suggestion source.
#[async_trait]
pub trait CompletionService: Send + Sync {
	async fn request(&self, request: CompletionRequest) -> Result<ChunkStream, ServiceError>;
}
