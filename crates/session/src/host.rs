use cursortab_primitives::{BufferId, LineRange, RawPosition, WindowId};

use crate::HostError;

/// Visual hint rendered by the editor's scripting hook.
///
/// Lines and columns are in the editor's convention by the time a command
/// reaches the host; inside the crate they are built zero-based and
/// converted by [`Boundary`](crate::boundary::Boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCommand {
	/// Marks the line a pending cursor jump would land on.
	PlaceJumpSign { line: u32 },
	/// Removes the jump marker.
	ClearJumpSign,
	/// Ghost text appended at `column` (the end of the existing line).
	LineSuffix { line: u32, column: u32, text: String },
	/// Ghost text inserted at `column`, inside the existing line.
	InlineInsert { line: u32, column: u32, text: String },
	/// The line's text from `column` on is replaced by `text`.
	ReplaceTail { line: u32, column: u32, text: String },
	/// A whole new line shown at `line`, past the end of the replaced range.
	VirtualLine { line: u32, text: String },
	/// Removes every hint on `range`.
	ClearLines { range: LineRange },
}

/// Editor collaborator. Every call is synchronous and uses the editor's own
/// coordinate convention.
///
/// Columns count chars, never bytes. Hosts whose native cursor column is a
/// byte offset convert before returning from `read_cursor` and after
/// receiving in `set_cursor`.
pub trait EditorHost: Send + Sync {
	/// Buffer shown in the current window, with its path.
	fn active_buffer(&self) -> Result<(BufferId, String), HostError>;

	/// Every line of `buffer`, without line breaks.
	fn read_lines(&self, buffer: BufferId) -> Result<Vec<String>, HostError>;

	/// Cursor of `window`, column in chars.
	fn read_cursor(&self, window: WindowId) -> Result<RawPosition, HostError>;

	/// Replaces lines `start..end_exclusive` of `buffer` with `lines`.
	fn write_lines(&self, buffer: BufferId, start: u32, end_exclusive: u32, lines: &[String]) -> Result<(), HostError>;

	/// Moves the cursor of `window`, column in chars.
	fn set_cursor(&self, window: WindowId, position: RawPosition) -> Result<(), HostError>;

	/// Fire-and-forget preview hook.
	fn run_preview_script(&self, command: &PreviewCommand) -> Result<(), HostError>;

	/// Fire-and-forget preview removal hook. Must tolerate hints that were
	/// never rendered.
	fn clear_preview_script(&self, command: &PreviewCommand) -> Result<(), HostError>;

	/// Replays `key` as if typed, e.g. `"<Tab>"`.
	fn feed_literal_key(&self, key: &str) -> Result<(), HostError>;
}
