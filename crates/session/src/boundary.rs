//! The one place where editor and service coordinates meet the zero-based
//! internal space.
//!
//! Everything past this module works with [`Position`] and zero-based line
//! indices; the host only ever sees [`RawPosition`]s in the editor's
//! convention, and requests carry the service's convention.

use std::sync::Arc;

use cursortab_primitives::{BufferId, Convention, LineRange, Position, RawPosition, Snapshot, WindowId};

use crate::{EditorHost, HostError, PreviewCommand};

/// Host handle that converts coordinates on the way in and out.
#[derive(Clone)]
pub struct Boundary {
	host: Arc<dyn EditorHost>,
	editor: Convention,
	service: Convention,
}

impl Boundary {
	pub fn new(host: Arc<dyn EditorHost>, editor: Convention, service: Convention) -> Self {
		Self { host, editor, service }
	}

	/// Reads the active buffer and cursor of `window` into a snapshot.
	pub fn capture(&self, window: WindowId) -> Result<Snapshot, HostError> {
		let (buffer, path) = self.host.active_buffer()?;
		let lines = self.host.read_lines(buffer)?;
		let cursor = self.editor.to_internal(self.host.read_cursor(window)?);
		tracing::trace!(%buffer, lines = lines.len(), line = cursor.line, column = cursor.column, "boundary.capture");
		Ok(Snapshot::from_lines(lines, cursor).with_buffer(buffer, path))
	}

	/// Every line of `buffer`, without line breaks.
	pub fn read_lines(&self, buffer: BufferId) -> Result<Vec<String>, HostError> {
		self.host.read_lines(buffer)
	}

	/// Replaces the zero-based `range` of `buffer`.
	pub fn write_lines(&self, buffer: BufferId, range: LineRange, lines: &[String]) -> Result<(), HostError> {
		self.host
			.write_lines(buffer, self.editor.line_to_raw(range.start), self.editor.line_to_raw(range.end), lines)
	}

	pub fn set_cursor(&self, window: WindowId, position: Position) -> Result<(), HostError> {
		self.host.set_cursor(window, self.editor.to_raw(position))
	}

	/// Renders a zero-based preview command. Failures are logged, never returned.
	pub fn preview(&self, command: &PreviewCommand) {
		if let Err(error) = self.host.run_preview_script(&self.to_editor(command)) {
			tracing::warn!(%error, ?command, "boundary.preview.failed");
		}
	}

	/// Removes a zero-based preview command. Failures are logged, never returned.
	pub fn clear_preview(&self, command: &PreviewCommand) {
		if let Err(error) = self.host.clear_preview_script(&self.to_editor(command)) {
			tracing::warn!(%error, ?command, "boundary.clear_preview.failed");
		}
	}

	pub fn feed_key(&self, key: &str) -> Result<(), HostError> {
		self.host.feed_literal_key(key)
	}

	/// Cursor as the completion service expects it.
	pub fn service_cursor(&self, position: Position) -> RawPosition {
		self.service.to_raw(position)
	}

	/// Zero-based index of a line number sent by the service.
	pub fn service_line(&self, line: u32) -> u32 {
		self.service.line_to_internal(line)
	}

	fn to_editor(&self, command: &PreviewCommand) -> PreviewCommand {
		let line = |l: u32| self.editor.line_to_raw(l);
		let column = |c: u32| self.editor.column.from_zero(c);
		match command {
			PreviewCommand::PlaceJumpSign { line: l } => PreviewCommand::PlaceJumpSign { line: line(*l) },
			PreviewCommand::ClearJumpSign => PreviewCommand::ClearJumpSign,
			PreviewCommand::LineSuffix { line: l, column: c, text } => PreviewCommand::LineSuffix {
				line: line(*l),
				column: column(*c),
				text: text.clone(),
			},
			PreviewCommand::InlineInsert { line: l, column: c, text } => PreviewCommand::InlineInsert {
				line: line(*l),
				column: column(*c),
				text: text.clone(),
			},
			PreviewCommand::ReplaceTail { line: l, column: c, text } => PreviewCommand::ReplaceTail {
				line: line(*l),
				column: column(*c),
				text: text.clone(),
			},
			PreviewCommand::VirtualLine { line: l, text } => PreviewCommand::VirtualLine {
				line: line(*l),
				text: text.clone(),
			},
			PreviewCommand::ClearLines { range } => PreviewCommand::ClearLines {
				range: LineRange::new(line(range.start), line(range.end)),
			},
		}
	}
}
