use std::sync::Arc;

use crate::{BufferId, Position};

/// Immutable text of one buffer plus the cursor at capture time.
///
/// The text is shared behind an `Arc<str>` and has no mutable accessor, so
/// every index built over a snapshot stays valid for as long as the snapshot
/// lives. Clones share the text.
#[derive(Debug, Clone)]
pub struct Snapshot {
	text: Arc<str>,
	cursor: Position,
	buffer: BufferId,
	path: Arc<str>,
	version: u64,
}

impl Snapshot {
	/// Captures `text` with the zero-based `cursor`.
	pub fn new(text: impl Into<Arc<str>>, cursor: Position) -> Self {
		Self {
			text: text.into(),
			cursor,
			buffer: BufferId::default(),
			path: Arc::from(""),
			version: 0,
		}
	}

	/// Captures the given lines joined with `\n`.
	pub fn from_lines<I, S>(lines: I, cursor: Position) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut text = String::new();
		for (i, line) in lines.into_iter().enumerate() {
			if i > 0 {
				text.push('\n');
			}
			text.push_str(line.as_ref());
		}
		Self::new(text, cursor)
	}

	/// Tags the snapshot with the buffer it was read from.
	pub fn with_buffer(mut self, buffer: BufferId, path: impl Into<Arc<str>>) -> Self {
		self.buffer = buffer;
		self.path = path.into();
		self
	}

	/// Tags the snapshot with the buffer's edit version.
	pub fn with_version(mut self, version: u64) -> Self {
		self.version = version;
		self
	}

	/// Returns a copy of this snapshot with a different cursor.
	pub fn at_cursor(&self, cursor: Position) -> Self {
		Self {
			cursor,
			..self.clone()
		}
	}

	/// Full text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Shared handle to the text.
	pub fn shared_text(&self) -> Arc<str> {
		Arc::clone(&self.text)
	}

	/// Cursor at capture time.
	pub fn cursor(&self) -> Position {
		self.cursor
	}

	/// Buffer the text was read from.
	pub fn buffer(&self) -> BufferId {
		self.buffer
	}

	/// Path of the buffer, possibly empty.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Edit version of the buffer at capture time.
	pub fn version(&self) -> u64 {
		self.version
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_lines_joins_without_trailing_break() {
		let snap = Snapshot::from_lines(["a", "b", "c"], Position::new(1, 0));
		assert_eq!(snap.text(), "a\nb\nc");
		assert_eq!(snap.cursor(), Position::new(1, 0));
	}

	#[test]
	fn clones_share_text() {
		let snap = Snapshot::new("shared", Position::default()).with_buffer(BufferId(4), "src/lib.rs");
		let moved = snap.at_cursor(Position::new(0, 3));
		assert!(Arc::ptr_eq(&snap.shared_text(), &moved.shared_text()));
		assert_eq!(moved.buffer(), BufferId(4));
		assert_eq!(moved.path(), "src/lib.rs");
	}
}
