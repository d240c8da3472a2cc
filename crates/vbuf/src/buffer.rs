use std::sync::Arc;

use cursortab_primitives::{Position, Snapshot};

/// Line index over one immutable [`Snapshot`].
///
/// The table of line starts is built once at construction and never touched
/// again. The snapshot is owned by value, so the text cannot change under the
/// index while the buffer is alive.
#[derive(Debug, Clone)]
pub struct VirtualBuffer {
	snapshot: Snapshot,
	/// Byte offset of every line start. Always non-empty; `line_starts[0] == 0`.
	line_starts: Vec<usize>,
}

impl VirtualBuffer {
	/// Indexes `snapshot` in a single pass over its bytes.
	pub fn new(snapshot: Snapshot) -> Self {
		let text = snapshot.text();
		let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
		line_starts.push(0);
		line_starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
		tracing::trace!(lines = line_starts.len(), bytes = text.len(), "vbuf.build");
		Self { snapshot, line_starts }
	}

	/// Indexes bare text with the cursor at the origin.
	pub fn build(text: impl Into<Arc<str>>) -> Self {
		Self::new(Snapshot::new(text, Position::default()))
	}

	/// Number of recorded line starts. Empty text has one (empty) line.
	#[inline]
	pub fn line_count(&self) -> usize {
		self.line_starts.len()
	}

	/// Returns line `index` without its trailing line break.
	///
	/// Total over every integer type: negative indices and indices past the
	/// last line yield `""`.
	pub fn line<I: TryInto<usize>>(&self, index: I) -> &str {
		let Ok(index) = index.try_into() else {
			return "";
		};
		let Some(&start) = self.line_starts.get(index) else {
			return "";
		};
		let text = self.snapshot.text();
		let end = self.line_starts.get(index + 1).copied().unwrap_or(text.len()).max(start);
		strip_line_break(&text[start..end])
	}

	/// Iterates over every line, line breaks stripped.
	pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
		(0..self.line_count()).map(|i| self.line(i))
	}

	/// Cursor captured with the snapshot.
	pub fn cursor(&self) -> Position {
		self.snapshot.cursor()
	}

	/// Underlying snapshot.
	pub fn snapshot(&self) -> &Snapshot {
		&self.snapshot
	}

	/// Full text.
	pub fn text(&self) -> &str {
		self.snapshot.text()
	}
}

fn strip_line_break(line: &str) -> &str {
	let line = line.strip_suffix('\n').unwrap_or(line);
	line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests;
