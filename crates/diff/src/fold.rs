//! Folding diff parts into displayable edit regions.
//!
//! Added text is buffered until the next unmodified part (or the end) and
//! then split: text that lands inside an existing line becomes an
//! [`InlineEdit`], every other line becomes a [`LineInsertion`]. Positions
//! come from the kept and removed text seen so far, i.e. the base text.

use crate::{DiffKind, DiffPart};

/// Text inserted inside an existing base line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEdit {
	/// Zero-based base line.
	pub line: u32,
	/// Zero-based char column the text is inserted at.
	pub column: u32,
	/// Inserted text, never empty and never containing a line break.
	pub text: String,
}

/// A whole line shown below a base line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInsertion {
	/// Zero-based base line the insertion is displayed below; `-1` places it
	/// above the first line.
	pub before_line: i64,
	/// Running index across all insertions, used to stack them in order.
	pub index: usize,
	/// Line content without its line break.
	pub text: String,
}

/// Result of [`fold_regions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRegions {
	/// Insertions inside existing lines, in text order.
	pub inline: Vec<InlineEdit>,
	/// Whole added lines, in text order.
	pub lines: Vec<LineInsertion>,
}

impl EditRegions {
	/// `true` when the candidate adds nothing to the base.
	pub fn is_empty(&self) -> bool {
		self.inline.is_empty() && self.lines.is_empty()
	}
}

/// Position at the end of the base text consumed so far.
#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
	line: u32,
	last_line_chars: u32,
}

impl Cursor {
	fn advance(&mut self, text: &str) {
		match text.rfind('\n') {
			Some(at) => {
				self.line += text.matches('\n').count() as u32;
				self.last_line_chars = text[at + 1..].chars().count() as u32;
			}
			None => self.last_line_chars += text.chars().count() as u32,
		}
	}
}

struct Folder {
	base: Cursor,
	pending: String,
	next_index: usize,
	out: EditRegions,
}

impl Folder {
	/// Splits the pending added text. `next` is the unmodified text that
	/// follows it, empty at the end of input.
	fn flush(&mut self, next: &str) {
		if self.pending.is_empty() {
			return;
		}
		let pending = std::mem::take(&mut self.pending);
		let mut lines: Vec<&str> = pending.split('\n').collect();
		let mut anchor = i64::from(self.base.line);

		if !next.is_empty() && !next.starts_with('\n') {
			// The tail of the insertion joins the line `next` starts on.
			let last = lines.pop().unwrap_or_default();
			let column = if lines.is_empty() { self.base.last_line_chars } else { 0 };
			if !last.is_empty() {
				self.out.inline.push(InlineEdit {
					line: self.base.line,
					column,
					text: last.to_owned(),
				});
			}
			anchor -= 1;
		} else if !lines.is_empty() {
			let first = lines.remove(0);
			if !first.is_empty() {
				self.out.inline.push(InlineEdit {
					line: self.base.line,
					column: self.base.last_line_chars,
					text: first.to_owned(),
				});
			}
		}

		for text in lines {
			self.out.lines.push(LineInsertion {
				before_line: anchor,
				index: self.next_index,
				text: text.to_owned(),
			});
			self.next_index += 1;
		}
	}
}

/// Folds an ordered part list into inline edits and inserted lines.
///
/// Removed text only moves the position; it produces no region.
pub fn fold_regions(parts: &[DiffPart]) -> EditRegions {
	let mut folder = Folder {
		base: Cursor::default(),
		pending: String::new(),
		next_index: 0,
		out: EditRegions::default(),
	};

	for part in parts {
		if part.kind == DiffKind::Added {
			folder.pending.push_str(&part.value);
			continue;
		}
		folder.flush(&part.value);
		folder.base.advance(&part.value);
	}
	folder.flush("");

	tracing::trace!(inline = folder.out.inline.len(), lines = folder.out.lines.len(), "diff.fold");
	folder.out
}

#[cfg(test)]
mod tests;
