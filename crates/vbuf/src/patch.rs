use std::sync::Arc;

use cursortab_primitives::LineRange;

use crate::{LineClassification, VirtualBuffer, compare_line};

/// A replacement block scoped to a line range of a larger base buffer.
///
/// The replacement buffer only holds the lines that replace `range`; both
/// buffers are read-only views, so a patch view can be inspected from the
/// preview path and the commit path without copying the base text.
#[derive(Debug, Clone)]
pub struct PatchView {
	base: VirtualBuffer,
	replacement: VirtualBuffer,
	range: LineRange,
}

impl PatchView {
	/// Creates a view replacing `range` of `base` with `replacement`.
	pub fn new(base: VirtualBuffer, replacement: impl Into<Arc<str>>, range: LineRange) -> Self {
		Self {
			base,
			replacement: VirtualBuffer::build(replacement),
			range,
		}
	}

	/// Base buffer the patch applies to.
	pub fn base(&self) -> &VirtualBuffer {
		&self.base
	}

	/// Replacement block.
	pub fn replacement(&self) -> &VirtualBuffer {
		&self.replacement
	}

	/// Lines of the base being replaced.
	pub fn range(&self) -> LineRange {
		self.range
	}

	/// Number of lines in the replacement block.
	pub fn replacement_line_count(&self) -> u32 {
		u32::try_from(self.replacement.line_count()).unwrap_or(u32::MAX)
	}

	/// Every line of the replacement block.
	pub fn replacement_lines(&self) -> Vec<&str> {
		self.replacement.lines().collect()
	}

	/// Replacement text standing at absolute base line `line`, if any.
	pub fn replacement_line(&self, line: u32) -> Option<&str> {
		let rel = line.checked_sub(self.range.start)?;
		(rel < self.replacement_line_count()).then(|| self.replacement.line(rel as usize))
	}

	/// Classifies the change at absolute line `line`.
	///
	/// Returns `None` outside the replacement block and for lines that exist
	/// in the base unchanged.
	pub fn classify_line(&self, line: u32) -> Option<LineClassification> {
		let candidate = self.replacement_line(line)?;
		let in_base = (line as usize) < self.base.line_count();
		let base = self.base.line(line as usize);
		if in_base && base == candidate {
			return None;
		}
		Some(compare_line(base, candidate))
	}

	/// Absolute indices of every replacement line that differs from the base.
	pub fn changed_lines(&self) -> impl Iterator<Item = u32> + '_ {
		let start = self.range.start;
		(start..start.saturating_add(self.replacement_line_count())).filter(|&line| self.classify_line(line).is_some())
	}

	/// Absolute index of the last line truly modified by the patch.
	///
	/// A patch that only removes lines reports the last line it leaves behind.
	pub fn last_changed_line(&self) -> Option<u32> {
		self.changed_lines().last().or_else(|| {
			(self.replacement_line_count() != self.range.len())
				.then(|| self.range.start + self.replacement_line_count().saturating_sub(1))
		})
	}

	/// Returns `true` if applying the patch would alter the base.
	pub fn has_changes(&self) -> bool {
		self.last_changed_line().is_some()
	}
}
