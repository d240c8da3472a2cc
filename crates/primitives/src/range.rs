use std::ops::Range;

/// Half-open range of zero-based line indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineRange {
	/// First line in the range.
	pub start: u32,
	/// One past the last line in the range.
	pub end: u32,
}

impl LineRange {
	/// Creates a new range. An `end` before `start` collapses to an empty range.
	pub fn new(start: u32, end: u32) -> Self {
		Self {
			start,
			end: end.max(start),
		}
	}

	/// Creates a range from an inclusive last line.
	pub fn from_inclusive(start: u32, last: u32) -> Self {
		Self::new(start, last.saturating_add(1))
	}

	/// Number of lines covered.
	#[inline]
	pub fn len(&self) -> u32 {
		self.end - self.start
	}

	/// Returns `true` if the range covers no line.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns `true` if `line` lies inside the range.
	#[inline]
	pub fn contains(&self, line: u32) -> bool {
		(self.start..self.end).contains(&line)
	}

	/// Iterates over every line in the range.
	pub fn lines(&self) -> Range<u32> {
		self.start..self.end
	}
}
