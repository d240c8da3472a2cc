use serde::{Deserialize, Serialize};

/// Index base used by one side of a coordinate boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
	/// The first line (or column) is `0`.
	#[default]
	Zero,
	/// The first line (or column) is `1`.
	One,
}

impl Base {
	/// Returns the index of the first element in this base.
	pub const fn first(self) -> u32 {
		match self {
			Self::Zero => 0,
			Self::One => 1,
		}
	}

	/// Converts an index expressed in this base to a zero-based index.
	///
	/// A one-based `0` is not a valid index; it saturates to `0`.
	pub const fn to_zero(self, index: u32) -> u32 {
		index.saturating_sub(self.first())
	}

	/// Converts a zero-based index to this base.
	pub const fn from_zero(self, index: u32) -> u32 {
		index.saturating_add(self.first())
	}
}

/// Zero-based `(line, column)` position used everywhere inside the pipeline.
///
/// Ordering is lexicographic: an earlier line always sorts first, and on the
/// same line the smaller column sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// Zero-based line index.
	pub line: u32,
	/// Zero-based column (in characters).
	pub column: u32,
}

impl Position {
	/// Creates a new zero-based position.
	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

/// A position expressed in some collaborator's own convention.
///
/// Kept as a distinct type so a foreign coordinate can never be used where a
/// zero-based [`Position`] is expected without going through a [`Convention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawPosition {
	/// Line index in the collaborator's base.
	pub line: u32,
	/// Char column in the collaborator's base.
	pub column: u32,
}

impl RawPosition {
	/// Creates a new raw position.
	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

/// Line and column bases of one external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Convention {
	/// Base of line numbers.
	pub line: Base,
	/// Base of column numbers.
	pub column: Base,
}

impl Convention {
	/// Zero-based lines and columns.
	pub const ZERO_BASED: Self = Self {
		line: Base::Zero,
		column: Base::Zero,
	};

	/// One-based lines, zero-based columns (the usual editor window cursor).
	pub const ONE_BASED_LINES: Self = Self {
		line: Base::One,
		column: Base::Zero,
	};

	/// Converts a raw position into the internal zero-based space.
	pub const fn to_internal(self, raw: RawPosition) -> Position {
		Position {
			line: self.line.to_zero(raw.line),
			column: self.column.to_zero(raw.column),
		}
	}

	/// Converts an internal position into this convention.
	pub const fn to_raw(self, pos: Position) -> RawPosition {
		RawPosition {
			line: self.line.from_zero(pos.line),
			column: self.column.from_zero(pos.column),
		}
	}

	/// Converts a raw line number into a zero-based line index.
	pub const fn line_to_internal(self, line: u32) -> u32 {
		self.line.to_zero(line)
	}

	/// Converts a zero-based line index into this convention.
	pub const fn line_to_raw(self, line: u32) -> u32 {
		self.line.from_zero(line)
	}
}
