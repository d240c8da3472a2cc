use cursortab_primitives::Position;

use crate::{DiffPart, MAX_FINE_DIFF_LEN, OffsetDiff, WordAndCharDiffs, apply_offset, fold_regions, line_diff, refine};

/// Granularity whose parts are folded into edit regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
	/// Whole lines; no refinement.
	Line,
	/// Identifier, whitespace and punctuation tokens.
	Word,
	/// Single chars. Gives the smallest regions.
	#[default]
	Char,
}

/// Tunables for [`DiffEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
	/// Longest side, in chars, refined below line granularity.
	pub max_fine_len: usize,
	/// Parts fed to [`fold_regions`] by [`DiffEngine::compute`].
	pub granularity: Granularity,
}

impl Default for DiffOptions {
	fn default() -> Self {
		Self {
			max_fine_len: MAX_FINE_DIFF_LEN,
			granularity: Granularity::default(),
		}
	}
}

/// Stateless diff pipeline bound to one set of [`DiffOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
	options: DiffOptions,
}

impl DiffEngine {
	/// Creates an engine using `options` for every call.
	pub fn new(options: DiffOptions) -> Self {
		Self { options }
	}

	/// Options the engine was built with.
	pub fn options(&self) -> DiffOptions {
		self.options
	}

	/// Line-level parts.
	pub fn line_diff(&self, base: &str, candidate: &str) -> Vec<DiffPart> {
		line_diff(base, candidate)
	}

	/// Word- and char-level parts.
	pub fn refine(&self, base: &str, candidate: &str) -> WordAndCharDiffs {
		refine(base, candidate, self.options.max_fine_len)
	}

	/// Parts at the configured granularity.
	pub fn parts(&self, base: &str, candidate: &str) -> Vec<DiffPart> {
		match self.options.granularity {
			Granularity::Line => self.line_diff(base, candidate),
			Granularity::Word => self.refine(base, candidate).word,
			Granularity::Char => self.refine(base, candidate).char,
		}
	}

	/// Runs the full pipeline for a block that starts at buffer line
	/// `line_offset`, checking the result against `cursor`.
	pub fn compute(&self, base: &str, candidate: &str, line_offset: u32, cursor: Position) -> OffsetDiff {
		let parts = self.parts(base, candidate);
		let regions = fold_regions(&parts);
		tracing::trace!(
			granularity = ?self.options.granularity,
			parts = parts.len(),
			line_offset,
			"diff.compute"
		);
		apply_offset(regions, line_offset, cursor)
	}
}
