use cursortab_primitives::Position;

use crate::{EditRegions, InlineEdit, LineInsertion};

/// Edit regions in buffer coordinates plus the cursor verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetDiff {
	/// `false` when some region lies before the cursor. The regions are kept
	/// either way.
	pub accepted: bool,
	/// Regions shifted into buffer lines.
	pub regions: EditRegions,
}

/// Shifts `regions` down by `line_offset` lines and checks them against `cursor`.
///
/// A region is rejected when it sits on an earlier line than the cursor, or
/// on the cursor line at an earlier column. Inserted lines only carry a line.
pub fn apply_offset(regions: EditRegions, line_offset: u32, cursor: Position) -> OffsetDiff {
	let inline: Vec<InlineEdit> = regions
		.inline
		.into_iter()
		.map(|edit| InlineEdit {
			line: edit.line.saturating_add(line_offset),
			..edit
		})
		.collect();
	let lines: Vec<LineInsertion> = regions
		.lines
		.into_iter()
		.map(|ins| LineInsertion {
			before_line: ins.before_line + i64::from(line_offset),
			..ins
		})
		.collect();

	let cursor_line = i64::from(cursor.line);
	let line_before = lines.iter().any(|ins| ins.before_line < cursor_line);
	let inline_before = inline.iter().any(|edit| (edit.line, edit.column) < (cursor.line, cursor.column));
	let accepted = !(line_before || inline_before);

	if !accepted {
		tracing::debug!(line_offset, cursor_line = cursor.line, cursor_column = cursor.column, "diff.offset.rejected");
	}

	OffsetDiff {
		accepted,
		regions: EditRegions { inline, lines },
	}
}
