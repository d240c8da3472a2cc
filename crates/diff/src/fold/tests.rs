use pretty_assertions::assert_eq;

use super::*;

fn inline(line: u32, column: u32, text: &str) -> InlineEdit {
	InlineEdit { line, column, text: text.into() }
}

fn insertion(before_line: i64, index: usize, text: &str) -> LineInsertion {
	LineInsertion { before_line, index, text: text.into() }
}

#[test]
fn trailing_addition_is_inline_at_line_end() {
	let regions = fold_regions(&[DiffPart::kept("foo"), DiffPart::added("bar")]);
	assert_eq!(regions.inline, vec![inline(0, 3, "bar")]);
	assert!(regions.lines.is_empty());
}

#[test]
fn mid_line_addition_is_inline() {
	let regions = fold_regions(&[DiffPart::kept("ab"), DiffPart::added("X"), DiffPart::kept("cd")]);
	assert_eq!(regions.inline, vec![inline(0, 2, "X")]);
	assert!(regions.lines.is_empty());
}

#[test]
fn added_lines_between_kept_lines_stack_in_order() {
	let regions = fold_regions(&[DiffPart::kept("a\n"), DiffPart::added("x\ny\n"), DiffPart::kept("b")]);
	assert!(regions.inline.is_empty());
	assert_eq!(regions.lines, vec![insertion(0, 0, "x"), insertion(0, 1, "y")]);
}

#[test]
fn appended_line_after_last_line() {
	let regions = fold_regions(&[DiffPart::kept("a"), DiffPart::added("\nb")]);
	assert!(regions.inline.is_empty());
	assert_eq!(regions.lines, vec![insertion(0, 0, "b")]);
}

#[test]
fn insertion_above_first_line_has_negative_anchor() {
	let regions = fold_regions(&[DiffPart::added("new\n"), DiffPart::kept("a")]);
	assert_eq!(regions.lines, vec![insertion(-1, 0, "new")]);
}

#[test]
fn removed_text_advances_position_only() {
	let regions = fold_regions(&[DiffPart::removed("x\n"), DiffPart::added("y\n"), DiffPart::kept("k")]);
	assert!(regions.inline.is_empty());
	assert_eq!(regions.lines, vec![insertion(0, 0, "y")]);
}

#[test]
fn insertion_indices_run_across_groups() {
	let parts = [
		DiffPart::kept("a\n"),
		DiffPart::added("x\n"),
		DiffPart::kept("b\n"),
		DiffPart::added("y\n"),
		DiffPart::kept("c"),
	];
	let regions = fold_regions(&parts);
	assert_eq!(regions.lines, vec![insertion(0, 0, "x"), insertion(1, 1, "y")]);
}

#[test]
fn columns_count_chars() {
	let regions = fold_regions(&[DiffPart::kept("héllo"), DiffPart::added("!")]);
	assert_eq!(regions.inline, vec![inline(0, 5, "!")]);
}

#[test]
fn no_additions_no_regions() {
	assert!(fold_regions(&[DiffPart::kept("a\n"), DiffPart::removed("b")]).is_empty());
	assert!(fold_regions(&[]).is_empty());
}
