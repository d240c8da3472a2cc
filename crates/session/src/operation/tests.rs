use std::sync::Arc;

use cursortab_primitives::{Convention, RawPosition};
use cursortab_vbuf::VirtualBuffer;
use pretty_assertions::assert_eq;

use super::*;
use crate::testing::{FakeHost, HostCall};

const BASE: [&str; 4] = ["fn main() {", "    let x", "    foo(a)", "}"];

fn setup(lines: &[&str]) -> (Arc<FakeHost>, Boundary) {
	let host = Arc::new(FakeHost::new(lines, RawPosition::new(1, 0)));
	let boundary = Boundary::new(host.clone(), Convention::ONE_BASED_LINES, Convention::ONE_BASED_LINES);
	(host, boundary)
}

fn patch(host: &FakeHost, base: &[&str], replacement: &str, range: LineRange) -> PendingOperation {
	PendingOperation::TextPatch(TextPatch {
		buffer: host.buffer(),
		window: WindowId::CURRENT,
		patch: PatchView::new(VirtualBuffer::build(base.join("\n")), replacement.to_owned(), range),
	})
}

fn jump(target_line: u32, out_of_range: bool) -> PendingOperation {
	PendingOperation::CursorJump(CursorJump {
		window: WindowId::CURRENT,
		target_line,
		out_of_range,
		line_count: 4,
	})
}

#[test]
fn patch_preview_describes_each_changed_line() {
	let (host, boundary) = setup(&BASE);
	let op = patch(&host, &BASE, "    let x = 1;\n    foo(b, a)\n    bar();", LineRange::new(1, 3));
	op.preview(&boundary);
	assert_eq!(
		host.calls(),
		vec![
			HostCall::Preview(PreviewCommand::LineSuffix {
				line: 2,
				column: 9,
				text: " = 1;".into()
			}),
			HostCall::Preview(PreviewCommand::InlineInsert {
				line: 3,
				column: 8,
				text: "b, ".into()
			}),
			HostCall::Preview(PreviewCommand::VirtualLine {
				line: 4,
				text: "    bar();".into()
			}),
		]
	);
}

#[test]
fn replacement_preview_elides_common_prefix() {
	let base = ["hello world", "abc"];
	let (host, boundary) = setup(&base);
	patch(&host, &base, "hello there\nxyz", LineRange::new(0, 2)).preview(&boundary);
	assert_eq!(
		host.calls(),
		vec![
			HostCall::Preview(PreviewCommand::ReplaceTail {
				line: 1,
				column: 6,
				text: "there".into()
			}),
			HostCall::Preview(PreviewCommand::ReplaceTail {
				line: 2,
				column: 0,
				text: "xyz".into()
			}),
		]
	);
}

#[test]
fn patch_commit_writes_range_and_moves_cursor() {
	let (host, boundary) = setup(&BASE);
	let op = patch(&host, &BASE, "    let x = 1;\n    foo(b, a)\n    bar();", LineRange::new(1, 3));
	let outcome = op.commit(&boundary).expect("patch applies");

	assert_eq!(
		host.lines(),
		vec!["fn main() {", "    let x = 1;", "    foo(b, a)", "    bar();", "}"]
	);
	assert_eq!(host.cursor(), RawPosition::new(4, 10));
	assert_eq!(
		outcome,
		CommitOutcome::Patched {
			last_changed_line: 3,
			history: "2-|    let x\n2+|    let x = 1;\n3-|    foo(a)\n3+|    foo(b, a)\n4+|    bar();\n".into(),
		}
	);
}

#[test]
fn patch_over_edited_lines_is_not_applicable() {
	let (host, boundary) = setup(&BASE);
	let op = patch(&host, &BASE, "    let x = 1;", LineRange::new(1, 2));
	host.set_lines(&["fn main() {", "    let xyz", "    foo(a)", "}"]);

	assert_eq!(op.commit(&boundary), None);
	assert_eq!(host.lines(), vec!["fn main() {", "    let xyz", "    foo(a)", "}"]);
	assert!(host.calls().is_empty());
}

#[test]
fn patch_ignores_edits_outside_its_range() {
	let (host, boundary) = setup(&BASE);
	let op = patch(&host, &BASE, "    let x = 1;", LineRange::new(1, 2));
	host.set_lines(&["fn main() {", "    let x", "    foo(a, b)", "}"]);

	assert!(op.commit(&boundary).is_some());
	assert_eq!(host.lines(), vec!["fn main() {", "    let x = 1;", "    foo(a, b)", "}"]);
}

#[test]
fn patch_without_changes_is_not_applicable() {
	let (host, boundary) = setup(&BASE);
	let op = patch(&host, &BASE, "    let x\n    foo(a)", LineRange::new(1, 3));
	assert_eq!(op.commit(&boundary), None);
	assert!(host.calls().is_empty());
}

#[test]
fn jump_preview_and_commit() {
	let (host, boundary) = setup(&BASE);
	let op = jump(2, false);
	op.preview(&boundary);
	assert_eq!(op.commit(&boundary), Some(CommitOutcome::Jumped { line: 2 }));
	assert_eq!(
		host.calls(),
		vec![
			HostCall::Preview(PreviewCommand::PlaceJumpSign { line: 3 }),
			HostCall::SetCursor(RawPosition::new(3, 0)),
		]
	);
}

#[test]
fn unreachable_jumps_do_nothing() {
	let (host, boundary) = setup(&BASE);
	for op in [jump(1, true), jump(9, false)] {
		op.preview(&boundary);
		assert_eq!(op.commit(&boundary), None);
	}
	assert!(host.calls().is_empty());
}

#[test]
fn clear_preview_is_idempotent() {
	let (host, boundary) = setup(&BASE);
	let op = patch(&host, &BASE, "x", LineRange::new(1, 3));
	op.clear_preview(&boundary);
	op.clear_preview(&boundary);
	jump(0, false).clear_preview(&boundary);
	let clear = HostCall::Clear(PreviewCommand::ClearLines {
		range: LineRange::new(2, 4),
	});
	assert_eq!(host.calls(), vec![clear.clone(), clear, HostCall::Clear(PreviewCommand::ClearJumpSign)]);
}
