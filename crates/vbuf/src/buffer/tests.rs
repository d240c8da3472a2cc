use proptest::prelude::*;

use super::*;

#[test]
fn indexes_three_lines() {
	let buf = VirtualBuffer::build("line1\nline2\nline3");
	assert_eq!(buf.line_count(), 3);
	assert_eq!(buf.line(0), "line1");
	assert_eq!(buf.line(1), "line2");
	assert_eq!(buf.line(2), "line3");
	assert_eq!(buf.line(5), "");
}

#[test]
fn single_and_empty_text() {
	assert_eq!(VirtualBuffer::build("single line").line_count(), 1);

	let empty = VirtualBuffer::build("");
	assert_eq!(empty.line_count(), 1);
	assert_eq!(empty.line(0), "");
}

#[test]
fn trailing_break_opens_an_empty_last_line() {
	let buf = VirtualBuffer::build("a\nb\n");
	assert_eq!(buf.line_count(), 3);
	assert_eq!(buf.line(1), "b");
	assert_eq!(buf.line(2), "");
}

#[test]
fn crlf_breaks_are_stripped() {
	let buf = VirtualBuffer::build("one\r\ntwo");
	assert_eq!(buf.line(0), "one");
	assert_eq!(buf.line(1), "two");
}

#[test]
fn negative_lookup_is_empty() {
	let buf = VirtualBuffer::build("x\ny");
	assert_eq!(buf.line(-1i64), "");
	assert_eq!(buf.line(1i64), "y");
	assert_eq!(buf.line(i64::MAX), "");
	assert_eq!(buf.line(u32::MAX), "");
}

#[test]
fn snapshot_travels_with_the_index() {
	let snap = Snapshot::new("fn main() {\n    todo!()\n}", Position::new(1, 4));
	let buf = VirtualBuffer::new(snap);
	assert_eq!(buf.cursor(), Position::new(1, 4));
	assert_eq!(buf.line(buf.cursor().line), "    todo!()");
}

#[test]
fn multibyte_lines() {
	let buf = VirtualBuffer::build("caf\u{00E9}\n\u{1F600}!");
	assert_eq!(buf.line(0), "caf\u{00E9}");
	assert_eq!(buf.line(1), "\u{1F600}!");
}

proptest! {
	#[test]
	fn prop_lines_rejoin_to_text(text in "[ab\n]{0,40}") {
		let buf = VirtualBuffer::build(text.clone());
		let rejoined = buf.lines().collect::<Vec<_>>().join("\n");
		prop_assert_eq!(rejoined, text.clone());
		prop_assert_eq!(buf.line_count(), text.matches('\n').count() + 1);
	}
}
