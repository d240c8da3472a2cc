use std::sync::Arc;

use cursortab_primitives::{Convention, RawPosition, WindowId};
use pretty_assertions::assert_eq;

use super::*;
use crate::testing::{FakeHost, HostCall};
use crate::{CursorJump, PreviewCommand, RequestCoordinator};

fn setup() -> (Arc<FakeHost>, Boundary) {
	let host = Arc::new(FakeHost::new(&["a", "b", "c", "d"], RawPosition::new(1, 0)));
	let boundary = Boundary::new(host.clone(), Convention::ONE_BASED_LINES, Convention::ONE_BASED_LINES);
	(host, boundary)
}

fn jump(target_line: u32) -> PendingOperation {
	PendingOperation::CursorJump(CursorJump {
		window: WindowId::CURRENT,
		target_line,
		out_of_range: false,
		line_count: 4,
	})
}

fn target(op: Option<PendingOperation>) -> Option<u32> {
	match op? {
		PendingOperation::CursorJump(jump) => Some(jump.target_line),
		PendingOperation::TextPatch(_) => None,
	}
}

#[test]
fn push_clears_previous_before_previewing_next() {
	let (host, boundary) = setup();
	let queue = OperationQueue::new();
	queue.push(jump(1), &boundary);
	queue.push(jump(2), &boundary);

	assert_eq!(
		host.calls(),
		vec![
			HostCall::Preview(PreviewCommand::PlaceJumpSign { line: 2 }),
			HostCall::Clear(PreviewCommand::ClearJumpSign),
			HostCall::Preview(PreviewCommand::PlaceJumpSign { line: 3 }),
		]
	);
	assert_eq!(target(queue.peek()), Some(2));
}

#[test]
fn pop_on_empty_is_a_no_op() {
	let (host, boundary) = setup();
	let queue = OperationQueue::new();
	assert_eq!(queue.pop(&boundary), PopOutcome::Empty);
	assert!(host.calls().is_empty());
}

#[test]
fn pop_clears_then_commits() {
	let (host, boundary) = setup();
	let queue = OperationQueue::new();
	queue.push(jump(3), &boundary);
	host.take_calls();

	assert_eq!(queue.pop(&boundary), PopOutcome::Committed(CommitOutcome::Jumped { line: 3 }));
	assert_eq!(
		host.calls(),
		vec![
			HostCall::Clear(PreviewCommand::ClearJumpSign),
			HostCall::SetCursor(RawPosition::new(4, 0)),
		]
	);
	assert!(queue.is_empty());
}

#[test]
fn unapplicable_pop_empties_slot() {
	let (_host, boundary) = setup();
	let queue = OperationQueue::new();
	queue.push(jump(10), &boundary);
	assert_eq!(queue.pop(&boundary), PopOutcome::NotApplicable);
	assert!(queue.is_empty());
}

#[test]
fn stale_token_never_reaches_slot() {
	let (host, boundary) = setup();
	let queue = OperationQueue::new();
	let coordinator = RequestCoordinator::new();
	let stale = coordinator.begin();
	let live = coordinator.begin();

	queue.push(jump(0), &boundary);
	host.take_calls();
	assert!(!queue.push_if_current(jump(1), &stale, &boundary));
	assert!(host.calls().is_empty());
	assert_eq!(target(queue.peek()), Some(0));

	assert!(queue.push_if_current(jump(2), &live, &boundary));
	assert_eq!(target(queue.peek()), Some(2));
}

#[test]
fn clear_discards_without_commit() {
	let (host, boundary) = setup();
	let queue = OperationQueue::new();
	queue.push(jump(1), &boundary);
	host.take_calls();

	assert_eq!(target(queue.clear(&boundary)), Some(1));
	assert_eq!(host.calls(), vec![HostCall::Clear(PreviewCommand::ClearJumpSign)]);
	assert!(queue.clear(&boundary).is_none());
	assert_eq!(host.cursor(), RawPosition::new(1, 0));
}
