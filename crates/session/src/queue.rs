use parking_lot::Mutex;

use crate::boundary::Boundary;
use crate::{CommitOutcome, PendingOperation, RequestToken};

/// Result of [`OperationQueue::pop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopOutcome {
	/// Nothing was pending.
	Empty,
	/// The pending operation did not apply and was discarded.
	NotApplicable,
	Committed(CommitOutcome),
}

/// Single slot holding at most one [`PendingOperation`].
///
/// Every transition runs under one lock, so a push never interleaves with a
/// pop and the previous occupant's preview is always cleared before the next
/// one is rendered.
#[derive(Debug, Default)]
pub struct OperationQueue {
	slot: Mutex<Option<PendingOperation>>,
}

impl OperationQueue {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the occupant with `op` and renders its preview.
	pub fn push(&self, op: PendingOperation, host: &Boundary) {
		let mut slot = self.slot.lock();
		Self::replace(&mut slot, op, host);
	}

	/// Like [`Self::push`], but only while `token` is live.
	///
	/// The token is checked under the slot lock. Returns `false` and leaves the
	/// slot untouched when the token was cancelled.
	pub fn push_if_current(&self, op: PendingOperation, token: &RequestToken, host: &Boundary) -> bool {
		let mut slot = self.slot.lock();
		if token.is_cancelled() {
			tracing::debug!(generation = token.generation(), "queue.push.stale");
			return false;
		}
		Self::replace(&mut slot, op, host);
		true
	}

	/// Takes the occupant, clears its preview and commits it.
	pub fn pop(&self, host: &Boundary) -> PopOutcome {
		let mut slot = self.slot.lock();
		let Some(op) = slot.take() else {
			return PopOutcome::Empty;
		};
		op.clear_preview(host);
		match op.commit(host) {
			Some(outcome) => PopOutcome::Committed(outcome),
			None => PopOutcome::NotApplicable,
		}
	}

	/// Takes the occupant and clears its preview without committing.
	pub fn clear(&self, host: &Boundary) -> Option<PendingOperation> {
		let mut slot = self.slot.lock();
		let op = slot.take()?;
		op.clear_preview(host);
		Some(op)
	}

	/// Copy of the occupant.
	pub fn peek(&self) -> Option<PendingOperation> {
		self.slot.lock().clone()
	}

	pub fn is_empty(&self) -> bool {
		self.slot.lock().is_none()
	}

	fn replace(slot: &mut Option<PendingOperation>, op: PendingOperation, host: &Boundary) {
		if let Some(old) = slot.take() {
			old.clear_preview(host);
		}
		op.preview(host);
		*slot = Some(op);
	}
}

#[cfg(test)]
mod tests;
