use std::sync::Arc;

use cursortab_diff::DiffEngine;
use cursortab_primitives::{LineRange, Snapshot, WindowId};
use cursortab_vbuf::{PatchView, VirtualBuffer};
use cursortab_worker::{TaskClass, spawn_isolated};
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::boundary::Boundary;
use crate::coordinator::{Streamed, consume};
use crate::{
	CommitOutcome, CompletionRequest, CompletionService, CursorJump, DiffHistory, EditorHost, FetchError, IntentTag, OperationQueue, PendingOperation,
	PopOutcome, RequestCoordinator, RequestKind, RequestToken, SessionConfig, TextPatch, TriggerClass,
};

/// Editor event that asks for a new suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
	/// The buffer changed under the cursor. Reported as a line change when
	/// the cursor moved to another line since the previous capture.
	Edit,
	/// The user asked explicitly.
	Manual,
	/// Any other reason, forwarded as is.
	Intent(IntentTag),
}

/// Result of [`Session::accept`].
#[derive(Debug)]
pub struct Accepted {
	pub outcome: PopOutcome,
	/// Prediction chained after a successful commit, if one was started.
	pub follow_up: Option<JoinHandle<Option<()>>>,
}

/// One editor's speculative-edit state. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Session {
	inner: Arc<Inner>,
}

struct Inner {
	config: SessionConfig,
	boundary: Boundary,
	service: Arc<dyn CompletionService>,
	engine: DiffEngine,
	queue: OperationQueue,
	coordinator: RequestCoordinator,
	history: Mutex<DiffHistory>,
	last_cursor_line: Mutex<Option<u32>>,
}

impl Session {
	pub fn new(config: SessionConfig, host: Arc<dyn EditorHost>, service: Arc<dyn CompletionService>) -> Self {
		let boundary = Boundary::new(host, config.editor_convention, config.service_convention);
		let engine = DiffEngine::new(config.diff_options());
		let history = DiffHistory::new(config.history_len);
		Self {
			inner: Arc::new(Inner {
				config,
				boundary,
				service,
				engine,
				queue: OperationQueue::new(),
				coordinator: RequestCoordinator::new(),
				history: Mutex::new(history),
				last_cursor_line: Mutex::new(None),
			}),
		}
	}

	pub fn config(&self) -> &SessionConfig {
		&self.inner.config
	}

	/// Shorthand for `trigger(Trigger::Edit)`.
	pub fn on_edit(&self) -> Option<JoinHandle<Option<()>>> {
		self.trigger(Trigger::Edit)
	}

	/// Starts a completion fetch for the current buffer and cursor.
	///
	/// The fetch in flight, if any, is cancelled and the pending suggestion is
	/// dropped. Returns `None` when the trigger was dropped: another typing
	/// trigger is starting concurrently, or the editor state could not be
	/// read. The returned task resolves to `None` only if the fetch panicked.
	pub fn trigger(&self, trigger: Trigger) -> Option<JoinHandle<Option<()>>> {
		let (snapshot, line_changed, token) = self.start(TriggerClass::Typing)?;
		let intent = match trigger {
			Trigger::Edit if line_changed => IntentTag::LineChange,
			Trigger::Edit => IntentTag::Typing,
			Trigger::Manual => IntentTag::ManualTrigger,
			Trigger::Intent(intent) => intent,
		};
		Some(self.spawn_fetch(token, RequestKind::Completion, intent, snapshot, TaskClass::Interactive))
	}

	/// Commits the pending operation and chains the next prediction.
	///
	/// With nothing to commit, the configured accept key is fed back to the
	/// editor so the keypress keeps its default meaning.
	pub fn accept(&self) -> Accepted {
		let outcome = self.inner.queue.pop(&self.inner.boundary);
		let follow_up = match &outcome {
			PopOutcome::Empty | PopOutcome::NotApplicable => {
				tracing::debug!(?outcome, key = %self.inner.config.accept_key, "session.accept.fallback");
				if let Err(error) = self.inner.boundary.feed_key(&self.inner.config.accept_key) {
					tracing::warn!(%error, "session.accept.feed_key_failed");
				}
				None
			}
			PopOutcome::Committed(CommitOutcome::Patched { history, .. }) => {
				self.inner.history.lock().record(history.clone());
				self.chain(RequestKind::CursorPrediction, IntentTag::LineChange)
			}
			PopOutcome::Committed(CommitOutcome::Jumped { .. }) => self.chain(RequestKind::Completion, IntentTag::CursorPrediction),
		};
		Accepted { outcome, follow_up }
	}

	/// Cancels the in-flight fetch and drops the pending operation.
	pub fn dismiss(&self) {
		self.inner.coordinator.cancel();
		if self.inner.queue.clear(&self.inner.boundary).is_some() {
			tracing::debug!("session.dismissed");
		}
	}

	/// Copy of the pending operation.
	pub fn pending(&self) -> Option<PendingOperation> {
		self.inner.queue.peek()
	}

	/// Diff history sent with the next request, oldest first.
	pub fn history(&self) -> Vec<String> {
		self.inner.history.lock().entries()
	}

	fn chain(&self, kind: RequestKind, intent: IntentTag) -> Option<JoinHandle<Option<()>>> {
		let (snapshot, _, token) = self.start(TriggerClass::Chain)?;
		Some(self.spawn_fetch(token, kind, intent, snapshot, TaskClass::Background))
	}

	/// Captures the editor and supersedes the previous fetch and suggestion.
	///
	/// The class gate is held only for these synchronous steps, so the next
	/// trigger always gets to cancel this one.
	fn start(&self, class: TriggerClass) -> Option<(Snapshot, bool, RequestToken)> {
		let _gate = self.inner.coordinator.try_gate(class)?;
		let (snapshot, line_changed) = self.capture()?;
		let token = self.inner.coordinator.begin();
		if self.inner.queue.clear(&self.inner.boundary).is_some() {
			tracing::debug!(generation = token.generation(), class = class.as_str(), "session.pending.superseded");
		}
		Some((snapshot, line_changed, token))
	}

	/// Reads the editor once. Also reports whether the cursor line moved
	/// since the previous capture.
	fn capture(&self) -> Option<(Snapshot, bool)> {
		let snapshot = match self.inner.boundary.capture(WindowId::CURRENT) {
			Ok(snapshot) => snapshot,
			Err(error) => {
				tracing::warn!(%error, "session.capture.failed");
				return None;
			}
		};
		let version = {
			let mut history = self.inner.history.lock();
			history.observe(snapshot.buffer());
			history.version()
		};
		let line = snapshot.cursor().line;
		let previous = self.inner.last_cursor_line.lock().replace(line);
		Some((snapshot.with_version(version), previous.is_some_and(|p| p != line)))
	}

	fn spawn_fetch(&self, token: RequestToken, kind: RequestKind, intent: IntentTag, snapshot: Snapshot, class: TaskClass) -> JoinHandle<Option<()>> {
		let request = self.request(kind, intent, &snapshot);
		tracing::debug!(generation = token.generation(), ?kind, %intent, "session.fetch.start");

		let session = self.clone();
		spawn_isolated(class, "session.fetch", async move {
			let generation = token.generation();
			match session.fetch(request, &snapshot, &token).await {
				Ok(op) => {
					if session.inner.queue.push_if_current(op, &token, &session.inner.boundary) {
						tracing::debug!(generation, "session.suggestion.ready");
					}
				}
				Err(FetchError::Cancelled) => tracing::trace!(generation, "session.fetch.cancelled"),
				Err(error @ (FetchError::EmptyResponse | FetchError::BeforeCursor { .. })) => {
					tracing::debug!(generation, %error, "session.fetch.discarded");
				}
				Err(error) => tracing::warn!(generation, %error, "session.fetch.failed"),
			}
		})
	}

	fn request(&self, kind: RequestKind, intent: IntentTag, snapshot: &Snapshot) -> CompletionRequest {
		CompletionRequest {
			kind,
			intent,
			text: snapshot.shared_text(),
			cursor: self.inner.boundary.service_cursor(snapshot.cursor()),
			path: Arc::from(snapshot.path()),
			version: snapshot.version(),
			diff_history: self.inner.history.lock().entries(),
			workspace_id: self.inner.config.workspace_id.clone(),
		}
	}

	async fn fetch(&self, request: CompletionRequest, snapshot: &Snapshot, token: &RequestToken) -> Result<PendingOperation, FetchError> {
		let kind = request.kind;
		let streamed = consume(self.inner.service.as_ref(), request, token).await?;
		match kind {
			RequestKind::Completion => self.text_patch(streamed, snapshot),
			RequestKind::CursorPrediction => self.cursor_jump(streamed, snapshot),
		}
	}

	fn text_patch(&self, streamed: Streamed, snapshot: &Snapshot) -> Result<PendingOperation, FetchError> {
		let range = streamed.range.ok_or(FetchError::EmptyResponse)?;
		let boundary = &self.inner.boundary;
		let range = LineRange::from_inclusive(
			boundary.service_line(range.start_line.saturating_add(streamed.suggestion_start_line)),
			boundary.service_line(range.end_line_inclusive),
		);
		let text = streamed.text.strip_suffix('\n').unwrap_or(&streamed.text);

		let patch = PatchView::new(VirtualBuffer::new(snapshot.clone()), text.to_owned(), range);
		if !patch.has_changes() {
			return Err(FetchError::EmptyResponse);
		}

		if self.inner.config.reject_edits_before_cursor {
			let base = patch.base();
			let block = range
				.lines()
				.take_while(|&line| (line as usize) < base.line_count())
				.map(|line| base.line(line as usize))
				.collect::<Vec<_>>()
				.join("\n");
			let checked = self.inner.engine.compute(&block, text, range.start, snapshot.cursor());
			if !checked.accepted {
				return Err(FetchError::BeforeCursor {
					line: snapshot.cursor().line,
				});
			}
		}

		Ok(PendingOperation::TextPatch(TextPatch {
			buffer: snapshot.buffer(),
			window: WindowId::CURRENT,
			patch,
		}))
	}

	fn cursor_jump(&self, streamed: Streamed, snapshot: &Snapshot) -> Result<PendingOperation, FetchError> {
		let target = streamed.target_line.ok_or(FetchError::EmptyResponse)?;
		let line_count = VirtualBuffer::new(snapshot.clone()).line_count();
		Ok(PendingOperation::CursorJump(CursorJump {
			window: WindowId::CURRENT,
			target_line: self.inner.boundary.service_line(target),
			out_of_range: streamed.out_of_range,
			line_count: u32::try_from(line_count).unwrap_or(u32::MAX),
		}))
	}
}
