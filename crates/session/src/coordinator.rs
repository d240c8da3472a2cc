//! Cancel-and-replace bookkeeping for in-flight fetches.

use std::sync::Arc;

use cursortab_worker::{GenerationClock, GenerationToken};
use futures::StreamExt;
use parking_lot::Mutex;
use tokio::sync::OwnedMutexGuard;

use crate::{CompletionChunk, CompletionRequest, CompletionService, FetchError, ReplaceRange};

/// Cancellation handle of one fetch.
pub type RequestToken = GenerationToken;

/// Triggers that may start concurrently with each other, but not with
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerClass {
	/// Edits and manual requests.
	Typing,
	/// Predictions chained after an accept.
	Chain,
}

impl TriggerClass {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Typing => "typing",
			Self::Chain => "chain",
		}
	}
}

/// Owns the one active [`RequestToken`] and the per-class start gates.
#[derive(Debug, Default)]
pub struct RequestCoordinator {
	clock: GenerationClock,
	active: Mutex<Option<RequestToken>>,
	typing: Arc<tokio::sync::Mutex<()>>,
	chain: Arc<tokio::sync::Mutex<()>>,
}

impl RequestCoordinator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Cancels the active token, then mints and stores a fresh one.
	pub fn begin(&self) -> RequestToken {
		let mut active = self.active.lock();
		if let Some(previous) = active.take() {
			previous.cancel();
			tracing::trace!(generation = previous.generation(), "coordinator.superseded");
		}
		let token = self.clock.token();
		tracing::trace!(generation = token.generation(), "coordinator.begin");
		*active = Some(token.clone());
		token
	}

	/// Cancels the active token without starting a new fetch.
	pub fn cancel(&self) {
		if let Some(previous) = self.active.lock().take() {
			previous.cancel();
			tracing::trace!(generation = previous.generation(), "coordinator.cancel");
		}
	}

	/// Non-blocking acquisition of the gate for `class`. `None` means a trigger
	/// of that class is still starting and this one should be dropped.
	pub fn try_gate(&self, class: TriggerClass) -> Option<OwnedMutexGuard<()>> {
		let gate = match class {
			TriggerClass::Typing => &self.typing,
			TriggerClass::Chain => &self.chain,
		};
		match Arc::clone(gate).try_lock_owned() {
			Ok(guard) => Some(guard),
			Err(_) => {
				tracing::debug!(class = class.as_str(), "coordinator.gate.contended");
				None
			}
		}
	}
}

/// Response state folded from a chunk stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Streamed {
	pub text: String,
	pub range: Option<ReplaceRange>,
	pub suggestion_start_line: u32,
	pub target_line: Option<u32>,
	pub out_of_range: bool,
}

impl Streamed {
	/// Folds one chunk in; returns `true` once the stream reports done.
	fn absorb(&mut self, chunk: CompletionChunk) -> bool {
		self.text.push_str(&chunk.text);
		if chunk.replace_range.is_some() {
			self.range = chunk.replace_range;
		}
		if let Some(start) = chunk.suggestion_start_line {
			self.suggestion_start_line = start;
		}
		if chunk.target_line.is_some() {
			self.target_line = chunk.target_line;
		}
		self.out_of_range = chunk.out_of_range;
		chunk.done
	}
}

/// Sends `request` and folds the response, checking `token` before every unit.
///
/// Anything received after cancellation is discarded.
pub(crate) async fn consume(service: &dyn CompletionService, request: CompletionRequest, token: &RequestToken) -> Result<Streamed, FetchError> {
	let mut stream = tokio::select! {
		biased;
		_ = token.cancelled() => return Err(FetchError::Cancelled),
		stream = service.request(request) => stream?,
	};

	let mut streamed = Streamed::default();
	let mut chunks = 0usize;
	loop {
		let next = tokio::select! {
			biased;
			_ = token.cancelled() => return Err(FetchError::Cancelled),
			next = stream.next() => next,
		};
		let Some(chunk) = next else { break };
		chunks += 1;
		if streamed.absorb(chunk?) {
			break;
		}
	}

	if token.is_cancelled() {
		return Err(FetchError::Cancelled);
	}
	tracing::trace!(generation = token.generation(), chunks, bytes = streamed.text.len(), "coordinator.consumed");
	Ok(streamed)
}
