//! In-memory collaborators for tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use cursortab_primitives::{BufferId, RawPosition, WindowId};
use futures::StreamExt;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::{ChunkStream, CompletionChunk, CompletionRequest, CompletionService, EditorHost, HostError, PreviewCommand, ServiceError};

/// Host call as recorded by [`FakeHost`], in editor coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
	Write { start: u32, end: u32, lines: Vec<String> },
	SetCursor(RawPosition),
	Preview(PreviewCommand),
	Clear(PreviewCommand),
	FeedKey(String),
}

/// Single-buffer editor using one-based lines and zero-based columns.
pub struct FakeHost {
	buffer: Mutex<(BufferId, String)>,
	lines: Mutex<Vec<String>>,
	cursor: Mutex<RawPosition>,
	calls: Mutex<Vec<HostCall>>,
}

impl FakeHost {
	pub fn new(lines: &[&str], cursor: RawPosition) -> Self {
		Self {
			buffer: Mutex::new((BufferId(1), "main.rs".to_string())),
			lines: Mutex::new(lines.iter().map(|l| l.to_string()).collect()),
			cursor: Mutex::new(cursor),
			calls: Mutex::new(Vec::new()),
		}
	}

	pub fn buffer(&self) -> BufferId {
		self.buffer.lock().0
	}

	pub fn switch_buffer(&self, id: BufferId, path: &str, lines: &[&str]) {
		*self.buffer.lock() = (id, path.to_string());
		*self.lines.lock() = lines.iter().map(|l| l.to_string()).collect();
	}

	/// Simulates the user typing: replaces the text without recording a call.
	pub fn set_lines(&self, lines: &[&str]) {
		*self.lines.lock() = lines.iter().map(|l| l.to_string()).collect();
	}

	pub fn lines(&self) -> Vec<String> {
		self.lines.lock().clone()
	}

	pub fn cursor(&self) -> RawPosition {
		*self.cursor.lock()
	}

	pub fn move_cursor(&self, cursor: RawPosition) {
		*self.cursor.lock() = cursor;
	}

	pub fn calls(&self) -> Vec<HostCall> {
		self.calls.lock().clone()
	}

	pub fn take_calls(&self) -> Vec<HostCall> {
		std::mem::take(&mut *self.calls.lock())
	}

	fn record(&self, call: HostCall) {
		self.calls.lock().push(call);
	}
}

impl EditorHost for FakeHost {
	fn active_buffer(&self) -> Result<(BufferId, String), HostError> {
		Ok(self.buffer.lock().clone())
	}

	fn read_lines(&self, buffer: BufferId) -> Result<Vec<String>, HostError> {
		if buffer != self.buffer() {
			return Err(HostError::UnknownBuffer(buffer));
		}
		Ok(self.lines())
	}

	fn read_cursor(&self, _window: WindowId) -> Result<RawPosition, HostError> {
		Ok(self.cursor())
	}

	fn write_lines(&self, buffer: BufferId, start: u32, end_exclusive: u32, lines: &[String]) -> Result<(), HostError> {
		if buffer != self.buffer() {
			return Err(HostError::UnknownBuffer(buffer));
		}
		self.record(HostCall::Write {
			start,
			end: end_exclusive,
			lines: lines.to_vec(),
		});
		let mut current = self.lines.lock();
		let len = current.len();
		let start = (start.saturating_sub(1) as usize).min(len);
		let end = (end_exclusive.saturating_sub(1) as usize).clamp(start, len);
		current.splice(start..end, lines.iter().cloned());
		Ok(())
	}

	fn set_cursor(&self, _window: WindowId, position: RawPosition) -> Result<(), HostError> {
		self.record(HostCall::SetCursor(position));
		self.move_cursor(position);
		Ok(())
	}

	fn run_preview_script(&self, command: &PreviewCommand) -> Result<(), HostError> {
		self.record(HostCall::Preview(command.clone()));
		Ok(())
	}

	fn clear_preview_script(&self, command: &PreviewCommand) -> Result<(), HostError> {
		self.record(HostCall::Clear(command.clone()));
		Ok(())
	}

	fn feed_literal_key(&self, key: &str) -> Result<(), HostError> {
		self.record(HostCall::FeedKey(key.to_string()));
		Ok(())
	}
}

/// Scripted response for one request.
pub enum Reply {
	Chunks(Vec<Result<CompletionChunk, ServiceError>>),
	/// Waits for the gate before yielding the chunks.
	Gated(Arc<Notify>, Vec<Result<CompletionChunk, ServiceError>>),
	Fail(ServiceError),
	Panic,
}

/// Service answering requests from a queue of scripted replies.
#[derive(Default)]
pub struct FakeService {
	replies: Mutex<VecDeque<Reply>>,
	requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeService {
	pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
		Self {
			replies: Mutex::new(replies.into_iter().collect()),
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn push(&self, reply: Reply) {
		self.replies.lock().push_back(reply);
	}

	pub fn requests(&self) -> Vec<CompletionRequest> {
		self.requests.lock().clone()
	}
}

#[async_trait]
impl CompletionService for FakeService {
	async fn request(&self, request: CompletionRequest) -> Result<ChunkStream, ServiceError> {
		self.requests.lock().push(request);
		let reply = self.replies.lock().pop_front();
		match reply {
			None => Ok(futures::stream::empty().boxed()),
			Some(Reply::Chunks(chunks)) => Ok(futures::stream::iter(chunks).boxed()),
			Some(Reply::Gated(gate, chunks)) => Ok(futures::stream::once(async move {
				gate.notified().await;
				futures::stream::iter(chunks)
			})
			.flatten()
			.boxed()),
			Some(Reply::Fail(error)) => Err(error),
			Some(Reply::Panic) => panic!("scripted service panic"),
		}
	}
}

/// A completion replacing `start..=end` (one-based) with `text`.
pub fn completion(start: u32, end: u32, text: &str) -> Reply {
	Reply::Chunks(vec![Ok(CompletionChunk {
		text: text.to_string(),
		replace_range: Some(crate::ReplaceRange {
			start_line: start,
			end_line_inclusive: end,
		}),
		done: true,
		..CompletionChunk::default()
	})])
}

/// A cursor prediction targeting the one-based `line`.
pub fn jump(line: u32) -> Reply {
	Reply::Chunks(vec![Ok(CompletionChunk {
		target_line: Some(line),
		done: true,
		..CompletionChunk::default()
	})])
}

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}
