use std::collections::VecDeque;

use cursortab_primitives::BufferId;

/// Bounded window of recent committed edits for the active buffer.
///
/// Switching to another buffer drops the window and restarts the version
/// counter; only one buffer is tracked at a time.
#[derive(Debug, Clone)]
pub struct DiffHistory {
	entries: VecDeque<String>,
	capacity: usize,
	buffer: Option<BufferId>,
	version: u64,
}

impl DiffHistory {
	pub fn new(capacity: usize) -> Self {
		Self {
			entries: VecDeque::with_capacity(capacity),
			capacity,
			buffer: None,
			version: 0,
		}
	}

	/// Makes `buffer` the active one. Returns `true` if it changed.
	pub fn observe(&mut self, buffer: BufferId) -> bool {
		if self.buffer == Some(buffer) {
			return false;
		}
		tracing::debug!(%buffer, dropped = self.entries.len(), "history.buffer_changed");
		self.buffer = Some(buffer);
		self.entries.clear();
		self.version = 0;
		true
	}

	/// Appends a committed edit and bumps the version.
	pub fn record(&mut self, entry: String) {
		self.version += 1;
		if entry.is_empty() || self.capacity == 0 {
			return;
		}
		if self.entries.len() == self.capacity {
			self.entries.pop_front();
		}
		self.entries.push_back(entry);
	}

	/// Entries, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.entries.iter().cloned().collect()
	}

	pub fn version(&self) -> u64 {
		self.version
	}

	pub fn buffer(&self) -> Option<BufferId> {
		self.buffer
	}
}
