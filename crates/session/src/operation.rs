//! The two kinds of speculative change and their preview, commit and clear
//! effects.

use std::fmt::Write as _;

use cursortab_primitives::{BufferId, LineRange, Position, WindowId};
use cursortab_vbuf::{LineClassification, PatchView, common_prefix_len, tail_difference};

use crate::PreviewCommand;
use crate::boundary::Boundary;

/// Move the cursor to a predicted line.
#[derive(Debug, Clone)]
pub struct CursorJump {
	pub window: WindowId,
	/// Zero-based target line.
	pub target_line: u32,
	/// The service flagged the target as outside the buffer.
	pub out_of_range: bool,
	/// Line count of the buffer the prediction was made against.
	pub line_count: u32,
}

impl CursorJump {
	fn is_reachable(&self) -> bool {
		!self.out_of_range && self.target_line < self.line_count
	}
}

/// Replace a line range with suggested text.
#[derive(Debug, Clone)]
pub struct TextPatch {
	pub buffer: BufferId,
	pub window: WindowId,
	pub patch: PatchView,
}

impl TextPatch {
	/// Lines touched by either side of the patch.
	fn footprint(&self) -> LineRange {
		let range = self.patch.range();
		let span = range.len().max(self.patch.replacement_line_count());
		LineRange::new(range.start, range.start.saturating_add(span))
	}

	fn preview_commands(&self) -> Vec<PreviewCommand> {
		let base = self.patch.base();
		self.patch
			.changed_lines()
			.filter_map(|line| {
				let classification = self.patch.classify_line(line)?;
				let current = base.line(line as usize);
				let past_end = line as usize >= base.line_count() || line >= self.patch.range().end;
				let command = if past_end {
					PreviewCommand::VirtualLine {
						line,
						text: self.patch.replacement_line(line)?.to_owned(),
					}
				} else {
					match classification {
						LineClassification::Continuation(text) => PreviewCommand::LineSuffix {
							line,
							column: char_len(current),
							text,
						},
						LineClassification::InlineContinuation(text) => {
							let candidate = self.patch.replacement_line(line)?;
							PreviewCommand::InlineInsert {
								line,
								column: char_len(&current[..common_prefix_len(current, candidate)]),
								text,
							}
						}
						LineClassification::Replacement(full) => {
							let column = char_len(&current[..common_prefix_len(current, &full)]);
							PreviewCommand::ReplaceTail {
								line,
								column,
								text: tail_difference(current, &full).to_owned(),
							}
						}
					}
				};
				Some(command)
			})
			.collect()
	}

	/// `true` when the replaced lines of `live` still read as they did when
	/// the patch was built.
	fn matches(&self, live: &[String]) -> bool {
		let base = self.patch.base();
		self.patch
			.range()
			.lines()
			.take_while(|&line| (line as usize) < base.line_count())
			.all(|line| live.get(line as usize).map(String::as_str) == Some(base.line(line)))
	}

	/// `"{n}-|old\n{n}+|new\n"` for every line the patch changes, `n` one-based.
	fn history_entry(&self) -> String {
		let base = self.patch.base();
		let range = self.patch.range();
		let mut entry = String::new();
		for line in self.footprint().lines() {
			let old = (line < range.end && (line as usize) < base.line_count()).then(|| base.line(line as usize));
			let new = self.patch.replacement_line(line);
			let n = line + 1;
			match (old, new) {
				(Some(old), Some(new)) if old == new => {}
				(Some(old), Some(new)) => {
					let _ = write!(entry, "{n}-|{old}\n{n}+|{new}\n");
				}
				(None, Some(new)) => {
					let _ = writeln!(entry, "{n}+|{new}");
				}
				(Some(old), None) => {
					let _ = writeln!(entry, "{n}-|{old}");
				}
				(None, None) => {}
			}
		}
		entry
	}
}

/// What a successful commit changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
	/// The cursor moved to `line`.
	Jumped { line: u32 },
	/// Lines were rewritten; `last_changed_line` is where the cursor now sits.
	Patched { last_changed_line: u32, history: String },
}

/// The single live speculative change.
#[derive(Debug, Clone)]
pub enum PendingOperation {
	CursorJump(CursorJump),
	TextPatch(TextPatch),
}

impl PendingOperation {
	/// Renders the visual hint.
	pub fn preview(&self, host: &Boundary) {
		match self {
			Self::CursorJump(jump) => {
				if jump.is_reachable() {
					host.preview(&PreviewCommand::PlaceJumpSign { line: jump.target_line });
				}
			}
			Self::TextPatch(patch) => {
				for command in patch.preview_commands() {
					host.preview(&command);
				}
			}
		}
	}

	/// Applies the change. `None` when it does not apply; the caller then
	/// forwards the user's keypress instead.
	pub fn commit(&self, host: &Boundary) -> Option<CommitOutcome> {
		match self {
			Self::CursorJump(jump) => {
				if !jump.is_reachable() {
					tracing::debug!(line = jump.target_line, out_of_range = jump.out_of_range, "operation.jump.unreachable");
					return None;
				}
				if let Err(error) = host.set_cursor(jump.window, Position::new(jump.target_line, 0)) {
					tracing::warn!(%error, "operation.jump.failed");
					return None;
				}
				Some(CommitOutcome::Jumped { line: jump.target_line })
			}
			Self::TextPatch(patch) => {
				let last_changed_line = patch.patch.last_changed_line()?;
				match host.read_lines(patch.buffer) {
					Ok(live) if patch.matches(&live) => {}
					Ok(_) => {
						tracing::debug!(range = ?patch.patch.range(), "operation.patch.stale");
						return None;
					}
					Err(error) => {
						tracing::warn!(%error, "operation.patch.read_failed");
						return None;
					}
				}
				let lines: Vec<String> = patch.patch.replacement_lines().into_iter().map(str::to_owned).collect();
				if let Err(error) = host.write_lines(patch.buffer, patch.patch.range(), &lines) {
					tracing::warn!(%error, "operation.patch.failed");
					return None;
				}
				let column = patch.patch.replacement_line(last_changed_line).map_or(0, char_len);
				if let Err(error) = host.set_cursor(patch.window, Position::new(last_changed_line, column)) {
					tracing::warn!(%error, "operation.patch.cursor_failed");
				}
				tracing::debug!(range = ?patch.patch.range(), last_changed_line, "operation.patch.committed");
				Some(CommitOutcome::Patched {
					last_changed_line,
					history: patch.history_entry(),
				})
			}
		}
	}

	/// Removes the visual hint. Safe to call repeatedly or without a prior preview.
	pub fn clear_preview(&self, host: &Boundary) {
		match self {
			Self::CursorJump(_) => host.clear_preview(&PreviewCommand::ClearJumpSign),
			Self::TextPatch(patch) => host.clear_preview(&PreviewCommand::ClearLines { range: patch.footprint() }),
		}
	}
}

fn char_len(s: &str) -> u32 {
	u32::try_from(s.chars().count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
