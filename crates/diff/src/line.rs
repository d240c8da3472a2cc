use crate::lcs::diff_tokens;
use crate::part::merge_same_kind;
use crate::{DiffKind, DiffPart};

/// Both sides split into lines with their common leading run removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedLines<'a> {
	/// Base lines after the common prefix.
	pub base: Vec<&'a str>,
	/// Candidate lines after the common prefix.
	pub candidate: Vec<&'a str>,
	/// The skipped common lines.
	pub common: Vec<&'a str>,
}

impl TrimmedLines<'_> {
	/// Number of leading lines both sides share.
	pub fn skipped(&self) -> usize {
		self.common.len()
	}
}

/// Splits both texts on `\n` and skips their common leading lines.
pub fn split_and_trim<'a>(base: &'a str, candidate: &'a str) -> TrimmedLines<'a> {
	let base_lines: Vec<&str> = base.split('\n').collect();
	let candidate_lines: Vec<&str> = candidate.split('\n').collect();
	let skipped = base_lines.iter().zip(&candidate_lines).take_while(|(a, b)| a == b).count();

	TrimmedLines {
		common: base_lines[..skipped].to_vec(),
		base: base_lines[skipped..].to_vec(),
		candidate: candidate_lines[skipped..].to_vec(),
	}
}

/// Line-level diff of `base` against `candidate`.
///
/// Kept and removed values concatenate to `base`; kept and added values
/// concatenate to `candidate`. No returned part is empty.
pub fn line_diff(base: &str, candidate: &str) -> Vec<DiffPart> {
	let mut trimmed = split_and_trim(base, candidate);
	let mut out = Vec::new();

	if trimmed.skipped() > 0 {
		let mut head = trimmed.common.join("\n");
		match (trimmed.base.is_empty(), trimmed.candidate.is_empty()) {
			(false, false) => head.push('\n'),
			// One side ran out: give the other a leading empty line so the
			// separator after the common block is owned by that side.
			(false, true) => trimmed.base.insert(0, ""),
			(true, false) => trimmed.candidate.insert(0, ""),
			(true, true) => {}
		}
		out.push(DiffPart::kept(head));
	}

	let tokens = diff_tokens(&trimmed.base, &trimmed.candidate);
	let merged = merge_same_kind(tokens.into_iter().map(|(kind, line)| (kind, *line)), "\n");
	out.extend(fix_line_boundaries(merged));
	out.retain(|p| !p.value.is_empty());
	out
}

/// Reinserts the line breaks lost when lines were split into tokens.
///
/// A removed block owns a trailing break when some later block is not an
/// addition, an added block when some later block is not a removal. A kept
/// block owns one when both exist; when only one exists, that block receives
/// a leading break instead.
fn fix_line_boundaries(mut parts: Vec<DiffPart>) -> Vec<DiffPart> {
	for i in 0..parts.len().saturating_sub(1) {
		let next_non_added = (i + 1..parts.len()).find(|&j| parts[j].kind != DiffKind::Added);
		let next_non_removed = (i + 1..parts.len()).find(|&j| parts[j].kind != DiffKind::Removed);

		match parts[i].kind {
			DiffKind::Removed => {
				if next_non_added.is_some() {
					parts[i].value.push('\n');
				}
			}
			DiffKind::Added => {
				if next_non_removed.is_some() {
					parts[i].value.push('\n');
				}
			}
			DiffKind::Kept => match (next_non_added, next_non_removed) {
				(Some(_), Some(_)) => parts[i].value.push('\n'),
				(Some(j), None) | (None, Some(j)) => parts[j].value.insert(0, '\n'),
				(None, None) => {}
			},
		}
	}
	parts.retain(|p| !p.value.is_empty());
	parts
}
