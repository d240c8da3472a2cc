/// Which side of a diff a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
	/// Present in both base and candidate.
	Kept,
	/// Only in the candidate.
	Added,
	/// Only in the base.
	Removed,
}

/// One contiguous run of text with a single [`DiffKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPart {
	/// Text of the run, including any line breaks it owns.
	pub value: String,
	/// Side the run belongs to.
	pub kind: DiffKind,
}

impl DiffPart {
	/// Creates a part.
	pub fn new(kind: DiffKind, value: impl Into<String>) -> Self {
		Self { value: value.into(), kind }
	}

	/// Creates a kept part.
	pub fn kept(value: impl Into<String>) -> Self {
		Self::new(DiffKind::Kept, value)
	}

	/// Creates an added part.
	pub fn added(value: impl Into<String>) -> Self {
		Self::new(DiffKind::Added, value)
	}

	/// Creates a removed part.
	pub fn removed(value: impl Into<String>) -> Self {
		Self::new(DiffKind::Removed, value)
	}

	/// Returns `true` for added and removed parts.
	#[inline]
	pub fn is_change(&self) -> bool {
		self.kind != DiffKind::Kept
	}
}

/// Concatenates kept and removed parts, which yields the base text.
pub fn reconstruct_base(parts: &[DiffPart]) -> String {
	parts.iter().filter(|p| p.kind != DiffKind::Added).map(|p| p.value.as_str()).collect()
}

/// Concatenates kept and added parts, which yields the candidate text.
pub fn reconstruct_candidate(parts: &[DiffPart]) -> String {
	parts.iter().filter(|p| p.kind != DiffKind::Removed).map(|p| p.value.as_str()).collect()
}

/// Coalesces consecutive parts of the same kind, joining their values with `sep`.
pub(crate) fn merge_same_kind<'a>(tokens: impl IntoIterator<Item = (DiffKind, &'a str)>, sep: &str) -> Vec<DiffPart> {
	let mut merged: Vec<DiffPart> = Vec::new();
	for (kind, value) in tokens {
		match merged.last_mut() {
			Some(last) if last.kind == kind => {
				last.value.push_str(sep);
				last.value.push_str(value);
			}
			_ => merged.push(DiffPart::new(kind, value)),
		}
	}
	merged
}
