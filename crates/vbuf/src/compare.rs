/// Minimal description of how one line changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClassification {
	/// The candidate is the base with `suffix` appended. An empty suffix means
	/// the line is unchanged.
	Continuation(String),
	/// Text was inserted in the middle, everything around it is identical.
	InlineContinuation(String),
	/// No partial description applies; the whole candidate line replaces the base.
	Replacement(String),
}

impl LineClassification {
	/// Returns `true` for `Continuation("")`.
	pub fn is_unchanged(&self) -> bool {
		matches!(self, Self::Continuation(s) if s.is_empty())
	}

	/// Text carried by the classification.
	pub fn text(&self) -> &str {
		match self {
			Self::Continuation(s) | Self::InlineContinuation(s) | Self::Replacement(s) => s,
		}
	}
}

/// Classifies the change from `base` to `candidate`.
pub fn compare_line(base: &str, candidate: &str) -> LineClassification {
	if base == candidate {
		return LineClassification::Continuation(String::new());
	}
	if base.is_empty() {
		return LineClassification::Continuation(candidate.to_owned());
	}
	if let Some(suffix) = candidate.strip_prefix(base) {
		return LineClassification::Continuation(suffix.to_owned());
	}

	let prefix = common_prefix_len(base, candidate);
	let suffix = common_suffix_len(base, candidate, prefix);
	let mid_base = &base[prefix..base.len() - suffix];
	let mid_candidate = &candidate[prefix..candidate.len() - suffix];

	if mid_base.is_empty() && !mid_candidate.is_empty() {
		LineClassification::InlineContinuation(mid_candidate.to_owned())
	} else {
		LineClassification::Replacement(candidate.to_owned())
	}
}

/// Byte length of the longest common prefix, always on a char boundary of both.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
	a.char_indices()
		.zip(b.chars())
		.find(|((_, ca), cb)| ca != cb)
		.map_or(a.len().min(b.len()), |((i, _), _)| i)
}

/// Byte length of the longest common suffix of `a[prefix..]` and `b[prefix..]`.
///
/// Bounded by the text after `prefix`, so prefix and suffix never overlap.
pub fn common_suffix_len(a: &str, b: &str, prefix: usize) -> usize {
	a[prefix..]
		.chars()
		.rev()
		.zip(b[prefix..].chars().rev())
		.take_while(|(ca, cb)| ca == cb)
		.map(|(c, _)| c.len_utf8())
		.sum()
}

/// Returns the tail of `other` after its common prefix with `base`.
///
/// `("Hello, ", "Hello, world!")` gives `"world!"`.
pub fn tail_difference<'a>(base: &str, other: &'a str) -> &'a str {
	&other[common_prefix_len(base, other)..]
}
