//! Word and character refinement of changed line groups.

use crate::lcs::diff_tokens;
use crate::part::merge_same_kind;
use crate::{DiffKind, DiffPart, line_diff};

/// Longest side, in chars, the fine diffs accept before falling back to a
/// whole-string replacement.
pub const MAX_FINE_DIFF_LEN: usize = 2000;

/// The same line diff refined at two granularities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordAndCharDiffs {
	/// Changed runs split into identifier, whitespace and punctuation tokens.
	pub word: Vec<DiffPart>,
	/// Changed runs split into single chars.
	pub char: Vec<DiffPart>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
	Word,
	Space,
	Single,
}

fn class_of(c: char) -> TokenClass {
	if c.is_alphanumeric() || c == '_' {
		TokenClass::Word
	} else if c.is_whitespace() && c != '\n' {
		TokenClass::Space
	} else {
		TokenClass::Single
	}
}

/// Splits into identifier runs, whitespace runs, and single other chars.
/// Line breaks are always their own token.
fn words(text: &str) -> Vec<&str> {
	let mut out = Vec::new();
	let mut start = 0;
	let mut prev: Option<TokenClass> = None;
	for (i, c) in text.char_indices() {
		let class = class_of(c);
		if let Some(p) = prev
			&& (p != class || class == TokenClass::Single)
		{
			out.push(&text[start..i]);
			start = i;
		}
		prev = Some(class);
	}
	if start < text.len() {
		out.push(&text[start..]);
	}
	out
}

fn chars(text: &str) -> Vec<&str> {
	text.char_indices().map(|(i, c)| &text[i..i + c.len_utf8()]).collect()
}

fn guarded(old: &str, new: &str, max_len: usize, tokenize: fn(&str) -> Vec<&str>) -> Vec<DiffPart> {
	let (old_len, new_len) = (old.chars().count(), new.chars().count());
	if old_len > max_len || new_len > max_len {
		tracing::warn!(old_len, new_len, max_len, "diff.refine.oversized");
		return vec![DiffPart::removed(old), DiffPart::added(new)];
	}

	let (old_tokens, new_tokens) = (tokenize(old), tokenize(new));
	let tokens = diff_tokens(&old_tokens, &new_tokens);
	let mut parts = merge_same_kind(tokens.into_iter().map(|(kind, t)| (kind, *t)), "");
	parts.retain(|p| !p.value.is_empty());
	parts
}

/// Word-granularity diff of `old` against `new`.
///
/// If either side is longer than `max_len` chars the result is always the
/// pair `[Removed(old), Added(new)]`, even when one side is empty.
pub fn word_diff(old: &str, new: &str, max_len: usize) -> Vec<DiffPart> {
	guarded(old, new, max_len, words)
}

/// Character-granularity diff of `old` against `new`.
pub fn char_diff(old: &str, new: &str, max_len: usize) -> Vec<DiffPart> {
	guarded(old, new, max_len, chars)
}

/// Line-diffs `base` against `candidate`, then re-diffs every run of
/// adjacent changed parts at word and char granularity.
///
/// Kept parts pass through to both outputs unchanged.
pub fn refine(base: &str, candidate: &str, max_len: usize) -> WordAndCharDiffs {
	let mut out = WordAndCharDiffs::default();
	let mut removed = String::new();
	let mut added = String::new();

	let flush = |out: &mut WordAndCharDiffs, removed: &mut String, added: &mut String| {
		if removed.is_empty() && added.is_empty() {
			return;
		}
		let non_empty = |p: &DiffPart| !p.value.is_empty();
		out.word.extend(word_diff(removed, added, max_len).into_iter().filter(non_empty));
		out.char.extend(char_diff(removed, added, max_len).into_iter().filter(non_empty));
		removed.clear();
		added.clear();
	};

	for part in line_diff(base, candidate) {
		match part.kind {
			DiffKind::Removed => removed.push_str(&part.value),
			DiffKind::Added => added.push_str(&part.value),
			DiffKind::Kept => {
				flush(&mut out, &mut removed, &mut added);
				out.word.push(part.clone());
				out.char.push(part);
			}
		}
	}
	flush(&mut out, &mut removed, &mut added);
	out
}
