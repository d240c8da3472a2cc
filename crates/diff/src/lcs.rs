//! Longest-common-subsequence table and backtrack, generic over tokens.
//!
//! Lines, words and characters all go through the same two functions.

use crate::DiffKind;

/// Dense `(rows + 1) x (cols + 1)` LCS length table.
pub(crate) struct LcsTable {
	cols: usize,
	cells: Vec<u32>,
}

impl LcsTable {
	/// Fills the table with the standard recurrence.
	pub fn build<T: PartialEq>(base: &[T], candidate: &[T]) -> Self {
		let cols = candidate.len() + 1;
		let mut cells = vec![0u32; (base.len() + 1) * cols];
		for r in 1..=base.len() {
			for c in 1..=candidate.len() {
				cells[r * cols + c] = if base[r - 1] == candidate[c - 1] {
					cells[(r - 1) * cols + c - 1] + 1
				} else {
					cells[(r - 1) * cols + c].max(cells[r * cols + c - 1])
				};
			}
		}
		Self { cols, cells }
	}

	#[inline]
	fn at(&self, r: usize, c: usize) -> u32 {
		self.cells[r * self.cols + c]
	}
}

/// Walks the table from the last cell back to the origin.
///
/// When an insertion and a deletion tie, the insertion is taken first (it
/// ends up later in the output), which keeps runs of inserted tokens
/// contiguous after a run of deleted ones.
pub(crate) fn backtrack<'a, T: PartialEq>(table: &LcsTable, base: &'a [T], candidate: &'a [T]) -> Vec<(DiffKind, &'a T)> {
	let mut out = Vec::with_capacity(base.len() + candidate.len());
	let (mut r, mut c) = (base.len(), candidate.len());
	while r > 0 || c > 0 {
		if r > 0 && c > 0 && base[r - 1] == candidate[c - 1] {
			out.push((DiffKind::Kept, &base[r - 1]));
			r -= 1;
			c -= 1;
		} else if c > 0 && (r == 0 || table.at(r, c - 1) >= table.at(r - 1, c)) {
			out.push((DiffKind::Added, &candidate[c - 1]));
			c -= 1;
		} else {
			out.push((DiffKind::Removed, &base[r - 1]));
			r -= 1;
		}
	}
	out.reverse();
	out
}

/// Diffs two token sequences.
pub(crate) fn diff_tokens<'a, T: PartialEq>(base: &'a [T], candidate: &'a [T]) -> Vec<(DiffKind, &'a T)> {
	let table = LcsTable::build(base, candidate);
	backtrack(&table, base, candidate)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn table_holds_lcs_length() {
		let a = ["a", "b", "c", "d"];
		let b = ["a", "c", "x", "d"];
		let t = LcsTable::build(&a, &b);
		assert_eq!(t.at(4, 4), 3);
	}

	#[test]
	fn backtrack_orders_removal_before_insertion() {
		let a = ["a", "b", "c"];
		let b = ["a", "x", "c"];
		let kinds: Vec<_> = diff_tokens(&a, &b).into_iter().map(|(k, t)| (k, *t)).collect();
		assert_eq!(
			kinds,
			vec![
				(DiffKind::Kept, "a"),
				(DiffKind::Removed, "b"),
				(DiffKind::Added, "x"),
				(DiffKind::Kept, "c"),
			]
		);
	}

	#[test]
	fn empty_sides() {
		let empty: [&str; 0] = [];
		assert!(diff_tokens(&empty, &empty).is_empty());
		let only_added = diff_tokens(&empty, &["x", "y"]);
		assert!(only_added.iter().all(|(k, _)| *k == DiffKind::Added));
		assert_eq!(only_added.len(), 2);
	}
}
