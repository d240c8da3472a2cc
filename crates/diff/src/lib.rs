//! Multi-granularity diffs between a buffer block and a proposed replacement.
//!
//! The pipeline, leaves first:
//! - [`line_diff`]: common-prefix trim, line-level LCS, same-kind merge and
//!   line-break fix-up. Concatenating the kept/removed parts reproduces the
//!   base and the kept/added parts reproduce the candidate.
//! - [`refine`]: adjacent removed/added groups re-diffed per word and per
//!   character, with an oversized-input guard.
//! - [`fold_regions`]: parts folded into in-line edits and whole inserted
//!   lines, positioned from the preceding unmodified text.
//! - [`apply_offset`]: regions shifted into buffer coordinates and checked
//!   against the live cursor.
//!
//! [`DiffEngine`] runs all of it with one set of options.

mod engine;
mod fold;
mod lcs;
mod line;
mod offset;
mod part;
mod refine;

pub use engine::{DiffEngine, DiffOptions, Granularity};
pub use fold::{EditRegions, InlineEdit, LineInsertion, fold_regions};
pub use line::{TrimmedLines, line_diff, split_and_trim};
pub use offset::{OffsetDiff, apply_offset};
pub use part::{DiffKind, DiffPart, reconstruct_base, reconstruct_candidate};
pub use refine::{MAX_FINE_DIFF_LEN, WordAndCharDiffs, char_diff, refine, word_diff};
