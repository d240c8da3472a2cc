//! Virtual buffers: a one-pass line index over an immutable [`Snapshot`],
//! single-line change classification, and range-scoped patch views.
//!
//! Every index here is zero-based. Callers holding foreign coordinates must
//! convert them with [`cursortab_primitives::Convention`] before asking a
//! buffer for a line.

mod buffer;
mod compare;
mod patch;

pub use buffer::VirtualBuffer;
pub use compare::{LineClassification, common_prefix_len, common_suffix_len, compare_line, tail_difference};
pub use cursortab_primitives::Snapshot;
pub use patch::PatchView;
