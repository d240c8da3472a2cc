//! Core types shared by the speculative-edit pipeline: positions, coordinate
//! conventions, line ranges and immutable buffer snapshots.

/// Zero-based positions and conversion to foreign index conventions.
pub mod coords;
/// Identifier types for editor entities.
pub mod ids;
/// Half-open line ranges.
pub mod range;
/// Immutable text snapshots captured once per trigger.
pub mod snapshot;

pub use coords::{Base, Convention, Position, RawPosition};
pub use ids::{BufferId, WindowId};
pub use range::LineRange;
pub use snapshot::Snapshot;
