//! The editor-facing half of the speculative-edit pipeline.
//!
//! A [`Session`] reads one [`Snapshot`](cursortab_primitives::Snapshot) per
//! trigger, fetches a suggestion from a [`CompletionService`] on a worker task,
//! turns it into a [`PendingOperation`] and parks it in the single-slot
//! [`OperationQueue`], which renders its preview through the [`EditorHost`].
//! Accepting pops the slot, commits, and chains the next prediction.
//!
//! Editor and service coordinates are converted only in [`boundary`].

pub mod boundary;
mod config;
mod coordinator;
mod error;
mod history;
mod host;
mod operation;
mod queue;
mod service;
mod session;

pub use config::SessionConfig;
pub use coordinator::{RequestCoordinator, RequestToken, TriggerClass};
pub use error::{ConfigError, FetchError, HostError, ServiceError};
pub use history::DiffHistory;
pub use host::{EditorHost, PreviewCommand};
pub use operation::{CommitOutcome, CursorJump, PendingOperation, TextPatch};
pub use queue::{OperationQueue, PopOutcome};
pub use service::{ChunkStream, CompletionChunk, CompletionRequest, CompletionService, IntentTag, ReplaceRange, RequestKind};
pub use session::{Accepted, Session, Trigger};

#[cfg(test)]
mod testing;
