//! Worker primitives: task classes, runtime-aware spawning, generation
//! tokens for cancel-and-replace work, and panic isolation.

mod isolate;
mod spawn;
mod token;

pub use isolate::{run_isolated, spawn_isolated};
pub use spawn::{TaskClass, spawn};
pub use token::{GenerationClock, GenerationToken};
