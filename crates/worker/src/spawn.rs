use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// How urgently a spawned fetch matters to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Started by a keystroke; the user is waiting on its preview.
	Interactive,
	/// Chained after an accept; may be superseded before anyone looks at it.
	Background,
}

impl TaskClass {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Interactive => "interactive",
			Self::Background => "background",
		}
	}
}

/// The ambient runtime, or a small process-wide fallback when called from a
/// plain thread such as an editor RPC callback.
fn runtime_handle() -> Handle {
	if let Ok(handle) = Handle::try_current() {
		return handle;
	}

	static FALLBACK: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	FALLBACK
		.get_or_init(|| {
			tracing::debug!("worker.fallback_runtime.start");
			tokio::runtime::Builder::new_multi_thread()
				.enable_all()
				.worker_threads(2)
				.thread_name("cursortab-fetch")
				.build()
				.expect("failed to build cursortab fallback runtime")
		})
		.handle()
		.clone()
}

/// Spawns `fut` inside a `worker.task` span carrying its class and name.
pub fn spawn<F>(class: TaskClass, name: &'static str, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	let span = tracing::debug_span!("worker.task", class = class.as_str(), task = name);
	tracing::trace!(parent: &span, "worker.spawn");
	runtime_handle().spawn(fut.instrument(span))
}
