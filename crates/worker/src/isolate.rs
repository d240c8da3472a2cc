use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::TaskClass;

/// Extracts the message of a `&str` or `String` panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
	payload
		.downcast_ref::<&'static str>()
		.map(|s| (*s).to_owned())
		.or_else(|| payload.downcast_ref::<String>().cloned())
}

/// Awaits `fut`, converting a panic into `None`.
///
/// The panic is logged with `name` and never unwinds past this call, so the
/// caller's own state (queues, locks held by the caller) stays usable.
pub async fn run_isolated<F>(name: &'static str, fut: F) -> Option<F::Output>
where
	F: Future,
{
	match AssertUnwindSafe(fut).catch_unwind().await {
		Ok(out) => Some(out),
		Err(payload) => {
			let msg = panic_message(payload.as_ref()).unwrap_or_else(|| "<unknown panic>".to_string());
			tracing::error!(task = name, panic = %msg, "worker.isolated.panicked");
			None
		}
	}
}

/// Spawns `fut` with [`run_isolated`] semantics.
pub fn spawn_isolated<F>(class: TaskClass, name: &'static str, fut: F) -> JoinHandle<Option<F::Output>>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	crate::spawn(class, name, run_isolated(name, fut))
}
