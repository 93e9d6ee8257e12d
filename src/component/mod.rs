/* src/component/mod.rs */

//!
//! The suspense component: activation, fallback debouncing, teardown.

use tokio::task::AbortHandle;

/// Handles for everything activation registered. Released exactly once,
/// at teardown.
pub(crate) struct ObservationHandle {
	/// Observer task; `None` for an immediate source, which settles
	/// synchronously and has no ongoing observation.
	pub(crate) observer: Option<AbortHandle>,
	pub(crate) debounce: AbortHandle,
}

impl ObservationHandle {
	/// Aborting a finished task is a no-op, so release tolerates tasks
	/// that already ran to completion.
	pub(crate) fn release(self) {
		self.debounce.abort();
		if let Some(observer) = self.observer {
			observer.abort();
		}
	}
}

mod builder;
mod error;
mod observe;
mod suspense;

pub use builder::SuspenseBuilder;
pub use error::SuspenseError;
pub use suspense::{DEFAULT_FALLBACK_DELAY, Suspense};
