use std::sync::Arc;

use crate::state::{Presence, StateCell};

#[cfg(feature = "stream")]
use futures_util::StreamExt;

#[cfg(feature = "cell")]
use crate::source::CellWatcher;
use crate::source::DynDeferred;
#[cfg(feature = "stream")]
use crate::source::DynStream;

/// Drains a stream for the life of the instance. Only the first
/// qualifying item settles the render state; later items are observed
/// and discarded at the settlement boundary.
#[cfg(feature = "stream")]
pub(crate) async fn drive_stream<T, E>(mut stream: DynStream<T, E>, state: StateCell<T, E>)
where
	T: Presence + Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	while let Some(item) = stream.next().await {
		match item {
			Ok(value) => {
				state.try_resolve(Arc::new(value));
			}
			Err(error) => {
				state.try_fail(Arc::new(error));
			}
		}
	}
}

/// Awaits a deferred result once. A deferred resolves or rejects at most
/// once, so no guarding beyond the settlement cell is needed.
pub(crate) async fn drive_deferred<T, E>(future: DynDeferred<T, E>, state: StateCell<T, E>)
where
	T: Presence + Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	match future.await {
		Ok(value) => {
			state.try_resolve(Arc::new(value));
		}
		Err(error) => {
			state.try_fail(Arc::new(error));
		}
	}
}

/// One read of the cell, routed through the settlement guards. A failed
/// read settles as failed; a present value settles as resolved.
#[cfg(feature = "cell")]
pub(crate) fn read_cell<T, E>(watcher: &CellWatcher<T, E>, state: &StateCell<T, E>)
where
	T: Presence,
{
	match watcher.read() {
		Ok(value) => {
			state.try_resolve(value);
		}
		Err(error) => {
			state.try_fail(error);
		}
	}
}

/// Re-reads the cell on every invalidation until the instance is torn
/// down or every cell handle is gone.
#[cfg(feature = "cell")]
pub(crate) async fn drive_cell<T, E>(mut watcher: CellWatcher<T, E>, state: StateCell<T, E>)
where
	T: Presence + Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	while watcher.invalidated().await {
		read_cell(&watcher, &state);
	}
}
