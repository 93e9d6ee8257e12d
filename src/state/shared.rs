/* src/state/shared.rs */

use std::sync::Arc;

use tokio::sync::watch;

use super::{Presence, RenderState, ViewState};

/// Shared settlement cell.
///
/// Every observation path funnels into one of these. The cell enforces the
/// single-shot rule (only the first qualifying settle is kept), releases
/// the loading view when the debounce window elapses, and rejects every
/// transition once closed at teardown. Subscribers are notified only when
/// a transition actually happened.
pub(crate) struct StateCell<T, E> {
	tx: watch::Sender<ViewState<T, E>>,
}

impl<T, E> StateCell<T, E> {
	pub(crate) fn new() -> Self {
		Self {
			tx: watch::Sender::new(ViewState::new()),
		}
	}

	pub(crate) fn subscribe(&self) -> watch::Receiver<ViewState<T, E>> {
		self.tx.subscribe()
	}

	/// Attempts to settle with a value. The first qualifying settle wins;
	/// a value that is not present does not settle and the instance keeps
	/// waiting.
	pub(crate) fn try_resolve(&self, value: Arc<T>) -> bool
	where
		T: Presence,
	{
		let settled = self.tx.send_if_modified(|state| {
			if state.closed || !state.render.is_pending() || !value.is_present() {
				return false;
			}
			state.render = RenderState::Resolved(value);
			true
		});
		#[cfg(feature = "tracing")]
		if settled {
			tracing::trace!("render state resolved");
		}
		settled
	}

	/// Attempts to settle with an error. Errors settle regardless of any
	/// presence rule, but still only out of `Pending`.
	pub(crate) fn try_fail(&self, error: Arc<E>) -> bool {
		let settled = self.tx.send_if_modified(|state| {
			if state.closed || !state.render.is_pending() {
				return false;
			}
			state.render = RenderState::Failed(error);
			true
		});
		#[cfg(feature = "tracing")]
		if settled {
			tracing::trace!("render state failed");
		}
		settled
	}

	/// Releases the loading view. A no-op once settled or closed, so a
	/// timer firing after settlement never resurfaces the fallback.
	pub(crate) fn mark_fallback(&self) -> bool {
		let shown = self.tx.send_if_modified(|state| {
			if state.closed || state.fallback_visible || !state.render.is_pending() {
				return false;
			}
			state.fallback_visible = true;
			true
		});
		#[cfg(feature = "tracing")]
		if shown {
			tracing::trace!("fallback visible");
		}
		shown
	}

	/// Rejects every later transition. Teardown-only.
	pub(crate) fn close(&self) {
		self.tx.send_if_modified(|state| {
			if state.closed {
				return false;
			}
			state.closed = true;
			true
		});
	}
}

impl<T, E> Clone for StateCell<T, E> {
	fn clone(&self) -> Self {
		Self {
			tx: self.tx.clone(),
		}
	}
}
