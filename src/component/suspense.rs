/* src/component/suspense.rs */

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::source::Source;
use crate::state::{Presence, RenderState, Slot, StateCell, ViewState};

use super::builder::{Renderers, SuspenseBuilder};
use super::{ObservationHandle, observe};

/// Default debounce window before the loading view may appear.
///
/// Sources that settle faster than this never show a fallback, so fast
/// resolutions stay free of loading flicker while slower sources still
/// get visible feedback.
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(100);

/// Adapts one async source to a three-slot rendering contract.
///
/// An instance classifies its source once at activation, observes it
/// uniformly, and drives the active render slot: hidden, then (after the
/// debounce window) the loading fallback, then either the resolved
/// content or the error view. The first qualifying result is terminal;
/// later emissions from a multi-emission source are discarded at the
/// settlement boundary while the underlying observation stays attached
/// until teardown.
///
/// [`detach`](Self::detach) cancels the debounce timer and releases the
/// observation; dropping the instance does the same.
#[must_use = "a Suspense stops observing when dropped"]
pub struct Suspense<T, E, R> {
	state: StateCell<T, E>,
	rx: watch::Receiver<ViewState<T, E>>,
	renderers: Renderers<T, E, R>,
	handle: Option<ObservationHandle>,
}

impl<T, E, R> Suspense<T, E, R>
where
	T: Presence + Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	pub fn builder() -> SuspenseBuilder<T, E, R> {
		SuspenseBuilder::new()
	}

	pub(crate) fn activate(
		source: Source<T, E>,
		renderers: Renderers<T, E, R>,
		delay: Duration,
	) -> Self {
		let state = StateCell::new();
		let rx = state.subscribe();

		#[cfg(feature = "tracing")]
		tracing::debug!(kind = ?source.kind(), ?delay, "suspense activated");

		let observer = match source {
			#[cfg(feature = "stream")]
			Source::Stream(stream) => {
				Some(tokio::spawn(observe::drive_stream(stream, state.clone())).abort_handle())
			}
			Source::Deferred(future) => {
				Some(tokio::spawn(observe::drive_deferred(future, state.clone())).abort_handle())
			}
			#[cfg(feature = "cell")]
			Source::Cell(watcher) => {
				// First read happens before activation returns, so a cell
				// that fails to read settles synchronously.
				observe::read_cell(&watcher, &state);
				Some(tokio::spawn(observe::drive_cell(watcher, state.clone())).abort_handle())
			}
			Source::Immediate(value) => {
				state.try_resolve(Arc::new(value));
				None
			}
		};

		let debounce = tokio::spawn(run_debounce(delay, state.clone())).abort_handle();

		Self {
			state,
			rx,
			renderers,
			handle: Some(ObservationHandle { observer, debounce }),
		}
	}

	/// Output of the renderer for the active slot. `None` while pending
	/// with the loading view still suppressed.
	pub fn view(&self) -> Option<R> {
		let state = self.rx.borrow();
		match state.slot() {
			Slot::Hidden => None,
			Slot::Fallback => Some((self.renderers.fallback)()),
			Slot::Content => state.render().value().map(|v| (self.renderers.content)(v)),
			Slot::Error => state.render().error().map(|e| (self.renderers.error)(e)),
		}
	}

	/// Active render slot right now.
	pub fn slot(&self) -> Slot {
		self.rx.borrow().slot()
	}

	/// Current render state.
	pub fn state(&self) -> RenderState<T, E> {
		self.rx.borrow().render().clone()
	}

	/// Subscribes to view changes. Receivers observe the latest snapshot
	/// immediately and are notified on every transition, so a
	/// presentation layer can re-select the active slot on each
	/// notification.
	pub fn subscribe(&self) -> watch::Receiver<ViewState<T, E>> {
		self.state.subscribe()
	}

	/// Waits for the next view transition.
	pub async fn changed(&mut self) {
		// The sender lives in this instance, so the channel cannot close
		// before this returns.
		let _ = self.rx.changed().await;
	}

	/// Waits until the instance settles and returns the terminal state.
	///
	/// Teardown counts as terminal for waiting purposes: detaching a
	/// still-pending instance completes this with `Pending`, since no
	/// transition can occur afterwards.
	pub async fn settled(&self) -> RenderState<T, E> {
		let mut rx = self.state.subscribe();
		let _ = rx.wait_for(|s| s.closed || !s.render.is_pending()).await;
		let snapshot = rx.borrow();
		snapshot.render().clone()
	}

	/// True until teardown.
	pub fn is_attached(&self) -> bool {
		self.handle.is_some()
	}

	/// Stops observing: cancels the debounce timer, releases the source
	/// observation, and rejects any transition that could still be in
	/// flight. Idempotent; dropping the instance performs the same
	/// release.
	pub fn detach(&mut self) {
		if let Some(handle) = self.handle.take() {
			handle.release();
			self.state.close();
			#[cfg(feature = "tracing")]
			tracing::debug!("suspense detached");
		}
	}
}

impl<T, E, R> Drop for Suspense<T, E, R> {
	fn drop(&mut self) {
		if let Some(handle) = self.handle.take() {
			handle.release();
		}
	}
}

impl<T, E, R> std::fmt::Debug for Suspense<T, E, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.rx.borrow();
		let mut s = f.debug_struct("Suspense");
		s.field("slot", &state.slot());
		s.field("attached", &self.handle.is_some());
		s.finish_non_exhaustive()
	}
}

/// One-shot race between the debounce timer and settlement. If the timer
/// fires first the loading view is released; if the source settles first
/// the timer future is dropped, which is the idempotent cancel.
async fn run_debounce<T, E>(delay: Duration, state: StateCell<T, E>)
where
	T: Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	let mut rx = state.subscribe();
	tokio::select! {
		_ = tokio::time::sleep(delay) => {
			state.mark_fallback();
		}
		_ = rx.wait_for(|s| !s.render.is_pending()) => {}
	}
}
