/* src/state/render.rs */

use std::sync::Arc;

/// Render phase of a suspense instance.
///
/// Transitions are one-directional: `Pending` settles into `Resolved` or
/// `Failed` at most once per instance, and neither terminal state ever
/// transitions again. Values and errors are shared as `Arc` so snapshots
/// clone cheaply regardless of the payload type.
#[derive(Debug)]
pub enum RenderState<T, E> {
	/// No qualifying result has arrived yet.
	Pending,
	/// The source produced a value.
	Resolved(Arc<T>),
	/// The source produced an error.
	Failed(Arc<E>),
}

impl<T, E> RenderState<T, E> {
	pub fn is_pending(&self) -> bool {
		matches!(self, Self::Pending)
	}

	pub fn is_resolved(&self) -> bool {
		matches!(self, Self::Resolved(_))
	}

	pub fn is_failed(&self) -> bool {
		matches!(self, Self::Failed(_))
	}

	/// The resolved value, if the instance settled successfully.
	pub fn value(&self) -> Option<&T> {
		match self {
			Self::Resolved(value) => Some(value),
			_ => None,
		}
	}

	/// The settled error, if the instance failed.
	pub fn error(&self) -> Option<&E> {
		match self {
			Self::Failed(error) => Some(error),
			_ => None,
		}
	}
}

impl<T, E> Clone for RenderState<T, E> {
	fn clone(&self) -> Self {
		match self {
			Self::Pending => Self::Pending,
			Self::Resolved(value) => Self::Resolved(Arc::clone(value)),
			Self::Failed(error) => Self::Failed(Arc::clone(error)),
		}
	}
}

/// Which of the render slots is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
	/// Pending, with the loading view still suppressed. Nothing renders.
	Hidden,
	/// Pending long enough that the loading view is shown.
	Fallback,
	/// The resolved content view.
	Content,
	/// The error view.
	Error,
}

/// Snapshot distributed to subscribers on every transition.
#[derive(Debug)]
pub struct ViewState<T, E> {
	pub(crate) render: RenderState<T, E>,
	pub(crate) fallback_visible: bool,
	pub(crate) closed: bool,
}

impl<T, E> ViewState<T, E> {
	pub(crate) fn new() -> Self {
		Self {
			render: RenderState::Pending,
			fallback_visible: false,
			closed: false,
		}
	}

	pub fn render(&self) -> &RenderState<T, E> {
		&self.render
	}

	/// Whether the loading view has been released by the debounce timer.
	/// Starts `false` and never reverts once set.
	pub fn fallback_visible(&self) -> bool {
		self.fallback_visible
	}

	/// Active slot under this snapshot. Content and error views preempt
	/// the fallback; the fallback shows only while pending after the
	/// debounce window elapsed.
	pub fn slot(&self) -> Slot {
		match &self.render {
			RenderState::Resolved(_) => Slot::Content,
			RenderState::Failed(_) => Slot::Error,
			RenderState::Pending if self.fallback_visible => Slot::Fallback,
			RenderState::Pending => Slot::Hidden,
		}
	}
}

impl<T, E> Clone for ViewState<T, E> {
	fn clone(&self) -> Self {
		Self {
			render: self.render.clone(),
			fallback_visible: self.fallback_visible,
			closed: self.closed,
		}
	}
}
