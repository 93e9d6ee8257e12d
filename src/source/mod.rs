/* src/source/mod.rs */

//!
//! Source shapes accepted by the suspense component.
//!
//! The four temporal shapes are represented as an explicit tagged union,
//! constructed once per instance. Downstream code matches exhaustively on
//! the variant instead of probing capabilities at runtime.

#[cfg(feature = "cell")]
mod reactive;

#[cfg(feature = "cell")]
pub use reactive::{CellWatcher, ReactiveCell};

use std::future::Future;
use std::pin::Pin;

#[cfg(feature = "stream")]
use futures_util::Stream;

/// Boxed deferred result: exactly one eventual resolution or rejection.
pub type DynDeferred<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// Boxed push-based source: zero or more emissions, terminatable.
#[cfg(feature = "stream")]
pub type DynStream<T, E> = Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>;

/// Classification tag for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
	#[cfg(feature = "stream")]
	Stream,
	Deferred,
	#[cfg(feature = "cell")]
	Cell,
	Immediate,
}

/// A data source of one of the supported temporal shapes.
///
/// Exactly one variant is bound per component instance and the binding is
/// immutable for the instance's lifetime.
pub enum Source<T, E> {
	/// Push-based emissions over time.
	#[cfg(feature = "stream")]
	Stream(DynStream<T, E>),
	/// Exactly one eventual resolution or rejection.
	Deferred(DynDeferred<T, E>),
	/// Pull-with-invalidation value holder; reads may fail.
	#[cfg(feature = "cell")]
	Cell(CellWatcher<T, E>),
	/// A plain value, available synchronously, never an error.
	Immediate(T),
}

impl<T, E> Source<T, E> {
	/// Wraps a push-based stream of results.
	#[cfg(feature = "stream")]
	pub fn stream<S>(stream: S) -> Self
	where
		S: Stream<Item = Result<T, E>> + Send + 'static,
	{
		Self::Stream(Box::pin(stream))
	}

	/// Wraps a broadcast receiver as a stream source.
	///
	/// A lagged receiver skips the values it missed and keeps listening;
	/// lag is not a source error.
	#[cfg(feature = "stream")]
	pub fn broadcast(rx: tokio::sync::broadcast::Receiver<T>) -> Self
	where
		T: Clone + Send + 'static,
		E: Send + 'static,
	{
		use futures_util::StreamExt;
		use tokio_stream::wrappers::BroadcastStream;

		let stream =
			BroadcastStream::new(rx).filter_map(|item| async move { item.ok().map(Ok::<T, E>) });
		Self::Stream(Box::pin(stream))
	}

	/// Wraps a single deferred result.
	pub fn deferred<F>(future: F) -> Self
	where
		F: Future<Output = Result<T, E>> + Send + 'static,
	{
		Self::Deferred(Box::pin(future))
	}

	/// Observes a reactive cell through a fresh watcher.
	#[cfg(feature = "cell")]
	pub fn cell(cell: &ReactiveCell<T, E>) -> Self {
		Self::Cell(cell.watch())
	}

	/// Wraps a plain value: the exhaustive fallback for anything that is
	/// not a stream, a deferred result, or a cell.
	pub fn value(value: T) -> Self {
		Self::Immediate(value)
	}

	/// Classification tag of this source.
	pub fn kind(&self) -> SourceKind {
		match self {
			#[cfg(feature = "stream")]
			Self::Stream(_) => SourceKind::Stream,
			Self::Deferred(_) => SourceKind::Deferred,
			#[cfg(feature = "cell")]
			Self::Cell(_) => SourceKind::Cell,
			Self::Immediate(_) => SourceKind::Immediate,
		}
	}
}

impl<T, E> std::fmt::Debug for Source<T, E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Source").field(&self.kind()).finish()
	}
}
