use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::watch;

/// A watchable value holder whose reads may fail.
///
/// Writers replace the current value (or error) atomically; watchers are
/// notified on every replacement and re-read on their own schedule, so a
/// slow watcher observes the latest value rather than a backlog.
///
/// Clones share the same underlying cell. Once every `ReactiveCell` handle
/// is dropped, watchers stop receiving invalidations.
pub struct ReactiveCell<T, E> {
	shared: Arc<CellShared<T, E>>,
	version: watch::Sender<u64>,
}

struct CellShared<T, E> {
	value: ArcSwap<Result<Arc<T>, Arc<E>>>,
}

impl<T, E> ReactiveCell<T, E> {
	/// Creates a cell holding `initial`.
	pub fn new(initial: T) -> Self {
		Self {
			shared: Arc::new(CellShared {
				value: ArcSwap::from_pointee(Ok(Arc::new(initial))),
			}),
			version: watch::Sender::new(0),
		}
	}

	/// Current value or read error. Wait-free.
	pub fn get(&self) -> Result<Arc<T>, Arc<E>> {
		(*self.shared.value.load_full()).clone()
	}

	/// Replaces the value and invalidates watchers.
	pub fn set(&self, value: T) {
		self.shared.value.store(Arc::new(Ok(Arc::new(value))));
		self.invalidate();
	}

	/// Poisons the cell: reads yield the error until the next `set`.
	pub fn set_error(&self, error: E) {
		self.shared.value.store(Arc::new(Err(Arc::new(error))));
		self.invalidate();
	}

	fn invalidate(&self) {
		self.version.send_modify(|v| *v += 1);
	}

	/// Registers a watcher over this cell.
	pub fn watch(&self) -> CellWatcher<T, E> {
		CellWatcher {
			shared: Arc::clone(&self.shared),
			version: self.version.subscribe(),
		}
	}
}

impl<T, E> Clone for ReactiveCell<T, E> {
	fn clone(&self) -> Self {
		Self {
			shared: Arc::clone(&self.shared),
			version: self.version.clone(),
		}
	}
}

impl<T, E> std::fmt::Debug for ReactiveCell<T, E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut s = f.debug_struct("ReactiveCell");
		s.field("version", &*self.version.borrow());
		s.field("poisoned", &self.shared.value.load().is_err());
		s.finish_non_exhaustive()
	}
}

/// Read-and-await-invalidation handle onto a [`ReactiveCell`].
pub struct CellWatcher<T, E> {
	shared: Arc<CellShared<T, E>>,
	version: watch::Receiver<u64>,
}

impl<T, E> CellWatcher<T, E> {
	/// Current value or read error. Wait-free.
	pub fn read(&self) -> Result<Arc<T>, Arc<E>> {
		(*self.shared.value.load_full()).clone()
	}

	/// Waits for the next invalidation. Invalidations that happened since
	/// the last read are reported immediately. Returns `false` once every
	/// cell handle has been dropped and no further invalidation can occur.
	pub async fn invalidated(&mut self) -> bool {
		self.version.changed().await.is_ok()
	}
}

impl<T, E> std::fmt::Debug for CellWatcher<T, E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CellWatcher")
			.field("version", &*self.version.borrow())
			.finish_non_exhaustive()
	}
}
