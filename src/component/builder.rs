/* src/component/builder.rs */

use std::time::Duration;

use crate::source::Source;
use crate::state::Presence;

use super::SuspenseError;
use super::suspense::{DEFAULT_FALLBACK_DELAY, Suspense};

pub(crate) type ContentFn<T, R> = Box<dyn Fn(&T) -> R + Send + Sync>;
pub(crate) type FallbackFn<R> = Box<dyn Fn() -> R + Send + Sync>;
pub(crate) type ErrorFn<E, R> = Box<dyn Fn(&E) -> R + Send + Sync>;

/// The three render slots supplied at activation.
pub(crate) struct Renderers<T, E, R> {
	pub(crate) content: ContentFn<T, R>,
	pub(crate) fallback: FallbackFn<R>,
	pub(crate) error: ErrorFn<E, R>,
}

/// Builder for a [`Suspense`] instance.
///
/// The source and all three renderers are required; the debounce delay
/// defaults to [`DEFAULT_FALLBACK_DELAY`]. `build()` activates the
/// instance and must run inside a tokio runtime context.
pub struct SuspenseBuilder<T, E, R> {
	source: Option<Source<T, E>>,
	content: Option<ContentFn<T, R>>,
	fallback: Option<FallbackFn<R>>,
	error: Option<ErrorFn<E, R>>,
	delay: Duration,
}

impl<T, E, R> SuspenseBuilder<T, E, R>
where
	T: Presence + Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	pub fn new() -> Self {
		Self {
			source: None,
			content: None,
			fallback: None,
			error: None,
			delay: DEFAULT_FALLBACK_DELAY,
		}
	}

	pub fn source(mut self, source: Source<T, E>) -> Self {
		self.source = Some(source);
		self
	}

	/// Renderer for the resolved value.
	pub fn content<F>(mut self, render: F) -> Self
	where
		F: Fn(&T) -> R + Send + Sync + 'static,
	{
		self.content = Some(Box::new(render));
		self
	}

	/// Renderer for the loading view.
	pub fn fallback<F>(mut self, render: F) -> Self
	where
		F: Fn() -> R + Send + Sync + 'static,
	{
		self.fallback = Some(Box::new(render));
		self
	}

	/// Renderer for the settled error.
	pub fn error<F>(mut self, render: F) -> Self
	where
		F: Fn(&E) -> R + Send + Sync + 'static,
	{
		self.error = Some(Box::new(render));
		self
	}

	/// How long the instance may stay pending before the loading view is
	/// allowed to appear.
	pub fn delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Validates the configuration and activates the instance.
	pub fn build(self) -> Result<Suspense<T, E, R>, SuspenseError> {
		let source = self
			.source
			.ok_or_else(|| SuspenseError::Builder("source is required".to_string()))?;
		let content = self
			.content
			.ok_or_else(|| SuspenseError::Builder("content renderer is required".to_string()))?;
		let fallback = self
			.fallback
			.ok_or_else(|| SuspenseError::Builder("fallback renderer is required".to_string()))?;
		let error = self
			.error
			.ok_or_else(|| SuspenseError::Builder("error renderer is required".to_string()))?;

		Ok(Suspense::activate(
			source,
			Renderers {
				content,
				fallback,
				error,
			},
			self.delay,
		))
	}
}

impl<T, E, R> Default for SuspenseBuilder<T, E, R>
where
	T: Presence + Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}
