/* src/component/error.rs */

use thiserror::Error;

/// Errors that can occur while assembling a suspense instance.
///
/// Source failures never surface here: once activation begins, every
/// source-side error settles the render state as failed instead of
/// propagating.
#[derive(Debug, Error)]
pub enum SuspenseError {
	#[error("Builder error: {0}")]
	Builder(String),
}
