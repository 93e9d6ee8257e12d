/* src/lib.rs */

//!
//! A suspense adapter for async Rust: hand it a source of unknown temporal
//! shape (a stream, a deferred result, a reactive cell, or a plain value)
//! and it drives one rendering contract of loading fallback, resolved
//! content, or error. Consuming code never branches on source type.
//!
//! This crate integrates three modules:
//!
//! - **state**: The three-state render model and the shared settlement
//!   cell enforcing single-shot transitions.
//! - **source**: The [`Source`] tagged union over the supported shapes,
//!   plus the `ReactiveCell` value holder.
//! - **component**: The [`Suspense`] component wiring observation, the
//!   fallback debouncer, and teardown together.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `stream`: Enables the stream source variant and broadcast bridging.
//! - `cell`: Enables the reactive cell source variant.
//! - `tracing`: Emits `tracing` events at activation, settlement, and
//!   teardown.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use suspense::{Source, Suspense};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let fetch = async {
//!     tokio::time::sleep(Duration::from_secs(2)).await;
//!     Ok::<_, String>(vec!["hello".to_owned(), "world".to_owned()])
//! };
//!
//! let view = Suspense::builder()
//!     .source(Source::deferred(fetch))
//!     .content(|posts: &Vec<String>| format!("{} posts", posts.len()))
//!     .fallback(|| "loading...".to_owned())
//!     .error(|e: &String| format!("error: {e}"))
//!     .build()
//!     .unwrap();
//!
//! assert!(view.settled().await.is_resolved());
//! # }
//! ```

pub mod component;
pub mod source;
pub mod state;

pub use component::{DEFAULT_FALLBACK_DELAY, Suspense, SuspenseBuilder, SuspenseError};
pub use source::{Source, SourceKind};
pub use state::{Presence, RenderState, Slot, ViewState};

#[cfg(feature = "cell")]
pub use source::{CellWatcher, ReactiveCell};
