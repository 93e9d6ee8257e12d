/* tests/stream_tests.rs */

#![cfg(feature = "stream")]

use std::time::Duration;

use futures_util::StreamExt;
use suspense::{Slot, Source, Suspense};
use tokio_stream::wrappers::ReceiverStream;

fn numbers(source: Source<u32, String>) -> Suspense<u32, String, String> {
	Suspense::builder()
		.source(source)
		.content(|n: &u32| n.to_string())
		.fallback(|| "loading".to_string())
		.error(|e: &String| e.clone())
		.build()
		.unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_first_emission_wins() {
	let (tx, rx) = tokio::sync::mpsc::channel(8);
	let view = numbers(Source::stream(ReceiverStream::new(rx).map(Ok)));

	tx.send(1).await.unwrap();
	assert_eq!(view.settled().await.value(), Some(&1));

	// The subscription outlives settlement; later emissions are drained
	// and discarded.
	tx.send(2).await.unwrap();
	tokio::time::sleep(Duration::from_millis(50)).await;
	assert_eq!(view.state().value(), Some(&1));
	assert!(!tx.is_closed());
}

#[tokio::test(start_paused = true)]
async fn test_slow_stream_shows_fallback_then_settles() {
	let (tx, rx) = tokio::sync::mpsc::channel(8);
	let view = numbers(Source::stream(ReceiverStream::new(rx).map(Ok)));

	tokio::time::sleep(Duration::from_millis(300)).await;
	assert_eq!(view.slot(), Slot::Fallback);

	tx.send(4).await.unwrap();
	assert_eq!(view.settled().await.value(), Some(&4));
	assert_eq!(view.slot(), Slot::Content);
}

#[tokio::test]
async fn test_stream_error_settles_failed() {
	let view = numbers(Source::stream(futures_util::stream::iter([Err(
		"boom".to_string(),
	)])));

	let settled = view.settled().await;
	assert_eq!(settled.error(), Some(&"boom".to_string()));
	assert_eq!(view.slot(), Slot::Error);
}

#[tokio::test]
async fn test_absent_emissions_do_not_settle() {
	let view = numbers(Source::stream(futures_util::stream::iter([
		Ok(0),
		Ok(7),
	])));

	// The zero is observed and discarded; the first present value wins.
	assert_eq!(view.settled().await.value(), Some(&7));
}

#[tokio::test(start_paused = true)]
async fn test_terminated_stream_stays_pending() {
	let view = numbers(Source::stream(futures_util::stream::iter(
		Vec::<Result<u32, String>>::new(),
	)));

	tokio::time::sleep(Duration::from_millis(300)).await;
	assert!(view.state().is_pending());
	assert_eq!(view.slot(), Slot::Fallback);
}

#[tokio::test(start_paused = true)]
async fn test_broadcast_source_settles_on_first_delivery() {
	let (tx, rx) = tokio::sync::broadcast::channel(8);
	let view = numbers(Source::broadcast(rx));

	assert!(view.state().is_pending());
	tx.send(5).unwrap();
	assert_eq!(view.settled().await.value(), Some(&5));
}

#[tokio::test]
async fn test_error_after_settlement_is_discarded() {
	let view = numbers(Source::stream(futures_util::stream::iter([
		Ok(3),
		Err("late".to_string()),
	])));

	let settled = view.settled().await;
	assert_eq!(settled.value(), Some(&3));
	assert!(!settled.is_failed());
}
