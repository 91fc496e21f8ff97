//! Concurrent fan-out over a batch of fetch items.
//!
//! Submits every per-item future at once (no batching or throttling) and
//! waits for all of them to settle. Output order always matches input
//! order regardless of completion order. Two batch policies are exposed:
//! [`fetch_ordered`] is strict all-or-nothing, [`fetch_settled`] keeps
//! per-item outcomes so callers can serve partial results.

use std::fmt::Display;
use std::future::Future;

use futures::future;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// At least one fetch in the batch failed. Under the all-or-nothing
    /// policy none of the payloads already obtained are surfaced.
    #[error("aggregation failed: {failed} of {total} fetches failed")]
    Batch { failed: usize, total: usize },
}

/// Fans `items` out through `fetch` concurrently and returns the per-item
/// results, position i corresponding to `items[i]`.
pub async fn fetch_settled<I, T, E, F, Fut>(items: &[I], fetch: F) -> Vec<Result<T, E>>
where
    I: Clone,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    future::join_all(items.iter().cloned().map(fetch)).await
}

/// Fans `items` out through `fetch` concurrently; all-or-nothing.
///
/// On full success the i-th output corresponds to the i-th input. Each
/// failed item is logged with its label before the batch collapses.
///
/// # Errors
///
/// Returns [`AggregateError::Batch`] if any item's fetch failed, without
/// surfacing the results of the items that succeeded.
pub async fn fetch_ordered<I, T, E, F, Fut>(
    items: &[I],
    fetch: F,
) -> Result<Vec<T>, AggregateError>
where
    I: Clone + Display,
    E: Display,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let settled = fetch_settled(items, fetch).await;
    let total = settled.len();
    let mut collected = Vec::with_capacity(total);
    let mut failed = 0_usize;

    for (item, result) in items.iter().zip(settled) {
        match result {
            Ok(value) => collected.push(value),
            Err(error) => {
                tracing::warn!(item = %item, error = %error, "fetch failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(AggregateError::Batch { failed, total });
    }
    Ok(collected)
}
