// src/checker/dispatch.rs
// =============================================================================
// Runs the redirect resolver over every url with bounded concurrency.
//
// How it works:
// 1. Urls are released one at a time, at least `delay` apart
// 2. Up to `workers` resolutions run at the same time (buffer_unordered)
// 3. Results come back in COMPLETION order, not sitemap order
// 4. Every result is handed to a callback (for the running report) and
//    collected; nothing is ever dropped
//
// The delay paces request STARTS. Results are consumed as soon as they
// arrive, so a slow server never holds up reporting of fast ones.
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use log::debug;

use super::http::build_client;
use super::redirect::{resolve_redirect_chain, RedirectChainResult};
use crate::config::CheckerConfig;

/// Resolves every url and returns one result per url, in completion order.
///
/// `on_result` is called once per result as soon as it is available, with
/// the number of results received so far (1-based).
pub async fn dispatch<F>(
    urls: Vec<String>,
    config: Arc<CheckerConfig>,
    mut on_result: F,
) -> Result<Vec<RedirectChainResult>, reqwest::Error>
where
    F: FnMut(usize, &RedirectChainResult),
{
    let client = build_client(&config)?;
    let workers = config.workers.max(1);
    let delay = config.delay;
    let total = urls.len();

    debug!("Dispatching {} urls to {} workers", total, workers);

    // `then` runs sequentially, and buffer_unordered only pulls the next
    // url when a worker slot is free, so the sleep spaces out request starts.
    let paced = stream::iter(urls.into_iter().enumerate()).then(move |(index, url)| async move {
        pace(index, delay).await;
        url
    });

    let in_flight = paced
        .map(|url| {
            let client = client.clone();
            let config = Arc::clone(&config);
            async move { resolve_redirect_chain(&client, &url, &config).await }
        })
        .buffer_unordered(workers);
    futures::pin_mut!(in_flight);

    let mut results = Vec::with_capacity(total);
    while let Some(result) = in_flight.next().await {
        results.push(result);
        if let Some(last) = results.last() {
            on_result(results.len(), last);
        }
    }

    Ok(results)
}

// The first url starts immediately, every later one waits `delay`.
async fn pace(index: usize, delay: Duration) {
    if index > 0 && !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why pin_mut!?
//    - StreamExt::next() needs a stream that is Unpin
//    - Our stream holds async blocks, which are not Unpin
//    - pin_mut! pins it on the stack so we can call next() in a loop
//    - collect() (used when no callback is needed) does not need this
//
// 2. then() vs buffer_unordered()
//    - then() runs one future at a time, in order: good for pacing
//    - buffer_unordered(n) runs up to n at once and yields whichever
//      finishes first: good for the actual requests
//
// 3. Why FnMut for the callback?
//    - The caller's closure may mutate captured state (counters, the
//      first write error...), which Fn would not allow
// -----------------------------------------------------------------------------
