use std::time::Duration;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use crate::models::price_result::PriceResult;
use crate::models::stay_request::StayRequest;
use crate::models::tariff::Tariff;
use crate::services::price_estimator::estimate_with;

pub const DEFAULT_QUOTE_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DebouncedQuote {
    /// Counts published quotes, starting at 1.
    pub generation: u64,
    pub request: StayRequest,
    pub result: PriceResult,
}

/// Recomputes the estimate once input has been quiet for `delay`.
///
/// Only the newest submitted request is ever estimated; anything replaced
/// during the quiet period is dropped without being published.
pub struct QuoteDebouncer {
    requests: watch::Sender<Option<StayRequest>>,
    quotes: watch::Receiver<Option<DebouncedQuote>>,
    task: JoinHandle<()>,
}

impl QuoteDebouncer {
    pub fn spawn(delay: Duration) -> Self {
        Self::spawn_with(Tariff::HOUSE, delay)
    }

    pub fn spawn_with(tariff: Tariff, delay: Duration) -> Self {
        let (requests, request_rx) = watch::channel(None);
        let (quote_tx, quotes) = watch::channel(None);
        let task = tokio::spawn(run(tariff, delay, request_rx, quote_tx));

        Self {
            requests,
            quotes,
            task,
        }
    }

    pub fn submit(&self, request: StayRequest) {
        self.requests.send_replace(Some(request));
    }

    pub fn latest(&self) -> Option<DebouncedQuote> {
        self.quotes.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<DebouncedQuote>> {
        self.quotes.clone()
    }
}

impl Drop for QuoteDebouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    tariff: Tariff,
    delay: Duration,
    mut requests: watch::Receiver<Option<StayRequest>>,
    quotes: watch::Sender<Option<DebouncedQuote>>,
) {
    let mut generation = 0;

    while requests.changed().await.is_ok() {
        // Restart the quiet period on every newer submission.
        loop {
            tokio::select! {
                changed = requests.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    debug!("Quote request superseded before estimate");
                }
                _ = tokio::time::sleep(delay) => break,
            }
        }

        let Some(request) = requests.borrow_and_update().clone() else {
            continue;
        };

        generation += 1;
        let result = estimate_with(&tariff, &request);
        debug!("Published quote #{}: {}", generation, result.message);
        quotes.send_replace(Some(DebouncedQuote {
            generation,
            request,
            result,
        }));
    }
}
