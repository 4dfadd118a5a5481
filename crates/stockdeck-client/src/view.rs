use crate::api::StockApi;
use crate::endpoint::PriceRange;
use crate::load::{load_ticker_data, TickerData};
use tokio::sync::Mutex;

/// Lifecycle of the ticker detail view.
///
/// ```text
/// Idle --set_ticker(Some)--> Loading --complete--> Ready
///                               ^                    |
///                               +---set_ticker-------+
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No ticker resolved yet.
    Idle,
    /// Ticker resolved, the three fetches are in flight.
    Loading { ticker: String },
    /// All three fetches settled (each may still carry its own failure).
    Ready(TickerData),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        !matches!(self, ViewState::Ready(_))
    }
}

/// Handed out by [`TickerView::set_ticker`]; a batch may only land if its generation
/// is still the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub ticker: String,
    pub range: PriceRange,
}

#[derive(Debug)]
struct Inner {
    generation: u64,
    state: ViewState,
}

/// Owner of the detail view's state; the only writer of `Ready`.
///
/// Every ticker change bumps the generation, so a slow response for an old ticker is
/// dropped instead of overwriting the newer one.
#[derive(Debug)]
pub struct TickerView {
    inner: Mutex<Inner>,
}

impl Default for TickerView {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerView {
    pub fn new() -> Self {
        TickerView {
            inner: Mutex::new(Inner {
                generation: 0,
                state: ViewState::Idle,
            }),
        }
    }

    pub async fn state(&self) -> ViewState {
        self.inner.lock().await.state.clone()
    }

    /// Route resolved (or un-resolved) a ticker.
    ///
    /// `None` and `""` both mean "not yet resolved" and put the view back to `Idle`.
    pub async fn set_ticker(&self, ticker: Option<&str>, range: PriceRange) -> Option<LoadTicket> {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;

        match ticker.filter(|t| !t.is_empty()) {
            Some(ticker) => {
                inner.state = ViewState::Loading {
                    ticker: ticker.to_string(),
                };
                Some(LoadTicket {
                    generation: inner.generation,
                    ticker: ticker.to_string(),
                    range,
                })
            }
            None => {
                inner.state = ViewState::Idle;
                None
            }
        }
    }

    /// Land a finished batch. Returns `false` (and leaves the state alone) if the
    /// ticket has been superseded.
    pub async fn complete(&self, ticket: &LoadTicket, data: TickerData) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != ticket.generation {
            log::debug!(
                "[{}] discarding stale batch (generation {} < {})",
                ticket.ticker,
                ticket.generation,
                inner.generation
            );
            return false;
        }

        inner.state = ViewState::Ready(data);
        true
    }

    /// `set_ticker`, fetch all three resources, then `complete`.
    ///
    /// Returns whether this batch was the one that landed.
    pub async fn load<A: StockApi>(&self, api: &A, ticker: Option<&str>, range: PriceRange) -> bool {
        let Some(ticket) = self.set_ticker(ticker, range).await else {
            return false;
        };

        let data = load_ticker_data(api, &ticket.ticker, ticket.range).await;
        self.complete(&ticket, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::fake::FakeApi;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn starts_idle() {
        let view = TickerView::new();
        assert_eq!(view.state().await, ViewState::Idle);
        assert!(view.state().await.is_loading());
    }

    #[tokio::test]
    async fn unresolved_ticker_stays_idle() {
        let view = TickerView::new();
        let api = FakeApi::default();

        assert!(!view.load(&api, None, PriceRange::default()).await);
        assert!(!view.load(&api, Some(""), PriceRange::default()).await);
        assert_eq!(view.state().await, ViewState::Idle);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn idle_to_loading_to_ready() {
        let view = TickerView::new();
        let api = FakeApi::default();

        let ticket = view
            .set_ticker(Some("INFY"), PriceRange::default())
            .await
            .unwrap();
        assert_eq!(
            view.state().await,
            ViewState::Loading {
                ticker: "INFY".into()
            }
        );

        let data = load_ticker_data(&api, &ticket.ticker, ticket.range).await;
        assert!(view.complete(&ticket, data).await);
        match view.state().await {
            ViewState::Ready(data) => assert_eq!(data.ticker, "INFY"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stays_loading_until_all_three_settle() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let api = Arc::new(FakeApi {
            news_gate: Some(gate.clone()),
            ..Default::default()
        });
        let view = Arc::new(TickerView::new());

        let task = {
            let (api, view) = (api.clone(), view.clone());
            tokio::spawn(async move { view.load(api.as_ref(), Some("INFY"), PriceRange::default()).await })
        };

        // wait until all three requests are out; price & fundamentals have answered
        for _ in 0..1000 {
            if api.calls().len() == 3 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(api.calls().len(), 3);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(view.state().await.is_loading());

        // release news
        gate.notify_one();
        assert!(task.await.unwrap());
        assert!(!view.state().await.is_loading());
    }

    #[tokio::test]
    async fn stale_batch_is_discarded() {
        let api = FakeApi {
            delays: [
                ("SLOW".to_string(), Duration::from_millis(100)),
                ("FAST".to_string(), Duration::from_millis(5)),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        let view = TickerView::new();

        // SLOW goes out first, FAST supersedes it while SLOW is still in flight
        let slow = view.load(&api, Some("SLOW"), PriceRange::default());
        let fast = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            view.load(&api, Some("FAST"), PriceRange::default()).await
        };
        let (slow_landed, fast_landed) = tokio::join!(slow, fast);

        assert!(!slow_landed);
        assert!(fast_landed);
        match view.state().await {
            ViewState::Ready(data) => assert_eq!(data.ticker, "FAST"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn going_idle_invalidates_in_flight_batch() {
        let view = TickerView::new();
        let api = FakeApi::default();

        let ticket = view
            .set_ticker(Some("INFY"), PriceRange::default())
            .await
            .unwrap();
        view.set_ticker(None, PriceRange::default()).await;

        let data = load_ticker_data(&api, &ticket.ticker, ticket.range).await;
        assert!(!view.complete(&ticket, data).await);
        assert_eq!(view.state().await, ViewState::Idle);
    }
}
