use crate::api::StockApi;
use crate::endpoint::PriceRange;
use crate::error::FetchError;
use crate::model::{Fundamentals, NewsItem, PricePoint};

/// Outcome of one of the three fetches; sections succeed or fail independently.
pub type Section<T> = Result<T, FetchError>;

/// Everything the detail view renders for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerData {
    pub ticker: String,
    pub range: PriceRange,
    pub series: Section<Vec<PricePoint>>,
    pub fundamentals: Section<Option<Fundamentals>>,
    pub news: Section<Vec<NewsItem>>,
}

impl TickerData {
    /// True if any of the three sections failed.
    pub fn has_failures(&self) -> bool {
        self.series.is_err() || self.fundamentals.is_err() || self.news.is_err()
    }
}

/// Request price, fundamentals & news for `ticker` concurrently and wait for all three.
///
/// Never short-circuits: a failed section is logged and handed back tagged, next to
/// whatever the other two produced.
pub async fn load_ticker_data<A: StockApi>(api: &A, ticker: &str, range: PriceRange) -> TickerData {
    log::debug!("[{ticker}] loading price ({range}), fundamentals & news");

    let (series, fundamentals, news) = futures::join!(
        api.fetch_price(ticker, range),
        api.fetch_fundamentals(ticker),
        api.fetch_news(ticker),
    );

    if let Err(e) = &series {
        log::warn!("[{ticker}] price fetch failed: {e}");
    }
    if let Err(e) = &fundamentals {
        log::warn!("[{ticker}] fundamentals fetch failed: {e}");
    }
    if let Err(e) = &news {
        log::warn!("[{ticker}] news fetch failed: {e}");
    }

    TickerData {
        ticker: ticker.to_string(),
        range,
        series,
        fundamentals,
        news,
    }
}
