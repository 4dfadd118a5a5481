use crate::de::de_null_as_default;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////

/// One end-of-day close, as served by `/api/stock/{ticker}/price`:
///
/// ```json
/// {
///     "date": "2024-01-01",
///     "open": 99.5,
///     "high": 101.0,
///     "low": 99.0,
///     "close": 100.0,
///     "volume": 150000
/// }
/// ```
///
/// Only `date` & `close` are required; the chart needs nothing else.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        PricePoint {
            date: date.into(),
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct PriceBody {
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub series: Vec<PricePoint>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Snapshot of ratios from `/api/stock/{ticker}/fundamentals`; the endpoint may also
/// answer a bare `null`, which is kept as `None` by the caller.
///
/// A single ratio may be `null` or missing (e.g., no P/E for a loss-making company).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Fundamentals {
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub pe: Option<f64>,
    #[serde(default)]
    pub roe: Option<f64>,
    #[serde(default)]
    pub eps_ttm: Option<f64>,
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Headline from `/api/stock/{ticker}/news`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct NewsBody {
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub items: Vec<NewsItem>,
}
