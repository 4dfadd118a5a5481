use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// History window accepted by the price endpoint.
#[derive(Deserialize, Serialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PriceRange {
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "3y")]
    ThreeYears,
    #[default]
    #[serde(rename = "5y")]
    FiveYears,
}

impl PriceRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::OneYear => "1y",
            PriceRange::ThreeYears => "3y",
            PriceRange::FiveYears => "5y",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1y" => Ok(PriceRange::OneYear),
            "3y" => Ok(PriceRange::ThreeYears),
            "5y" => Ok(PriceRange::FiveYears),
            other => Err(format!("unsupported range `{other}`; expected 1y, 3y or 5y")),
        }
    }
}

/// The three per-ticker resources of the backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Price(PriceRange),
    Fundamentals,
    News,
}

impl Endpoint {
    fn leaf(&self) -> &'static str {
        match self {
            Endpoint::Price(_) => "price",
            Endpoint::Fundamentals => "fundamentals",
            Endpoint::News => "news",
        }
    }

    /// Resolve against the API base, e.g., `http://localhost:8000` + `INFY` ->
    /// `http://localhost:8000/api/stock/INFY/price?range=5y`
    ///
    /// The ticker is always a single, percent-encoded path segment.
    pub fn url(&self, base: &Url, ticker: &str) -> Result<Url, FetchError> {
        if ticker.is_empty() {
            return Err(FetchError::Url("empty ticker".into()));
        }

        let mut url = base.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(format!("{base} cannot be a base url")))?
            .pop_if_empty()
            .extend(["api", "stock", ticker, self.leaf()]);

        if let Endpoint::Price(range) = self {
            url.query_pairs_mut().append_pair("range", range.as_str());
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8000").unwrap()
    }

    #[test]
    fn documented_paths() {
        let price = Endpoint::Price(PriceRange::default()).url(&base(), "INFY").unwrap();
        let fundamentals = Endpoint::Fundamentals.url(&base(), "INFY").unwrap();
        let news = Endpoint::News.url(&base(), "INFY").unwrap();

        assert_eq!(price.as_str(), "http://localhost:8000/api/stock/INFY/price?range=5y");
        assert_eq!(fundamentals.as_str(), "http://localhost:8000/api/stock/INFY/fundamentals");
        assert_eq!(news.as_str(), "http://localhost:8000/api/stock/INFY/news");
    }

    #[test]
    fn base_with_path_prefix() {
        let base = Url::parse("https://example.com/proxy/").unwrap();
        let url = Endpoint::News.url(&base, "TCS").unwrap();
        assert_eq!(url.as_str(), "https://example.com/proxy/api/stock/TCS/news");
    }

    #[test]
    fn ticker_stays_one_segment() {
        let url = Endpoint::Fundamentals.url(&base(), "A/B C").unwrap();
        assert_eq!(url.path(), "/api/stock/A%2FB%20C/fundamentals");
    }

    #[test]
    fn empty_ticker_is_rejected() {
        assert!(matches!(
            Endpoint::News.url(&base(), ""),
            Err(FetchError::Url(_))
        ));
    }

    #[test]
    fn range_parsing() {
        assert_eq!("3y".parse::<PriceRange>(), Ok(PriceRange::ThreeYears));
        assert!("10y".parse::<PriceRange>().is_err());
        assert_eq!(PriceRange::default().to_string(), "5y");
    }
}
