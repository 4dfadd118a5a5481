use crate::endpoint::{Endpoint, PriceRange};
use crate::error::FetchError;
use crate::model::{Fundamentals, NewsBody, NewsItem, PriceBody, PricePoint};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use url::Url;

/// The three reads the ticker detail view depends on.
///
/// Implemented over HTTP by [`ApiClient`]; tests swap in an in-memory fake.
pub trait StockApi: Sync {
    fn fetch_price(
        &self,
        ticker: &str,
        range: PriceRange,
    ) -> impl Future<Output = Result<Vec<PricePoint>, FetchError>> + Send;

    fn fetch_fundamentals(
        &self,
        ticker: &str,
    ) -> impl Future<Output = Result<Option<Fundamentals>, FetchError>> + Send;

    fn fetch_news(&self, ticker: &str) -> impl Future<Output = Result<Vec<NewsItem>, FetchError>> + Send;
}

/// [`reqwest::Client`] bound to a backend origin.
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(client: Client, base: Url) -> Self {
        ApiClient { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    /// GET `url` and decode the body as JSON; any non-2xx is an error.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        log::debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl StockApi for ApiClient {
    async fn fetch_price(
        &self,
        ticker: &str,
        range: PriceRange,
    ) -> Result<Vec<PricePoint>, FetchError> {
        let url = Endpoint::Price(range).url(&self.base, ticker)?;
        let body: PriceBody = self.get_json(url).await?;
        Ok(body.series)
    }

    async fn fetch_fundamentals(&self, ticker: &str) -> Result<Option<Fundamentals>, FetchError> {
        let url = Endpoint::Fundamentals.url(&self.base, ticker)?;
        self.get_json(url).await
    }

    async fn fetch_news(&self, ticker: &str) -> Result<Vec<NewsItem>, FetchError> {
        let url = Endpoint::News.url(&self.base, ticker)?;
        let body: NewsBody = self.get_json(url).await?;
        Ok(body.items)
    }
}
