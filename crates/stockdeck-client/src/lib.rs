pub mod api;
pub mod de;
pub mod endpoint;
pub mod error;
pub mod load;
pub mod model;
pub mod view;

pub mod prelude {
    pub use crate::api::{ApiClient, StockApi};
    pub use crate::endpoint::{Endpoint, PriceRange};
    pub use crate::error::FetchError;
    pub use crate::load::{load_ticker_data, Section, TickerData};
    pub use crate::model::{Fundamentals, NewsItem, PricePoint};
    pub use crate::view::{LoadTicket, TickerView, ViewState};

    pub fn build_client(
        user_agent: &str,
        timeout: std::time::Duration,
    ) -> Result<reqwest::Client, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(client)
    }
}
