/// Failure of a single backend request.
///
/// Each of the three detail sections carries its own `Result<_, FetchError>`, so the
/// error has to be cheap to clone and printable straight into a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request URL could not be built from the API base and ticker.
    #[error("invalid request url: {0}")]
    Url(String),

    /// Connection refused, timeout, DNS, TLS ...
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered, but not with a 2xx.
    #[error("backend returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not the JSON we expected.
    #[error("unreadable response body: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::Url(err.to_string())
    }
}
