use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};

/// Failures of the web layer itself; backend failures of the detail sections are
/// rendered into the page instead and never end up here.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Query string the route cannot honour (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The `/api` proxy could not reach the backend (502).
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Backend origin the server was started with is unusable (500).
    #[error("misconfigured backend: {0}")]
    Config(String),

    /// Template compilation or rendering (500).
    #[error("render failure: {0}")]
    Render(#[from] tera::Error),

    /// Chart payload serialisation (500).
    #[error("serialisation failure: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad url built from configuration or request (500).
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl WebError {
    pub fn status(&self) -> Status {
        match self {
            WebError::BadRequest(_) => Status::BadRequest,
            WebError::Upstream(_) => Status::BadGateway,
            WebError::Config(_) | WebError::Render(_) | WebError::Json(_) | WebError::Url(_) => {
                Status::InternalServerError
            }
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for WebError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let status = self.status();
        if status.code >= 500 {
            log::error!("{} {}: {self}", req.method(), req.uri());
        } else {
            log::warn!("{} {}: {self}", req.method(), req.uri());
        }
        (status, self.to_string()).respond_to(req)
    }
}
