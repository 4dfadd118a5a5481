use crate::error::WebError;
use reqwest::Method;
use rocket::http::uri::{fmt::Path, Origin, Segments};
use rocket::http::{ContentType, Status};
use rocket::{delete, get, patch, post, put, State};
use stockdeck_client::prelude::ApiClient;
use url::Url;

type Relayed = Result<(Status, (ContentType, Vec<u8>)), WebError>;

/// Map `/api/<path..>?<query>` onto the backend origin, e.g.,
/// `/api/stock/INFY/price?range=5y` -> `{base}/api/stock/INFY/price?range=5y`
pub fn upstream_url(base: &Url, path: &[&str], query: Option<&str>) -> Result<Url, WebError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| WebError::Config(format!("{base} cannot be a base url")))?
        .pop_if_empty()
        .push("api")
        .extend(path);
    url.set_query(query.filter(|q| !q.is_empty()));
    Ok(url)
}

/// Send one request to the backend, relaying status, content type and body.
async fn relay(
    method: Method,
    path: Segments<'_, Path>,
    origin: &Origin<'_>,
    api: &ApiClient,
    content_type: Option<&ContentType>,
    body: Vec<u8>,
) -> Relayed {
    let segments: Vec<&str> = path.collect();
    let query = origin.query().map(|q| q.as_str());
    let url = upstream_url(api.base(), &segments, query)?;

    log::debug!("proxy {method} -> {url}");
    let mut request = api.http().request(method, url.clone());
    if let Some(content_type) = content_type {
        request = request.header(reqwest::header::CONTENT_TYPE, content_type.to_string());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| WebError::Upstream(format!("{url}: {e}")))?;

    let status = Status::new(response.status().as_u16());
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(ContentType::parse_flexible)
        .unwrap_or(ContentType::JSON);
    let body = response
        .bytes()
        .await
        .map_err(|e| WebError::Upstream(format!("{url}: {e}")))?;

    Ok((status, (content_type, body.to_vec())))
}

#[get("/api/<path..>")]
pub async fn forward(path: Segments<'_, Path>, origin: &Origin<'_>, api: &State<ApiClient>) -> Relayed {
    relay(Method::GET, path, origin, api, None, Vec::new()).await
}

#[delete("/api/<path..>")]
pub async fn forward_delete(
    path: Segments<'_, Path>,
    origin: &Origin<'_>,
    api: &State<ApiClient>,
) -> Relayed {
    relay(Method::DELETE, path, origin, api, None, Vec::new()).await
}

#[post("/api/<path..>", data = "<body>")]
pub async fn forward_post(
    path: Segments<'_, Path>,
    origin: &Origin<'_>,
    content_type: Option<&ContentType>,
    api: &State<ApiClient>,
    body: Vec<u8>,
) -> Relayed {
    relay(Method::POST, path, origin, api, content_type, body).await
}

#[put("/api/<path..>", data = "<body>")]
pub async fn forward_put(
    path: Segments<'_, Path>,
    origin: &Origin<'_>,
    content_type: Option<&ContentType>,
    api: &State<ApiClient>,
    body: Vec<u8>,
) -> Relayed {
    relay(Method::PUT, path, origin, api, content_type, body).await
}

#[patch("/api/<path..>", data = "<body>")]
pub async fn forward_patch(
    path: Segments<'_, Path>,
    origin: &Origin<'_>,
    content_type: Option<&ContentType>,
    api: &State<ApiClient>,
    body: Vec<u8>,
) -> Relayed {
    relay(Method::PATCH, path, origin, api, content_type, body).await
}
