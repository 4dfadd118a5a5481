use crate::error::WebError;
use crate::render::Renderer;
use rocket::response::content::RawHtml;
use rocket::{get, State};
use stockdeck_client::prelude::*;

fn parse_range(range: Option<&str>) -> Result<PriceRange, WebError> {
    match range {
        Some(range) => range.parse().map_err(WebError::BadRequest),
        None => Ok(PriceRange::default()),
    }
}

// home
#[get("/")]
pub fn landing(renderer: &State<Renderer>) -> Result<RawHtml<String>, WebError> {
    Ok(RawHtml(renderer.landing()?))
}

// "/stock/INFY"; served at once, the sections arrive afterwards
#[get("/stock/<ticker>?<range>")]
pub fn stock(
    ticker: &str,
    range: Option<&str>,
    renderer: &State<Renderer>,
) -> Result<RawHtml<String>, WebError> {
    let range = parse_range(range)?;
    Ok(RawHtml(renderer.shell(ticker, range)?))
}

// "/stock/INFY/sections"; price, fundamentals & news, once all three have settled
#[get("/stock/<ticker>/sections?<range>")]
pub async fn sections(
    ticker: &str,
    range: Option<&str>,
    api: &State<ApiClient>,
    renderer: &State<Renderer>,
) -> Result<RawHtml<String>, WebError> {
    let range = parse_range(range)?;

    let view = TickerView::new();
    view.load(api.inner(), Some(ticker), range).await;

    Ok(RawHtml(renderer.sections(&view.state().await)?))
}
