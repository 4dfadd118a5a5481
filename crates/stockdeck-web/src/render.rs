use crate::error::WebError;
use serde::Serialize;
use stockdeck_client::prelude::*;
use tera::{Context, Tera};
use url::Url;

/// Tickers linked from the landing page.
pub const EXAMPLE_TICKERS: [&str; 2] = ["INFY", "TCS"];

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("stock.html", include_str!("../templates/stock.html")),
    ("sections.html", include_str!("../templates/sections.html")),
];

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Chart.js `data` object for a single line series:
///
/// ```json
/// {
///     "labels": ["2024-01-01", "2024-01-02"],
///     "datasets": [{ "label": "INFY Close", "data": [100.0, 105.0], "tension": 0.2 }]
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub tension: f64,
}

impl ChartData {
    pub fn from_series(ticker: &str, series: &[PricePoint]) -> Self {
        ChartData {
            labels: series.iter().map(|p| p.date.clone()).collect(),
            datasets: vec![Dataset {
                label: format!("{ticker} Close"),
                data: series.iter().map(|p| p.close).collect(),
                tension: 0.2,
            }],
        }
    }
}

/// One `<li>` of the fundamentals list.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FundamentalRow {
    pub label: &'static str,
    pub value: String,
}

/// Fixed order: market cap, P/E, ROE (as %), EPS (TTM), D/E.
///
/// A ratio the backend left out renders as an empty value.
pub fn fundamental_rows(f: &Fundamentals) -> Vec<FundamentalRow> {
    let row = |label, value: Option<f64>, suffix: &str| FundamentalRow {
        label,
        value: value.map(|v| format!("{v}{suffix}")).unwrap_or_default(),
    };
    vec![
        row("Market Cap", f.market_cap, ""),
        row("P/E", f.pe, ""),
        row("ROE", f.roe, "%"),
        row("EPS (TTM)", f.eps_ttm, ""),
        row("D/E", f.debt_to_equity, ""),
    ]
}

#[derive(Serialize, Debug, Default)]
struct SectionsContext {
    loading: bool,
    chart_json: Option<String>,
    price_error: Option<String>,
    fundamentals: Option<Vec<FundamentalRow>>,
    fundamentals_error: Option<String>,
    news: Vec<NewsItem>,
    news_error: Option<String>,
}

impl SectionsContext {
    fn ready(data: &TickerData) -> Result<Self, WebError> {
        let mut ctx = SectionsContext::default();

        match &data.series {
            Ok(series) => {
                let chart = ChartData::from_series(&data.ticker, series);
                ctx.chart_json = Some(serde_json::to_string(&chart)?);
            }
            Err(e) => ctx.price_error = Some(e.to_string()),
        }

        match &data.fundamentals {
            Ok(fundamentals) => ctx.fundamentals = fundamentals.as_ref().map(fundamental_rows),
            Err(e) => ctx.fundamentals_error = Some(e.to_string()),
        }

        match &data.news {
            Ok(news) => ctx.news = news.clone(),
            Err(e) => ctx.news_error = Some(e.to_string()),
        }

        Ok(ctx)
    }
}

/// Same-origin link to the sections fragment of `ticker`, ticker percent-encoded.
pub fn sections_href(ticker: &str, range: PriceRange) -> Result<String, WebError> {
    // any absolute base will do; only path & query are kept
    let mut url = Url::parse("http://localhost/")?;
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().extend(["stock", ticker, "sections"]);
    }
    url.query_pairs_mut().append_pair("range", range.as_str());
    Ok(format!("{}?{}", url.path(), url.query().unwrap_or_default()))
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// HTML for every page; templates are compiled into the binary.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, WebError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Renderer { tera })
    }

    fn render(&self, name: &str, ctx: &Context) -> Result<String, WebError> {
        Ok(self.tera.render(name, ctx)?)
    }

    /// Landing page.
    pub fn landing(&self) -> Result<String, WebError> {
        let mut ctx = Context::new();
        ctx.insert("tickers", &EXAMPLE_TICKERS);
        self.render("index.html", &ctx)
    }

    /// Detail page as first served: heading plus the loading indicator.
    pub fn shell(&self, ticker: &str, range: PriceRange) -> Result<String, WebError> {
        let mut ctx = Context::new();
        ctx.insert("ticker", ticker);
        ctx.insert("sections_href", &sections_href(ticker, range)?);
        self.render("stock.html", &ctx)
    }

    /// The three data sections; nothing but the loading indicator until `Ready`.
    pub fn sections(&self, state: &ViewState) -> Result<String, WebError> {
        let ctx = match state {
            ViewState::Ready(data) => SectionsContext::ready(data)?,
            ViewState::Idle | ViewState::Loading { .. } => SectionsContext {
                loading: true,
                ..Default::default()
            },
        };
        self.render("sections.html", &Context::from_serialize(&ctx)?)
    }
}
