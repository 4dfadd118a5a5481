use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;
use std::time::Duration;
use stockdeck_client::prelude::*;
use stockdeck_web::render::fundamental_rows;

/// Terminal stand-in for the "Loading…" indicator.
pub fn spinner(msg: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title.bold());
}

fn failure(out: &mut String, what: &str, err: &FetchError) {
    let _ = writeln!(out, "  {}", format!("Could not load {what}: {err}").red());
}

/// Plain-text rendering of the detail view, same sections as the web page.
pub fn render_text(state: &ViewState) -> String {
    let data = match state {
        ViewState::Ready(data) => data,
        ViewState::Idle | ViewState::Loading { .. } => return "Loading…".to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", format!("Stock: {}", data.ticker).bold().underline(), data.range);

    // price
    heading(&mut out, "Price (EOD)");
    match &data.series {
        Ok(series) => match (series.first(), series.last()) {
            (Some(first), Some(last)) => {
                let low = series.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
                let high = series.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);
                let _ = writeln!(
                    out,
                    "  {} closes, {} .. {}",
                    series.len(),
                    first.date,
                    last.date
                );
                let _ = writeln!(
                    out,
                    "  first {}, last {}, low {low}, high {high}",
                    first.close, last.close
                );
            }
            _ => {
                let _ = writeln!(out, "  no closes");
            }
        },
        Err(e) => failure(&mut out, "price data", e),
    }

    // fundamentals
    heading(&mut out, "Fundamentals");
    match &data.fundamentals {
        Ok(Some(fundamentals)) => {
            for row in fundamental_rows(fundamentals) {
                let _ = writeln!(out, "  {}: {}", row.label, row.value);
            }
        }
        Ok(None) => {
            let _ = writeln!(out, "  No fundamentals.");
        }
        Err(e) => failure(&mut out, "fundamentals", e),
    }

    // news
    heading(&mut out, "News");
    match &data.news {
        Ok(news) => {
            for item in news {
                let _ = writeln!(out, "  • {} — {}", item.title, item.source);
                let _ = writeln!(out, "    {}", item.url.dimmed());
            }
        }
        Err(e) => failure(&mut out, "news", e),
    }

    out
}
