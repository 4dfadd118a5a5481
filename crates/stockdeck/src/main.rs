use anyhow::Result;
use clap::Parser;
use stockdeck_client::prelude::*;

mod cli;
mod config;
mod ui;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    let settings = config::Settings::from_cli(&cli)?;
    let api = settings.api_client()?;
    log::info!("Backend: {}", settings.api_base);

    // cli framework:
    // "> stockdeck <COMMAND>"
    match cli.command {
        // "> stockdeck serve [--address] [--port]"
        // run the web front end
        cli::Commands::Serve { address, port } => {
            let config = rocket::Config {
                address,
                port,
                ..rocket::Config::default()
            };

            stockdeck_web::rocket(api, config)?
                .launch()
                .await
                .map_err(|e| anyhow::anyhow!("web server failed: {e}"))?;
        }

        // "> stockdeck show <TICKER> [--range]"
        // fetch one ticker and print it
        cli::Commands::Show { ticker, range } => {
            let view = TickerView::new();

            let pb = ui::spinner(format!("Loading {ticker} ..."));
            view.load(&api, Some(ticker.as_str()), range.into()).await;
            pb.finish_and_clear();

            let state = view.state().await;
            println!("{}", ui::render_text(&state));

            if let ViewState::Ready(data) = &state {
                if data.has_failures() {
                    log::warn!("[{ticker}] some sections failed to load");
                }
            }
        }
    }

    Ok(())
}
