use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::net::IpAddr;
use stockdeck_client::prelude::PriceRange;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Origin of the stock API backend.
    #[arg(long, global = true, env = "API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-request timeout against the backend, in seconds.
    #[arg(long, global = true, env = "API_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout: u64,

    /// User-Agent sent to the backend.
    #[arg(long, global = true, env = "USER_AGENT")]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web front end.
    Serve {
        #[arg(long, env = "STOCKDECK_ADDRESS", default_value = "127.0.0.1")]
        address: IpAddr,

        #[arg(long, env = "STOCKDECK_PORT", default_value_t = 8080)]
        port: u16,
    },

    /// Fetch price, fundamentals & news for one ticker and print them.
    Show {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        ticker: String,

        #[arg(long, value_enum, default_value = "5y")]
        range: RangeArg,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeArg {
    #[value(name = "1y")]
    OneYear,

    #[value(name = "3y")]
    ThreeYears,

    #[value(name = "5y")]
    FiveYears,
}

impl From<RangeArg> for PriceRange {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::OneYear => PriceRange::OneYear,
            RangeArg::ThreeYears => PriceRange::ThreeYears,
            RangeArg::FiveYears => PriceRange::FiveYears,
        }
    }
}
