use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use std::time::Duration;
use stockdeck_client::prelude::*;
use url::Url;

/// Resolved runtime settings; each value comes from its flag, else its env var
/// (`.env` included), else the built-in fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base = Url::parse(&cli.api_base)
            .with_context(|| format!("API_BASE is not a url: {}", cli.api_base))?;
        if api_base.cannot_be_a_base() {
            bail!("API_BASE cannot be used as a base url: {api_base}");
        }

        let user_agent = cli
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("stockdeck/{}", env!("CARGO_PKG_VERSION")));

        Ok(Settings {
            api_base,
            timeout: Duration::from_secs(cli.timeout),
            user_agent,
        })
    }

    pub fn api_client(&self) -> Result<ApiClient> {
        let client = build_client(&self.user_agent, self.timeout)?;
        Ok(ApiClient::new(client, self.api_base.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn explicit_flags() {
        let cli = parse(&[
            "stockdeck",
            "--api-base",
            "https://trading-platform-mv-1.onrender.com",
            "--timeout",
            "4",
            "--user-agent",
            "tester",
            "show",
            "TCS",
        ]);
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(
            settings.api_base.as_str(),
            "https://trading-platform-mv-1.onrender.com/"
        );
        assert_eq!(settings.timeout, Duration::from_secs(4));
        assert_eq!(settings.user_agent, "tester");
        assert!(settings.api_client().is_ok());
    }

    #[test]
    fn rejects_bad_base() {
        let cli = parse(&["stockdeck", "--api-base", "not a url", "show", "TCS"]);
        assert!(Settings::from_cli(&cli).is_err());

        let cli = parse(&["stockdeck", "--api-base", "mailto:ops@example.com", "show", "TCS"]);
        assert!(Settings::from_cli(&cli).is_err());
    }
}
