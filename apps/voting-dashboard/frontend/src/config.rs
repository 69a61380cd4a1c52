//! Where the dashboard gets its data, and the render CLI's configuration.

use reqwest::Url;

/// Build-time variable naming the base URL of the candidate/voter service.
pub const API_URL_ENV: &str = "VOTING_DASHBOARD_API_URL";

/// Source of the candidates and voters shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The fixed seed lists. No requests are made.
    #[default]
    Seed,

    /// Fetch both lists from the service at this base URL.
    Api(Url),
}

impl DataSource {
    pub fn from_api_url(api_url: Option<Url>) -> Self {
        api_url.map_or(Self::Seed, Self::Api)
    }

    /// The source baked into the web build via `VOTING_DASHBOARD_API_URL`.
    /// Unset or unparseable means seed data.
    pub fn from_build_env() -> Self {
        Self::from_raw_api_url(option_env!("VOTING_DASHBOARD_API_URL"))
    }

    fn from_raw_api_url(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => Self::Seed,
            Some(raw) => match raw.parse() {
                Ok(url) => Self::Api(url),
                Err(err) => {
                    log::error!("ignoring invalid {API_URL_ENV} {raw:?}: {err}");
                    Self::Seed
                }
            },
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::Config;

#[cfg(feature = "cli")]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use reqwest::Url;

    use super::{DataSource, API_URL_ENV};

    /// Render a static HTML snapshot of the voting dashboard.
    #[derive(Debug, Clone, Parser)]
    #[command(author, version, about)]
    pub struct Config {
        /// Base URL of the candidate/voter service, e.g. `http://localhost:3000`.
        /// Seed data is used when unset.
        #[arg(long, env = API_URL_ENV)]
        pub api_url: Option<Url>,

        /// File to write the HTML to. Defaults to stdout.
        #[arg(long, short, env = "OUTPUT")]
        pub output: Option<PathBuf>,

        /// Log level.
        #[arg(long, env = "LOG_LEVEL", default_value = "info")]
        pub log_level: tracing::Level,
    }

    impl Config {
        pub fn data_source(&self) -> DataSource {
            DataSource::from_api_url(self.api_url.clone())
        }
    }
}
