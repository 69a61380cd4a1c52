//! Logging for the render CLI.
//!
//! The CLI uses the `tracing` library for logging. Records from crates
//! logging through `log` are forwarded as well. You may use the `RUST_LOG`
//! environment variable to configure logging at runtime (see
//! [`EnvFilter`][`tracing_subscriber::EnvFilter`]).

use tracing_subscriber::{prelude::*, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Targets logged at `--log-level` unless `RUST_LOG` says otherwise.
const LIBRARY_TARGETS: [&str; 2] = ["voting_dashboard", "voting_dashboard_client"];

/// Sets up logging for the CLI. Call this early in the process lifecycle to
/// ensure logs are not silently ignored.
///
/// `bin_target` is the calling binary's crate name, i.e.
/// `env!("CARGO_CRATE_NAME")`, so its own events pass the default filter.
pub fn setup(config: &Config, bin_target: &str) -> color_eyre::Result<()> {
    color_eyre::install()?;
    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(env_filter(config.log_level, bin_target, rust_log.as_deref()))
        .with(stderr_log)
        .init();
    Ok(())
}

/// Defaults every dashboard target to `level`, then applies `rust_log` on
/// top so its directives win for any target they name.
fn env_filter(level: tracing::Level, bin_target: &str, rust_log: Option<&str>) -> EnvFilter {
    let mut directives: Vec<String> = LIBRARY_TARGETS
        .iter()
        .chain([&bin_target])
        .map(|target| format!("{target}={level}"))
        .collect();
    if let Some(rust_log) = rust_log.map(str::trim).filter(|rust_log| !rust_log.is_empty()) {
        directives.push(rust_log.to_owned());
    }
    EnvFilter::builder().parse_lossy(directives.join(","))
}
