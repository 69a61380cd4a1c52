//! `render-dashboard` loads the voting dashboard from its configured source
//! and writes the page as a static HTML document.

use std::io::Write;

use clap::Parser;
use voting_dashboard::{config::Config, load, log, render};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::parse();
    log::setup(&config, env!("CARGO_CRATE_NAME"))?;

    let source = config.data_source();
    tracing::info!(?source, "loading dashboard");
    let state = load::load(&source).await;
    if let load::LoadState::Failed(message) = &state {
        tracing::warn!("rendering error page: {message}");
    }

    let html = render::render_document(state);
    match &config.output {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!("wrote dashboard to {}", path.display());
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }

    Ok(())
}
