mod assignment;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod models;
mod pipeline;
mod publish;
mod render;
mod store;
mod synth;

use std::sync::Arc;

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pipeline::Pipeline;
use crate::publish::HtmlDocumentPublisher;
use crate::render::LlmTextRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting rosterforge v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let renderer = Arc::new(LlmTextRenderer::new(llm));
    let publisher = Arc::new(HtmlDocumentPublisher);
    let catalog = Catalog::builtin();

    let pipeline = Pipeline::new(config, catalog, renderer, publisher);
    let mut rng = StdRng::from_entropy();

    // Mode is a bare positional word, not a flag:
    // `rosterforge [append|rest|republish]`
    let mode = std::env::args().nth(1);
    let summary = match mode.as_deref() {
        None => pipeline.generate_all(&mut rng).await?,
        Some("append") => pipeline.append_profiles(&mut rng).await?,
        Some("rest") => pipeline.generate_rest(&mut rng).await?,
        Some("republish") => pipeline.republish_rfp_docs().await?,
        Some(other) => bail!("unknown mode '{other}' (expected 'append', 'rest' or 'republish')"),
    };

    info!(
        "done: {} profiles, {} projects, {} RFPs, {} documents",
        summary.profiles, summary.projects, summary.rfps, summary.documents
    );

    Ok(())
}
