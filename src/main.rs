use anyhow::{bail, Result};
use clap::Parser;
use std::sync::Arc;

use food_meme_factory::api::{GenerationApi, HttpGenerationApi};
use food_meme_factory::app::run_app;
use food_meme_factory::cli::{Cli, Command};
use food_meme_factory::config::AppConfig;
use food_meme_factory::generation::{generate_meme, GenerationSession};
use food_meme_factory::logging::{default_log_dir, init_logging};
use food_meme_factory::notify::{Notification, Severity};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    init_logging(&log_dir)?;

    let config = AppConfig::load(cli.config.as_deref(), cli.base_url.as_deref())?;
    tracing::info!(base_url = %config.base_url, "starting");
    let api: Arc<dyn GenerationApi> = Arc::new(HttpGenerationApi::new(config.base_url.clone())?);

    if let Some(route) = cli.route() {
        return run_app(route, api, config).await;
    }

    match cli.cmd {
        Some(Command::Generate { prompt }) => generate_headless(api.as_ref(), &prompt).await,
        _ => Ok(()),
    }
}

async fn generate_headless(api: &dyn GenerationApi, prompt: &str) -> Result<()> {
    let mut session = GenerationSession::new();
    session.prompt.set(prompt);
    let mut notes: Vec<Notification> = Vec::new();
    generate_meme(api, &mut session, &mut notes).await;

    if let Some(err) = notes.iter().find(|n| n.severity == Severity::Error) {
        bail!("{}", err.description);
    }

    let out = serde_json::json!({
        "prompt": session.prompt.text(),
        "image_url": session.image_url(),
        "recipe": session.recipe_text(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
