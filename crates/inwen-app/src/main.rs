use std::sync::Arc;

use clap::Parser;
use inwen_app::cli::Cli;
use inwen_app::controller::{AppController, ChannelSet};
use inwen_app::state::AppState;
use inwen_app::terminal::TerminalSurface;
use inwen_core::SelectionValidator;
use inwen_dispatcher::{Dispatch, LookupDispatcher};
use inwen_lang_english::EnglishTagger;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inwen=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr)),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let state = Arc::new(AppState::new(config.clone()));

    if let Some(provider) = cli.provider {
        state.settings.set_provider(provider)?;
    }

    let dispatcher: Arc<dyn Dispatch> = Arc::new(LookupDispatcher::new(
        &config.providers,
        &config.dispatch,
        state.settings.store(),
    )?);
    let validator = SelectionValidator::new(
        Arc::new(EnglishTagger::new()),
        state.settings.store(),
        config.locale.clone(),
    );

    tracing::info!(
        "Primary webhook: {} | Secondary webhook: {} | Locale: {}",
        config.providers.primary.url,
        config.providers.secondary.url,
        config.locale
    );

    let controller = AppController::new(state.clone(), ChannelSet::new(&config.channel));
    let mut tasks = controller
        .spawn_tasks(
            dispatcher,
            validator,
            TerminalSurface::new(std::io::stdout()),
            cli.source_url.clone(),
        )
        .await;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("Task failed during shutdown: {e}");
        }
    }

    Ok(())
}
