use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use lexis_config::Config;
use lexis_suggest::{DisabledSuggester, LlmSuggester, WordSuggester};
use lexis_types::Route;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod audio;
pub mod command;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod render;
pub mod scope;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::audio::SimulatedAudio;
use self::controller::AppController;
use self::state::AppState;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

/// Vocabulary trainer in the terminal
#[derive(Debug, Parser)]
#[command(name = "lexis", version)]
struct Cli {
    /// JSON profile to load instead of the environment config
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Write the current config as a profile and exit
    #[arg(long, value_name = "PATH")]
    write_profile: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Screen to open first, e.g. "review" or "category 2"
    #[arg(long, default_value = "home")]
    screen: String,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder
            .with_ansi(atty::is(atty::Stream::Stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Some(path) = &cli.write_profile {
        return profile::write_profile(path, Config::new());
    }

    let config = match &cli.profile {
        Some(path) => profile::load_profile(path)?,
        None => Config::new(),
    };
    let start: Route = cli.screen.parse()?;

    let suggester: Arc<dyn WordSuggester> = if config.ai.enabled {
        Arc::new(LlmSuggester::from_config(&config.ai)?)
    } else {
        tracing::warn!("AI suggestions disabled, placeholder words only");
        Arc::new(DisabledSuggester)
    };
    tracing::info!(provider = %suggester.metadata().name, "suggestion provider ready");

    let state = Arc::new(AppState::new(
        config,
        suggester,
        Arc::new(SimulatedAudio::default()),
    ));
    let controller = AppController::new(state).await;
    let mut tasks = controller.spawn_tasks(start)?;

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("task exited: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task exited during shutdown: {e}");
        }
    }

    Ok(())
}
