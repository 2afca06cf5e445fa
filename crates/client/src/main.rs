//! Rover mission client binary.
//!
//! Composition root: loads configuration, builds the runtime with a
//! file-backed mission provider and a stdout printer, launches one run and
//! waits for it to end.
//!
//! # Examples
//!
//! ```bash
//! # Paced at one step per second
//! cargo run -p rover-client -- crates/rover/content/data/missions/survey.json
//!
//! # Instant, JSON events, custom settings
//! cargo run -p rover-client -- mission.json --config rover.toml --delay-ms 0 --json
//! ```

mod config;
mod printer;
mod provider;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rover_core::RunPhase;
use rover_runtime::Runtime;
use tokio::sync::broadcast::error::RecvError;

use printer::{EventPrinter, OutputFormat};
use provider::MissionFileProvider;

/// Drive a rover across a grid from a mission file
#[derive(Parser, Debug)]
#[command(name = "rover")]
#[command(version)]
struct Cli {
    /// Mission JSON with `start_point`, `weirs` and `command`
    mission: PathBuf,

    /// Settings TOML (grid, collision policy, step delay)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pause before each step, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    setup_logging();

    let runtime_config = config::resolve(cli.config.as_deref(), cli.delay_ms)?;
    tracing::info!(
        "Grid {}x{}, collision {}, step delay {:?}",
        runtime_config.simulation.grid.width,
        runtime_config.simulation.grid.height,
        runtime_config.simulation.collision,
        runtime_config.step_delay
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let runtime = Runtime::builder()
        .config(runtime_config)
        .plan_provider(MissionFileProvider::new(&cli.mission))
        .observer(EventPrinter::new(format))
        .build()
        .await?;

    let mut events = runtime.subscribe_events();
    let run = runtime
        .launch()
        .await
        .with_context(|| format!("Failed to start mission {}", cli.mission.display()))?;
    tracing::info!(%run, "Mission launched");

    // Printing happens in the observer; the subscription only tracks the end.
    let phase = loop {
        match events.recv().await {
            Ok(event) => {
                if let Some(phase) = event.event.phase() {
                    break phase;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event subscriber lagged");
            }
            Err(RecvError::Closed) => bail!("Runtime stopped before the run finished"),
        }
    };

    runtime.shutdown().await?;
    tracing::info!(%phase, "Client shutdown complete");

    match phase {
        RunPhase::Completed => Ok(()),
        other => bail!("Mission ended: {other}"),
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "rover",
            "mission.json",
            "--config",
            "rover.toml",
            "--delay-ms",
            "0",
            "--json",
        ]);

        assert_eq!(cli.mission, PathBuf::from("mission.json"));
        assert_eq!(cli.config, Some(PathBuf::from("rover.toml")));
        assert_eq!(cli.delay_ms, Some(0));
        assert!(cli.json);
    }
}
