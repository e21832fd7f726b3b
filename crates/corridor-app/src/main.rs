use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use corridor_app::autopilot::PilotKind;
use corridor_app::game_loop::{spawn_game_loop, LoopConfig};
use corridor_app::state::{GameLoopCommand, LoopState};
use corridor_app::summary::RunSummary;
use corridor_core::commands::PlayerCommand;
use corridor_sim::config::SimConfig;

/// How often the main thread checks a running loop against the time limit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Parser)]
#[command(name = "corridor", about = "Headless runner for the CORRIDOR arcade shooter")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fly scripted runs and print a JSON summary
    Run {
        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Maximum number of frames to simulate
        #[arg(short, long, default_value = "3600")]
        frames: u64,
        /// Frame period in milliseconds (overrides the config file)
        #[arg(long)]
        frame_ms: Option<f64>,
        /// Scripted pilot flying the ship
        #[arg(short, long, value_enum, default_value_t = PilotKind::Weave)]
        pilot: PilotKind,
        /// Pace frames to wall-clock time instead of running flat out
        #[arg(long)]
        realtime: bool,
        /// JSON file with engine settings
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Runs to start after the first game over
        #[arg(short, long, default_value = "0")]
        restarts: u32,
        /// Stop the loop after this many seconds of wall time
        #[arg(long)]
        time_limit: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            seed,
            frames,
            frame_ms,
            pilot,
            realtime,
            config,
            restarts,
            time_limit,
        } => {
            let mut sim_config = match &config {
                Some(path) => load_config(path)?,
                None => SimConfig::default(),
            };
            if let Some(seed) = seed {
                sim_config.seed = seed;
            }
            if let Some(frame_ms) = frame_ms {
                sim_config.frame_ms = frame_ms;
            }
            sim_config.validate().context("invalid engine settings")?;

            let frame_period = Duration::try_from_secs_f64(sim_config.frame_ms / 1000.0)
                .context("frame period out of range")?;
            let loop_config = LoopConfig {
                frame_period,
                paced: realtime,
                max_frames: frames,
                restarts,
            };
            tracing::info!(
                seed = sim_config.seed,
                frames,
                ?pilot,
                realtime,
                "starting runner"
            );

            let summary = run(sim_config, loop_config, pilot, time_limit)?;
            tracing::info!(
                runs = summary.runs.len(),
                best_survival_ms = summary.best_survival_ms(),
                destroyed = summary.total_destroyed(),
                "runner finished"
            );
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<SimConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SimConfig::from_json_str(&json)
        .with_context(|| format!("failed to load config {}", path.display()))
}

fn run(
    sim_config: SimConfig,
    loop_config: LoopConfig,
    pilot: PilotKind,
    time_limit: Option<u64>,
) -> anyhow::Result<RunSummary> {
    let seed = sim_config.seed;
    let frames = loop_config.max_frames;
    let state = LoopState::new();

    let command_rx = state
        .connect()
        .ok_or_else(|| anyhow!("loop state lock poisoned"))?;
    anyhow::ensure!(
        state.send(GameLoopCommand::Player(PlayerCommand::StartGame)),
        "game loop channel closed before start"
    );
    let handle = spawn_game_loop(
        sim_config,
        loop_config,
        pilot,
        command_rx,
        Arc::clone(&state.latest_snapshot),
    )
    .context("failed to spawn game loop thread")?;

    let deadline =
        time_limit.and_then(|secs| Instant::now().checked_add(Duration::from_secs(secs)));
    if let Some(deadline) = deadline {
        while !handle.is_finished() {
            if Instant::now() >= deadline {
                tracing::info!(time_limit_secs = ?time_limit, "time limit reached, stopping loop");
                state.shutdown();
                break;
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    let runs = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    if let Some(last) = state.latest() {
        tracing::debug!(phase = ?last.phase, tick = last.time.tick, "final frame");
    }

    Ok(RunSummary {
        seed,
        pilot,
        frames,
        runs,
    })
}
