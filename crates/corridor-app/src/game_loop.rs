//! Game loop thread: drives the simulation engine one frame at a time.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel owned by the caller, which
//! starts the first game by sending `StartGame`. The latest snapshot is
//! stored in shared state for polling. The thread returns one report per run
//! when it finishes.

use std::io;
use std::sync::{mpsc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use corridor_core::commands::PlayerCommand;
use corridor_core::constants::FRAME_MS;
use corridor_core::enums::GamePhase;
use corridor_core::state::GameStateSnapshot;
use corridor_sim::config::SimConfig;
use corridor_sim::CorridorEngine;

use crate::autopilot::{Autopilot, PilotKind};
use crate::state::{GameLoopCommand, SharedSnapshot};
use crate::summary::RunReport;

/// How the loop paces and bounds itself.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Nominal wall time per frame at 1x speed.
    pub frame_period: Duration,
    /// Sleep between frames and feed measured wall time to the engine.
    /// When false, frames run back to back with a fixed delta.
    pub paced: bool,
    /// Stop after this many frames.
    pub max_frames: u64,
    /// Runs to start after the first game over.
    pub restarts: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_period: Duration::from_secs_f64(FRAME_MS / 1000.0),
            paced: false,
            max_frames: 3600,
            restarts: 0,
        }
    }
}

impl LoopConfig {
    pub fn frame_ms(&self) -> f64 {
        self.frame_period.as_secs_f64() * 1000.0
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns a handle yielding the run reports.
pub fn spawn_game_loop(
    sim_config: SimConfig,
    loop_config: LoopConfig,
    pilot: PilotKind,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
) -> io::Result<JoinHandle<Vec<RunReport>>> {
    std::thread::Builder::new()
        .name("corridor-game-loop".into())
        .spawn(move || {
            let engine = CorridorEngine::new(sim_config);
            run_game_loop(
                engine,
                &loop_config,
                Autopilot::new(pilot),
                cmd_rx,
                &latest_snapshot,
            )
        })
}

/// The game loop. Runs until the frame budget is spent, the last allowed
/// run ends, or a Shutdown command arrives.
///
/// The engine sits in the menu until a `StartGame` command arrives. After
/// each game over the loop restarts on its own while restarts remain.
pub fn run_game_loop(
    mut engine: CorridorEngine,
    config: &LoopConfig,
    mut autopilot: Autopilot,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> Vec<RunReport> {
    let mut reports = Vec::new();
    let mut restarts_left = config.restarts;
    let mut last: Option<GameStateSnapshot> = None;
    let mut next_frame_time = Instant::now();
    let mut last_frame_time = Instant::now();

    for _ in 0..config.max_frames {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    tracing::debug!("game loop shutting down");
                    return finish(reports, last);
                }
                // A dropped sender leaves the loop running to its budget.
                Err(mpsc::TryRecvError::Empty | mpsc::TryRecvError::Disconnected) => break,
            }
        }

        // 2. Read input and advance one frame
        let delta_ms = if config.paced {
            let now = Instant::now();
            let measured = now.duration_since(last_frame_time).as_secs_f64() * 1000.0;
            last_frame_time = now;
            measured * engine.time_scale()
        } else {
            config.frame_ms()
        };
        let input = autopilot.input(last.as_ref());
        let snapshot = engine.tick(delta_ms, input);

        // 3. Record finished runs and restart if allowed
        let ended = snapshot.phase == GamePhase::GameOver
            && last.as_ref().is_some_and(|prev| prev.phase == GamePhase::Active);
        if ended {
            let report = RunReport::from_snapshot(&snapshot);
            tracing::info!(
                run = reports.len() + 1,
                survival_ms = report.survival_ms,
                destroyed = report.asteroids_destroyed,
                "run finished"
            );
            reports.push(report);
            if restarts_left == 0 {
                store(latest_snapshot, &snapshot);
                return reports;
            }
            restarts_left -= 1;
            engine.queue_command(PlayerCommand::Restart);
        }

        // 4. Store latest snapshot for polling
        store(latest_snapshot, &snapshot);
        last = Some(snapshot);

        // 5. Sleep until next frame, adjusting for time_scale
        if config.paced {
            let time_scale = engine.time_scale();
            let effective_period = if time_scale > 0.001 {
                config.frame_period.div_f64(time_scale)
            } else {
                config.frame_period
            };

            next_frame_time += effective_period;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > effective_period * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_frame_time = now;
            }
        }
    }

    finish(reports, last)
}

/// Close out a loop that stopped mid-run.
fn finish(mut reports: Vec<RunReport>, last: Option<GameStateSnapshot>) -> Vec<RunReport> {
    if let Some(snapshot) = last.filter(|s| s.phase == GamePhase::Active) {
        reports.push(RunReport::from_snapshot(&snapshot));
    }
    reports
}

fn store(latest_snapshot: &Mutex<Option<GameStateSnapshot>>, snapshot: &GameStateSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::state::LoopState;

    fn headless(max_frames: u64, restarts: u32) -> LoopConfig {
        LoopConfig {
            max_frames,
            restarts,
            ..Default::default()
        }
    }

    fn started_channel() -> (mpsc::Sender<GameLoopCommand>, mpsc::Receiver<GameLoopCommand>) {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        (tx, rx)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Restart))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_period_default() {
        let config = LoopConfig::default();
        assert!((config.frame_ms() - FRAME_MS).abs() < 1e-6);
    }

    #[test]
    fn test_loop_waits_for_start_command() {
        let (_tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        let reports = run_game_loop(
            CorridorEngine::new(SimConfig::default()),
            &headless(10, 0),
            Autopilot::new(PilotKind::Weave),
            rx,
            &latest,
        );

        assert!(reports.is_empty());
        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.phase, GamePhase::Menu);
        assert_eq!(snap.time.tick, 0);
    }

    #[test]
    fn test_budget_ends_active_run() {
        let (_tx, rx) = started_channel();
        let latest = Mutex::new(None);
        let reports = run_game_loop(
            CorridorEngine::new(SimConfig::default()),
            &headless(30, 0),
            Autopilot::new(PilotKind::Idle),
            rx,
            &latest,
        );

        assert_eq!(reports.len(), 1);
        assert!(!reports[0].game_over);
        assert_eq!(reports[0].ticks, 30);
        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.phase, GamePhase::Active);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        let latest = Mutex::new(None);
        let reports = run_game_loop(
            CorridorEngine::new(SimConfig::default()),
            &headless(1000, 0),
            Autopilot::new(PilotKind::Weave),
            rx,
            &latest,
        );

        assert!(reports.is_empty());
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_idle_pilot_runs_are_reported() {
        // An idle ship sits in the middle of the corridor; with enough
        // frames an asteroid eventually hits it.
        let (_tx, rx) = started_channel();
        let latest = Mutex::new(None);
        let reports = run_game_loop(
            CorridorEngine::new(SimConfig::default()),
            &headless(200_000, 1),
            Autopilot::new(PilotKind::Idle),
            rx,
            &latest,
        );

        assert!(!reports.is_empty() && reports.len() <= 2);
        let finished: Vec<_> = reports.iter().filter(|r| r.game_over).collect();
        assert!(!finished.is_empty());
        assert!(finished.iter().all(|r| r.survival_ms > 0.0));
    }

    #[test]
    fn test_spawned_thread_matches_inline_run() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (_tx, rx) = started_channel();
        let handle = spawn_game_loop(
            SimConfig {
                seed: 99,
                ..Default::default()
            },
            headless(120, 0),
            PilotKind::Weave,
            rx,
            Arc::clone(&latest),
        )
        .unwrap();
        let threaded = handle.join().unwrap();

        let (_tx2, rx) = started_channel();
        let inline = run_game_loop(
            CorridorEngine::new(SimConfig {
                seed: 99,
                ..Default::default()
            }),
            &headless(120, 0),
            Autopilot::new(PilotKind::Weave),
            rx,
            &Mutex::new(None),
        );

        assert_eq!(threaded, inline);
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_loop_state_stops_spawned_loop() {
        let state = LoopState::new();
        let rx = state.connect().unwrap();
        assert!(state.send(GameLoopCommand::Player(PlayerCommand::StartGame)));
        let handle = spawn_game_loop(
            SimConfig::default(),
            LoopConfig {
                paced: true,
                ..headless(u64::MAX, 0)
            },
            PilotKind::Weave,
            rx,
            Arc::clone(&state.latest_snapshot),
        )
        .unwrap();

        while state.latest().is_none() {
            std::thread::sleep(Duration::from_millis(1));
        }
        state.shutdown();
        let reports = handle.join().unwrap();

        // One report, whether the run was cut short or already lost.
        assert_eq!(reports.len(), 1);
        assert!(!state.send(GameLoopCommand::Shutdown));
    }
}
