//! Simulation engine, the core of the game.
//!
//! `CorridorEngine` owns the hecs ECS world, processes UI commands, runs
//! all systems once per frame, and produces `GameStateSnapshot`s.
//! Completely headless (no renderer dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use corridor_core::commands::PlayerCommand;
use corridor_core::enums::GamePhase;
use corridor_core::events::AudioEvent;
use corridor_core::input::InputState;
use corridor_core::state::GameStateSnapshot;
use corridor_core::types::{sanitize_delta_ms, SimTime};
use corridor_pilot::handling::HandlingProfile;

use crate::config::SimConfig;
use crate::difficulty::DifficultyManager;
use crate::scene::SceneLedger;
use crate::stats::RunStats;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all run state.
pub struct CorridorEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    scene: SceneLedger,
    audio_events: Vec<AudioEvent>,
    handling: HandlingProfile,

    // --- Per-run state, rebuilt by `start_run` ---
    player: Option<Entity>,
    difficulty: DifficultyManager,
    since_last_spawn_ms: f64,
    stats: RunStats,
}

impl CorridorEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            scene: SceneLedger::new(),
            audio_events: Vec::new(),
            handling: HandlingProfile::default(),
            player: None,
            difficulty: DifficultyManager::new(),
            since_last_spawn_ms: 0.0,
            stats: RunStats::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `delta_ms` is the wall time since the previous frame; non-finite or
    /// negative values count as zero. `input` is the set of keys held
    /// during this frame.
    pub fn tick(&mut self, delta_ms: f64, input: InputState) -> GameStateSnapshot {
        self.process_commands();

        let delta_ms = sanitize_delta_ms(delta_ms);
        if self.phase == GamePhase::Active {
            if let Some(player) = self.player {
                self.run_systems(player, delta_ms, &input);
                self.time.advance(delta_ms);
            }
        }

        let scene_events = self.scene.take_events();
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.difficulty.current(),
            scene_events,
            audio_events,
            &self.stats,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The ship entity, while a run is active.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn difficulty(&self) -> &DifficultyManager {
        &self.difficulty
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Spawn an asteroid with explicit kinematics (for tests).
    #[cfg(test)]
    pub fn spawn_test_asteroid(
        &mut self,
        position: corridor_core::types::Position,
        velocity: corridor_core::types::Velocity,
        radius: f64,
    ) -> Entity {
        let shape = corridor_core::components::AsteroidShape {
            radius,
            polyhedron: corridor_core::enums::Polyhedron::Octahedron,
            detail: 1,
            surface: corridor_core::enums::Surface::AsteroidRock,
        };
        world_setup::spawn_asteroid_at(&mut self.world, &mut self.scene, position, velocity, shape)
    }

    /// Spawn a projectile at a position (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, position: corridor_core::types::Position) -> Entity {
        world_setup::spawn_projectile(&mut self.world, &mut self.scene, position)
    }

    /// Remove an entity the way the systems do (for tests).
    #[cfg(test)]
    pub fn despawn_for_test(&mut self, entity: Entity) -> bool {
        self.scene.despawn(&mut self.world, entity)
    }

    /// A copy of the RNG, for predicting the next draws (for tests).
    #[cfg(test)]
    pub fn rng_for_test(&self) -> ChaCha8Rng {
        self.rng.clone()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match (command, self.phase) {
            (PlayerCommand::StartGame, GamePhase::Menu) => {
                self.start_run();
                tracing::info!("game started");
            }
            (PlayerCommand::Restart, GamePhase::GameOver) => {
                self.start_run();
                tracing::info!("game restarted");
            }
            (command, phase) => {
                tracing::debug!(?command, ?phase, "command ignored in this phase");
            }
        }
    }

    /// Reset all run state and put a fresh ship in the corridor.
    fn start_run(&mut self) {
        systems::cleanup::clear_all(&mut self.world, &mut self.scene);
        self.time = SimTime::default();
        self.difficulty = DifficultyManager::new();
        self.since_last_spawn_ms = 0.0;
        self.stats = RunStats::default();
        self.player = Some(world_setup::spawn_player(&mut self.world, &mut self.scene));
        self.phase = GamePhase::Active;
        self.audio_events.push(AudioEvent::MusicStart);
        self.audio_events.push(AudioEvent::EngineStart);
    }

    /// End the run: every entity goes, the ship included.
    fn stop_game(&mut self) {
        self.phase = GamePhase::GameOver;
        let released = systems::cleanup::clear_all(&mut self.world, &mut self.scene);
        self.player = None;
        self.audio_events.push(AudioEvent::EngineStop);
        tracing::info!(
            elapsed_ms = self.time.elapsed_ms,
            destroyed = self.stats.asteroids_destroyed,
            released,
            "game over"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, player: Entity, delta_ms: f64, input: &InputState) {
        // 1. Ship: steering, boundaries, weapon
        systems::pilot::run(
            &mut self.world,
            &mut self.scene,
            &mut self.audio_events,
            &mut self.stats,
            player,
            input,
            &self.handling,
            delta_ms,
        );
        // 2. Projectiles: cull and advance
        systems::projectiles::run(&mut self.world, &mut self.scene, delta_ms);
        // 3. Enemy spawning against the difficulty curve
        systems::enemy_spawner::run(
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
            &mut self.difficulty,
            &mut self.since_last_spawn_ms,
            &mut self.stats,
            delta_ms,
        );
        // 4. Enemies: cull, move, projectile hits, ship hit
        let pass = systems::enemies::run(
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
            &mut self.audio_events,
            &mut self.stats,
            player,
            delta_ms,
        );
        if pass.player_hit {
            self.stop_game();
            return;
        }
        // 5. Effects: fade and prune
        systems::effects::run(&mut self.world, &mut self.scene, delta_ms);
    }
}
