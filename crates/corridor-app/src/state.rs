//! State shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use corridor_core::commands::PlayerCommand;
use corridor_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Latest snapshot, written by the loop after every frame.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handles held by whoever started the loop.
///
/// `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex` to let
/// the whole struct be shared across threads.
pub struct LoopState {
    /// `None` once the loop has been told to shut down.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: SharedSnapshot,
}

impl Default for LoopState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl LoopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh command channel and keep its sender.
    /// The receiver goes to the game loop.
    pub fn connect(&self) -> Option<mpsc::Receiver<GameLoopCommand>> {
        let mut guard = self.command_tx.lock().ok()?;
        let (tx, rx) = mpsc::channel();
        *guard = Some(tx);
        Some(rx)
    }

    /// Forward a command to the loop. Returns false if no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        match guard.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Ask the loop to stop and drop the sender.
    pub fn shutdown(&self) {
        if let Ok(mut guard) = self.command_tx.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
    }

    /// Clone of the most recent snapshot, if any frame has run.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}
