//! Lock-guarded handle for hosts that share one game across threads.

use std::sync::Arc;

use parking_lot::Mutex;

use super::GameController;

/// Cloneable handle to a single game. Every access holds the lock for its
/// full duration, so probes inside the rules never see a concurrent writer.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameController>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(controller: GameController) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut GameController) -> R,
    {
        f(&mut self.inner.lock())
    }

    /// Run `f` only if the game is free right now.
    pub fn try_with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut GameController) -> R,
    {
        self.inner.try_lock().map(|mut guard| f(&mut guard))
    }
}
