//! Game controller for hosts driving a deceptive game.
//!
//! This module is the boundary the orchestrator talks to: it accepts
//! submissions on behalf of a player, reports what each side may see, and
//! moves the whole game in and out of a value tree. Rendering, input
//! parsing and transport stay outside.

/// Emit a `log::debug!` record when the `logging` feature is on.
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

/// Emit a `log::trace!` record when the `logging` feature is on.
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

mod controller;
pub mod playout;
mod shared;
mod status;

pub use controller::GameController;
pub use shared::SharedGame;
pub use status::{GameStatus, MoveSummary};
