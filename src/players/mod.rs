//! Sources of picks.
//!
//! The engine never reads input or rolls dice itself. A [`Picker`] is asked
//! for the human's choice and for the opponent's random choice.
//!
//! - [`Terminal`] — interactive menu plus an OS- or seed-driven RNG (requires `cli` feature)
//! - [`Scripted`] — fixed picks for tests and replays

mod picker;
mod scripted;
#[cfg(feature = "cli")]
mod terminal;

pub use picker::*;
pub use scripted::*;
#[cfg(feature = "cli")]
pub use terminal::*;
