//! A game session: one ruleset, its derived tables, and any number of rounds.

mod banner;
mod round;
mod session;

pub use banner::*;
pub use round::*;
pub use session::*;
