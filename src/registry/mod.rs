//! Component registry.
//!
//! Every component discovered in a ruleset gets a distinct single-bit
//! [`Flag`]. OR-ing two flags yields a [`Pair`], which identifies an
//! unordered matchup independent of who picked which side.

mod flag;
mod pair;
mod registry;

pub use flag::*;
pub use pair::*;
pub use registry::*;
