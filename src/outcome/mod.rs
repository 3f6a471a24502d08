//! Winner lookup by combined flag.

mod outcome;
mod table;

pub use outcome::*;
pub use table::*;
