//! Rule parsing.
//!
//! A rules block is a list of entries separated by a comma and a line break.
//! Each entry reads `<strong> <phrase...> <weak>`; only the first and last
//! tokens name components, the full entry is kept as the rule's description.

mod error;
mod rule;
mod spec;

pub use error::*;
pub use rule::*;
pub use spec::*;
