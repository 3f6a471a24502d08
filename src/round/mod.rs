//! Round resolution.
//!
//! Pure decision logic: both picks arrive already made, no randomness or
//! terminal I/O happens here.

mod resolve;
mod result;

pub use resolve::*;
pub use result::*;
