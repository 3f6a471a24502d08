//! Bundled rulesets.

mod variant;

pub use variant::*;
