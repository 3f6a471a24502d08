//! Rock-Paper-Scissors variants derived from plain-text rule lists.
//!
//! A rules block such as
//!
//! ```text
//! rock breaks scissors,
//! scissors cuts paper,
//! paper covers rock
//! ```
//!
//! is parsed into a [`RulesSpec`], from which a [`Registry`] assigns every
//! component a single-bit [`Flag`] and an [`OutcomeTable`] maps each
//! unordered [`Pair`] of components to the rule that decides it.
//! [`resolve`] then settles a round with one table lookup.

#[cfg(feature = "cli")]
pub mod cli;
pub mod outcome;
pub mod players;
pub mod registry;
pub mod round;
pub mod rules;
pub mod session;
pub mod variant;

pub use outcome::*;
pub use players::*;
pub use registry::*;
pub use round::*;
pub use rules::*;
pub use session::*;
pub use variant::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Backing integer for component flags and combined pairs.
pub type Bits = u128;

// ============================================================================
// PARAMETERS
// ============================================================================
/// Upper bound on distinct components, one per bit of [`Bits`].
pub const MAX_COMPONENTS: usize = Bits::BITS as usize;
/// Separator between rule entries in a rules block.
pub const RULE_DELIMITER: char = ',';

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging.
/// INFO by default, DEBUG when `verbose` is set.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
