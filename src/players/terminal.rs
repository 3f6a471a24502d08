use super::*;
use anyhow::Context;
use dialoguer::Confirm;
use dialoguer::Select;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;

/// Human at the keyboard against a random opponent.
pub struct Terminal {
    rng: SmallRng,
}

impl Terminal {
    /// Opponent seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
    /// Opponent seeded for a reproducible session.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Ask whether to play another round.
    pub fn again(&self) -> anyhow::Result<bool> {
        Confirm::new()
            .with_prompt("Play another round?")
            .default(true)
            .interact()
            .context("read play-again answer")
    }
    /// Generic numbered menu, used for variant selection too.
    pub fn menu<T: ToString>(&self, prompt: &str, items: &[T]) -> anyhow::Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .context("read menu selection")
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for Terminal {
    fn pick(&mut self, options: &[String]) -> anyhow::Result<usize> {
        self.menu("Enter your choice", options)
    }
    fn random(&mut self, options: &[String]) -> anyhow::Result<usize> {
        (0..options.len())
            .choose(&mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("no options to choose from"))
    }
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Terminal")
    }
}
