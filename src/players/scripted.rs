use super::*;
use std::collections::VecDeque;

/// Replays predetermined picks by component name.
///
/// A missing or unknown name on either side is an error, so a broken
/// script can never stand in for a real component.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    human: VecDeque<String>,
    opponent: VecDeque<String>,
}

impl Scripted {
    pub fn new<S: Into<String>>(rounds: impl IntoIterator<Item = (S, S)>) -> Self {
        let (human, opponent) = rounds
            .into_iter()
            .map(|(h, o)| (h.into(), o.into()))
            .unzip();
        Self { human, opponent }
    }
    fn next(queue: &mut VecDeque<String>, options: &[String]) -> anyhow::Result<usize> {
        let name = queue
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))?;
        options
            .iter()
            .position(|o| *o == name)
            .ok_or_else(|| anyhow::anyhow!("not an option: {}", name))
    }
}

impl Picker for Scripted {
    fn pick(&mut self, options: &[String]) -> anyhow::Result<usize> {
        Self::next(&mut self.human, options)
    }
    fn random(&mut self, options: &[String]) -> anyhow::Result<usize> {
        Self::next(&mut self.opponent, options)
    }
}
