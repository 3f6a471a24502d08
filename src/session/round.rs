use crate::round::RoundResult;
use serde::Serialize;

/// A played round: both picks and what came of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub human: String,
    pub opponent: String,
    pub result: RoundResult,
}

impl Round {
    /// The "who chose what" report shown before the result.
    pub fn choices(&self) -> String {
        format!(
            "You chose: {}\nComputer chose: {}",
            self.human, self.opponent
        )
    }
}
