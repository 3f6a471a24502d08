use crate::rules::Rule;
use serde::Serialize;

/// Decided matchup: who wins it and the rule that says so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    winner: String,
    rule: String,
}

impl Outcome {
    pub fn winner(&self) -> &str {
        &self.winner
    }
    pub fn rule(&self) -> &str {
        &self.rule
    }
}

impl From<&Rule> for Outcome {
    fn from(rule: &Rule) -> Self {
        Self {
            winner: rule.strong().to_string(),
            rule: rule.text().to_string(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.winner, self.rule)
    }
}
