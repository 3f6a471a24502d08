use super::*;
use crate::outcome::*;
use crate::registry::*;
use crate::rules::*;

/// Settle one round between two canonical component names.
///
/// Identical picks draw without consulting the table. Otherwise the OR of
/// both flags is looked up; a missing entry means the ruleset never relates
/// the two and is reported as [`RulesError::NoRuleForPair`].
pub fn resolve(
    human: &str,
    opponent: &str,
    registry: &Registry,
    table: &OutcomeTable,
) -> Result<RoundResult, RulesError> {
    let pair = registry.flag(human)? | registry.flag(opponent)?;
    if human == opponent {
        return Ok(RoundResult::Draw);
    }
    let outcome = table
        .get(pair)
        .ok_or_else(|| RulesError::NoRuleForPair(human.to_string(), opponent.to_string()))?;
    match outcome.winner() == human {
        true => Ok(RoundResult::Win(outcome.rule().to_string())),
        false => Ok(RoundResult::Lose(outcome.rule().to_string())),
    }
}
