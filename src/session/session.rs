use super::*;
use crate::outcome::*;
use crate::players::*;
use crate::registry::*;
use crate::round::*;
use crate::rules::*;
use serde::Serialize;

/// Everything derived from one rules block, built once and then read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    rules: RulesSpec,
    registry: Registry,
    outcomes: OutcomeTable,
}

impl Session {
    pub fn rules(&self) -> &RulesSpec {
        &self.rules
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn outcomes(&self) -> &OutcomeTable {
        &self.outcomes
    }
    /// Component names in menu order.
    pub fn options(&self) -> &[String] {
        self.registry.names()
    }
    /// Resolve two already-made picks.
    pub fn resolve(&self, human: &str, opponent: &str) -> Result<RoundResult, RulesError> {
        resolve(human, opponent, &self.registry, &self.outcomes)
    }
    /// Ask the picker for both sides, then resolve.
    pub fn play(&self, picker: &mut impl Picker) -> anyhow::Result<Round> {
        let options = self.options();
        let human = Self::choice(options, picker.pick(options)?)?;
        let opponent = Self::choice(options, picker.random(options)?)?;
        let result = self.resolve(human, opponent)?;
        log::debug!("{:<32}{} v {}", "resolved round", human, opponent);
        Ok(Round {
            human: human.to_string(),
            opponent: opponent.to_string(),
            result,
        })
    }
    fn choice(options: &[String], i: usize) -> anyhow::Result<&str> {
        options
            .get(i)
            .map(String::as_str)
            .ok_or_else(|| anyhow::anyhow!("pick {} out of range 1-{}", i + 1, options.len()))
    }
}

impl TryFrom<RulesSpec> for Session {
    type Error = RulesError;
    fn try_from(rules: RulesSpec) -> Result<Self, Self::Error> {
        let registry = Registry::try_from(&rules)?;
        let outcomes = OutcomeTable::build(&rules, &registry)?;
        log::debug!(
            "{:<32}{} components, {} outcomes",
            "derived tables",
            registry.len(),
            outcomes.len()
        );
        Ok(Self {
            rules,
            registry,
            outcomes,
        })
    }
}

impl TryFrom<&str> for Session {
    type Error = RulesError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(RulesSpec::try_from(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn scripted_rounds() {
        let session = Session::try_from(Variant::Rps3.rules()).unwrap();
        let mut script = Scripted::new([
            ("rock", "scissors"),
            ("rock", "paper"),
            ("paper", "paper"),
        ]);
        let results = (0..3)
            .map(|_| session.play(&mut script).unwrap().result)
            .collect::<Vec<_>>();
        assert_eq!(
            results,
            [
                RoundResult::Win("Rock breaks scissors".into()),
                RoundResult::Lose("paper covers rock".into()),
                RoundResult::Draw,
            ]
        );
    }

    #[test]
    fn round_report() {
        let session = Session::try_from(Variant::Rps3.rules()).unwrap();
        let round = session
            .play(&mut Scripted::new([("paper", "rock")]))
            .unwrap();
        assert_eq!(round.choices(), "You chose: paper\nComputer chose: rock");
        assert_eq!(round.result.to_string(), "You win! paper covers rock");
    }

    #[test]
    fn undecided_pair_surfaces_as_error() {
        let session = Session::try_from("rock breaks scissors,\nscissors cuts paper").unwrap();
        let error = session
            .play(&mut Scripted::new([("rock", "paper")]))
            .unwrap_err();
        assert_eq!(
            error.downcast_ref::<RulesError>(),
            Some(&RulesError::NoRuleForPair("rock".into(), "paper".into()))
        );
    }

    #[test]
    fn bad_opponent_pick_is_not_a_draw() {
        let session = Session::try_from(Variant::Rps3.rules()).unwrap();
        for opponent in ["lava", "Rock"] {
            let result = session.play(&mut Scripted::new([("rock", opponent)]));
            assert!(result.is_err(), "{} played as a component", opponent);
        }
    }

    #[test]
    fn configuration_error_keeps_its_cause() {
        use anyhow::Context;
        let session = Session::try_from("rock breaks scissors,\nscissors cuts paper").unwrap();
        let error = session
            .play(&mut Scripted::new([("paper", "rock")]))
            .context("broken game configuration")
            .unwrap_err();
        assert_eq!(error.to_string(), "broken game configuration");
        assert_eq!(
            error.downcast_ref::<RulesError>(),
            Some(&RulesError::NoRuleForPair("paper".into(), "rock".into()))
        );
    }

    #[test]
    fn input_failure_propagates() {
        let session = Session::try_from(Variant::Rps3.rules()).unwrap();
        assert!(session.play(&mut Scripted::default()).is_err());
    }

    #[test]
    fn tables_are_stable_across_sessions() {
        let a = Session::try_from(Variant::Rps7.rules()).unwrap();
        let b = Session::try_from(Variant::Rps7.rules()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_rules_rejected() {
        assert_eq!(
            Session::try_from("rock breaks scissors,\nrock"),
            Err(RulesError::Malformed("rock".into()))
        );
    }

    #[test]
    fn dump_is_json() {
        let session = Session::try_from(Variant::Rps3.rules()).unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["registry"]["paper"], "100");
        assert_eq!(json["outcomes"]["11"]["winner"], "rock");
        assert_eq!(json["outcomes"]["101"]["rule"], "paper covers rock");
    }
}
