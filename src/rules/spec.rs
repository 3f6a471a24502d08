use super::*;
use crate::RULE_DELIMITER;
use serde::Serialize;

/// Ordered, non-empty list of rules.
///
/// Order matters twice over: it fixes the flag assigned to each component
/// and decides which rule wins when two rules relate the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesSpec(Vec<Rule>);

impl RulesSpec {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }
}

/// Parse a rules block.
///
/// Entries are split on the delimiter; blank entries (a trailing comma) are
/// skipped. An entry spanning several lines means a delimiter is missing
/// and is rejected rather than read as one long rule.
impl TryFrom<&str> for RulesSpec {
    type Error = RulesError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let rules = s
            .split(RULE_DELIMITER)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.contains('\n') {
                true => Err(RulesError::Malformed(entry.to_string())),
                false => Rule::try_from(entry),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(rules)
    }
}

impl TryFrom<Vec<Rule>> for RulesSpec {
    type Error = RulesError;
    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        match rules.is_empty() {
            true => Err(RulesError::Empty),
            false => Ok(Self(rules)),
        }
    }
}

impl std::fmt::Display for RulesSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self.iter().map(Rule::text).collect::<Vec<_>>();
        write!(f, "{}", lines.join(",\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = "rock breaks scissors, \nscissors cuts paper, \npaper covers rock";

    #[test]
    fn parse_classic() {
        let spec = RulesSpec::try_from(CLASSIC).unwrap();
        let texts = spec.iter().map(Rule::text).collect::<Vec<_>>();
        assert_eq!(
            texts,
            ["rock breaks scissors", "scissors cuts paper", "paper covers rock"]
        );
    }

    #[test]
    fn trailing_delimiter_and_blank_lines() {
        let spec = RulesSpec::try_from("\n  rock breaks scissors,\n\n paper covers rock,\n").unwrap();
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn empty_block() {
        assert_eq!(RulesSpec::try_from(""), Err(RulesError::Empty));
        assert_eq!(RulesSpec::try_from(" ,\n , "), Err(RulesError::Empty));
        assert_eq!(RulesSpec::try_from(Vec::new()), Err(RulesError::Empty));
    }

    #[test]
    fn malformed_entry() {
        assert_eq!(
            RulesSpec::try_from("rock breaks scissors,\nrock"),
            Err(RulesError::Malformed("rock".into()))
        );
    }

    #[test]
    fn comma_splits_entries_on_one_line() {
        let spec = RulesSpec::try_from("rock breaks scissors, paper covers rock").unwrap();
        let texts = spec.iter().map(Rule::text).collect::<Vec<_>>();
        assert_eq!(texts, ["rock breaks scissors", "paper covers rock"]);
    }

    #[test]
    fn missing_delimiter() {
        assert!(matches!(
            RulesSpec::try_from("rock breaks scissors\nscissors cuts paper"),
            Err(RulesError::Malformed(_))
        ));
    }

    #[test]
    fn display_reproduces_block() {
        let spec = RulesSpec::try_from(CLASSIC).unwrap();
        assert_eq!(RulesSpec::try_from(spec.to_string().as_str()).unwrap(), spec);
    }
}
