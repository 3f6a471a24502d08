/// Structural defects in a ruleset or in how it is queried.
///
/// None of these are transient. Callers should report them as a broken
/// game configuration and stop, never fall back to a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The rules block contained no entries.
    Empty,
    /// An entry could not be split into strong, phrase and weak tokens.
    Malformed(String),
    /// A component name is not present in the registry.
    UnknownComponent(String),
    /// Two registered components are never related by any rule.
    NoRuleForPair(String, String),
    /// More distinct components than there are bits in a flag.
    TooManyComponents(usize),
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no rules supplied"),
            Self::Malformed(entry) => write!(f, "malformed rule: {:?}", entry),
            Self::UnknownComponent(name) => write!(f, "unknown component: {}", name),
            Self::NoRuleForPair(a, b) => write!(f, "no rule decides {} against {}", a, b),
            Self::TooManyComponents(n) => write!(
                f,
                "too many components: {} exceeds the limit of {}",
                n,
                crate::MAX_COMPONENTS
            ),
        }
    }
}

impl std::error::Error for RulesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        assert!(RulesError::Malformed("rock".into()).to_string().contains("rock"));
        assert!(RulesError::UnknownComponent("lava".into()).to_string().contains("lava"));
        let pair = RulesError::NoRuleForPair("rock".into(), "spock".into()).to_string();
        assert!(pair.contains("rock") && pair.contains("spock"));
        assert!(RulesError::TooManyComponents(129).to_string().contains("128"));
    }
}
