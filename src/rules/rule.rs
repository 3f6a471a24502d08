use super::*;
use serde::Serialize;

/// One line of a ruleset: `strong` beats `weak`, explained by `text`.
///
/// Component names are stored lowercase. The text is the entry as written,
/// trimmed, so it can be echoed back to the player verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rule {
    strong: String,
    weak: String,
    text: String,
}

impl Rule {
    pub fn strong(&self) -> &str {
        &self.strong
    }
    pub fn weak(&self) -> &str {
        &self.weak
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    /// Both component names, strong side first.
    pub fn sides(&self) -> [&str; 2] {
        [&self.strong, &self.weak]
    }
}

/// str parsing
///
/// Needs at least three tokens: strong name, connecting phrase, weak name.
impl TryFrom<&str> for Rule {
    type Error = RulesError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let text = s.trim();
        let tokens = text.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            [strong, _, .., weak] => Ok(Self {
                strong: strong.to_lowercase(),
                weak: weak.to_lowercase(),
                text: text.to_string(),
            }),
            _ => Err(RulesError::Malformed(text.to_string())),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
