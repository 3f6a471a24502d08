use serde::Serialize;

/// How a round ended, from the human's side, with the deciding rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RoundResult {
    Draw,
    Win(String),
    Lose(String),
}

impl RoundResult {
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::Draw => None,
            Self::Win(rule) | Self::Lose(rule) => Some(rule),
        }
    }
    /// Same round seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Self::Draw => Self::Draw,
            Self::Win(rule) => Self::Lose(rule),
            Self::Lose(rule) => Self::Win(rule),
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draw => write!(f, "Draw!"),
            Self::Win(rule) => write!(f, "You win! {}", rule),
            Self::Lose(rule) => write!(f, "You lose! {}", rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_swaps_sides() {
        let win = RoundResult::Win("rock breaks scissors".into());
        assert_eq!(win.clone().flip(), RoundResult::Lose("rock breaks scissors".into()));
        assert_eq!(win.clone().flip().flip(), win);
        assert_eq!(RoundResult::Draw.flip(), RoundResult::Draw);
    }

    #[test]
    fn messages() {
        assert_eq!(RoundResult::Draw.to_string(), "Draw!");
        assert_eq!(
            RoundResult::Lose("paper covers rock".into()).to_string(),
            "You lose! paper covers rock"
        );
    }
}
