/// Named ruleset shipped with the crate.
///
/// Only the rules text ever reaches the engine; the name is for menus.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Variant {
    #[cfg_attr(feature = "cli", value(name = "rps-3"))]
    Rps3,
    #[cfg_attr(feature = "cli", value(name = "rps-5"))]
    Rps5,
    #[cfg_attr(feature = "cli", value(name = "rps-7"))]
    Rps7,
}

impl Variant {
    pub const fn all() -> [Self; 3] {
        [Self::Rps3, Self::Rps5, Self::Rps7]
    }
    pub fn rules(&self) -> &'static str {
        match self {
            Self::Rps3 => include_str!("../../rules/rps-3.txt"),
            Self::Rps5 => include_str!("../../rules/rps-5.txt"),
            Self::Rps7 => include_str!("../../rules/rps-7.txt"),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rps3 => write!(f, "RPS-3"),
            Self::Rps5 => write!(f, "RPS-5"),
            Self::Rps7 => write!(f, "RPS-7"),
        }
    }
}
