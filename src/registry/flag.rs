use super::*;
use crate::Bits;
use crate::MAX_COMPONENTS;
use serde::Serialize;
use serde::Serializer;

/// Single-bit identifier of one component.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Flag(Bits);

impl Flag {
    /// Flag of the `n`th discovered component, if it fits.
    pub fn nth(n: usize) -> Option<Self> {
        match n < MAX_COMPONENTS {
            true => Some(Self(1 << n)),
            false => None,
        }
    }
}

/// Bits isomorphism
impl From<Flag> for Bits {
    fn from(flag: Flag) -> Bits {
        flag.0
    }
}

/// combining two flags names the matchup
impl std::ops::BitOr for Flag {
    type Output = Pair;
    fn bitor(self, rhs: Self) -> Pair {
        Pair::from(self.0 | rhs.0)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Binary::fmt(&self.0, f)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
