use crate::Bits;
use serde::Serialize;
use serde::Serializer;

/// Bitwise OR of two component flags.
///
/// Two bits set for distinct components, one bit for a self-matchup.
/// Unique per unordered pair because flags never share a bit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pair(Bits);

/// Bits isomorphism
impl From<Bits> for Pair {
    fn from(bits: Bits) -> Self {
        Self(bits)
    }
}
impl From<Pair> for Bits {
    fn from(pair: Pair) -> Bits {
        pair.0
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Binary::fmt(&self.0, f)
    }
}

/// binary string, matching the debug dumps
impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
