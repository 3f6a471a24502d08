use super::*;
use crate::rules::*;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

/// Components of a ruleset in discovery order, each with its own flag.
///
/// The `n`th discovered component holds flag `1 << n`, so the flags always
/// form a gapless prefix of the powers of two. Built once, then read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    names: Vec<String>,
    flags: BTreeMap<String, Flag>,
}

impl Registry {
    /// Flag for a canonical component name.
    pub fn flag(&self, name: &str) -> Result<Flag, RulesError> {
        self.flags
            .get(name)
            .copied()
            .ok_or_else(|| RulesError::UnknownComponent(name.to_string()))
    }
    /// Component names in discovery order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    /// (name, flag) in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Flag)> + '_ {
        self.names.iter().map(|name| (name.as_str(), self.flags[name]))
    }

    fn discover(&mut self, name: &str) -> Result<(), RulesError> {
        if self.flags.contains_key(name) {
            return Ok(());
        }
        let flag = Flag::nth(self.names.len())
            .ok_or(RulesError::TooManyComponents(self.names.len() + 1))?;
        log::debug!("{:<32}{:>8} {}", "registering component", flag, name);
        self.names.push(name.to_string());
        self.flags.insert(name.to_string(), flag);
        Ok(())
    }
}

/// Scan rules top to bottom, strong side before weak side,
/// handing out the next free flag to each unseen name.
impl TryFrom<&RulesSpec> for Registry {
    type Error = RulesError;
    fn try_from(spec: &RulesSpec) -> Result<Self, Self::Error> {
        if spec.is_empty() {
            return Err(RulesError::Empty);
        }
        let mut registry = Self {
            names: Vec::new(),
            flags: BTreeMap::new(),
        };
        for name in spec.iter().flat_map(Rule::sides) {
            registry.discover(name)?;
        }
        Ok(registry)
    }
}

/// one `flag name` line per component, flags in binary
impl std::fmt::Display for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, flag) in self.iter() {
            writeln!(f, "{:>8} {}", flag, name)?;
        }
        Ok(())
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, flag) in self.iter() {
            map.serialize_entry(name, &flag)?;
        }
        map.end()
    }
}
