use super::*;
use crate::registry::*;
use crate::rules::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Combined flag → outcome, for every pair some rule relates.
///
/// Pairs no rule mentions are simply absent; looking one up is an error,
/// never an implicit draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeTable(BTreeMap<Pair, Outcome>);

impl OutcomeTable {
    /// Walk the rules in order and record the strong side of each pair.
    /// The first rule to relate a pair decides it; later ones are ignored.
    pub fn build(spec: &RulesSpec, registry: &Registry) -> Result<Self, RulesError> {
        let mut table = BTreeMap::new();
        for rule in spec.iter() {
            let pair = registry.flag(rule.strong())? | registry.flag(rule.weak())?;
            match table.entry(pair) {
                Entry::Vacant(slot) => {
                    log::debug!("{:<32}{:>8} {}", "recording outcome", pair, rule);
                    slot.insert(Outcome::from(rule));
                }
                Entry::Occupied(_) => {
                    log::debug!("{:<32}{:>8} {}", "ignoring duplicate", pair, rule);
                }
            }
        }
        Ok(Self(table))
    }
    pub fn get(&self, pair: Pair) -> Option<&Outcome> {
        self.0.get(&pair)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Pair, &Outcome)> {
        self.0.iter().map(|(pair, outcome)| (*pair, outcome))
    }
}

impl std::fmt::Display for OutcomeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (pair, outcome) in self.iter() {
            writeln!(f, "{:>8} {}", pair, outcome)?;
        }
        Ok(())
    }
}
