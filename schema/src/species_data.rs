use crate::{ElementType, Move, Species};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base stats of a species, on the 0-255 scale the catalog uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
}

/// Level-up move schedule. Levels are sparse; a `BTreeMap` keeps them in
/// ascending order, which is the order moves are considered learned in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learnset {
    pub level_up: BTreeMap<u8, Vec<Move>>,
}

impl Learnset {
    /// Moves learned at exactly this level.
    pub fn learns_at_level(&self, level: u8) -> &[Move] {
        self.level_up
            .get(&level)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Evolution rule: the species this one becomes, once the level is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub evolves_into: Species,
    pub min_level: u8,
}

/// Immutable catalog entry for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: Species,
    pub element: ElementType,
    pub base_stats: BaseStats,
    pub learnset: Learnset,
    pub evolution: Option<EvolutionData>,
    pub catch_rate: u8,
    pub exp_yield: u16,
}
