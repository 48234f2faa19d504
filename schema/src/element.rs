use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Elemental type of a species or move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Rock,
    Flying,
    Poison,
    Ice,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ElementType {
    /// Damage multiplier for an attacking type against a defending type.
    ///
    /// The chart is sparse and asymmetric: it reproduces the reference table
    /// verbatim, and any pair it does not list is neutral (1.0). Gaps are not
    /// filled in from the reciprocal entry.
    pub fn effectiveness(attacking: ElementType, defending: ElementType) -> f64 {
        use ElementType::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) | (Fire, Ice) => 2.0,
            (Fire, Water) | (Fire, Fire) | (Fire, Rock) => 0.5,

            // Water
            (Water, Fire) | (Water, Rock) => 2.0,
            (Water, Water) | (Water, Grass) => 0.5,

            // Grass
            (Grass, Water) | (Grass, Rock) => 2.0,
            (Grass, Fire) | (Grass, Grass) | (Grass, Poison) | (Grass, Flying) => 0.5,

            // Electric
            (Electric, Water) | (Electric, Flying) => 2.0,
            (Electric, Electric) | (Electric, Grass) => 0.5,
            // The reference chart lists this pair explicitly as neutral.
            (Electric, Rock) => 1.0,

            // Rock
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) => 2.0,
            (Rock, Rock) => 0.5,

            // Flying
            (Flying, Grass) => 2.0,
            (Flying, Electric) | (Flying, Rock) => 0.5,

            // Poison
            (Poison, Grass) => 2.0,
            (Poison, Poison) | (Poison, Rock) => 0.5,

            // Ice
            (Ice, Grass) | (Ice, Flying) => 2.0,
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) => 0.5,

            // Unlisted pairs are neutral.
            _ => 1.0,
        }
    }
}
