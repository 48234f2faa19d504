use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every species in the game, in catalog order.
///
/// Serde serializes the variant identifier (used by the embedded RON
/// catalogs); `Display`/`FromStr` via strum handle the human-readable
/// names found in save records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Species {
    // Fire line
    Flameo,
    Infernix,
    Pyrodragon,
    // Water line
    Aquabit,
    Aquashell,
    Hydrorex,
    // Grass line
    Leaflet,
    Vinebound,
    Floramancer,
    // Electric line
    Sparky,
    Voltail,
    Thunderlord,
    // Rock line
    Rockhead,
    Boulder,
    Mountainius,
    // Flying line
    Windpuff,
    Galeforce,
    Skytempest,
    // Two-stage lines
    Toxifrog,
    Venomoad,
    Icecub,
    Glaciator,
    Shadowling,
    Nightshade,
    Fairyfly,
    Pixiewing,
    // Standalone species
    Ironclad,
    Mystikos,
    Dracobite,
    Echobat,
}

impl Species {
    /// The display name of the species.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip_through_from_str() {
        for species in Species::iter() {
            assert_eq!(Species::from_str(species.name()), Ok(species));
        }
    }

    #[test]
    fn catalog_has_thirty_species() {
        assert_eq!(Species::iter().count(), 30);
    }
}
