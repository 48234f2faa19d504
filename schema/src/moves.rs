use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every move in the game.
///
/// The strum `serialize` attribute carries the spelled-out display name
/// ("Flame Burst") so that `Display` and `FromStr` match what save records
/// and the reference move list use; serde stays on the variant identifier.
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
pub enum Move {
    // Normal
    Tackle,
    Scratch,
    #[strum(serialize = "Body Slam")]
    BodySlam,
    #[strum(serialize = "Hyper Beam")]
    HyperBeam,
    Bite,
    #[strum(serialize = "Quick Attack")]
    QuickAttack,
    #[strum(serialize = "Take Down")]
    TakeDown,
    // Fire
    Ember,
    #[strum(serialize = "Flame Burst")]
    FlameBurst,
    Flamethrower,
    #[strum(serialize = "Fire Blast")]
    FireBlast,
    Inferno,
    // Water
    Bubble,
    #[strum(serialize = "Water Pulse")]
    WaterPulse,
    #[strum(serialize = "Aqua Tail")]
    AquaTail,
    #[strum(serialize = "Hydro Pump")]
    HydroPump,
    #[strum(serialize = "Tidal Wave")]
    TidalWave,
    // Grass
    #[strum(serialize = "Vine Whip")]
    VineWhip,
    #[strum(serialize = "Razor Leaf")]
    RazorLeaf,
    #[strum(serialize = "Seed Bomb")]
    SeedBomb,
    #[strum(serialize = "Solar Beam")]
    SolarBeam,
    #[strum(serialize = "Leaf Storm")]
    LeafStorm,
    // Electric
    #[strum(serialize = "Thunder Shock")]
    ThunderShock,
    Spark,
    Thunderbolt,
    Thunder,
    #[strum(serialize = "Volt Storm")]
    VoltStorm,
    // Rock
    #[strum(serialize = "Rock Throw")]
    RockThrow,
    #[strum(serialize = "Rock Blast")]
    RockBlast,
    #[strum(serialize = "Rock Slide")]
    RockSlide,
    #[strum(serialize = "Stone Edge")]
    StoneEdge,
    #[strum(serialize = "Meteor Strike")]
    MeteorStrike,
    // Flying
    Gust,
    #[strum(serialize = "Wing Attack")]
    WingAttack,
    #[strum(serialize = "Air Slash")]
    AirSlash,
    #[strum(serialize = "Sky Attack")]
    SkyAttack,
    Hurricane,
    // Poison
    #[strum(serialize = "Poison Sting")]
    PoisonSting,
    Acid,
    #[strum(serialize = "Sludge Bomb")]
    SludgeBomb,
    #[strum(serialize = "Poison Fang")]
    PoisonFang,
    #[strum(serialize = "Toxic Blast")]
    ToxicBlast,
    // Ice
    #[strum(serialize = "Powder Snow")]
    PowderSnow,
    #[strum(serialize = "Ice Shard")]
    IceShard,
    #[strum(serialize = "Ice Beam")]
    IceBeam,
    Blizzard,
    #[strum(serialize = "Glacial Surge")]
    GlacialSurge,
}

impl Move {
    /// The display name of the move ("Flame Burst", not "FlameBurst").
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
        for mv in Move::iter() {
            assert_eq!(Move::from_str(mv.name()), Ok(mv));
        }
    }

    #[test]
    fn multi_word_names_are_spelled_out() {
        assert_eq!(Move::FlameBurst.name(), "Flame Burst");
        assert_eq!(Move::QuickAttack.name(), "Quick Attack");
        assert_eq!(Move::Tackle.name(), "Tackle");
    }
}
