use crate::creature::CreatureInst;

/// A party holds at most this many creatures.
pub const MAX_PARTY: usize = 6;

const STARTING_POKEBALLS: u32 = 5;
const STARTING_POTIONS: u32 = 3;
const STARTING_POSITION: (i32, i32) = (5, 5);

/// The player's roster: party, consumables, and overworld position.
///
/// The overworld itself (tiles, movement, encounters) lives outside the
/// engine; only the coordinates are carried here so they persist with the
/// rest of the trainer state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub name: String,
    /// Ordered party of up to [`MAX_PARTY`] creatures.
    pub party: Vec<CreatureInst>,
    pub pokeballs: u32,
    pub potions: u32,
    pub x: i32,
    pub y: i32,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Trainer {
            name: name.into(),
            party: Vec::new(),
            pokeballs: STARTING_POKEBALLS,
            potions: STARTING_POTIONS,
            x: STARTING_POSITION.0,
            y: STARTING_POSITION.1,
        }
    }

    /// Add a creature to the party. Returns false when the party is full;
    /// the caller decides what happens to the creature then.
    pub fn add_creature(&mut self, creature: CreatureInst) -> bool {
        if self.party.len() < MAX_PARTY {
            self.party.push(creature);
            true
        } else {
            false
        }
    }

    /// Index of the first creature still able to battle.
    pub fn first_living(&self) -> Option<usize> {
        self.party.iter().position(|c| !c.is_fainted())
    }

    /// Whether any party member can still battle.
    pub fn has_living(&self) -> bool {
        self.party.iter().any(|c| !c.is_fainted())
    }

    /// Highest level in the party, for save-slot listings.
    pub fn top_level(&self) -> u8 {
        self.party.iter().map(|c| c.level).max().unwrap_or(1)
    }

    /// Full HP and PP restore for the whole party. This is the primitive the
    /// full-party-faint recovery policy (heal house, item restock) builds on.
    pub fn heal_all(&mut self) {
        for creature in &mut self.party {
            creature.heal_full();
            creature.restore_all_pp();
        }
    }
}
