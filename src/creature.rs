use crate::errors::DataResult;
use crate::move_data::get_move_max_pp;
use crate::progression::compute_stats;
use crate::species::get_species_data;
use schema::{ElementType, Move, Species, SpeciesData};

/// A creature knows at most this many moves at once.
pub const MAX_MOVES: usize = 4;

/// A known move plus its remaining uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInstance {
    pub move_: Move,
    pub pp: u8,
}

impl MoveInstance {
    /// Create a new move instance with max PP
    pub fn new(move_: Move) -> Self {
        MoveInstance {
            move_,
            pp: get_move_max_pp(move_),
        }
    }

    pub fn max_pp(&self) -> u8 {
        get_move_max_pp(self.move_)
    }

    /// A move with no PP left cannot be selected.
    pub fn is_usable(&self) -> bool {
        self.pp > 0
    }

    /// Use the move (decrease PP)
    pub fn use_move(&mut self) -> bool {
        if self.pp > 0 {
            self.pp -= 1;
            true
        } else {
            false
        }
    }

    /// Restore PP to maximum
    pub fn restore_pp(&mut self) {
        self.pp = self.max_pp();
    }
}

/// Derived stats. Always a pure function of species base stats and level;
/// recomputed on level-up and evolution, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

/// A live creature instance bound to one species.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureInst {
    pub species: Species,
    pub level: u8,
    /// Progress toward the next level; resets to 0 on level-up.
    pub exp: u32,
    pub stats: Stats,
    pub current_hp: u16,
    /// Known moves in learn order, oldest first. At most [`MAX_MOVES`].
    pub moves: Vec<MoveInstance>,
}

impl CreatureInst {
    /// Create a new creature at the given level with full HP and the moveset
    /// it would have learned growing up to that level.
    pub fn new(species: Species, level: u8) -> DataResult<Self> {
        let data = get_species_data(species)?;
        let stats = compute_stats(&data.base_stats, level);
        let moves = Self::derive_moves_from_learnset(data, level);

        Ok(CreatureInst {
            species,
            level,
            exp: 0,
            stats,
            current_hp: stats.max_hp,
            moves,
        })
    }

    /// Reconstruct a creature from persisted fields. Derived stats are
    /// recomputed, and HP is clamped to the recomputed max.
    pub fn from_saved(
        species: Species,
        level: u8,
        current_hp: u16,
        exp: u32,
        moves: Vec<MoveInstance>,
    ) -> DataResult<Self> {
        let data = get_species_data(species)?;
        let level = level.max(1);
        let stats = compute_stats(&data.base_stats, level);
        let mut moves = moves;
        moves.truncate(MAX_MOVES);

        Ok(CreatureInst {
            species,
            level,
            exp,
            stats,
            current_hp: current_hp.min(stats.max_hp),
            moves,
        })
    }

    /// The moves a creature raised to `level` would know: everything
    /// learnable at or below that level in schedule order, keeping the
    /// four most recent.
    fn derive_moves_from_learnset(data: &SpeciesData, level: u8) -> Vec<MoveInstance> {
        let mut learned: Vec<Move> = Vec::new();
        for (&learn_level, moves_at_level) in &data.learnset.level_up {
            if learn_level > level {
                break;
            }
            for &mv in moves_at_level {
                if !learned.contains(&mv) {
                    learned.push(mv);
                }
            }
        }

        let skip = learned.len().saturating_sub(MAX_MOVES);
        learned
            .into_iter()
            .skip(skip)
            .map(MoveInstance::new)
            .collect()
    }

    pub fn species_data(&self) -> DataResult<&'static SpeciesData> {
        get_species_data(self.species)
    }

    /// The creature's elemental type, looked up live from the catalog so it
    /// tracks species changes through evolution.
    pub fn element(&self) -> DataResult<ElementType> {
        Ok(self.species_data()?.element)
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.max_hp
    }

    /// A fainted creature cannot act as an active combatant.
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn take_damage(&mut self, damage: u16) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }

    /// Heal by `amount`, capped at max HP. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.stats.max_hp);
        self.current_hp - before
    }

    pub fn heal_full(&mut self) {
        self.current_hp = self.stats.max_hp;
    }

    pub fn restore_all_pp(&mut self) {
        for mv in &mut self.moves {
            mv.restore_pp();
        }
    }

    pub fn knows(&self, mv: Move) -> bool {
        self.moves.iter().any(|m| m.move_ == mv)
    }

    /// Whether any known move still has PP.
    pub fn has_usable_move(&self) -> bool {
        self.moves.iter().any(MoveInstance::is_usable)
    }
}
