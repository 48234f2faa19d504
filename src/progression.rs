//! Leveling, move learning, and evolution.
//!
//! Everything here is deterministic: stats are a pure function of species and
//! level, and the experience curve is fixed. Detection and effect are split
//! (`gain_exp` only reports that a level-up is due; `level_up` applies it) so
//! a front-end can run its own presentation between the two.

use crate::creature::{CreatureInst, MoveInstance, Stats, MAX_MOVES};
use crate::errors::DataResult;
use crate::species::get_species_data;
use schema::{BaseStats, Move, Species};
use serde::{Deserialize, Serialize};

/// Per-stat deltas from a level-up, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatGains {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

/// The caller's answer to a pending move-learn offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveLearnDecision {
    /// Forget the move at `forget_index` and learn the offered move in its place.
    Learn { forget_index: usize },
    /// Keep the current moveset; the offered move is not learned.
    Decline,
}

/// Derived stats from base stats and level:
/// `floor(base * 2 * level / 100) + level + 10`, for every stat including HP.
pub fn compute_stats(base: &BaseStats, level: u8) -> Stats {
    Stats {
        max_hp: derived_stat(base.hp, level),
        attack: derived_stat(base.attack, level),
        defense: derived_stat(base.defense, level),
        speed: derived_stat(base.speed, level),
    }
}

fn derived_stat(base: u8, level: u8) -> u16 {
    (u32::from(base) * 2 * u32::from(level) / 100) as u16 + u16::from(level) + 10
}

/// Experience needed to go from `level` to the next: `(level + 1)^3`.
/// This is a per-level threshold, not a cumulative total; experience resets
/// to zero on every level-up.
pub fn experience_to_next_level(level: u8) -> u32 {
    let next = u32::from(level) + 1;
    next * next * next
}

/// Experience awarded for defeating a wild creature:
/// `floor(yield * level / 7)`.
pub fn experience_reward(wild: &CreatureInst) -> DataResult<u32> {
    let data = get_species_data(wild.species)?;
    Ok(u32::from(data.exp_yield) * u32::from(wild.level) / 7)
}

impl CreatureInst {
    /// Add experience. Returns true iff the creature now has enough to level
    /// up; the level-up itself is applied separately by [`CreatureInst::level_up`].
    pub fn gain_exp(&mut self, amount: u32) -> bool {
        self.exp += amount;
        self.exp >= experience_to_next_level(self.level)
    }

    /// Apply one level-up: +1 level, experience back to zero, stats
    /// recomputed, and HP restored to the new max (a full heal, by contrast
    /// with the proportional heal on evolution).
    pub fn level_up(&mut self) -> DataResult<StatGains> {
        let old = self.stats;

        self.level += 1;
        self.exp = 0;
        let data = get_species_data(self.species)?;
        self.stats = compute_stats(&data.base_stats, self.level);
        self.current_hp = self.stats.max_hp;

        Ok(StatGains {
            hp: self.stats.max_hp - old.max_hp,
            attack: self.stats.attack - old.attack,
            defense: self.stats.defense - old.defense,
            speed: self.stats.speed - old.speed,
        })
    }

    /// Moves scheduled at exactly the current level that are not already known.
    pub fn new_moves_at_level(&self) -> DataResult<Vec<Move>> {
        let data = get_species_data(self.species)?;
        Ok(data
            .learnset
            .learns_at_level(self.level)
            .iter()
            .copied()
            .filter(|&mv| !self.knows(mv))
            .collect())
    }

    /// Learn a move if there is a free slot. Returns false when the moveset
    /// is full; the caller must then resolve a [`MoveLearnDecision`].
    pub fn learn_move(&mut self, mv: Move) -> bool {
        if self.moves.len() < MAX_MOVES {
            self.moves.push(MoveInstance::new(mv));
            true
        } else {
            false
        }
    }

    /// Forget the move at `forget_index` and put a fresh instance of `mv` in
    /// its slot. The index must be valid.
    pub fn replace_move(&mut self, forget_index: usize, mv: Move) -> Move {
        let forgotten = self.moves[forget_index].move_;
        self.moves[forget_index] = MoveInstance::new(mv);
        forgotten
    }

    /// The species this creature evolves into, if its rule exists and the
    /// current level meets the rule's minimum.
    pub fn evolution_target(&self) -> DataResult<Option<Species>> {
        let data = get_species_data(self.species)?;
        Ok(data
            .evolution
            .as_ref()
            .filter(|evo| self.level >= evo.min_level)
            .map(|evo| evo.evolves_into))
    }

    /// Change species. Stats are recomputed for the new species and HP is
    /// rescaled to the same fraction of the new max
    /// (`round(new_max * old_hp / old_max)`); moves and experience are
    /// untouched.
    pub fn evolve(&mut self, into: Species) -> DataResult<()> {
        let old_hp = self.current_hp;
        let old_max = self.stats.max_hp;

        self.species = into;
        let data = get_species_data(into)?;
        self.stats = compute_stats(&data.base_stats, self.level);

        let fraction = if old_max > 0 {
            f64::from(old_hp) / f64::from(old_max)
        } else {
            1.0
        };
        self.current_hp =
            ((f64::from(self.stats.max_hp) * fraction).round() as u16).min(self.stats.max_hp);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[test]
    fn stat_formula_matches_known_values() {
        let flameo = get_species_data(Species::Flameo).unwrap();
        let stats = compute_stats(&flameo.base_stats, 5);
        // floor(45*2*5/100) + 5 + 10 = 4 + 15
        assert_eq!(stats.max_hp, 19);
        // floor(52*2*5/100) + 15 = 5 + 15
        assert_eq!(stats.attack, 20);
        assert_eq!(stats.defense, 19);
        assert_eq!(stats.speed, 21);
    }

    #[test]
    fn stats_are_deterministic_and_monotonic_in_level() {
        for species in Species::iter() {
            let base = &get_species_data(species).unwrap().base_stats;
            let mut prev = compute_stats(base, 1);
            assert_eq!(compute_stats(base, 1), prev);
            for level in 2..=50 {
                let next = compute_stats(base, level);
                assert!(next.max_hp >= prev.max_hp, "{species} hp at {level}");
                assert!(next.attack >= prev.attack, "{species} attack at {level}");
                assert!(next.defense >= prev.defense, "{species} defense at {level}");
                assert!(next.speed >= prev.speed, "{species} speed at {level}");
                prev = next;
            }
        }
    }

    #[test]
    fn experience_curve_is_next_level_cubed() {
        for level in 1..=50u8 {
            let expected = (u32::from(level) + 1).pow(3);
            assert_eq!(experience_to_next_level(level), expected);
        }
    }

    #[test]
    fn gain_exp_detects_the_threshold_without_applying_it() {
        let mut creature = CreatureInst::new(Species::Leaflet, 5).unwrap();

        // Threshold for level 5 is 6^3 = 216.
        assert!(!creature.gain_exp(50));
        assert_eq!(creature.level, 5);
        assert_eq!(creature.exp, 50);

        assert!(creature.gain_exp(170));
        assert_eq!(creature.level, 5, "gain_exp must not level up by itself");
        assert_eq!(creature.exp, 220);
    }

    #[test]
    fn level_up_resets_exp_and_fully_heals() {
        let mut creature = CreatureInst::new(Species::Leaflet, 5).unwrap();
        creature.take_damage(10);
        creature.gain_exp(300);

        let gains = creature.level_up().unwrap();

        assert_eq!(creature.level, 6);
        assert_eq!(creature.exp, 0);
        assert_eq!(creature.current_hp, creature.stats.max_hp);
        assert!(gains.hp >= 1);
        assert!(gains.attack >= 1);
    }

    #[rstest]
    #[case(Species::Flameo, 7, 62)] // floor(62 * 7 / 7)
    #[case(Species::Rockhead, 10, 100)] // floor(70 * 10 / 7)
    #[case(Species::Leaflet, 5, 45)] // floor(64 * 5 / 7)
    #[case(Species::Sparky, 1, 8)] // floor(60 * 1 / 7)
    fn experience_reward_formula(
        #[case] species: Species,
        #[case] level: u8,
        #[case] expected: u32,
    ) {
        let wild = CreatureInst::new(species, level).unwrap();
        assert_eq!(experience_reward(&wild).unwrap(), expected);
    }

    #[test]
    fn new_moves_exclude_already_known_ones() {
        let mut creature = CreatureInst::new(Species::Flameo, 6).unwrap();
        creature.level = 7;
        assert_eq!(creature.new_moves_at_level().unwrap(), vec![Move::FlameBurst]);

        creature.learn_move(Move::FlameBurst);
        assert_eq!(creature.new_moves_at_level().unwrap(), Vec::<Move>::new());
    }

    #[test]
    fn evolution_waits_for_the_minimum_level() {
        let creature = CreatureInst::new(Species::Flameo, 15).unwrap();
        assert_eq!(creature.evolution_target().unwrap(), None);

        let creature = CreatureInst::new(Species::Flameo, 16).unwrap();
        assert_eq!(
            creature.evolution_target().unwrap(),
            Some(Species::Infernix)
        );

        // Final stages have no rule at all.
        let creature = CreatureInst::new(Species::Pyrodragon, 50).unwrap();
        assert_eq!(creature.evolution_target().unwrap(), None);
    }

    #[test]
    fn evolution_preserves_the_hp_fraction() {
        let mut creature = CreatureInst::new(Species::Flameo, 16).unwrap();
        // Flameo at 16: floor(45*2*16/100) + 26 = 40 max HP.
        assert_eq!(creature.stats.max_hp, 40);
        creature.take_damage(20);

        creature.evolve(Species::Infernix).unwrap();

        // Infernix at 16: floor(58*2*16/100) + 26 = 44; half of that is 22.
        assert_eq!(creature.species, Species::Infernix);
        assert_eq!(creature.stats.max_hp, 44);
        assert_eq!(creature.current_hp, 22);
    }

    #[test]
    fn evolution_keeps_moves_and_exp() {
        let mut creature = CreatureInst::new(Species::Flameo, 16).unwrap();
        creature.exp = 123;
        let before: Vec<Move> = creature.moves.iter().map(|m| m.move_).collect();

        creature.evolve(Species::Infernix).unwrap();

        let after: Vec<Move> = creature.moves.iter().map(|m| m.move_).collect();
        assert_eq!(before, after);
        assert_eq!(creature.exp, 123);
        assert_eq!(creature.level, 16);
    }

    #[test]
    fn replace_move_swaps_in_place() {
        let mut creature = CreatureInst::new(Species::Flameo, 16).unwrap();
        assert_eq!(creature.moves.len(), MAX_MOVES);
        assert!(!creature.learn_move(Move::TakeDown));

        let forgotten = creature.replace_move(0, Move::TakeDown);
        assert_eq!(forgotten, Move::Ember);
        assert_eq!(creature.moves[0].move_, Move::TakeDown);
        assert_eq!(creature.moves[0].pp, creature.moves[0].max_pp());
        assert_eq!(creature.moves.len(), MAX_MOVES);
    }
}
