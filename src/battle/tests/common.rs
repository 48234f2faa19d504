use crate::battle::state::TurnRng;
use crate::creature::{CreatureInst, MoveInstance};
use crate::trainer::Trainer;
use schema::{Move, Species};

pub fn creature(species: Species, level: u8) -> CreatureInst {
    CreatureInst::new(species, level).unwrap()
}

/// A creature with an explicit moveset, for tests that need full move slots
/// or a specific move on the field.
pub fn creature_with_moves(species: Species, level: u8, moves: &[Move]) -> CreatureInst {
    let mut c = creature(species, level);
    c.moves = moves.iter().copied().map(MoveInstance::new).collect();
    c
}

pub fn trainer_with(party: Vec<CreatureInst>) -> Trainer {
    let mut trainer = Trainer::new("Casey");
    for member in party {
        assert!(trainer.add_creature(member));
    }
    trainer
}

pub fn solo_trainer(species: Species, level: u8) -> Trainer {
    trainer_with(vec![creature(species, level)])
}

/// Script for a full fight turn where the player's move hits and the wild
/// creature answers with its first move, also hitting. No crits, minimum
/// variance on both sides.
pub fn script_exchange_both_hit() -> TurnRng {
    TurnRng::new_for_test(vec![
        0.1, // player accuracy: hit
        0.5, // player crit: no
        0.0, // player variance: 0.85
        0.0, // wild move choice: first usable
        0.1, // wild accuracy: hit
        0.5, // wild crit: no
        0.0, // wild variance: 0.85
    ])
}

/// Script for a turn where the player's hit ends the exchange before the
/// wild side acts (knockout or skipped wild turn).
pub fn script_player_hit_only() -> TurnRng {
    TurnRng::new_for_test(vec![0.1, 0.5, 0.0])
}
