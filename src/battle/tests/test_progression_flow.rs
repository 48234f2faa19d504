use pretty_assertions::assert_eq;

use crate::battle::engine::Battle;
use crate::battle::state::{BattleAction, BattleEvent, BattleOutcome, BattleSignal};
use crate::battle::tests::common::*;
use crate::errors::{ActionError, BattleStateError, EngineError};
use crate::move_data::get_move_max_pp;
use crate::progression::{MoveLearnDecision, StatGains};
use schema::{Move, Species};

/// A wild Leaflet lv 5 at 1 HP: any hit defeats it, awarding
/// floor(64 * 5 / 7) = 45 experience.
fn weakened_wild() -> crate::creature::CreatureInst {
    let mut wild = creature(Species::Leaflet, 5);
    wild.current_hp = 1;
    wild
}

#[test]
fn victory_awards_experience_and_levels_up() {
    // Threshold at lv 6 is 343; 298 + 45 crosses it.
    let mut lead = creature(Species::Flameo, 6);
    lead.exp = 298;
    let mut battle = Battle::new(trainer_with(vec![lead]), weakened_wild()).unwrap();

    let bus = battle
        .submit_action_with_rng(
            BattleAction::Fight { move_index: 1 },
            &mut script_player_hit_only(),
        )
        .unwrap();

    assert!(bus.events().contains(&BattleEvent::ExperienceGained {
        species: Species::Flameo,
        amount: 45,
    }));
    assert!(bus.events().contains(&BattleEvent::LeveledUp {
        species: Species::Flameo,
        level: 7,
        gains: StatGains {
            hp: 2,
            attack: 2,
            defense: 2,
            speed: 3,
        },
    }));
    // FlameBurst unlocks at 7 and the moveset has room.
    assert!(bus.events().contains(&BattleEvent::MoveLearned {
        species: Species::Flameo,
        move_learned: Move::FlameBurst,
    }));
    assert!(bus.events().contains(&BattleEvent::BattleEnded {
        outcome: BattleOutcome::Victory,
    }));

    let trainer = battle.into_trainer();
    let champ = &trainer.party[0];
    assert_eq!(champ.level, 7);
    assert_eq!(champ.exp, 0);
    // Level-up fully heals.
    assert_eq!(champ.current_hp, champ.stats.max_hp);
    assert!(champ.knows(Move::FlameBurst));
}

#[test]
fn victory_without_enough_experience_just_ends() {
    let mut lead = creature(Species::Flameo, 6);
    lead.exp = 0;
    let mut battle = Battle::new(trainer_with(vec![lead]), weakened_wild()).unwrap();

    let bus = battle
        .submit_action_with_rng(
            BattleAction::Fight { move_index: 1 },
            &mut script_player_hit_only(),
        )
        .unwrap();

    assert!(!bus
        .events()
        .iter()
        .any(|event| matches!(event, BattleEvent::LeveledUp { .. })));
    assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));
    assert_eq!(battle.into_trainer().party[0].exp, 45);
}

#[test]
fn full_moveset_suspends_the_battle_for_a_decision() {
    let mut lead = creature_with_moves(
        Species::Flameo,
        6,
        &[Move::Scratch, Move::Ember, Move::Tackle, Move::QuickAttack],
    );
    lead.exp = 298;
    let mut battle = Battle::new(trainer_with(vec![lead]), weakened_wild()).unwrap();

    battle
        .submit_action_with_rng(
            BattleAction::Fight { move_index: 1 },
            &mut script_player_hit_only(),
        )
        .unwrap();

    assert_eq!(
        battle.signal(),
        BattleSignal::AwaitingMoveLearn {
            offered: Move::FlameBurst,
        }
    );
    assert!(!battle.is_over());

    // Only a move-learn decision is accepted now.
    let err = battle
        .submit_action_with_rng(
            BattleAction::Fight { move_index: 0 },
            &mut script_player_hit_only(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::BattleState(BattleStateError::UnexpectedAction(_))
    ));

    // A bad forget index is rejected and the prompt stays open.
    let err = battle
        .submit_action_with_rng(
            BattleAction::ResolveMoveLearn(MoveLearnDecision::Learn { forget_index: 9 }),
            &mut script_player_hit_only(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Action(ActionError::InvalidForgetIndex(9))
    ));
    assert_eq!(
        battle.signal(),
        BattleSignal::AwaitingMoveLearn {
            offered: Move::FlameBurst,
        }
    );

    let bus = battle
        .submit_action_with_rng(
            BattleAction::ResolveMoveLearn(MoveLearnDecision::Learn { forget_index: 0 }),
            &mut script_player_hit_only(),
        )
        .unwrap();
    assert!(bus.events().contains(&BattleEvent::MoveForgotten {
        species: Species::Flameo,
        forgotten: Move::Scratch,
        learned: Move::FlameBurst,
    }));
    assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));

    let trainer = battle.into_trainer();
    let learned = &trainer.party[0].moves[0];
    assert_eq!(learned.move_, Move::FlameBurst);
    // The replacement arrives with full PP.
    assert_eq!(learned.pp, get_move_max_pp(Move::FlameBurst));
}

#[test]
fn declining_keeps_the_current_moveset() {
    let mut lead = creature_with_moves(
        Species::Flameo,
        6,
        &[Move::Scratch, Move::Ember, Move::Tackle, Move::QuickAttack],
    );
    lead.exp = 298;
    let mut battle = Battle::new(trainer_with(vec![lead]), weakened_wild()).unwrap();

    battle
        .submit_action_with_rng(
            BattleAction::Fight { move_index: 1 },
            &mut script_player_hit_only(),
        )
        .unwrap();

    let bus = battle
        .submit_action_with_rng(
            BattleAction::ResolveMoveLearn(MoveLearnDecision::Decline),
            &mut script_player_hit_only(),
        )
        .unwrap();
    assert!(bus.events().contains(&BattleEvent::MoveLearnDeclined {
        species: Species::Flameo,
        declined: Move::FlameBurst,
    }));
    assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));

    let trainer = battle.into_trainer();
    assert!(!trainer.party[0].knows(Move::FlameBurst));
    assert_eq!(trainer.party[0].moves.len(), 4);
}

#[test]
fn evolution_fires_after_the_move_decision_is_resolved() {
    // Level 15 -> 16 with a full natural moveset: Flamethrower is offered,
    // and Flameo evolves into Infernix only after the prompt resolves.
    let mut lead = creature(Species::Flameo, 15);
    assert_eq!(lead.moves.len(), 4);
    lead.exp = 4060; // threshold at lv 15 is 4096; +45 crosses it
    let mut battle = Battle::new(trainer_with(vec![lead]), weakened_wild()).unwrap();

    let bus = battle
        .submit_action_with_rng(
            BattleAction::Fight { move_index: 1 },
            &mut script_player_hit_only(),
        )
        .unwrap();
    assert_eq!(
        battle.signal(),
        BattleSignal::AwaitingMoveLearn {
            offered: Move::Flamethrower,
        }
    );
    assert!(!bus
        .events()
        .iter()
        .any(|event| matches!(event, BattleEvent::Evolved { .. })));

    let bus = battle
        .submit_action_with_rng(
            BattleAction::ResolveMoveLearn(MoveLearnDecision::Decline),
            &mut script_player_hit_only(),
        )
        .unwrap();
    assert!(bus.events().contains(&BattleEvent::Evolved {
        from: Species::Flameo,
        into: Species::Infernix,
    }));
    assert!(bus.events().contains(&BattleEvent::BattleEnded {
        outcome: BattleOutcome::Victory,
    }));

    let trainer = battle.into_trainer();
    let evolved = &trainer.party[0];
    assert_eq!(evolved.species, Species::Infernix);
    assert_eq!(evolved.level, 16);
    // Full health going in (level-up heal), so the proportional carry-over
    // lands at the new max: Infernix lv 16 has 44 HP.
    assert_eq!(evolved.stats.max_hp, 44);
    assert_eq!(evolved.current_hp, 44);
}
