use std::collections::VecDeque;

use log::debug;

use crate::battle::calculators::calculate_damage;
use crate::battle::catch::{catch_probability, roll_catch};
use crate::battle::state::{
    BattleAction, BattleEvent, BattleOutcome, BattleSignal, Effectiveness, EventBus, Side, TurnRng,
};
use crate::creature::CreatureInst;
use crate::errors::{ActionError, BattleResult, BattleStateError};
use crate::move_data::get_move_data;
use crate::progression::{experience_reward, MoveLearnDecision};
use crate::trainer::Trainer;
use schema::Move;

/// HP restored by one potion.
pub const POTION_HEAL: u16 = 20;
/// Chance that a run attempt succeeds.
pub const RUN_CHANCE: f64 = 0.5;

/// Where the battle's internal state machine currently sits.
///
/// `AwaitingMoveLearn` keeps the move currently offered plus any further
/// offers queued behind it; the queue drains one decision at a time.
#[derive(Debug, Clone)]
enum Phase {
    AwaitingAction,
    AwaitingReplacement,
    AwaitingMoveLearn {
        offered: Move,
        pending: VecDeque<Move>,
    },
    Finished(BattleOutcome),
}

/// A battle against a single wild creature.
///
/// The battle owns the trainer and the wild creature for its whole lifetime;
/// nothing outside can mutate either between suspension points. Drive it by
/// calling [`Battle::submit_action`] and inspecting the returned events plus
/// [`Battle::signal`], then reclaim the roster with [`Battle::into_trainer`]
/// once the battle has ended.
#[derive(Debug)]
pub struct Battle {
    trainer: Trainer,
    wild: CreatureInst,
    active: usize,
    phase: Phase,
    turn: u32,
}

impl Battle {
    /// Starts a battle. The trainer must have a living creature and the wild
    /// creature must not already be fainted.
    pub fn new(trainer: Trainer, wild: CreatureInst) -> BattleResult<Self> {
        if wild.is_fainted() {
            return Err(BattleStateError::WildAlreadyFainted.into());
        }
        let active = trainer
            .first_living()
            .ok_or(BattleStateError::NoLivingCreature)?;
        debug!(
            "battle started: {} vs wild {} (lv {})",
            trainer.name, wild.species, wild.level
        );
        Ok(Battle {
            trainer,
            wild,
            active,
            phase: Phase::AwaitingAction,
            turn: 0,
        })
    }

    pub fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    pub fn wild(&self) -> &CreatureInst {
        &self.wild
    }

    /// The creature currently on the field for the player.
    pub fn active_creature(&self) -> &CreatureInst {
        &self.trainer.party[self.active]
    }

    /// Completed turns. Rejected actions and suspension-point decisions
    /// (replacements, move-learn answers) do not count.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn signal(&self) -> BattleSignal {
        match &self.phase {
            Phase::AwaitingAction => BattleSignal::AwaitingAction,
            Phase::AwaitingReplacement => BattleSignal::AwaitingReplacement,
            Phase::AwaitingMoveLearn { offered, .. } => BattleSignal::AwaitingMoveLearn {
                offered: *offered,
            },
            Phase::Finished(outcome) => BattleSignal::Ended(*outcome),
        }
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Consumes the battle and returns the trainer, with every change made
    /// during the battle (damage, experience, captures, spent items) applied.
    pub fn into_trainer(self) -> Trainer {
        self.trainer
    }

    /// Submits an action with fresh random rolls.
    pub fn submit_action(&mut self, action: BattleAction) -> BattleResult<EventBus> {
        self.submit_action_with_rng(action, &mut TurnRng::new_random())
    }

    /// Submits an action, drawing all random rolls from `rng`. Validation
    /// errors leave the battle untouched; the caller can re-prompt and
    /// resubmit.
    pub fn submit_action_with_rng(
        &mut self,
        action: BattleAction,
        rng: &mut TurnRng,
    ) -> BattleResult<EventBus> {
        let mut bus = EventBus::new();
        match &self.phase {
            Phase::Finished(_) => return Err(BattleStateError::BattleAlreadyOver.into()),
            Phase::AwaitingReplacement => match action {
                BattleAction::Switch { party_index } => self.do_switch(party_index, &mut bus)?,
                other => {
                    return Err(BattleStateError::UnexpectedAction(format!(
                        "a replacement must be chosen, got {:?}",
                        other
                    ))
                    .into())
                }
            },
            Phase::AwaitingMoveLearn { .. } => match action {
                BattleAction::ResolveMoveLearn(decision) => {
                    self.do_resolve_move_learn(decision, &mut bus)?
                }
                other => {
                    return Err(BattleStateError::UnexpectedAction(format!(
                        "a move-learn decision must be resolved, got {:?}",
                        other
                    ))
                    .into())
                }
            },
            Phase::AwaitingAction => match action {
                BattleAction::Fight { move_index } => self.do_fight(move_index, rng, &mut bus)?,
                BattleAction::Catch => self.do_catch(rng, &mut bus)?,
                BattleAction::UsePotion => self.do_potion(rng, &mut bus)?,
                BattleAction::Run => self.do_run(rng, &mut bus)?,
                other => {
                    return Err(BattleStateError::UnexpectedAction(format!(
                        "no replacement or move-learn decision is pending, got {:?}",
                        other
                    ))
                    .into())
                }
            },
        }
        Ok(bus)
    }

    fn do_fight(
        &mut self,
        move_index: usize,
        rng: &mut TurnRng,
        bus: &mut EventBus,
    ) -> BattleResult<()> {
        let creature = &self.trainer.party[self.active];
        let instance = creature
            .moves
            .get(move_index)
            .ok_or(ActionError::InvalidMoveIndex(move_index))?;
        if !instance.is_usable() {
            return Err(ActionError::NoPpRemaining(instance.move_).into());
        }

        self.turn += 1;
        let species = creature.species;
        let level = creature.level;
        let attack = creature.stats.attack;
        let mv = instance.move_;
        self.trainer.party[self.active].moves[move_index].use_move();
        bus.push(BattleEvent::MoveUsed {
            side: Side::Player,
            species,
            move_used: mv,
        });

        let move_data = get_move_data(mv)?;
        if rng.next_roll("player accuracy") > move_data.accuracy {
            bus.push(BattleEvent::MoveMissed {
                side: Side::Player,
                species,
            });
        } else {
            let outcome = calculate_damage(
                level,
                attack,
                self.wild.stats.defense,
                move_data.power,
                move_data.element,
                self.wild.element()?,
                rng,
            );
            if outcome.critical {
                bus.push(BattleEvent::CriticalHit { attacker: species });
            }
            bus.push(BattleEvent::AttackEffectiveness {
                multiplier: outcome.multiplier,
                rating: Effectiveness::from_multiplier(outcome.multiplier),
            });
            self.wild.take_damage(outcome.damage);
            bus.push(BattleEvent::DamageDealt {
                target: Side::Wild,
                species: self.wild.species,
                damage: outcome.damage,
                remaining_hp: self.wild.current_hp,
            });
            if self.wild.is_fainted() {
                bus.push(BattleEvent::CreatureFainted {
                    side: Side::Wild,
                    species: self.wild.species,
                });
                return self.handle_victory(bus);
            }
        }
        self.wild_turn(rng, bus)
    }

    /// Experience, level-ups, new moves, evolution. Suspends the battle when
    /// the moveset is full and a decision is needed.
    fn handle_victory(&mut self, bus: &mut EventBus) -> BattleResult<()> {
        let reward = experience_reward(&self.wild)?;
        let species = self.trainer.party[self.active].species;
        bus.push(BattleEvent::ExperienceGained {
            species,
            amount: reward,
        });

        if !self.trainer.party[self.active].gain_exp(reward) {
            self.end(BattleOutcome::Victory, bus);
            return Ok(());
        }

        let mut pending = VecDeque::new();
        {
            let creature = &mut self.trainer.party[self.active];
            let gains = creature.level_up()?;
            bus.push(BattleEvent::LeveledUp {
                species: creature.species,
                level: creature.level,
                gains,
            });
            for mv in creature.new_moves_at_level()? {
                if creature.learn_move(mv) {
                    bus.push(BattleEvent::MoveLearned {
                        species: creature.species,
                        move_learned: mv,
                    });
                } else {
                    pending.push_back(mv);
                }
            }
        }

        if let Some(offered) = pending.pop_front() {
            debug!("move-learn decision pending: {} offered {}", species, offered);
            self.phase = Phase::AwaitingMoveLearn { offered, pending };
            return Ok(());
        }
        self.finish_victory(bus)
    }

    /// Runs the evolution check and closes out a won battle.
    fn finish_victory(&mut self, bus: &mut EventBus) -> BattleResult<()> {
        let creature = &mut self.trainer.party[self.active];
        if let Some(target) = creature.evolution_target()? {
            let from = creature.species;
            creature.evolve(target)?;
            bus.push(BattleEvent::Evolved { from, into: target });
        }
        self.end(BattleOutcome::Victory, bus);
        Ok(())
    }

    fn do_resolve_move_learn(
        &mut self,
        decision: MoveLearnDecision,
        bus: &mut EventBus,
    ) -> BattleResult<()> {
        let Phase::AwaitingMoveLearn { offered, pending } = &mut self.phase else {
            return Err(BattleStateError::UnexpectedAction(
                "no move-learn decision is pending".to_string(),
            )
            .into());
        };
        let current = *offered;

        match decision {
            MoveLearnDecision::Learn { forget_index } => {
                let creature = &mut self.trainer.party[self.active];
                if forget_index >= creature.moves.len() {
                    return Err(ActionError::InvalidForgetIndex(forget_index).into());
                }
                let forgotten = creature.replace_move(forget_index, current);
                bus.push(BattleEvent::MoveForgotten {
                    species: creature.species,
                    forgotten,
                    learned: current,
                });
            }
            MoveLearnDecision::Decline => {
                bus.push(BattleEvent::MoveLearnDeclined {
                    species: self.trainer.party[self.active].species,
                    declined: current,
                });
            }
        }

        match pending.pop_front() {
            Some(next) => {
                *offered = next;
                Ok(())
            }
            None => self.finish_victory(bus),
        }
    }

    fn do_catch(&mut self, rng: &mut TurnRng, bus: &mut EventBus) -> BattleResult<()> {
        if self.trainer.pokeballs == 0 {
            return Err(ActionError::NoPokeballs.into());
        }
        self.turn += 1;
        self.trainer.pokeballs -= 1;
        bus.push(BattleEvent::PokeballThrown {
            remaining: self.trainer.pokeballs,
        });

        let probability = catch_probability(&self.wild)?;
        if roll_catch(probability, rng) {
            let species = self.wild.species;
            bus.push(BattleEvent::CaptureSucceeded { species });
            if self.trainer.add_creature(self.wild.clone()) {
                bus.push(BattleEvent::AddedToParty { species });
            } else {
                bus.push(BattleEvent::SentToStorage { species });
            }
            self.end(BattleOutcome::Captured, bus);
            Ok(())
        } else {
            bus.push(BattleEvent::BrokeFree {
                species: self.wild.species,
            });
            self.wild_turn(rng, bus)
        }
    }

    fn do_potion(&mut self, rng: &mut TurnRng, bus: &mut EventBus) -> BattleResult<()> {
        if self.trainer.potions == 0 {
            return Err(ActionError::NoPotions.into());
        }
        self.turn += 1;
        self.trainer.potions -= 1;
        let remaining = self.trainer.potions;

        let creature = &mut self.trainer.party[self.active];
        let restored = creature.heal(POTION_HEAL);
        bus.push(BattleEvent::PotionUsed {
            species: creature.species,
            restored,
            new_hp: creature.current_hp,
            remaining,
        });
        self.wild_turn(rng, bus)
    }

    fn do_run(&mut self, rng: &mut TurnRng, bus: &mut EventBus) -> BattleResult<()> {
        self.turn += 1;
        if rng.next_roll("run attempt") < RUN_CHANCE {
            bus.push(BattleEvent::Escaped);
            self.end(BattleOutcome::Fled, bus);
            Ok(())
        } else {
            bus.push(BattleEvent::EscapeFailed);
            self.wild_turn(rng, bus)
        }
    }

    fn do_switch(&mut self, party_index: usize, bus: &mut EventBus) -> BattleResult<()> {
        let creature = self
            .trainer
            .party
            .get(party_index)
            .ok_or(ActionError::InvalidPartyIndex(party_index))?;
        if creature.is_fainted() {
            return Err(ActionError::FaintedReplacement(creature.species).into());
        }
        let species = creature.species;
        self.active = party_index;
        self.phase = Phase::AwaitingAction;
        bus.push(BattleEvent::ReplacementSent { species });
        Ok(())
    }

    /// The wild creature's half of the turn. Picks uniformly among moves
    /// that still have PP; with none usable the turn is skipped.
    fn wild_turn(&mut self, rng: &mut TurnRng, bus: &mut EventBus) -> BattleResult<()> {
        let usable: Vec<usize> = self
            .wild
            .moves
            .iter()
            .enumerate()
            .filter(|(_, instance)| instance.is_usable())
            .map(|(index, _)| index)
            .collect();
        if usable.is_empty() {
            bus.push(BattleEvent::WildTurnSkipped);
            return Ok(());
        }

        let roll = rng.next_roll("wild move choice");
        let pick = usable[((roll * usable.len() as f64) as usize).min(usable.len() - 1)];
        let mv = self.wild.moves[pick].move_;
        self.wild.moves[pick].use_move();
        bus.push(BattleEvent::MoveUsed {
            side: Side::Wild,
            species: self.wild.species,
            move_used: mv,
        });

        let move_data = get_move_data(mv)?;
        if rng.next_roll("wild accuracy") > move_data.accuracy {
            bus.push(BattleEvent::MoveMissed {
                side: Side::Wild,
                species: self.wild.species,
            });
            return Ok(());
        }

        let defender = &self.trainer.party[self.active];
        let outcome = calculate_damage(
            self.wild.level,
            self.wild.stats.attack,
            defender.stats.defense,
            move_data.power,
            move_data.element,
            defender.element()?,
            rng,
        );
        if outcome.critical {
            bus.push(BattleEvent::CriticalHit {
                attacker: self.wild.species,
            });
        }
        bus.push(BattleEvent::AttackEffectiveness {
            multiplier: outcome.multiplier,
            rating: Effectiveness::from_multiplier(outcome.multiplier),
        });

        let creature = &mut self.trainer.party[self.active];
        creature.take_damage(outcome.damage);
        bus.push(BattleEvent::DamageDealt {
            target: Side::Player,
            species: creature.species,
            damage: outcome.damage,
            remaining_hp: creature.current_hp,
        });
        if creature.is_fainted() {
            bus.push(BattleEvent::CreatureFainted {
                side: Side::Player,
                species: creature.species,
            });
            if self.trainer.has_living() {
                self.phase = Phase::AwaitingReplacement;
            } else {
                self.end(BattleOutcome::Defeat, bus);
            }
        }
        Ok(())
    }

    fn end(&mut self, outcome: BattleOutcome, bus: &mut EventBus) {
        debug!("battle ended after {} turns: {:?}", self.turn, outcome);
        self.phase = Phase::Finished(outcome);
        bus.push(BattleEvent::BattleEnded { outcome });
    }
}
