use serde::{Deserialize, Serialize};

use crate::progression::{MoveLearnDecision, StatGains};
use schema::{Move, Species};

/// A scripted source of uniform rolls in `[0, 1)`.
///
/// Every stochastic decision in a turn (accuracy, crits, damage variance,
/// capture checks, escape attempts, the wild creature's move pick) draws the
/// next roll in sequence, so tests can feed an exact script and assert on the
/// outcome deterministically.
#[derive(Debug, Clone)]
pub struct TurnRng {
    rolls: Vec<f64>,
    index: usize,
}

impl TurnRng {
    /// Test constructor: the turn consumes exactly these rolls, in order.
    pub fn new_for_test(rolls: Vec<f64>) -> Self {
        TurnRng { rolls, index: 0 }
    }

    /// Production constructor. Pre-generates more rolls than any single
    /// turn can consume.
    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let rolls = (0..64).map(|_| rng.random::<f64>()).collect();
        TurnRng { rolls, index: 0 }
    }

    /// Consumes and returns the next roll. The reason string makes scripted
    /// tests debuggable when a script is mis-ordered.
    ///
    /// # Panics
    /// Panics if the script is exhausted, which always indicates a bug in the
    /// caller's roll accounting.
    pub fn next_roll(&mut self, reason: &str) -> f64 {
        let roll = *self
            .rolls
            .get(self.index)
            .unwrap_or_else(|| panic!("TurnRng exhausted asking for: {reason}"));
        self.index += 1;
        #[cfg(test)]
        println!("Roll {roll:.4} for: {reason}");
        roll
    }

    pub fn rolls_consumed(&self) -> usize {
        self.index
    }
}

/// Which combatant an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Wild,
}

/// Coarse rating of a type matchup, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    SuperEffective,
    Neutral,
    NotVeryEffective,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            Effectiveness::SuperEffective
        } else if multiplier < 1.0 {
            Effectiveness::NotVeryEffective
        } else {
            Effectiveness::Neutral
        }
    }
}

/// Everything observable that happened during one submitted action.
///
/// Events are emitted in resolution order; a UI can replay them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    MoveUsed { side: Side, species: Species, move_used: Move },
    MoveMissed { side: Side, species: Species },
    CriticalHit { attacker: Species },
    AttackEffectiveness { multiplier: f64, rating: Effectiveness },
    DamageDealt { target: Side, species: Species, damage: u16, remaining_hp: u16 },
    CreatureFainted { side: Side, species: Species },
    WildTurnSkipped,
    ExperienceGained { species: Species, amount: u32 },
    LeveledUp { species: Species, level: u8, gains: StatGains },
    MoveLearned { species: Species, move_learned: Move },
    MoveForgotten { species: Species, forgotten: Move, learned: Move },
    MoveLearnDeclined { species: Species, declined: Move },
    Evolved { from: Species, into: Species },
    PokeballThrown { remaining: u32 },
    CaptureSucceeded { species: Species },
    AddedToParty { species: Species },
    SentToStorage { species: Species },
    BrokeFree { species: Species },
    PotionUsed { species: Species, restored: u16, new_hp: u16, remaining: u32 },
    Escaped,
    EscapeFailed,
    ReplacementSent { species: Species },
    BattleEnded { outcome: BattleOutcome },
}

/// Ordered log of the events produced by one action resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus::default()
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventBus {
    type Item = &'a BattleEvent;
    type IntoIter = std::slice::Iter<'a, BattleEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// A player decision submitted to a suspended battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAction {
    Fight { move_index: usize },
    Catch,
    UsePotion,
    Run,
    Switch { party_index: usize },
    ResolveMoveLearn(MoveLearnDecision),
}

/// Terminal result of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Captured,
    Fled,
    Defeat,
}

/// What the battle is waiting on after an action resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleSignal {
    AwaitingAction,
    AwaitingReplacement,
    AwaitingMoveLearn { offered: Move },
    Ended(BattleOutcome),
}
