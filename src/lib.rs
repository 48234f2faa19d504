// In: src/lib.rs

//! Creature Adventure Battle Engine
//!
//! The battle and progression core for a turn-based creature-collection game:
//! derived stats, elemental type matchups, a suspendable per-turn battle state
//! machine, capture mechanics, and JSON save files.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod creature;
pub mod errors;
pub mod move_data;
pub mod progression;
pub mod save;
pub mod species;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `creature-adventure`
// crate, making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{
    BaseStats,
    ElementType,
    EvolutionData,
    Learnset,
    Move,
    MoveCategory,
    MoveData,
    Species,
    SpeciesData,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine types and state.
pub use battle::engine::{Battle, POTION_HEAL, RUN_CHANCE};
pub use battle::state::{
    BattleAction, BattleEvent, BattleOutcome, BattleSignal, Effectiveness, EventBus, Side, TurnRng,
};
pub use battle::calculators::{calculate_damage, DamageOutcome, CRIT_CHANCE};
pub use battle::catch::{catch_probability, CATCH_CEILING, CATCH_FLOOR};

// Core runtime types.
pub use creature::{CreatureInst, MoveInstance, Stats};
pub use progression::{
    compute_stats, experience_reward, experience_to_next_level, MoveLearnDecision, StatGains,
};
pub use trainer::Trainer;

// Persistence.
pub use save::{auto_save_slot, SaveManager, SaveSummary, SAVE_VERSION};

// Primary data access functions.
pub use move_data::get_move_data;
pub use species::get_species_data;

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleResult, BattleStateError, DataError, DataResult, EngineError, SaveError,
    SaveResult,
};
