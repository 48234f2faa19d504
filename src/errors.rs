use schema::{Move, Species};
use std::fmt;

/// Main error type for the creature-adventure engine
#[derive(Debug)]
pub enum EngineError {
    /// Error related to catalog data lookup
    Data(DataError),
    /// A player action that was rejected before any state change
    Action(ActionError),
    /// The battle was driven in a way that violates its state machine
    BattleState(BattleStateError),
    /// Error related to reading or writing save records
    Save(SaveError),
}

/// Errors related to catalog lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataError {
    /// The species has no entry in the catalog
    SpeciesNotFound(Species),
    /// The move has no entry in the catalog
    MoveNotFound(Move),
}

/// Validation failures for player actions. These are rejected locally with
/// no state change; the caller is expected to re-prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Move index is out of bounds for the active creature
    InvalidMoveIndex(usize),
    /// The selected move has no PP remaining
    NoPpRemaining(Move),
    /// A catch was attempted with no pokeballs left
    NoPokeballs,
    /// A potion was used with none left
    NoPotions,
    /// Party index is out of bounds
    InvalidPartyIndex(usize),
    /// The chosen replacement has fainted and cannot battle
    FaintedReplacement(Species),
    /// The forget index given for a move-learn decision is out of bounds
    InvalidForgetIndex(usize),
}

/// Contract violations by the caller, as opposed to recoverable input errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// An action was submitted to a battle that already ended
    BattleAlreadyOver,
    /// A battle was started with no living creature on the player's side
    NoLivingCreature,
    /// A battle was started against an already-fainted wild creature
    WildAlreadyFainted,
    /// The submitted action does not match the pending suspension point
    UnexpectedAction(String),
}

/// Errors related to persistence
#[derive(Debug)]
pub enum SaveError {
    /// Underlying filesystem failure
    Io(std::io::Error),
    /// The slot does not exist
    SlotNotFound(String),
    /// The record could not be parsed or reconstructed
    Malformed(String),
    /// The roster could not be serialized
    Serialize(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Data(err) => write!(f, "Data error: {}", err),
            EngineError::Action(err) => write!(f, "Action error: {}", err),
            EngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
            EngineError::Save(err) => write!(f, "Save error: {}", err),
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::SpeciesNotFound(species) => write!(f, "Species not found: {}", species),
            DataError::MoveNotFound(mv) => write!(f, "Move not found: {}", mv),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidMoveIndex(index) => write!(f, "Invalid move index: {}", index),
            ActionError::NoPpRemaining(mv) => write!(f, "{} has no PP left", mv),
            ActionError::NoPokeballs => write!(f, "No pokeballs left"),
            ActionError::NoPotions => write!(f, "No potions left"),
            ActionError::InvalidPartyIndex(index) => write!(f, "Invalid party index: {}", index),
            ActionError::FaintedReplacement(species) => {
                write!(f, "{} has fainted and cannot battle", species)
            }
            ActionError::InvalidForgetIndex(index) => {
                write!(f, "Invalid forget index: {}", index)
            }
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::BattleAlreadyOver => write!(f, "The battle is already over"),
            BattleStateError::NoLivingCreature => {
                write!(f, "No creature is able to battle")
            }
            BattleStateError::WildAlreadyFainted => {
                write!(f, "The wild creature has already fainted")
            }
            BattleStateError::UnexpectedAction(details) => {
                write!(f, "Unexpected action: {}", details)
            }
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(err) => write!(f, "Save I/O error: {}", err),
            SaveError::SlotNotFound(slot) => write!(f, "Save slot not found: {}", slot),
            SaveError::Malformed(details) => write!(f, "Malformed save record: {}", details),
            SaveError::Serialize(details) => write!(f, "Could not serialize save: {}", details),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for DataError {}
impl std::error::Error for ActionError {}
impl std::error::Error for BattleStateError {}
impl std::error::Error for SaveError {}

impl From<DataError> for EngineError {
    fn from(err: DataError) -> Self {
        EngineError::Data(err)
    }
}

impl From<ActionError> for EngineError {
    fn from(err: ActionError) -> Self {
        EngineError::Action(err)
    }
}

impl From<BattleStateError> for EngineError {
    fn from(err: BattleStateError) -> Self {
        EngineError::BattleState(err)
    }
}

impl From<SaveError> for EngineError {
    fn from(err: SaveError) -> Self {
        EngineError::Save(err)
    }
}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::Io(err)
    }
}

/// Type alias for Results using EngineError
pub type BattleResult<T> = Result<T, EngineError>;

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

/// Type alias for Results using SaveError
pub type SaveResult<T> = Result<T, SaveError>;
