use crate::{ElementType, Move};
use serde::{Deserialize, Serialize};

/// Physical/Special split. Cosmetic in the current damage formula; both
/// categories use the same attack and defense stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
}

/// Immutable catalog entry for one move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: Move,
    pub element: ElementType,
    /// Base power. Zero is reserved for non-damaging moves; none exist yet.
    pub power: u16,
    /// Hit chance in [0, 1].
    pub accuracy: f64,
    pub max_pp: u8,
    pub category: MoveCategory,
    pub description: String,
}
