use crate::errors::{DataError, DataResult};
use schema::{Move, MoveData};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Move substituted when a save record names a move the catalog does not know.
pub const FALLBACK_MOVE: Move = Move::Tackle;

static MOVE_TABLE: &str = include_str!("../data/moves.ron");

// Global move catalog - parsed once, immutable afterward
static MOVE_DATA: LazyLock<HashMap<Move, MoveData>> = LazyLock::new(|| {
    let entries: Vec<MoveData> =
        ron::from_str(MOVE_TABLE).expect("embedded move catalog is valid RON");
    entries.into_iter().map(|data| (data.id, data)).collect()
});

/// Look up the catalog entry for a move.
pub fn get_move_data(mv: Move) -> DataResult<&'static MoveData> {
    MOVE_DATA.get(&mv).ok_or(DataError::MoveNotFound(mv))
}

/// Max PP for a move, with a conservative default if the catalog entry is
/// somehow missing.
pub fn get_move_max_pp(mv: Move) -> u8 {
    get_move_data(mv).map(|data| data.max_pp).unwrap_or(30)
}
