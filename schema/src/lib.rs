// Creature Adventure Schema - Shared type definitions
// This crate contains the core enums and data structs that are shared between
// the battle engine and anything else that needs to talk about species, moves,
// or elemental types (save tooling, front-ends).

// Re-export the main types
pub use element::*;
pub use move_data::*;
pub use moves::*;
pub use species::*;
pub use species_data::*;

pub mod element;
pub mod move_data;
pub mod moves;
pub mod species;
pub mod species_data;
