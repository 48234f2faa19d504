use crate::errors::{DataError, DataResult};
use schema::{Species, SpeciesData};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Species substituted when a save record or spawn names a species the
/// catalog does not know.
pub const FALLBACK_SPECIES: Species = Species::Flameo;

static SPECIES_TABLE: &str = include_str!("../data/species.ron");

// Global species catalog - parsed once, immutable afterward
static SPECIES_DATA: LazyLock<HashMap<Species, SpeciesData>> = LazyLock::new(|| {
    let entries: Vec<SpeciesData> =
        ron::from_str(SPECIES_TABLE).expect("embedded species catalog is valid RON");
    entries.into_iter().map(|data| (data.id, data)).collect()
});

/// Look up the catalog entry for a species.
pub fn get_species_data(species: Species) -> DataResult<&'static SpeciesData> {
    SPECIES_DATA
        .get(&species)
        .ok_or(DataError::SpeciesNotFound(species))
}
