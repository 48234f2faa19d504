use crate::battle::state::TurnRng;
use crate::creature::CreatureInst;
use crate::errors::DataResult;
use crate::species::get_species_data;

/// Minimum capture probability, granted even at full health.
pub const CATCH_FLOOR: f64 = 0.3;
/// Capture probability is capped here; no throw is a sure thing.
pub const CATCH_CEILING: f64 = 0.95;

/// Probability that a thrown capture device holds the wild creature:
/// `min(0.95, (1 - hp/max_hp) * (catch_rate / 255) + 0.3)`.
///
/// Lower HP and a higher species catch rate both help; the floor keeps a
/// full-health target catchable and the ceiling keeps every throw fallible.
pub fn catch_probability(wild: &CreatureInst) -> DataResult<f64> {
    let data = get_species_data(wild.species)?;
    let hp_fraction = f64::from(wild.current_hp) / f64::from(wild.stats.max_hp);
    let rate_fraction = f64::from(data.catch_rate) / 255.0;
    Ok(((1.0 - hp_fraction) * rate_fraction + CATCH_FLOOR).min(CATCH_CEILING))
}

/// One capture attempt: succeeds iff the roll lands under the probability.
pub fn roll_catch(probability: f64, rng: &mut TurnRng) -> bool {
    rng.next_roll("catch check") < probability
}
