use crate::battle::state::TurnRng;
use schema::ElementType;

/// Chance that any damaging hit is critical (1 in 16).
pub const CRIT_CHANCE: f64 = 0.0625;

const CRIT_MULTIPLIER: f64 = 2.0;
const VARIANCE_FLOOR: f64 = 0.85;

/// Result of a single damage calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    pub damage: u16,
    pub critical: bool,
    /// Type-effectiveness multiplier that was applied.
    pub multiplier: f64,
}

/// Computes damage for one hit. Consumes two rolls: critical check, then
/// damage variance.
///
/// `base = (2 * level / 5 + 2) * power * attack / defense / 50 + 2`, then
/// scaled by the type chart, a uniform variance in `[0.85, 1.0]`, and x2 on
/// a critical hit. The final value is floored and never below 1.
pub fn calculate_damage(
    level: u8,
    attack: u16,
    defense: u16,
    power: u16,
    attack_element: ElementType,
    defend_element: ElementType,
    rng: &mut TurnRng,
) -> DamageOutcome {
    let critical = rng.next_roll("critical hit check") < CRIT_CHANCE;
    let multiplier = ElementType::effectiveness(attack_element, defend_element);
    let variance = VARIANCE_FLOOR + (1.0 - VARIANCE_FLOOR) * rng.next_roll("damage variance");

    let base = (2.0 * f64::from(level) / 5.0 + 2.0) * f64::from(power) * f64::from(attack)
        / f64::from(defense)
        / 50.0
        + 2.0;
    let scaled = base
        * multiplier
        * variance
        * if critical { CRIT_MULTIPLIER } else { 1.0 };
    let damage = scaled.floor().max(1.0) as u16;

    DamageOutcome {
        damage,
        critical,
        multiplier,
    }
}
