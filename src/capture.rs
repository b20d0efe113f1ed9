use crate::model::{CaptureDevice, Combatant, StatusCondition};
use crate::registry::SpeciesRegistry;
use crate::rng::RandomSource;

/// Catch rates live on a 0..=255 scale; also the fallback for unknown species.
pub const MAX_CATCH_RATE: u32 = 255;
pub const MIN_DEVICE_MODIFIER: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatchOutcome {
    pub caught: bool,
    /// Probability the roll was made against.
    pub chance: f64,
}

fn status_bonus(status: StatusCondition) -> f64 {
    match status {
        StatusCondition::Sleep | StatusCondition::Freeze => 2.0,
        StatusCondition::None => 1.0,
        _ => 1.5,
    }
}

fn is_master_device(device: &CaptureDevice) -> bool {
    device.name.to_lowercase().contains("master")
}

/// Probability in `[0, 1]` that `device` captures `target`.
pub fn compute_catch_chance(
    target: &Combatant,
    device: &CaptureDevice,
    species: &SpeciesRegistry,
) -> f64 {
    if is_master_device(device) {
        return 1.0;
    }
    let rate = species
        .get(&target.species_id)
        .and_then(|s| s.catch_rate)
        .unwrap_or(MAX_CATCH_RATE) as f64;
    let hp = target.current_hp.max(1) as f64;
    let max_hp = target.stats.hp.max(1) as f64;
    let modifier = device.catch_modifier.max(MIN_DEVICE_MODIFIER);
    let base = ((3.0 * max_hp - 2.0 * hp) * rate * modifier / (3.0 * max_hp))
        * status_bonus(target.status);
    (base / MAX_CATCH_RATE as f64).clamp(0.0, 1.0)
}

/// Rolls one capture attempt.
pub fn try_catch<R: RandomSource + ?Sized>(
    target: &Combatant,
    device: &CaptureDevice,
    species: &SpeciesRegistry,
    rng: &mut R,
) -> CatchOutcome {
    let chance = compute_catch_chance(target, device, species);
    let caught = rng.next_f64() < chance;
    tracing::debug!(target = %target.uid, device = %device.id, chance, caught, "capture attempt");
    CatchOutcome { caught, chance }
}
