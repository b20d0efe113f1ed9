use crate::model::{Combatant, Move, StatusCondition};
use crate::rng::RandomSource;
use crate::types::{effectiveness, stab};

/// Lowest value of the damage random factor; the factor spans `[0.85, 1.0]`.
pub const MIN_RANDOM_FACTOR: f64 = 0.85;

/// Accuracy after status penalties. Paralysis costs a tenth of the nominal value.
pub fn effective_accuracy(move_def: &Move, status: StatusCondition) -> Option<u32> {
    let accuracy = move_def.accuracy?;
    if status == StatusCondition::Paralysis {
        Some((accuracy * 9 / 10).max(1))
    } else {
        Some(accuracy)
    }
}

/// Largest draw the accuracy roll uses, keeping the scaled roll inside `[0, 100)`.
const MAX_ACCURACY_DRAW: f64 = 1.0 - f64::EPSILON;

/// `None` always hits; otherwise a draw in `[0, 100)` must land below the accuracy.
pub fn accuracy_roll<R: RandomSource + ?Sized>(accuracy: Option<u32>, rng: &mut R) -> bool {
    match accuracy {
        None => true,
        Some(accuracy) => {
            let draw = rng.next_f64().min(MAX_ACCURACY_DRAW);
            draw * 100.0 < accuracy as f64
        }
    }
}

/// Level/power/stat core of the formula, before STAB, type and random modifiers.
pub fn base_damage(level: u32, power: u32, attack: u32, defense: u32) -> u64 {
    let level_factor = (2 * level as u64) / 5 + 2;
    let defense = defense.max(1) as u64;
    level_factor * power as u64 * attack as u64 / (defense * 50) + 2
}

/// Damage dealt by `move_def`. Always uses physical attack/defense, whatever
/// the move category. Non-damaging moves and immune defenders take 0;
/// anything else takes at least 1.
pub fn compute_damage<R: RandomSource + ?Sized>(
    attacker: &Combatant,
    defender: &Combatant,
    move_def: &Move,
    rng: &mut R,
) -> u32 {
    let power = match move_def.power {
        Some(power) if power > 0 => power,
        _ => return 0,
    };
    let type_mod = effectiveness(move_def.move_type, &defender.types);
    if type_mod == 0.0 {
        return 0;
    }
    let base = base_damage(
        attacker.level,
        power,
        attacker.stats.attack,
        defender.stats.defense,
    );
    let stab = stab(move_def.move_type, &attacker.types);
    let rand_mod = MIN_RANDOM_FACTOR + rng.next_f64() * (1.0 - MIN_RANDOM_FACTOR);
    let total = (base as f64 * stab * type_mod * rand_mod).floor();
    (total as u32).max(1)
}
