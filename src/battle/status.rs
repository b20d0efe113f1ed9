//! Status gating at the start of an action and residual effects at turn end.
//!
//! Only sleep and paralysis gate actions and only poison has a residual.
//! Burn, freeze and confusion are carried on the combatant without effect.

use crate::battle_logger::BattleLog;
use crate::model::{Combatant, Move, StatusCondition};
use crate::rng::RandomSource;

pub const WAKE_CHANCE: f64 = 1.0 / 3.0;
pub const FULL_PARALYSIS_CHANCE: f64 = 0.25;
pub const STATUS_INFLICTION_CHANCE: f64 = 0.3;
/// Poison removes this fraction (as a divisor) of max HP each turn.
pub const POISON_DIVISOR: u32 = 16;

/// Whether `combatant` gets to act this turn. May wake a sleeper.
pub fn can_act<R: RandomSource + ?Sized>(
    combatant: &mut Combatant,
    log: &mut BattleLog,
    rng: &mut R,
) -> bool {
    if combatant.is_fainted() {
        return false;
    }
    match combatant.status {
        StatusCondition::Sleep => {
            if rng.chance(WAKE_CHANCE) {
                combatant.status = StatusCondition::None;
                log.log_wake(combatant.display_name());
                true
            } else {
                log.log_asleep(combatant.display_name());
                false
            }
        }
        StatusCondition::Paralysis => {
            if rng.chance(FULL_PARALYSIS_CHANCE) {
                log.log_paralyzed(combatant.display_name());
                false
            } else {
                true
            }
        }
        _ => true,
    }
}

/// End-of-turn tick. Applies to whoever is passed in, fainted or not.
pub fn end_of_turn_residual(combatant: &mut Combatant, log: &mut BattleLog) {
    if combatant.status != StatusCondition::Poison {
        return;
    }
    let damage = (combatant.stats.hp / POISON_DIVISOR).max(1);
    let knocked_out = combatant.take_damage(damage);
    log.log_poison(combatant.display_name(), damage);
    if knocked_out {
        log.log_faint(combatant.display_name());
    }
}

/// Rolls the move's status effect onto `target`. Only poison, paralysis and
/// sleep can be inflicted, and only on a target with no status yet.
pub fn inflict_status<R: RandomSource + ?Sized>(
    target: &mut Combatant,
    move_def: &Move,
    log: &mut BattleLog,
    rng: &mut R,
) -> bool {
    let Some(effect) = move_def
        .effect_id
        .as_deref()
        .and_then(StatusCondition::from_id)
    else {
        return false;
    };
    if !target.status.is_none() {
        return false;
    }
    if !matches!(
        effect,
        StatusCondition::Poison | StatusCondition::Paralysis | StatusCondition::Sleep
    ) {
        return false;
    }
    if !rng.chance(STATUS_INFLICTION_CHANCE) {
        return false;
    }
    target.status = effect;
    log.log_status(target.display_name(), effect.as_str());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementType, MoveCategory, Stats};
    use crate::rng::{FixedRandom, ScriptedRandom};

    fn mon(status: StatusCondition) -> Combatant {
        Combatant {
            uid: "m1".to_string(),
            species_id: "sparkit".to_string(),
            nickname: Some("Zap".to_string()),
            level: 5,
            experience: 0,
            current_hp: 40,
            stats: Stats {
                hp: 40,
                attack: 10,
                defense: 10,
                sp_attack: 10,
                sp_defense: 10,
                speed: 10,
            },
            types: vec![ElementType::Electric],
            moves: Vec::new(),
            status,
            fainted: false,
        }
    }

    fn status_move(effect: &str) -> Move {
        Move {
            id: "fx".to_string(),
            name: "Effect".to_string(),
            move_type: ElementType::Poison,
            category: MoveCategory::Status,
            power: None,
            accuracy: None,
            pp: 10,
            max_pp: 10,
            priority: 0,
            description: None,
            effect_id: Some(effect.to_string()),
        }
    }

    #[test]
    fn sleeper_wakes_on_low_roll() {
        let mut zap = mon(StatusCondition::Sleep);
        let mut log = BattleLog::new();
        assert!(can_act(&mut zap, &mut log, &mut FixedRandom(0.1)));
        assert_eq!(zap.status, StatusCondition::None);
        assert_eq!(log.lines(), ["Zap woke up!"]);
    }

    #[test]
    fn sleeper_stays_asleep_on_high_roll() {
        let mut zap = mon(StatusCondition::Sleep);
        let mut log = BattleLog::new();
        assert!(!can_act(&mut zap, &mut log, &mut FixedRandom(0.5)));
        assert_eq!(zap.status, StatusCondition::Sleep);
        assert!(log.contains("fast asleep"));
    }

    #[test]
    fn paralysis_blocks_without_clearing() {
        let mut zap = mon(StatusCondition::Paralysis);
        let mut log = BattleLog::new();
        assert!(!can_act(&mut zap, &mut log, &mut FixedRandom(0.1)));
        assert_eq!(zap.status, StatusCondition::Paralysis);
        assert!(can_act(&mut zap, &mut log, &mut FixedRandom(0.9)));
    }

    #[test]
    fn fainted_never_acts_and_draws_nothing() {
        let mut zap = mon(StatusCondition::None);
        zap.current_hp = 0;
        let mut rng = ScriptedRandom::new([0.0]);
        assert!(!can_act(&mut zap, &mut BattleLog::new(), &mut rng));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn untracked_statuses_do_not_gate() {
        for status in [
            StatusCondition::Burn,
            StatusCondition::Freeze,
            StatusCondition::Confusion,
        ] {
            let mut zap = mon(status);
            assert!(can_act(&mut zap, &mut BattleLog::new(), &mut FixedRandom::min()));
            let mut log = BattleLog::new();
            end_of_turn_residual(&mut zap, &mut log);
            assert_eq!(zap.current_hp, 40);
            assert!(log.is_empty());
        }
    }

    #[test]
    fn poison_ticks_a_sixteenth() {
        let mut zap = mon(StatusCondition::Poison);
        let mut log = BattleLog::new();
        end_of_turn_residual(&mut zap, &mut log);
        assert_eq!(zap.current_hp, 38);
        assert_eq!(log.lines(), ["Zap is hurt by poison! (-2)"]);
    }

    #[test]
    fn poison_tick_is_at_least_one_and_can_faint() {
        let mut zap = mon(StatusCondition::Poison);
        zap.stats.hp = 10;
        zap.current_hp = 1;
        let mut log = BattleLog::new();
        end_of_turn_residual(&mut zap, &mut log);
        assert_eq!(zap.current_hp, 0);
        assert!(zap.fainted);
        assert!(log.contains("Zap fainted!"));
    }

    #[test]
    fn infliction_needs_clean_target_and_roll() {
        let mut log = BattleLog::new();
        let mut target = mon(StatusCondition::None);
        assert!(!inflict_status(&mut target, &status_move("poison"), &mut log, &mut FixedRandom(0.5)));
        assert!(inflict_status(&mut target, &status_move("poison"), &mut log, &mut FixedRandom(0.1)));
        assert_eq!(target.status, StatusCondition::Poison);
        assert!(!inflict_status(&mut target, &status_move("sleep"), &mut log, &mut FixedRandom(0.1)));
        assert_eq!(target.status, StatusCondition::Poison);
    }

    #[test]
    fn only_three_statuses_are_inflictable() {
        let mut target = mon(StatusCondition::None);
        let mut rng = ScriptedRandom::new([0.0]);
        for effect in ["burn", "freeze", "confusion", "flinch"] {
            assert!(!inflict_status(&mut target, &status_move(effect), &mut BattleLog::new(), &mut rng));
        }
        assert_eq!(rng.consumed(), 0);
        assert_eq!(target.status, StatusCondition::None);
    }
}
