use crate::model::{BattleState, Combatant, Side, Sides};

pub const LEVEL_CAP: u32 = 100;

/// Total experience needed to reach `level`.
pub fn exp_for_level(level: u32) -> u64 {
    (level as u64).pow(3) / 2
}

/// Experience granted for defeating `loser`.
pub fn exp_yield(loser: &Combatant) -> u64 {
    (loser.stats.battle_total() * loser.level as u64 / 10).max(1)
}

/// Flat per-level growth.
fn grow_one_level(winner: &mut Combatant) {
    winner.level += 1;
    winner.stats.attack += 2;
    winner.stats.defense += 2;
    winner.stats.sp_attack += 2;
    winner.stats.sp_defense += 2;
    winner.stats.speed += 2;
    winner.stats.hp += 4;
    winner.current_hp += 4;
}

/// Awards experience to the active combatant opposite `defeated` and returns
/// the next snapshot.
pub fn gain_experience(state: &BattleState, defeated: Side) -> BattleState {
    let mut next = state.clone();
    award_experience(&mut next, defeated);
    next
}

pub(crate) fn award_experience(state: &mut BattleState, defeated: Side) {
    let Some(gained) = state.active(defeated).map(exp_yield) else {
        tracing::warn!(battle = %state.id, ?defeated, "no defeated combatant to award experience for");
        return;
    };
    let BattleState { sides, log, .. } = state;
    let Sides { player, enemy } = sides;
    let winner_side = match defeated {
        Side::Player => enemy,
        Side::Enemy => player,
    };
    let Some(winner) = winner_side.active_mut() else {
        return;
    };

    winner.experience += gained;
    log.log_exp(winner.display_name(), gained);

    while winner.level < LEVEL_CAP && winner.experience >= exp_for_level(winner.level + 1) {
        grow_one_level(winner);
        log.log_level_up(winner.display_name(), winner.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementType, ParticipantSide, Stats, StatusCondition};

    fn mon(uid: &str, level: u32, stat: u32, current_hp: u32) -> Combatant {
        Combatant {
            uid: uid.to_string(),
            species_id: "flameling".to_string(),
            nickname: Some(uid.to_string()),
            level,
            experience: 0,
            current_hp,
            stats: Stats {
                hp: 20,
                attack: stat,
                defense: stat,
                sp_attack: stat,
                sp_defense: stat,
                speed: stat,
            },
            types: vec![ElementType::Fire],
            moves: Vec::new(),
            status: StatusCondition::None,
            fainted: current_hp == 0,
        }
    }

    fn state(hero: Combatant, foe: Combatant) -> BattleState {
        BattleState::new(
            "exp",
            ParticipantSide::new(Some("You".to_string()), vec![hero]),
            ParticipantSide::new(Some("Foe".to_string()), vec![foe]),
        )
    }

    #[test]
    fn thresholds_follow_half_cube() {
        assert_eq!(exp_for_level(1), 0);
        assert_eq!(exp_for_level(2), 4);
        assert_eq!(exp_for_level(3), 14);
        assert_eq!(exp_for_level(100), 500_000);
    }

    #[test]
    fn yield_is_at_least_one() {
        assert_eq!(exp_yield(&mon("weak", 1, 1, 0)), 1);
        assert_eq!(exp_yield(&mon("strong", 10, 50, 0)), 250);
    }

    #[test]
    fn multiple_levels_resolve_in_one_award() {
        let before = state(mon("Hero", 1, 10, 20), mon("Foe", 10, 50, 0));
        let after = gain_experience(&before, Side::Enemy);
        let hero = after.active(Side::Player).expect("hero present");
        assert_eq!(hero.experience, 250);
        // 7^3 / 2 = 171 <= 250 < 256 = 8^3 / 2
        assert_eq!(hero.level, 7);
        assert_eq!(hero.stats.attack, 10 + 6 * 2);
        assert_eq!(hero.stats.hp, 20 + 6 * 4);
        assert_eq!(hero.current_hp, 20 + 6 * 4);
        assert!(after.log.contains("Hero gained 250 EXP!"));
        assert!(after.log.contains("Hero grew to Lv. 7!"));

        let untouched = before.active(Side::Player).expect("hero present");
        assert_eq!(untouched.level, 1);
        assert_eq!(untouched.experience, 0);
        assert!(before.log.is_empty());
    }

    #[test]
    fn level_cap_stops_growth() {
        let mut hero = mon("Hero", 99, 10, 20);
        hero.experience = exp_for_level(99);
        let after = gain_experience(&state(hero, mon("Foe", 100, 1000, 0)), Side::Enemy);
        let hero = after.active(Side::Player).expect("hero present");
        assert_eq!(hero.level, LEVEL_CAP);
    }

    #[test]
    fn enemy_can_be_awarded_when_player_defeated() {
        let after = gain_experience(&state(mon("Hero", 5, 10, 0), mon("Foe", 5, 10, 20)), Side::Player);
        let foe = after.active(Side::Enemy).expect("foe present");
        assert_eq!(foe.experience, 25);
    }
}
