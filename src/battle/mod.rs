//! Turn resolution for a single active combatant per side.

pub mod damage;
pub mod status;

use crate::battle_logger::BattleLog;
use crate::experience::award_experience;
use crate::model::{
    BattlePhase, BattleState, Combatant, Move, MoveAction, QueuedAction, Side, Sides,
    StatusCondition,
};
use crate::registry::MoveRegistry;
use crate::rng::RandomSource;
use crate::types::effectiveness;

pub use damage::{accuracy_roll, compute_damage, effective_accuracy};
pub use status::{can_act, end_of_turn_residual, inflict_status};

/// Speed used for ordering; paralysis halves it.
pub fn effective_speed(combatant: &Combatant) -> u32 {
    if combatant.status == StatusCondition::Paralysis {
        combatant.stats.speed / 2
    } else {
        combatant.stats.speed
    }
}

/// Ordering key for one action. Lower resolves first, so higher move priority
/// and higher speed both push an action earlier. Unknown moves count as priority 0.
pub fn turn_priority(combatant: &Combatant, move_def: Option<&Move>) -> i64 {
    let move_priority = move_def.map_or(0, |m| m.priority) as i64;
    -move_priority - effective_speed(combatant) as i64
}

/// Queues both sides' actions sorted by [`turn_priority`]. Ties keep the
/// player first; there is no random tie-break.
pub fn compute_order(
    state: &BattleState,
    moves: &MoveRegistry,
    player_move: &str,
    enemy_move: &str,
) -> Vec<QueuedAction> {
    let mut actions = Vec::with_capacity(2);
    for (side, move_id) in [(Side::Player, player_move), (Side::Enemy, enemy_move)] {
        let Some(actor) = state.active(side) else {
            continue;
        };
        let target = side.opponent();
        actions.push(QueuedAction {
            action: MoveAction {
                actor_side: side,
                actor_index: state.side(side).active_index,
                move_id: move_id.to_string(),
                target_side: target,
                target_index: state.side(target).active_index,
            },
            priority: turn_priority(actor, moves.get(move_id)),
        });
    }
    actions.sort_by_key(|a| a.priority);
    actions
}

/// Resolves one turn and returns the next snapshot. `state` is never touched.
///
/// Anomalies (unknown moves, empty PP, fainted actors) are narrated in the log
/// and skipped; this never fails.
pub fn resolve_turn<R: RandomSource + ?Sized>(
    state: &BattleState,
    moves: &MoveRegistry,
    player_move: &str,
    enemy_move: &str,
    rng: &mut R,
) -> BattleState {
    let mut next = state.clone();
    next.queue = compute_order(&next, moves, player_move, enemy_move);
    tracing::debug!(battle = %next.id, turn = next.turn, queue = ?next.queue, "resolving turn");

    for entry in std::mem::take(&mut next.queue) {
        if next.sides.player.is_down() || next.sides.enemy.is_down() {
            tracing::debug!(battle = %next.id, "active combatant down, skipping remaining actions");
            break;
        }
        run_action(&mut next, moves, &entry.action, rng);
    }

    let Sides { player, enemy } = &mut next.sides;
    for side in [player, enemy] {
        if let Some(active) = side.active_mut() {
            end_of_turn_residual(active, &mut next.log);
        }
    }

    let player_down = next.sides.player.is_down();
    let enemy_down = next.sides.enemy.is_down();
    if enemy_down && !player_down {
        award_experience(&mut next, Side::Enemy);
        next.phase = BattlePhase::End;
    } else if player_down && !enemy_down {
        next.phase = BattlePhase::End;
    }
    next.turn += 1;
    if next.phase == BattlePhase::End {
        tracing::debug!(battle = %next.id, player_down, enemy_down, "battle over");
    }
    next
}

fn active_pair(sides: &mut Sides, actor: Side) -> Option<(&mut Combatant, &mut Combatant)> {
    let Sides { player, enemy } = sides;
    let (attacker, defender) = match actor {
        Side::Player => (player, enemy),
        Side::Enemy => (enemy, player),
    };
    Some((attacker.active_mut()?, defender.active_mut()?))
}

fn run_action<R: RandomSource + ?Sized>(
    state: &mut BattleState,
    moves: &MoveRegistry,
    action: &MoveAction,
    rng: &mut R,
) {
    let BattleState { sides, log, .. } = state;
    let move_def = moves.get(&action.move_id);
    let Some((attacker, defender)) = active_pair(sides, action.actor_side) else {
        log.log_failed();
        return;
    };
    let (Some(move_def), Some(learned)) = (move_def, attacker.learned_move_mut(&action.move_id))
    else {
        tracing::warn!(move_id = %action.move_id, side = ?action.actor_side, "move not registered or not learned");
        log.log_failed();
        return;
    };
    if learned.current_pp == 0 {
        log.log_no_pp(attacker.display_name(), &move_def.name);
        return;
    }
    learned.current_pp -= 1;
    execute_move(attacker, defender, move_def, log, rng);
}

/// Runs a move whose PP has already been paid.
fn execute_move<R: RandomSource + ?Sized>(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    move_def: &Move,
    log: &mut BattleLog,
    rng: &mut R,
) {
    if !can_act(attacker, log, rng) {
        return;
    }
    let accuracy = effective_accuracy(move_def, attacker.status);
    if !accuracy_roll(accuracy, rng) {
        log.log_miss(attacker.display_name(), &move_def.name);
        return;
    }
    if move_def.is_damaging() {
        let dealt = compute_damage(attacker, defender, move_def, rng);
        let knocked_out = defender.take_damage(dealt);
        log.log_move(attacker.display_name(), &move_def.name, dealt);
        log.log_effectiveness(effectiveness(move_def.move_type, &defender.types));
        if knocked_out {
            log.log_faint(defender.display_name());
        }
    } else {
        log.log_status_move(attacker.display_name(), &move_def.name);
    }
    inflict_status(defender, move_def, log, rng);
}
