use crate::battle::resolve_turn;
use crate::model::{BattlePhase, BattleState, Combatant, ParticipantSide, Side};
use crate::registry::MoveRegistry;
use crate::rng::{RandomSource, SeededRandom};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DuelResult {
    PlayerWins,
    EnemyWins,
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatrixOptions {
    pub sims_per_cell: usize,
    pub seed: u64,
    pub max_turns: u32,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            sims_per_cell: 100,
            seed: 0,
            max_turns: 200,
        }
    }
}

/// Uniform pick among moves with PP left. With none left the first learned
/// move is chosen anyway and the engine narrates the empty PP.
fn choose_move<R: RandomSource + ?Sized>(combatant: &Combatant, rng: &mut R) -> String {
    let usable: Vec<&str> = combatant
        .moves
        .iter()
        .filter(|m| m.current_pp > 0)
        .map(|m| m.move_id.as_str())
        .collect();
    if usable.is_empty() {
        return combatant
            .moves
            .first()
            .map(|m| m.move_id.clone())
            .unwrap_or_default();
    }
    let idx = rng.rand_int(0, usable.len() as i64 - 1) as usize;
    usable[idx].to_string()
}

/// Plays `state` forward with random move choices until the battle ends,
/// both actives are down, or `max_turns` turns have been resolved.
pub fn play_out(
    state: &BattleState,
    moves: &MoveRegistry,
    seed: u64,
    max_turns: u32,
) -> BattleState {
    let mut rng = SeededRandom::new(seed);
    let mut current = state.clone();
    for _ in 0..max_turns {
        if current.phase == BattlePhase::End {
            break;
        }
        if current.sides.player.is_down() && current.sides.enemy.is_down() {
            break;
        }
        let (Some(player), Some(enemy)) =
            (current.active(Side::Player), current.active(Side::Enemy))
        else {
            break;
        };
        let player_move = choose_move(player, &mut rng);
        let enemy_move = choose_move(enemy, &mut rng);
        current = resolve_turn(&current, moves, &player_move, &enemy_move, &mut rng);
    }
    current
}

pub fn duel_result(state: &BattleState) -> DuelResult {
    if state.phase != BattlePhase::End {
        return DuelResult::Draw;
    }
    match (state.sides.player.is_down(), state.sides.enemy.is_down()) {
        (false, true) => DuelResult::PlayerWins,
        (true, false) => DuelResult::EnemyWins,
        _ => DuelResult::Draw,
    }
}

/// One seeded 1v1 between fresh copies of `player` and `enemy`.
pub fn simulate_duel(
    player: &Combatant,
    enemy: &Combatant,
    moves: &MoveRegistry,
    seed: u64,
    max_turns: u32,
) -> DuelResult {
    let state = BattleState::new(
        format!("duel-{seed}"),
        ParticipantSide::new(None, vec![player.clone()]),
        ParticipantSide::new(None, vec![enemy.clone()]),
    );
    duel_result(&play_out(&state, moves, seed, max_turns))
}

/// Win rate of every player combatant (rows) against every enemy combatant
/// (columns). Draws count half.
pub fn compute_matrix(
    player: &[Combatant],
    enemy: &[Combatant],
    moves: &MoveRegistry,
    opts: &MatrixOptions,
) -> Vec<Vec<f64>> {
    let tasks: Vec<(usize, usize)> = (0..player.len())
        .flat_map(|p| (0..enemy.len()).map(move |e| (p, e)))
        .collect();
    let cell_results: Vec<CellResult> = tasks
        .par_iter()
        .map(|&(p_idx, e_idx)| {
            let mut cell_rng =
                SmallRng::seed_from_u64(opts.seed ^ ((p_idx as u64) << 32) ^ (e_idx as u64));
            let mut wins = 0u64;
            let mut draws = 0u64;
            for _ in 0..opts.sims_per_cell {
                let battle_seed: u64 = cell_rng.gen();
                match simulate_duel(
                    &player[p_idx],
                    &enemy[e_idx],
                    moves,
                    battle_seed,
                    opts.max_turns,
                ) {
                    DuelResult::PlayerWins => wins += 1,
                    DuelResult::EnemyWins => {}
                    DuelResult::Draw => draws += 1,
                }
            }
            let total = opts.sims_per_cell.max(1) as f64;
            CellResult {
                p_idx,
                e_idx,
                win_rate: (wins as f64 + 0.5 * draws as f64) / total,
            }
        })
        .collect();

    let mut matrix = vec![vec![0.0; enemy.len()]; player.len()];
    for cell in cell_results {
        matrix[cell.p_idx][cell.e_idx] = cell.win_rate;
    }
    tracing::info!(
        rows = player.len(),
        cols = enemy.len(),
        sims_per_cell = opts.sims_per_cell,
        "win-rate matrix computed"
    );
    matrix
}

pub fn write_csv(matrix: &[Vec<f64>], path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::new();
    for (row_idx, row) in matrix.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(',');
            }
            out.push_str(&format!("{value:.4}"));
        }
        if row_idx + 1 < matrix.len() {
            out.push('\n');
        }
    }
    std::fs::write(path, out)?;
    Ok(())
}

struct CellResult {
    p_idx: usize,
    e_idx: usize,
    win_rate: f64,
}
