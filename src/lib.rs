pub mod battle;
pub mod battle_logger;
pub mod capture;
pub mod data;
pub mod encounter;
pub mod experience;
pub mod items;
pub mod matrix;
pub mod model;
pub mod registry;
pub mod rng;
pub mod scenario;
pub mod types;

pub use crate::battle::resolve_turn;
pub use crate::capture::{compute_catch_chance, try_catch, CatchOutcome};
pub use crate::encounter::{generate_encounter_for_location, generate_wild_creature, pick_encounter};
pub use crate::experience::gain_experience;
pub use crate::registry::GameData;
pub use crate::rng::{FixedRandom, RandomSource, ScriptedRandom, SeededRandom};
pub use crate::scenario::{Scenario, ScenarioError};

use crate::matrix::{compute_matrix, play_out, MatrixOptions};
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub scenario_path: PathBuf,
    pub sims_per_cell: usize,
    pub seed: u64,
    pub output_path: PathBuf,
    pub max_turns: u32,
    /// Print one seeded battle log instead of computing the matrix.
    pub replay: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        let matrix = MatrixOptions::default();
        Self {
            scenario_path: PathBuf::from("scenarios/first_gym.json"),
            sims_per_cell: matrix.sims_per_cell,
            seed: matrix.seed,
            output_path: PathBuf::from("matrix.csv"),
            max_turns: matrix.max_turns,
            replay: false,
        }
    }
}

pub fn load_scenario(path: &Path) -> anyhow::Result<Scenario> {
    Scenario::load(path)
        .with_context(|| format!("Failed to load scenario from {}", path.display()))
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    if opts.sims_per_cell == 0 {
        anyhow::bail!("--sims-per-cell must be > 0");
    }
    if opts.max_turns == 0 {
        anyhow::bail!("--max-turns must be > 0");
    }
    let scenario = load_scenario(&opts.scenario_path)?;
    let (data, state) = scenario
        .build(&GameData::builtin())
        .with_context(|| format!("Invalid scenario {}", opts.scenario_path.display()))?;

    if opts.replay {
        let finished = play_out(&state, &data.moves, opts.seed, opts.max_turns);
        for line in finished.log.lines() {
            println!("{line}");
        }
        println!(
            "Battle {} stopped at turn {} in phase {:?}",
            finished.id, finished.turn, finished.phase
        );
        return Ok(());
    }

    let matrix_opts = MatrixOptions {
        sims_per_cell: opts.sims_per_cell,
        seed: opts.seed,
        max_turns: opts.max_turns,
    };
    let matrix = compute_matrix(
        &state.sides.player.creatures,
        &state.sides.enemy.creatures,
        &data.moves,
        &matrix_opts,
    );
    matrix::write_csv(&matrix, &opts.output_path)?;
    println!(
        "Wrote {}x{} matrix to {}",
        matrix.len(),
        matrix.first().map(|r| r.len()).unwrap_or(0),
        opts.output_path.display()
    );
    Ok(())
}
