use poketsu_battle::{run, CliOptions};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--scenario scenario.json] [--sims-per-cell N] [--seed SEED] \
[--output matrix.csv] [--max-turns N] [--replay]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scenario" => {
                opts.scenario_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--scenario requires a path (e.g. --scenario gym.json)")
                })?;
            }
            "--sims-per-cell" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sims-per-cell requires a number"))?;
                opts.sims_per_cell = val.parse()?;
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                opts.seed = val.parse()?;
            }
            "--output" => {
                opts.output_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output matrix.csv)")
                })?;
            }
            "--max-turns" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--max-turns requires a number"))?;
                opts.max_turns = val.parse()?;
            }
            "--replay" => opts.replay = true,
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    let opts = parse_args()?;
    run(opts)
}
