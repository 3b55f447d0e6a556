//! formation-preview - print the spawn order a wave file produces
//!
//! Usage:
//!   formation-preview <WAVE_FILE> [--seed <u64>] [--formation <index>] [--verbose]

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use formation_spawner::{EnemyFormation, WaveConfig, logging};

#[derive(Parser, Debug)]
#[command(name = "formation-preview")]
#[command(about = "Preview the enemy spawn order of a wave definition")]
struct Cli {
    /// RON wave definition to load
    wave_file: PathBuf,

    /// Seed for the random spawn order, for reproducible previews
    #[arg(long)]
    seed: Option<u64>,

    /// Only preview the formation at this index
    #[arg(long)]
    formation: Option<usize>,

    /// Trace every pick to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

/// Load the wave named on the command line and preview the selected formations
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = WaveConfig::load(&cli.wave_file)
        .wrap_err_with(|| format!("could not load {}", cli.wave_file.display()))?;
    let mut formations = config.build_formations();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if let Some(name) = &config.name {
        writeln!(out, "Wave: {name}")?;
    }

    match cli.formation {
        Some(index) => {
            let count = formations.len();
            let formation = formations.get_mut(index).ok_or_else(|| {
                eyre!("formation {index} does not exist (wave has {count} formations)")
            })?;
            preview(index, formation, &mut rng, out)?;
        }
        None => {
            for (index, formation) in formations.iter_mut().enumerate() {
                preview(index, formation, &mut rng, out)?;
            }
        }
    }

    Ok(())
}

/// Drain a formation, writing one line per spawn
fn preview(
    index: usize,
    formation: &mut EnemyFormation,
    rng: &mut StdRng,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(
        out,
        "\nFormation {index}: {:?}, delay {:.2}s, {} enemies",
        formation.spawn_order(),
        formation.formation_delay(),
        formation.remaining()
    )?;

    formation.initialize_first_random_index(rng);

    let mut spawned = 0;
    while let Some(enemy_type) = formation
        .next_enemy_type(rng)
        .wrap_err_with(|| format!("formation {index} cannot spawn"))?
    {
        spawned += 1;
        let interval = formation.current_spawn_interval().unwrap_or_default();
        writeln!(
            out,
            "  {spawned:>3}  slot {:<2} {:<6} +{interval:.2}s",
            formation.last_used_index(),
            enemy_type.name(),
        )?;
    }

    info!(formation = index, spawned, "formation drained");
    Ok(())
}
