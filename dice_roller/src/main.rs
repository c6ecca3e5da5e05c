//! dice_roller - Command-line demo for dice_core
//!
//! Rolls named dice presets and prints each result next to the dice's
//! closed-form statistics:
//! - Presets come from a TOML file or the built-in table
//! - A fixed `--seed` makes every run reproducible
//! - `--trials` adds a simulated mean for comparison

use anyhow::{bail, Context, Result};
use clap::Parser;
use dice_core::{
    config::load_presets, default_presets, DiceMath, DicePreset, RollSimulation,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML file with [[presets]] entries (built-in presets if omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible rolls
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of simulated rolls per preset (0 disables simulation)
    #[arg(long, default_value_t = 0)]
    pub trials: u32,

    /// Preset ids to roll (all presets if none given)
    pub presets: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing();

    tracing::info!("Starting dice_roller with args: {:?}", &args);

    let presets = match &args.config {
        Some(path) => load_presets(path)
            .with_context(|| format!("loading presets from {}", path.display()))?,
        None => default_presets(),
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    for preset in select_presets(&presets, &args.presets)? {
        let result = preset
            .roll_with(&mut rng)
            .with_context(|| format!("rolling preset '{}'", preset.id))?;
        let dice = preset.to_dice()?;

        println!(
            "{}: {} -> {:?} = {} (avg {:.1}, min {}, max {})",
            result.id,
            result.dice,
            result.kept,
            result.total,
            DiceMath::average(&dice),
            DiceMath::min(&dice),
            DiceMath::max(&dice),
        );
        if preset.drop_lowest > 0 {
            println!("    rolled {:?}, dropped {}", result.rolls, preset.drop_lowest);
        }

        if args.trials > 0 {
            let mut dice = dice;
            let simulation = RollSimulation::run(&mut dice, args.trials, &mut rng);
            println!(
                "    {} trials: mean {:.2}, lowest {}, highest {}",
                simulation.trials,
                simulation.mean(),
                simulation.lowest_seen.unwrap_or(0),
                simulation.highest_seen.unwrap_or(0),
            );
        }
    }

    Ok(())
}

/// Install the process-wide subscriber, honoring RUST_LOG
fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve requested ids, or every preset sorted by id
fn select_presets<'a>(
    presets: &'a HashMap<String, DicePreset>,
    requested: &[String],
) -> Result<Vec<&'a DicePreset>> {
    if requested.is_empty() {
        let mut all: Vec<&DicePreset> = presets.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        return Ok(all);
    }

    let mut selected = Vec::with_capacity(requested.len());
    for id in requested {
        match presets.get(id) {
            Some(preset) => selected.push(preset),
            None => bail!("unknown preset '{}'", id),
        }
    }
    Ok(selected)
}
