//! wraith - star cluster generator for the Wraith game engine
//!
//! Usage:
//!     wraith create --systems 512 --stars 128 --scale 15 --output cluster.json
//!     wraith create --config config.ron --seed 42 --format ron
//!     wraith roll 3 6 --seed 7

mod config;
mod render;
mod seed;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use engine_core::{roll, Prng, PrngKind};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use config::WraithConfig;
use render::OutputFormat;

/// Wraith cluster generator
#[derive(Parser)]
#[command(name = "wraith")]
#[command(version)]
#[command(about = "Procedural star cluster generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new cluster and write its view
    Create(CreateArgs),

    /// Roll N dice of D sides (faces 0..D-1) and print the sum
    Roll {
        /// Number of dice
        n: i64,

        /// Sides per die
        d: i64,

        /// Seed for the generator (OS entropy when omitted)
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i64>,

        /// Generator algorithm
        #[arg(long, default_value = "sfc32")]
        prng: PrngKind,
    },
}

/// Flags for `create`. Each one overrides the config file.
#[derive(Args, Debug, Default)]
struct CreateArgs {
    /// Config file (defaults to ./config.ron when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Systems to place, origin included
    #[arg(long)]
    systems: Option<usize>,

    /// Stars to distribute
    #[arg(long)]
    stars: Option<usize>,

    /// Radius of the probe sphere in light years
    #[arg(long)]
    scale: Option<f64>,

    /// Seed for the generator (OS entropy when omitted)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Generator algorithm: lcg32 or sfc32
    #[arg(long)]
    prng: Option<PrngKind>,

    /// Output encoding
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CreateArgs {
    fn apply(&self, config: &mut WraithConfig) {
        if let Some(systems) = self.systems {
            config.cluster.systems = systems;
        }
        if let Some(stars) = self.stars {
            config.cluster.stars = stars;
        }
        if let Some(scale) = self.scale {
            config.cluster.scale = scale;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(prng) = self.prng {
            config.prng = prng;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.output.is_some() {
            config.output = self.output.clone();
        }
    }
}

/// Seeds are signed on the command line and in config files; the generators
/// take the same 64 bits unsigned.
fn resolve_seed(seed: Option<i64>) -> Result<u64> {
    let seed = match seed {
        Some(seed) => seed as u64,
        None => seed::os_seed()?,
    };
    log::info!("{:<30} == {}", "seed", seed);
    Ok(seed)
}

fn cmd_create(args: &CreateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => WraithConfig::load_from(path)?,
        None => WraithConfig::load(),
    };
    args.apply(&mut config);

    let seed = resolve_seed(config.seed)?;
    log::info!("{:<30} == {}", "prng", config.prng);

    let cluster = procgen::generate_seeded(&config.cluster, config.prng, seed)?;
    let renderer = config.format.renderer();
    let bytes = cluster.render(renderer.as_ref())?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, &bytes).with_context(|| format!("writing {:?}", path))?;
            log::info!("[create] created {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("writing to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn cmd_roll(n: i64, d: i64, seed: Option<i64>, kind: PrngKind) -> Result<()> {
    let seed = resolve_seed(seed)?;
    let mut rng = Prng::new(kind, seed);
    println!("{}", roll(&mut rng, n, d));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let started = Instant::now();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Create(args) => cmd_create(args),
        Commands::Roll { n, d, seed, prng } => cmd_roll(*n, *d, *seed, *prng),
    };

    log::info!("wraith: total time {:?}", started.elapsed());
    result
}
