// config.rs - Command-line configuration

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cell2d::Rule;

/// Which transition engine advances the field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Whole-grid passes on the calling thread.
    Sequential,
    /// One tokio task per row.
    Coro,
}

/// Von Neumann binary cellular automaton on a torus.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Field width in cells.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Field height in cells.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Magnified cell size in pixels.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Rule as hexadecimal (random when omitted).
    #[arg(long)]
    pub rule: Option<String>,

    /// Number of generations to run.
    #[arg(long = "loop", default_value_t = 1000)]
    pub loop_count: u64,

    /// Run without opening a window.
    #[arg(long)]
    pub batch: bool,

    /// Seed for the initial field and the random rule.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Transition engine.
    #[arg(long, value_enum, default_value_t = Engine::Sequential)]
    pub engine: Engine,

    /// Log level.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Config {
    /// The configured rule, or one drawn uniformly at random.
    pub fn resolve_rule(&self) -> Result<Rule> {
        match &self.rule {
            Some(text) => text
                .parse()
                .with_context(|| format!("invalid rule {text:?}")),
            None => Ok(Rule::random(&mut self.rng(0))),
        }
    }

    /// Seed for the initial field, derived from `--seed` when given.
    pub fn field_seed(&self) -> Option<u64> {
        self.seed.map(|_| self.rng(1).random())
    }

    /// Generator for stream `stream` of this run.
    fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_os_rng(),
        }
    }
}
