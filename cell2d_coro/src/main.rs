// main.rs - Von Neumann cellular automaton driver
// Batch mode runs headless; otherwise the field is shown live in an egui window.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use log::{debug, info};

use cell2d::{Field, Metrics};

mod config;
mod palette;
mod ui;

use config::{Config, Engine};

fn main() -> Result<()> {
    let config = Config::parse();
    simple_logger::SimpleLogger::new()
        .with_level(config.log_level)
        .init()
        .context("failed to install logger")?;
    info!("Starting cell2d v{} ...", env!("CARGO_PKG_VERSION"));

    let mut sim = Simulation::new(&config)?;

    if config.batch {
        sim.run(config.loop_count)?;
        println!("{}", sim.summary());
        return Ok(());
    }

    let width = config.width as f32 * config.size as f32;
    let height = config.height as f32 * config.size as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(200.0), height.max(200.0)]),
        ..Default::default()
    };
    let viewer = ui::Viewer::new(sim, config.loop_count, config.size as f32);
    eframe::run_native(
        "Cellular Automata",
        options,
        Box::new(move |_cc| Box::new(viewer)),
    )
    .map_err(|err| anyhow!("failed to open window: {err}"))
}

/// A field together with the engine that advances it.
pub struct Simulation {
    field: Field,
    engine: Engine,
    runtime: tokio::runtime::Runtime,
}

impl Simulation {
    /// Builds the masked random starting field described by `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let rule = config.resolve_rule()?;
        let mut field = Field::new(config.width as usize, config.height as usize, rule)?;
        field.initialize_random(config.field_seed());
        field.apply_central_mask();
        info!(
            "{}x{} field, rule {}, {:?} engine",
            config.width, config.height, rule, config.engine
        );
        let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
        Ok(Self {
            field,
            engine: config.engine,
            runtime,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Advances one generation with the configured engine.
    pub fn update_generation(&mut self) -> Result<()> {
        match self.engine {
            Engine::Sequential => self.field.step(),
            Engine::Coro => self.runtime.block_on(self.field.step_rows())?,
        }
        Ok(())
    }

    /// Advances `generations` generations.
    pub fn run(&mut self, generations: u64) -> Result<()> {
        for _ in 0..generations {
            self.update_generation()?;
        }
        debug!("Stopped at generation {}", self.field.generation());
        Ok(())
    }

    /// One-line report of the final state.
    pub fn summary(&self) -> String {
        let metrics: Metrics = self.field.metrics();
        format!(
            "{:.8} rule={} sticky_rate={:.8} Entropy={}",
            metrics.score(),
            self.field.rule(),
            metrics.sticky_rate,
            metrics.entropy
        )
    }
}
