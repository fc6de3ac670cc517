// field.rs - Simulation driver: current/previous generations plus the rule

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::grid::Grid;
use crate::metrics::{self, Metrics};
use crate::rule::Rule;
use crate::transition;

/// A toroidal field of binary cells evolving under one [`Rule`].
///
/// `previous` always holds the generation before the last step. Before the
/// first step it is all zero, so every live cell of the initial field reads
/// as newly born.
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) current: Grid,
    pub(crate) previous: Grid,
    pub(crate) rule: Rule,
    pub(crate) generation: u64,
}

impl Field {
    /// Creates an all-zero field. Fails if `width` or `height` is zero.
    pub fn new(width: usize, height: usize, rule: Rule) -> Result<Self> {
        let current = Grid::new(width, height)?;
        debug!("Created {}x{} field with rule {}", width, height, rule);
        Ok(Self::with_grid(current, rule))
    }

    /// Creates a field whose initial generation is `grid`.
    pub fn with_grid(grid: Grid, rule: Rule) -> Self {
        Self {
            previous: grid.blank_like(),
            current: grid,
            rule,
            generation: 0,
        }
    }

    /// Sets every cell independently and uniformly to 0 or 1. With `None` the
    /// generator is seeded from the OS.
    pub fn initialize_random(&mut self, seed: Option<u64>) {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!("Randomizing field (seed: {:?})", seed);
        self.randomize(&mut rng);
    }

    /// Like [`Field::initialize_random`], drawing from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.current.cells_mut() {
            *cell = rng.random::<bool>();
        }
    }

    /// Zeroes every cell outside rows `[H/3, 2H/3)` and columns `[W/3, 2W/3)`.
    /// Meant to be called once, before the first step.
    pub fn apply_central_mask(&mut self) {
        let (width, height) = (self.width(), self.height());
        let rows = height / 3..height * 2 / 3;
        let cols = width / 3..width * 2 / 3;
        for row in 0..height {
            for col in 0..width {
                if !(rows.contains(&row) && cols.contains(&col)) {
                    self.current.set(row, col, false);
                }
            }
        }
        debug!(
            "Masked field to rows {:?}, cols {:?}; {} live cells remain",
            rows,
            cols,
            self.current.live_count()
        );
    }

    /// Advances exactly one generation.
    pub fn step(&mut self) {
        let next = transition::advance(&self.current, self.rule);
        self.commit(next);
    }

    /// Installs `next` as the current generation.
    pub(crate) fn commit(&mut self, next: Grid) {
        debug_assert_eq!(next.width(), self.width());
        debug_assert_eq!(next.height(), self.height());
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;
        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.current.live_count()
        );
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Number of steps taken so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    pub fn current_cell(&self, row: usize, col: usize) -> bool {
        self.current.get(row, col)
    }

    pub fn previous_cell(&self, row: usize, col: usize) -> bool {
        self.previous.get(row, col)
    }

    /// Edits the current generation. Intended for setup before stepping.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        self.current.set(row, col, alive);
    }

    /// See [`metrics::entropy`].
    pub fn entropy(&self) -> f64 {
        metrics::entropy(&self.current)
    }

    /// See [`metrics::sticky_rate`].
    pub fn sticky_rate(&self) -> f64 {
        metrics::sticky_rate(&self.current, &self.previous)
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::measure(&self.current, &self.previous)
    }
}
