// metrics.rs - Scalar measures of a field's long-run behavior
//
// Everything here is a pure function of the current (and, for stability,
// previous) generation and is recomputed on every call.

use crate::grid::Grid;
use crate::neighbors::{self, Direction};

/// `p * ln(p)`, taken as 0 at `p == 0`.
fn p_ln_p(p: f64) -> f64 {
    if p == 0.0 { 0.0 } else { p * p.ln() }
}

/// Natural-log binary entropy of the "active region".
///
/// A cell is active when its 3x3 wraparound block holds any live cell. The
/// result lies in `[0, ln 2]` and is exactly 0 when all cells or no cells are
/// active.
pub fn entropy(grid: &Grid) -> f64 {
    let total = grid.len();
    let mut active = 0;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if neighbors::box_sum(grid, row, col) != 0 {
                active += 1;
            }
        }
    }
    let p1 = active as f64 / total as f64;
    let p0 = (total - active) as f64 / total as f64;
    0.0 - (p_ln_p(p1) + p_ln_p(p0))
}

/// Mean of `(neighbor_dir - cell)^2`: the fraction of cells that differ from
/// their `dir` neighbor.
///
/// The product of the four `mismatch_rate`s and [`temporal_stability`] is the
/// raw stickiness score: 1 for a frozen checkerboard, 0 for a uniform frozen
/// field. [`sticky_rate`] multiplies [`agreement_rate`]s instead.
pub fn mismatch_rate(grid: &Grid, dir: Direction) -> f64 {
    let shifted = neighbors::toroidal_shift(grid, dir);
    (grid.len() - grid.count_equal(&shifted)) as f64 / grid.len() as f64
}

/// Fraction of cells equal to their `dir` neighbor.
pub fn agreement_rate(grid: &Grid, dir: Direction) -> f64 {
    1.0 - mismatch_rate(grid, dir)
}

/// Fraction of cells unchanged between `previous` and `current`.
pub fn temporal_stability(current: &Grid, previous: &Grid) -> f64 {
    current.count_equal(previous) as f64 / current.len() as f64
}

/// Product of the four directional agreement rates and the temporal
/// stability. 1 for a uniform field that did not change, near 0 for a field
/// that is chaotic along any axis or in time.
pub fn sticky_rate(current: &Grid, previous: &Grid) -> f64 {
    let spatial: f64 = Direction::ALL
        .iter()
        .map(|&dir| agreement_rate(current, dir))
        .product();
    spatial * temporal_stability(current, previous)
}

/// A fresh measurement of one generation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Metrics {
    pub entropy: f64,
    pub sticky_rate: f64,
}

impl Metrics {
    pub fn measure(current: &Grid, previous: &Grid) -> Self {
        Self {
            entropy: entropy(current),
            sticky_rate: sticky_rate(current, previous),
        }
    }

    /// `sticky_rate * entropy`; the headline figure of a run.
    pub fn score(&self) -> f64 {
        self.sticky_rate * self.entropy
    }
}
