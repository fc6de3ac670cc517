// lib.rs - Von Neumann binary cellular automaton core

//! A binary cellular automaton on a toroidal grid.
//!
//! Each cell's next state is looked up in a 32-bit [`Rule`] by the joint
//! state of the cell and its four von Neumann neighbors. All cells update
//! simultaneously from one snapshot of the previous generation.
//!
//! ```
//! use cell2d::Field;
//!
//! let mut field = Field::new(64, 64, "0xdeadbeef".parse().unwrap()).unwrap();
//! field.initialize_random(Some(1));
//! field.apply_central_mask();
//! for _ in 0..100 {
//!     field.step();
//! }
//! let metrics = field.metrics();
//! assert!(metrics.entropy >= 0.0 && metrics.entropy <= std::f64::consts::LN_2);
//! assert!(metrics.sticky_rate >= 0.0 && metrics.sticky_rate <= 1.0);
//! ```

mod coro;
pub mod error;
mod field;
pub mod grid;
pub mod metrics;
pub mod neighbors;
pub mod rule;
pub mod transition;

#[cfg(test)]
mod tests;

pub use error::{Error, Result, RuleParseError};
pub use field::Field;
pub use grid::Grid;
pub use metrics::Metrics;
pub use neighbors::{Direction, Neighbors};
pub use rule::{Neighborhood, Rule};
