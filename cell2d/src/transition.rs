// transition.rs - Synchronous generation update
//
// Every next-generation cell is read from the same immutable snapshot and
// written to a fresh buffer.

use crate::grid::Grid;
use crate::neighbors::{self, Neighbors};
use crate::rule::{Neighborhood, Rule};

/// Computes the generation after `snapshot`.
pub fn advance(snapshot: &Grid, rule: Rule) -> Grid {
    let n = Neighbors::of(snapshot);
    Grid::from_fn(snapshot.width(), snapshot.height(), |row, col| {
        rule.apply(Neighborhood {
            center: snapshot.get(row, col),
            north: n.north.get(row, col),
            east: n.east.get(row, col),
            south: n.south.get(row, col),
            west: n.west.get(row, col),
        })
    })
}

/// Computes a single row of the generation after `snapshot`.
pub fn next_row(snapshot: &Grid, rule: Rule, row: usize) -> Vec<bool> {
    (0..snapshot.width())
        .map(|col| rule.apply(neighbors::neighborhood(snapshot, row, col)))
        .collect()
}
