mod scenario;

use crate::Grid;

/// Builds a grid from rows of 0/1 literals.
fn grid(rows: &[&[u8]]) -> Grid {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|r| r.iter().map(|&c| c != 0).collect())
        .collect();
    Grid::from_rows(&rows).unwrap()
}
