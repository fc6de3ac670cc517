// neighbors.rs - Directional neighbor lookup on a torus

use crate::grid::Grid;
use crate::rule::Neighborhood;

/// A compass direction of the von Neumann neighborhood.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// (row, col) offset of the neighbor in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// `i + delta` modulo `n`.
pub fn wrap(i: usize, delta: isize, n: usize) -> usize {
    (i as isize + delta).rem_euclid(n as isize) as usize
}

/// Value of the `dir` neighbor of (`row`, `col`).
pub fn neighbor(grid: &Grid, row: usize, col: usize, dir: Direction) -> bool {
    let (dr, dc) = dir.offset();
    grid.get(wrap(row, dr, grid.height()), wrap(col, dc, grid.width()))
}

/// Shifts the whole grid by one cell so that each output cell holds the value
/// of its `dir` neighbor in `grid`.
pub fn toroidal_shift(grid: &Grid, dir: Direction) -> Grid {
    Grid::from_fn(grid.width(), grid.height(), |row, col| {
        neighbor(grid, row, col, dir)
    })
}

/// Gathers the full five-cell neighborhood of (`row`, `col`).
pub fn neighborhood(grid: &Grid, row: usize, col: usize) -> Neighborhood {
    Neighborhood {
        center: grid.get(row, col),
        north: neighbor(grid, row, col, Direction::North),
        east: neighbor(grid, row, col, Direction::East),
        south: neighbor(grid, row, col, Direction::South),
        west: neighbor(grid, row, col, Direction::West),
    }
}

/// Number of live cells in the 3x3 block centered on (`row`, `col`),
/// wrapping at the edges.
pub fn box_sum(grid: &Grid, row: usize, col: usize) -> usize {
    let mut sum = 0;
    for dr in -1..=1 {
        let r = wrap(row, dr, grid.height());
        for dc in -1..=1 {
            if grid.get(r, wrap(col, dc, grid.width())) {
                sum += 1;
            }
        }
    }
    sum
}

/// The four directional neighbor arrays of one grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub north: Grid,
    pub east: Grid,
    pub south: Grid,
    pub west: Grid,
}

impl Neighbors {
    pub fn of(grid: &Grid) -> Self {
        Self {
            north: toroidal_shift(grid, Direction::North),
            east: toroidal_shift(grid, Direction::East),
            south: toroidal_shift(grid, Direction::South),
            west: toroidal_shift(grid, Direction::West),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_cell(width: usize, height: usize, row: usize, col: usize) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        grid.set(row, col, true);
        grid
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, 1, 5), 3);
        assert_eq!(wrap(0, -1, 1), 0);
    }

    #[test]
    fn test_column_wraparound() {
        let grid = single_cell(3, 3, 0, 0);
        assert!(neighbor(&grid, 0, 2, Direction::East));
        assert!(grid.get(0, 0));
        assert!(neighbor(&grid, 0, 1, Direction::West));
        assert!(!neighbor(&grid, 0, 1, Direction::East));
    }

    #[test]
    fn test_row_wraparound() {
        let grid = single_cell(3, 3, 0, 0);
        assert!(neighbor(&grid, 2, 0, Direction::South));
        assert!(neighbor(&grid, 1, 0, Direction::North));
        assert!(!neighbor(&grid, 2, 0, Direction::North));
    }

    #[test]
    fn test_shift_arrays() {
        // Live cell at (1, 2) on a 4-wide, 3-tall torus.
        let grid = single_cell(4, 3, 1, 2);
        let n = Neighbors::of(&grid);
        // Cell below the live one sees it to the north, and so on.
        assert_eq!(n.north.live_count(), 1);
        assert!(n.north.get(2, 2));
        assert!(n.south.get(0, 2));
        assert!(n.east.get(1, 1));
        assert!(n.west.get(1, 3));

        let edge = single_cell(4, 3, 0, 0);
        let n = Neighbors::of(&edge);
        assert!(n.south.get(2, 0));
        assert!(n.east.get(0, 3));
        assert!(n.north.get(1, 0));
        assert!(n.west.get(0, 1));
    }

    #[test]
    fn test_shift_matches_neighbor() {
        let grid = Grid::from_rows(&[
            [true, false, true, true],
            [false, false, true, false],
            [true, true, false, false],
        ])
        .unwrap();
        for dir in Direction::ALL {
            let shifted = toroidal_shift(&grid, dir);
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    assert_eq!(shifted.get(row, col), neighbor(&grid, row, col, dir));
                }
            }
        }
    }

    #[test]
    fn test_box_sum() {
        let grid = single_cell(5, 5, 0, 0);
        assert_eq!(box_sum(&grid, 4, 4), 1);
        assert_eq!(box_sum(&grid, 1, 1), 1);
        assert_eq!(box_sum(&grid, 2, 2), 0);

        let full = Grid::from_rows(&[[true; 3]; 3]).unwrap();
        assert_eq!(box_sum(&full, 1, 1), 9);
        assert_eq!(box_sum(&full, 0, 0), 9);
    }
}
