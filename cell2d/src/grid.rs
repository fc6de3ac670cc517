// grid.rs - Binary cell storage for the toroidal field

use std::fmt;

use crate::error::{Error, Result};

/// A `width` x `height` array of binary cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-zero grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Builds a grid from explicit rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(width, height)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: r,
                    len: row.len(),
                    expected: width,
                });
            }
            grid.cells[r * width..(r + 1) * width].copy_from_slice(row);
        }
        Ok(grid)
    }

    /// Builds a grid of known-valid dimensions cell by cell.
    pub(crate) fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid of known-valid dimensions from finished rows.
    pub(crate) fn from_row_vecs(width: usize, rows: Vec<Vec<bool>>) -> Self {
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            debug_assert_eq!(row.len(), width);
            cells.extend(row);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// An all-zero grid with the same shape as `self`.
    pub fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    /// Value of the cell at (`row`, `col`). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.offset(row, col)]
    }

    /// Sets the cell at (`row`, `col`). Panics when out of range.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.offset(row, col);
        self.cells[i] = alive;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Number of cells set to 1.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of cells where `self` and `other` hold the same value.
    pub(crate) fn count_equal(&self, other: &Grid) -> usize {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for &cell in self.row(row) {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
