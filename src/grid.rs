//! A dynamically sized rectangular grid.
//!
//! Boards in this crate are runtime-sized (default 10×10, but any playable
//! dimensions are accepted), so the grid is `Vec`-backed rather than packed
//! into an integer. Storage is row-major; the public API addresses cells as
//! `(column, row)`.

use core::fmt;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested dimensions contain a zero side.
    InvalidSize { width: usize, height: usize },
    /// Column or row index is out of bounds.
    IndexOutOfBounds { col: usize, row: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidSize { width, height } => {
                write!(f, "InvalidSize: {}x{} grid has a zero side", width, height)
            }
            GridError::IndexOutOfBounds { col, row } => {
                write!(f, "IndexOutOfBounds: col={}, row={}", col, row)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A width×height grid of `T`, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![fill; width * height],
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the value at (col, row).
    pub fn get(&self, col: usize, row: usize) -> Result<T, GridError> {
        self.check_bounds(col, row)?;
        Ok(self.cells[row * self.width + col])
    }

    /// Sets the value at (col, row).
    pub fn set(&mut self, col: usize, row: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(col, row)?;
        self.cells[row * self.width + col] = value;
        Ok(())
    }

    /// True when signed coordinates fall inside the grid.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && (col as usize) < self.width && row >= 0 && (row as usize) < self.height
    }

    /// Iterator over all `(col, row)` coordinates, row by row.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |row| (0..w).map(move |col| (col, row)))
    }

    /// Iterator over `(col, row, value)` triples, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.coords().map(move |(col, row)| {
            (col, row, self.cells[row * self.width + col])
        })
    }

    #[inline]
    fn check_bounds(&self, col: usize, row: usize) -> Result<(), GridError> {
        if col >= self.width || row >= self.height {
            Err(GridError::IndexOutOfBounds { col, row })
        } else {
            Ok(())
        }
    }
}

impl Grid<bool> {
    /// True when every cell is set.
    pub fn all_set(&self) -> bool {
        self.cells.iter().all(|&c| c)
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.width, self.height)?;
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{:?} ", self.cells[row * self.width + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
