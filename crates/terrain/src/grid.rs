//! Square, row-major grid storage.

use std::ops::{Index, IndexMut};

use serde::{Serialize, Serializer};

/// A square grid of cells addressed as `(x, y)`.
///
/// Cells are stored row-major, so row `y` is the contiguous slice
/// `cells[y * dim..(y + 1) * dim]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a `dim × dim` grid with every cell set to `fill`.
    pub fn new(dim: usize, fill: T) -> Self {
        Self {
            dim,
            cells: vec![fill; dim * dim],
        }
    }

    /// Returns a copy with the outermost ring of cells removed.
    ///
    /// Grids with a side of 2 or less crop to an empty grid.
    pub fn crop_border(&self) -> Self {
        if self.dim <= 2 {
            return Self {
                dim: 0,
                cells: Vec::new(),
            };
        }

        let inner = self.dim - 2;
        let mut cells = Vec::with_capacity(inner * inner);
        for row in self.rows().skip(1).take(inner) {
            cells.extend_from_slice(&row[1..self.dim - 1]);
        }

        Self { dim: inner, cells }
    }
}

impl<T> Grid<T> {
    /// Side length of the grid.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.dim && y < self.dim {
            self.cells.get(y * self.dim + x)
        } else {
            None
        }
    }

    /// Iterates rows from `y = 0` upward.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> {
        // chunks_exact panics on a zero chunk size, which an empty grid would produce
        self.cells.chunks_exact(self.dim.max(1))
    }

    /// Iterates `(x, y, value)` for every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % dim, i / dim, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Builds a new grid of the same shape by applying `f` to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            dim: self.dim,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Copies the grid into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        let dim = self.dim;
        assert!(x < dim && y < dim, "cell ({x}, {y}) outside {dim}x{dim} grid");
        &self.cells[y * self.dim + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let dim = self.dim;
        assert!(x < dim && y < dim, "cell ({x}, {y}) outside {dim}x{dim} grid");
        &mut self.cells[y * self.dim + x]
    }
}

/// Serializes as a row-major array of arrays.
impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(dim: usize) -> Grid<usize> {
        let mut grid = Grid::new(dim, 0);
        for y in 0..dim {
            for x in 0..dim {
                grid[(x, y)] = y * 10 + x;
            }
        }
        grid
    }

    #[test]
    fn test_index_is_x_then_y() {
        let grid = numbered(3);
        assert_eq!(grid[(2, 0)], 2);
        assert_eq!(grid[(0, 2)], 20);
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_crop_border() {
        let cropped = numbered(5).crop_border();
        assert_eq!(cropped.dim(), 3);
        assert_eq!(
            cropped.to_rows(),
            vec![vec![11, 12, 13], vec![21, 22, 23], vec![31, 32, 33]]
        );
    }

    #[test]
    fn test_crop_tiny_grid_is_empty() {
        let cropped = numbered(2).crop_border();
        assert!(cropped.is_empty());
        assert_eq!(cropped.rows().count(), 0);
    }

    #[test]
    fn test_serialize_as_nested_rows() {
        let json = serde_json::to_string(&numbered(2)).unwrap();
        assert_eq!(json, "[[0,1],[10,11]]");
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let grid = numbered(2);
        let coords: Vec<_> = grid.cells().map(|(x, y, v)| (x, y, *v)).collect();
        assert_eq!(coords, vec![(0, 0, 0), (1, 0, 1), (0, 1, 10), (1, 1, 11)]);
    }
}
