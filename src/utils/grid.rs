/*!
# Grid

A dense, row-major 2-D buffer used as backing storage of the matrix-based representations.

A `Grid` is never resized in place: every change of dimensions allocates a new grid, copies
the surviving cells and is then swapped in by the owner (see [`Grid::resized`] and
[`Grid::remapped`]). Cells outside the logical part of a grid are kept at `T::default()`.
*/

use std::fmt::Debug;

/// Dense `rows x cols` buffer of `Copy` cells
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Creates a grid with all cells set to `T::default()`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value at `(row, col)`
    /// ** Panics if `row >= rows || col >= cols` **
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    /// Overwrites the value at `(row, col)`
    /// ** Panics if `row >= rows || col >= cols` **
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    /// Returns a slice of a complete row
    /// ** Panics if `row >= rows` **
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns a new `rows x cols` grid holding the top-left part of `self` that fits into it
    pub fn resized(&self, rows: usize, cols: usize) -> Self {
        self.remapped(rows, cols, Some, Some)
    }

    /// Returns a new `rows x cols` grid where cell `(r, c)` of `self` is moved to
    /// `(row_map(r), col_map(c))`. Cells mapped to `None` or outside the new bounds are dropped.
    pub fn remapped<R, C>(&self, rows: usize, cols: usize, row_map: R, col_map: C) -> Self
    where
        R: Fn(usize) -> Option<usize>,
        C: Fn(usize) -> Option<usize>,
    {
        let mut grid = Self::new(rows, cols);
        let col_targets: Vec<Option<usize>> = (0..self.cols)
            .map(|c| col_map(c).filter(|&nc| nc < cols))
            .collect();

        for r in 0..self.rows {
            let Some(nr) = row_map(r).filter(|&nr| nr < rows) else {
                continue;
            };

            for (c, target) in col_targets.iter().enumerate() {
                if let Some(nc) = *target {
                    grid.set(nr, nc, self.get(r, c));
                }
            }
        }

        grid
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
}

impl<T: Copy + Default + Debug> Debug for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..self.rows).map(|r| self.row(r)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::compact_index;

    fn numbered(rows: usize, cols: usize) -> Grid<u32> {
        let mut grid = Grid::new(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                grid.set(r, c, (r * 10 + c) as u32);
            }
        }
        grid
    }

    #[test]
    fn new_is_default() {
        let grid: Grid<i8> = Grid::new(3, 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert!((0..3).all(|r| grid.row(r).iter().all(|&x| x == 0)));
    }

    #[test]
    fn grow_copies_top_left() {
        let grid = numbered(2, 3);
        let grown = grid.resized(4, 6);

        assert_eq!(grown.rows(), 4);
        assert_eq!(grown.cols(), 6);
        assert_eq!(grown.row(0), &[0, 1, 2, 0, 0, 0]);
        assert_eq!(grown.row(1), &[10, 11, 12, 0, 0, 0]);
        assert_eq!(grown.row(3), &[0; 6]);
    }

    #[test]
    fn shrink_drops_outside() {
        let grid = numbered(4, 4);
        let shrunk = grid.resized(2, 3);
        assert_eq!(shrunk.row(0), &[0, 1, 2]);
        assert_eq!(shrunk.row(1), &[10, 11, 12]);
    }

    #[test]
    fn remap_removes_row_and_column() {
        let grid = numbered(4, 4);
        let compacted = grid.remapped(4, 4, |r| compact_index(r, 1), |c| compact_index(c, 2));

        assert_eq!(compacted.row(0), &[0, 1, 3, 0]);
        assert_eq!(compacted.row(1), &[20, 21, 23, 0]);
        assert_eq!(compacted.row(2), &[30, 31, 33, 0]);
        assert_eq!(compacted.row(3), &[0; 4]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let grid: Grid<bool> = Grid::new(2, 2);
        grid.get(2, 0);
    }

    #[test]
    fn debug_prints_rows() {
        let grid = numbered(2, 2);
        assert_eq!(format!("{grid:?}"), "[[0, 1], [10, 11]]");
    }
}
