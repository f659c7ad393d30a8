//! # Matrix
//!
//! The Matrix-Format consists of `n` non-blank lines, each holding whitespace-separated integers.
//! Line `i` becomes row `i`. Blank lines are ignored.
//!
//! - A **square** matrix requires every row to hold exactly `n` values.
//! - A **rectangular** matrix requires every row to hold as many values as the first one.

use std::io::BufRead;

use super::*;

/// Shape requirement of a [`MatrixReader`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixShape {
    /// `n` rows of `n` values
    Square,
    /// `n` rows of `m` values, `m` taken from the first row
    Rectangular,
}

/// A reader for the Matrix-Format
#[derive(Debug, Clone)]
pub struct MatrixReader {
    shape: MatrixShape,
}

impl MatrixReader {
    /// Creates a reader requiring a square matrix
    pub fn square() -> Self {
        Self {
            shape: MatrixShape::Square,
        }
    }

    /// Creates a reader requiring all rows to be as long as the first one
    pub fn rectangular() -> Self {
        Self {
            shape: MatrixShape::Rectangular,
        }
    }

    /// Returns the required shape
    pub fn shape(&self) -> MatrixShape {
        self.shape
    }

    /// Reads and validates all rows.
    ///
    /// # Errors
    /// Fails on IO errors, non-integer tokens and rows violating the required shape.
    pub fn read_matrix<R: BufRead>(&self, reader: R) -> Result<RawMatrix> {
        let mut matrix = RawMatrix::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let values: Vec<i64> = parse_values(&line, i + 1)?;
            if values.is_empty() {
                continue;
            }

            if self.shape == MatrixShape::Rectangular {
                if let Some(first) = matrix.rows.first() {
                    raise_error_unless!(
                        values.len() == first.len(),
                        i + 1,
                        "expected {} values, found {}",
                        first.len(),
                        values.len()
                    );
                }
            }

            matrix.rows.push(values);
            matrix.lines.push(i + 1);
        }

        if self.shape == MatrixShape::Square {
            let n = matrix.height();
            for (row, &line) in matrix.rows.iter().zip(&matrix.lines) {
                raise_error_unless!(
                    row.len() == n,
                    line,
                    "expected {} values in a square matrix, found {}",
                    n,
                    row.len()
                );
            }
        }

        Ok(matrix)
    }
}

/// Validated, uninterpreted matrix as read from the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatrix {
    rows: Vec<Vec<i64>>,
    lines: Vec<usize>,
}

impl RawMatrix {
    /// Returns the number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of values per row (`0` if there are no rows)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Returns the value at `(row, col)`
    /// ** Panics if out of bounds **
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.rows[row][col]
    }

    /// Returns the (1-based) input line of `row`
    /// ** Panics if `row >= height` **
    pub fn line_of(&self, row: usize) -> usize {
        self.lines[row]
    }

    /// Returns a complete column
    pub fn column(&self, col: usize) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(move |row| row[col])
    }
}
