/*!
# IO

Readers for the line-oriented text formats the representations load from.
There are no writers; [`Display`](std::fmt::Display) of a representation is meant for
debugging only.

## Input Formats

- **EdgeList** ([`EdgeListReader`]): one edge `from to` per line, used by
  [`AdjacencyListGraph`](crate::repr::AdjacencyListGraph).
- **Matrix** ([`MatrixReader`]): rows of whitespace-separated integers. The square variant is used by
  [`AdjacencyMatrixGraph`](crate::repr::AdjacencyMatrixGraph), the rectangular variant by
  [`IncidenceMatrixGraph`](crate::repr::IncidenceMatrixGraph).

Readers only tokenize and validate the shape of the input. Interpreting the values is up to
the representation.
*/

pub mod edge_list;
pub mod matrix;

use std::str::FromStr;

use crate::error::{GraphError, Result};

pub use edge_list::*;
pub use matrix::*;

/// Shorthand for creating a new format error at a (1-based) line
macro_rules! format_error {
    ($line: expr, $($arg: tt)*) => {
        GraphError::Format {
            line: $line,
            reason: format!($($arg)*),
        }
    };
}

/// Shorthand for returning a format error early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $line: expr, $($arg: tt)*) => {
        if !($cond) {
            return Err(format_error!($line, $($arg)*));
        }
    };
}

pub(crate) use format_error;
pub(crate) use raise_error_unless;

/// Parses a single whitespace-free token found at `line`
pub(crate) fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T> {
    token
        .parse()
        .map_err(|_| format_error!(line, "cannot parse `{token}` as an integer"))
}

/// Splits `content` into whitespace-separated tokens and parses each of them
pub(crate) fn parse_values<T: FromStr>(content: &str, line: usize) -> Result<Vec<T>> {
    content
        .split_whitespace()
        .map(|token| parse_token(token, line))
        .collect()
}
