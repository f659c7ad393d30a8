//! # EdgeList
//!
//! The EdgeList-Format consists of lines `u v` each representing a directed edge `Edge(u, v)`.
//! There is no header. Blank lines, lines with fewer than two tokens and comment lines are
//! skipped; tokens after the second one are ignored.

use std::io::BufRead;

use super::*;
use crate::*;

/// A reader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Reads all edges in input order.
    ///
    /// # Errors
    /// Fails on IO errors or if one of the first two tokens of a line is not an integer.
    pub fn read_edges<R: BufRead>(&self, reader: R) -> Result<Vec<Edge>> {
        let mut edges = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if self.is_comment(content) {
                continue;
            }

            let mut parts = content.split_whitespace();
            let (Some(from), Some(to)) = (parts.next(), parts.next()) else {
                continue;
            };

            edges.push(Edge(parse_token(from, i + 1)?, parse_token(to, i + 1)?));
        }

        Ok(edges)
    }

    fn is_comment(&self, content: &str) -> bool {
        !self.comment_identifier.is_empty() && content.starts_with(&self.comment_identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_edges_in_order() {
        let input = "0 1\n1 2\n-4 0\n";
        let edges = EdgeListReader::new().read_edges(input.as_bytes()).unwrap();
        assert_eq!(edges, vec![Edge(0, 1), Edge(1, 2), Edge(-4, 0)]);
    }

    #[test]
    fn skips_short_blank_and_comment_lines() {
        let input = "# header\n\n3\n  5   6  7\n\t1\t2\n";
        let edges = EdgeListReader::new().read_edges(input.as_bytes()).unwrap();
        assert_eq!(edges, vec![Edge(5, 6), Edge(1, 2)]);
    }

    #[test]
    fn custom_comment_identifier() {
        let input = "c comment\n1 2\n";
        let edges = EdgeListReader::new()
            .comment_identifier("c")
            .read_edges(input.as_bytes())
            .unwrap();
        assert_eq!(edges, vec![Edge(1, 2)]);
    }

    #[test]
    fn rejects_non_integer_tokens() {
        let input = "1 2\n1 two\n";
        let err = EdgeListReader::new()
            .read_edges(input.as_bytes())
            .unwrap_err();
        assert!(matches!(err, GraphError::Format { line: 2, .. }));
    }
}
