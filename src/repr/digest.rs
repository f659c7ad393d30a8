/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs that are independent of the underlying
representation.

The digest encodes:
- the number of vertices,
- the sorted vertex list, and
- the sorted edge list,

before feeding them into a cryptographic hash function. All integers are encoded little-endian.

## Example
```
use digraphs::{prelude::*, repr::digest::GraphDigest};

let mut graph = AdjacencyListGraph::new();
graph.add_edge(4, 3);
graph.add_edge(1, 2);

// Computes a SHA-256 digest (hex string of length 64).
assert_eq!(
    graph.digest_sha256(),
    "3f46452e356a7b8340b1d8ba899f3679288839c598cd85e0dce19da2b3433734"
);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a graph.
///
/// Unlike [`Graph::structure_hash`], the digest is stable across platforms and releases,
/// so it can be stored next to a graph file to detect changes.
///
/// # Example
/// ```
/// use digraphs::{prelude::*, repr::digest::GraphDigest};
///
/// let list = AdjacencyListGraph::from_edges([(0, 1), (2, 3)]);
/// let matrix = AdjacencyMatrixGraph::from_edges([(2, 3), (0, 1)]);
///
/// // Any digest implementing `Digest` can be used
/// let hex = list.digest::<sha2::Sha256>();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex, matrix.digest_sha256());
/// ```
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: Graph + ?Sized,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        let vertices = self.sorted_vertices();
        hasher.update((vertices.len() as u64).to_le_bytes());
        for u in vertices {
            hasher.update(u.to_le_bytes());
        }

        for Edge(u, v) in self.sorted_edges() {
            hasher.update(u.to_le_bytes());
            hasher.update(v.to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }
}
