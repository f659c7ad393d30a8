/*!
`digraphs` is a small directed-graph library whose graphs are
- **directed** : `Edge(u, v)` and `Edge(v, u)` are distinct,
- **unweighted** : Neither vertices nor edges carry data,
- **sparse-id friendly** : Vertices are arbitrary `i32` ids chosen by the caller.

# Representation

We represent **vertices** as `i32`. Ids do not need to be contiguous and may be negative;
representations that need dense indices translate ids into slots internally.
For **edges**, we use a simple tuple-struct `Edge(Vertex, Vertex)`.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjacencyListGraph`](crate::repr::AdjacencyListGraph)
- [`AdjacencyMatrixGraph`](crate::repr::AdjacencyMatrixGraph)
- [`IncidenceMatrixGraph`](crate::repr::IncidenceMatrixGraph)

All of them implement the object safe [`Graph`](crate::ops::Graph) trait, so code written
against `&dyn Graph` works with any of them. Two graphs are equal (and hash equally) iff they
hold the same vertices and the same edges, regardless of their representations.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, the [`Graph`](crate::ops::Graph) trait,
  all representations and the error type,
- [`algo`] includes algorithms on any [`Graph`](crate::ops::Graph), such as topological sorting,
- [`io`] includes the readers for the text formats the representations load from,
- [`utils`] includes the capacity policy used to configure the matrix-based representations.

[`repr::digest`] enables computing a `Sha256`-hash for a given graph.

In most use-cases, `use digraphs::{prelude::*, algo::*};` suffices for your needs.

```
use digraphs::{prelude::*, algo::*};

let mut graph = IncidenceMatrixGraph::new();
graph.add_edges([(5, 2), (5, 0), (2, 3)]);

assert_eq!(graph.neighbors_of(5).unwrap(), vec![2, 0]);
assert_eq!(graph, AdjacencyListGraph::from_edges([(2, 3), (5, 0), (5, 2)]));
assert!(graph.is_acyclic());
```

# Logging

Capacity changes and file loads are reported as `tracing` events at `DEBUG` level, detected
cycles at `TRACE` level. The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::Edge;
pub use error::GraphError;
pub use node::*;

/// `digraphs::prelude` includes definitions for vertices and edges, the graph operation traits,
/// all implemented representations and the error type.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
