/*!
Topological ordering of directed graphs.

The order is computed by an iterative depth-first search that colors vertices
`Unvisited -> OnStack -> Done`. Reaching a vertex that is still `OnStack` means the search
followed a back edge, i.e. the graph contains a directed cycle.

Roots are taken in [`Graph::vertices`] order and neighbors in [`Graph::neighbors_of`] order,
so the result is deterministic for a given representation.
*/

use std::vec;

use fxhash::FxHashMap;
use tracing::trace;

use super::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum VisitState {
    OnStack,
    Done,
}

/// Returns all vertices of `graph` such that every edge points from an earlier to a later vertex.
///
/// # Errors
/// - [`GraphError::CycleDetected`] if `graph` contains a directed cycle (self-loops included).
/// - Errors of [`Graph::neighbors_of`] are propagated.
///
/// # Example
/// ```
/// use digraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyListGraph::from_edges([(0, 1), (1, 2)]);
/// assert_eq!(topological_sort(&graph).unwrap(), vec![0, 1, 2]);
///
/// let cyclic = AdjacencyListGraph::from_edges([(0, 1), (1, 0)]);
/// assert!(matches!(topological_sort(&cyclic), Err(GraphError::CycleDetected)));
/// ```
pub fn topological_sort<G: Graph + ?Sized>(graph: &G) -> Result<Vec<Vertex>> {
    let mut state: FxHashMap<Vertex, VisitState> = FxHashMap::default();
    let mut order = Vec::with_capacity(graph.number_of_vertices());
    let mut stack: Vec<(Vertex, vec::IntoIter<Vertex>)> = Vec::new();

    for root in graph.vertices() {
        if state.contains_key(&root) {
            continue;
        }

        state.insert(root, VisitState::OnStack);
        stack.push((root, graph.neighbors_of(root)?.into_iter()));

        while let Some((u, nbs)) = stack.last_mut() {
            let u = *u;
            match nbs.next() {
                Some(v) => match state.get(&v) {
                    None => {
                        state.insert(v, VisitState::OnStack);
                        stack.push((v, graph.neighbors_of(v)?.into_iter()));
                    }
                    Some(VisitState::OnStack) => {
                        trace!(from = u, to = v, "back edge closes a cycle");
                        return Err(GraphError::CycleDetected);
                    }
                    Some(VisitState::Done) => {}
                },
                None => {
                    stack.pop();
                    state.insert(u, VisitState::Done);
                    order.push(u);
                }
            }
        }
    }

    order.reverse();
    Ok(order)
}

/// Returns *true* if `order` contains every vertex of `graph` exactly once and every edge
/// points forward in it
pub fn is_topological_order<G: Graph + ?Sized>(graph: &G, order: &[Vertex]) -> bool {
    let rank: FxHashMap<Vertex, usize> = order.iter().enumerate().map(|(i, &u)| (u, i)).collect();

    rank.len() == order.len()
        && order.len() == graph.number_of_vertices()
        && graph.edges().into_iter().all(|Edge(u, v)| {
            matches!((rank.get(&u), rank.get(&v)), (Some(ru), Some(rv)) if ru < rv)
        })
}

/// Provides topological ordering directly on every graph (including `dyn Graph`)
pub trait TopologicalSort: Graph {
    /// Shorthand for [`topological_sort`]
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = IncidenceMatrixGraph::from_edges([(2, 1), (1, 0)]);
    /// assert_eq!(g.topological_sort().unwrap(), vec![2, 1, 0]);
    /// ```
    fn topological_sort(&self) -> Result<Vec<Vertex>> {
        topological_sort(self)
    }

    /// Returns `true` if the graph contains no directed cycle.
    ///
    /// Errors other than [`GraphError::CycleDetected`] are treated as cyclic.
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjacencyMatrixGraph::from_edges([(0, 1), (1, 2)]);
    /// assert!(g.is_acyclic());
    /// g.add_edge(2, 0);
    /// assert!(!g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool {
        self.topological_sort().is_ok()
    }
}

impl<G: Graph + ?Sized> TopologicalSort for G {}

#[cfg(test)]
mod tests {
    use super::*;

    const DAG: [(Vertex, Vertex); 6] = [(3, 1), (2, 3), (5, 2), (5, 0), (4, 0), (4, 1)];

    fn all_representations() -> Vec<Box<dyn Graph>> {
        vec![
            Box::new(AdjacencyListGraph::new()),
            Box::new(AdjacencyMatrixGraph::new()),
            Box::new(IncidenceMatrixGraph::new()),
        ]
    }

    #[test]
    fn sorts_dag_in_every_representation() {
        for mut graph in all_representations() {
            for u in 0..6 {
                graph.add_vertex(u);
            }
            for (u, v) in DAG {
                graph.add_edge(u, v);
            }

            let order = graph.topological_sort().unwrap();
            assert_eq!(order, vec![5, 4, 2, 3, 1, 0]);
            assert!(is_topological_order(&*graph, &order));
            assert!(graph.is_acyclic());
        }
    }

    #[test]
    fn detects_cycle_in_every_representation() {
        for mut graph in all_representations() {
            for (u, v) in [(1, 2), (2, 3), (3, 1)] {
                graph.add_edge(u, v);
            }

            let err = topological_sort(&*graph).unwrap_err();
            assert!(matches!(err, GraphError::CycleDetected));
            assert_eq!(
                err.to_string(),
                "Graph has a cycle, topological sort not possible"
            );
            assert!(!graph.is_acyclic());
        }
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = AdjacencyMatrixGraph::from_edges([(0, 1), (1, 1)]);
        assert!(matches!(
            graph.topological_sort(),
            Err(GraphError::CycleDetected)
        ));
    }

    #[test]
    fn cycle_behind_acyclic_prefix() {
        let mut graph = AdjacencyListGraph::from_edges([(0, 1), (1, 2), (3, 4)]);
        assert!(graph.is_acyclic());

        graph.add_edge(4, 3);
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn empty_and_isolated() {
        assert!(AdjacencyListGraph::new()
            .topological_sort()
            .unwrap()
            .is_empty());

        let mut graph = IncidenceMatrixGraph::new();
        graph.add_vertex(7);
        graph.add_vertex(-2);
        assert_eq!(graph.topological_sort().unwrap(), vec![-2, 7]);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let graph = AdjacencyListGraph::from_edges((0..100_000).map(|u| (u, u + 1)));
        let order = graph.topological_sort().unwrap();
        assert_eq!(order, (0..=100_000).collect::<Vec<_>>());
    }

    #[test]
    fn verifies_orders() {
        let graph = AdjacencyListGraph::from_edges(DAG);
        assert!(is_topological_order(&graph, &[4, 5, 0, 2, 3, 1]));
        assert!(!is_topological_order(&graph, &[5, 4, 2, 1, 3, 0]));
        assert!(!is_topological_order(&graph, &[5, 4, 2, 3, 1]));
        assert!(!is_topological_order(&graph, &[5, 4, 2, 3, 1, 0, 0]));
    }

    #[test]
    fn dyn_graph_via_trait() {
        let graph: Box<dyn Graph> = Box::new(AdjacencyListGraph::from_edges([(1, 0)]));
        assert_eq!(graph.topological_sort().unwrap(), vec![1, 0]);
    }
}
