/// Every representation has to satisfy the same observable contract.
/// `test_graph_contract!(mod_name, Type)` generates randomized tests comparing `Type` against
/// a plain edge-set model.
macro_rules! test_graph_contract {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, *};
            use fxhash::FxHashSet;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random (possibly repeated) edges between vertices in `-n..n`
            fn random_edges<R: Rng>(rng: &mut R, n: Vertex, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge(rng.random_range(-n..n), rng.random_range(-n..n)))
                    .collect_vec()
            }

            fn endpoints(edges: &[Edge]) -> Vec<Vertex> {
                edges
                    .iter()
                    .flat_map(|&Edge(u, v)| [u, v])
                    .sorted_unstable()
                    .dedup()
                    .collect_vec()
            }

            #[test]
            fn vertices_and_edges_match_input() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [3, 10, 25] {
                    for m in [n as NumEdges, 4 * n as NumEdges] {
                        let edges = random_edges(rng, n, m);
                        let graph = <$graph>::from_edges(edges.iter());

                        let expected: FxHashSet<Edge> = edges.iter().copied().collect();
                        assert_eq!(graph.edges(), expected);
                        assert_eq!(graph.number_of_edges(), expected.len());
                        assert_eq!(graph.sorted_vertices(), endpoints(&edges));

                        for &u in &graph.vertices() {
                            let nbs: FxHashSet<Vertex> =
                                graph.neighbors_of(u).unwrap().into_iter().collect();
                            let expected_nbs: FxHashSet<Vertex> = expected
                                .iter()
                                .filter(|e| e.source() == u)
                                .map(|e| e.target())
                                .collect();
                            assert_eq!(nbs, expected_nbs);
                        }

                        for &Edge(u, v) in &expected {
                            assert!(graph.has_edge(u, v));
                        }
                    }
                }
            }

            #[test]
            fn remove_vertex_strips_incident_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for n in [5, 20] {
                    let edges = random_edges(rng, n, 3 * n as NumEdges);
                    let mut graph = <$graph>::from_edges(edges.iter());
                    let mut model: FxHashSet<Edge> = edges.iter().copied().collect();
                    let mut vertices = endpoints(&edges);

                    while !vertices.is_empty() {
                        let u = vertices.remove(rng.random_range(0..vertices.len()));
                        graph.remove_vertex(u);
                        model.retain(|e| !e.touches(u));

                        assert!(!graph.has_vertex(u));
                        assert_eq!(graph.sorted_vertices(), vertices);
                        assert_eq!(graph.edges(), model);
                        assert!(graph.edges().iter().all(|e| !e.touches(u)));
                    }

                    assert!(graph.is_empty());
                }
            }

            #[test]
            fn remove_edge_matches_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);

                for n in [5, 20] {
                    let edges = random_edges(rng, n, 4 * n as NumEdges);
                    let mut graph = <$graph>::from_edges(edges.iter());
                    let mut model: FxHashSet<Edge> = edges.iter().copied().collect();
                    let vertices = endpoints(&edges);

                    for _ in 0..(8 * n) {
                        let (u, v) = (rng.random_range(-n..n), rng.random_range(-n..n));
                        graph.remove_edge(u, v);
                        model.remove(&Edge(u, v));

                        assert_eq!(graph.edges(), model);
                        assert_eq!(graph.sorted_vertices(), vertices);
                    }
                }
            }

            #[test]
            fn equals_reference_representation() {
                let rng = &mut Pcg64Mcg::seed_from_u64(11);

                for n in [4, 16] {
                    let edges = random_edges(rng, n, 2 * n as NumEdges);
                    let mut graph = <$graph>::from_edges(edges.iter());
                    let mut reference = AdjacencyListGraph::from_edges(edges.iter().rev());

                    assert_eq!(graph, reference);
                    assert_eq!(graph.structure_hash(), reference.structure_hash());

                    graph.add_vertex(n);
                    assert_ne!(graph, reference);

                    reference.add_vertex(n);
                    assert_eq!(graph, reference);
                    assert_eq!(graph.structure_hash(), reference.structure_hash());
                }
            }

            #[test]
            fn isolated_vertices() {
                let mut graph = <$graph>::new();
                for u in [-3, 8, 0] {
                    graph.add_vertex(u);
                    graph.add_vertex(u);
                }

                assert_eq!(graph.sorted_vertices(), vec![-3, 0, 8]);
                assert_eq!(graph.number_of_edges(), 0);
                assert!(graph.neighbors_of(8).unwrap().is_empty());

                graph.add_edge(-3, 8);
                graph.add_vertex(-3);
                assert_eq!(graph.neighbors_of(-3).unwrap(), vec![8]);
            }
        }
    };
}

pub(crate) use test_graph_contract;
