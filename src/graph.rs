mod convert;
mod generic;
mod multi;
mod simple;

pub use generic::{GraphCore, ParallelEdges};

use crate::core::marker::{Directed, Multi, Simple, Undirected};

/// Undirected graph with at most one edge per node pair.
pub type Graph<N> = GraphCore<N, Undirected, Simple>;

/// Directed graph with at most one edge per ordered node pair.
pub type DiGraph<N> = GraphCore<N, Directed, Simple>;

/// Undirected graph with keyed parallel edges.
pub type MultiGraph<N> = GraphCore<N, Undirected, Multi>;

/// Directed graph with keyed parallel edges.
pub type MultiDiGraph<N> = GraphCore<N, Directed, Multi>;

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::attrs;
    use crate::core::{AttrValue, GraphError, GraphMut, GraphRef, Key, NodeSet};
    use crate::infra::proptest::graph_strategy;
    use crate::infra::testing::check_consistency;

    #[test]
    fn path_in_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.nodes().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn multigraph_keys() {
        let mut graph = MultiGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("a", "b");

        let keys = graph
            .edges()
            .iter()
            .map(|edge| edge.key.cloned())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![Some(Key::Index(0)), Some(Key::Index(1))]);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn directed_degrees() {
        let mut graph = DiGraph::new();
        graph.add_edge(1, 2);

        assert!(graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
        assert_eq!(graph.in_degree().get(&2), Some(1));
        assert_eq!(graph.out_degree().get(&1), Some(1));
        assert_eq!(graph.in_degree().get(&1), Some(0));
    }

    #[test]
    fn self_loop_degree() {
        let mut graph = Graph::new();
        graph.add_edge(1, 1);

        assert_eq!(graph.degree().get(&1), Some(2));
        assert_eq!(graph.number_of_edges(), 1);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_missing_node() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);

        assert_matches!(graph.remove_node(&7), Err(GraphError::NodeNotFound(_)));

        graph.remove_nodes_from([7]);
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn cascading_delete() {
        let mut graph = DiGraph::new();
        graph.add_edge("u", "n");
        graph.add_edge("n", "v");
        graph.add_edge("u", "v");
        graph.remove_node(&"n").unwrap();

        assert!(!graph.has_node(&"n"));
        assert!(graph.has_edge(&"u", &"v"));
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.predecessors(&"v").unwrap().eq([&"u"]));
        check_consistency(&graph).unwrap();

        let mut graph = MultiGraph::new();
        graph.add_edge("u", "n");
        graph.add_edge("n", "n");
        graph.add_edge("n", "v");
        graph.remove_node(&"n").unwrap();

        assert!(graph.neighbors(&"u").unwrap().next().is_none());
        assert!(graph.neighbors(&"v").unwrap().next().is_none());
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_node_with("a", attrs! { "color" => "red" });
        graph.add_node("b");
        graph.add_node("a");
        graph.add_node_with("a", attrs! { "size" => 2 });

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.nodes().iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            graph.nodes()[&"a"].to_attrs(),
            attrs! { "color" => "red", "size" => 2 }
        );
    }

    #[test]
    fn bulk_node_attributes_merge_in_place() {
        let mut graph = Graph::new();
        graph.add_node_with("a", attrs! { "color" => "red" });
        graph.add_edge("b", "c");

        graph.add_nodes_from_attrs([
            ("c", attrs! { "size" => 3 }),
            ("a", attrs! { "color" => "blue", "size" => 1 }),
            ("d", attrs! {}),
        ]);

        assert_eq!(
            graph.nodes().iter().copied().collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(
            graph.nodes()[&"a"].to_attrs(),
            attrs! { "color" => "blue", "size" => 1 }
        );
        assert_eq!(graph.nodes()[&"c"].get("size"), Some(AttrValue::Int(3)));
        assert!(graph.has_edge(&"b", &"c"));
    }

    #[test]
    fn size_counts_edges() {
        let mut graph = MultiGraph::new();
        assert_eq!(graph.size(), 0);

        graph.add_edge(1, 2);
        graph.add_edge(2, 1);
        graph.add_edge(3, 3);
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.size(), graph.edges().iter().count());

        let mut digraph = DiGraph::new();
        digraph.add_edge(1, 2);
        digraph.add_edge(2, 1);
        digraph.add_edge(2, 2);
        assert_eq!(digraph.size(), 3);
    }

    #[test]
    fn bulk_removal_keeps_order() {
        let mut graph = Graph::new();
        for i in 0..2000u32 {
            graph.add_edge(i, i + 1);
        }

        graph.remove_nodes_from((0..=2000).filter(|i| i % 2 == 0));

        assert_eq!(graph.number_of_nodes(), 1000);
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(
            graph.nodes().iter().copied().collect::<Vec<_>>(),
            (1..2000).step_by(2).collect::<Vec<_>>()
        );

        graph.add_edge(0, 1);
        assert_eq!(graph.nodes().iter().last(), Some(&0));
        assert_eq!(graph.degree().get(&1), Some(1));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn neighbors_of_missing_node() {
        let graph = Graph::<u32>::new();
        assert!(matches!(graph.neighbors(&1), Err(GraphError::NodeNotFound(_))));
    }

    #[test]
    fn clear() {
        let mut graph = DiGraph::with_attrs(attrs! { "name" => "g" });
        graph.add_node_with(1, attrs! { "x" => 1 });
        graph.add_edge(1, 2);

        graph.clear_edges();
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.nodes()[&1].get("x"), Some(AttrValue::Int(1)));

        graph.try_clear().unwrap();
        assert_eq!(graph.number_of_nodes(), 0);
        assert_eq!(graph.name(), "");
    }

    #[test]
    fn graph_mut_surface() {
        let mut graph = MultiDiGraph::new();

        graph.try_add_node(1, attrs! { "x" => 1 }).unwrap();
        assert_eq!(graph.try_add_edge((1, 2)), Ok(Some(Key::Index(0))));
        assert_eq!(
            graph.try_add_edge((1, 2, Key::from("k"), attrs! { "w" => 3 })),
            Ok(Some(Key::from("k")))
        );
        graph.try_remove_edge(&1, &2, Some(&Key::Index(0))).unwrap();
        graph.try_remove_node(&2).unwrap();
        assert_eq!(graph.number_of_edges(), 0);

        let mut simple = Graph::new();
        assert_eq!(simple.try_add_edge((1, 2)), Ok(None));
        assert_matches!(
            simple.try_remove_edge(&1, &2, Some(&Key::Index(0))),
            Err(GraphError::Malformed(_))
        );
    }

    #[test]
    fn graph_attributes() {
        let graph = Graph::<u32>::new();
        graph.graph_attrs().set("day", "Friday");
        assert_eq!(graph.graph_attrs().get("day"), Some(AttrValue::from("Friday")));
    }

    proptest! {
        #[test]
        fn generated_graphs_are_consistent(graph in graph_strategy::<Undirected, Multi>(8, 24)) {
            check_consistency(&graph).unwrap();
        }

        #[test]
        fn generated_digraphs_are_consistent(graph in graph_strategy::<Directed, Simple>(8, 24)) {
            check_consistency(&graph).unwrap();
        }

        #[test]
        fn removing_node_removes_incident_edges(
            graph in graph_strategy::<Directed, Multi>(8, 24),
            victim in 0u8..8
        ) {
            let mut graph = graph;
            let incident = graph.degree().get(&victim).unwrap_or(0);
            let before = graph.number_of_edges();
            let loops = graph.number_of_edges_between(&victim, &victim);

            let existed = graph.has_node(&victim);
            prop_assert_eq!(graph.remove_node(&victim).is_ok(), existed);
            prop_assert_eq!(graph.number_of_edges(), before - (incident - loops));
            check_consistency(&graph).unwrap();
        }

        #[test]
        fn edge_count_matches_iteration(graph in graph_strategy::<Undirected, Multi>(8, 24)) {
            prop_assert_eq!(graph.number_of_edges(), graph.edges().iter().count());
            for n in graph.nodes().iter() {
                let incident = graph
                    .edges()
                    .iter()
                    .map(|edge| (edge.u == n) as usize + (edge.v == n) as usize)
                    .sum::<usize>();
                prop_assert_eq!(graph.degree().get(n), Some(incident));
            }
        }

        #[test]
        fn round_trip_keeps_topology(graph in graph_strategy::<Undirected, Simple>(8, 24)) {
            let back = graph.to_directed().to_undirected();
            prop_assert_eq!(back.number_of_nodes(), graph.number_of_nodes());
            prop_assert_eq!(back.number_of_edges(), graph.number_of_edges());
            for edge in graph.edges().iter() {
                prop_assert!(back.has_edge(edge.u, edge.v));
            }
        }
    }
}
