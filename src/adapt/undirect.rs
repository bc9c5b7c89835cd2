use crate::core::{
    marker::{Direction, Undirected},
    EdgeData, Key, Neighbors, NodeSet,
};

/// Graph seen as undirected.
///
/// Edges `u -> v` and `v -> u` of a directed graph collapse into a single
/// edge `u - v`. When both exist, the attributes of the edge from the node
/// that is asked first are reported. In multigraphs, edges collapse only when
/// they have the same key.
#[derive(Debug)]
pub struct Undirect<G> {
    graph: G,
}

impl<G> Undirect<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }
}

adapter_accessors!(Undirect);
delegate_graph_base!(Undirect, Undirected);
delegate_node_set!(Undirect);
immutable_graph_mut!(Undirect);

impl<G: Neighbors + NodeSet> Neighbors for Undirect<G> {
    type NeighborsIter<'a> = UnionNeighbors<'a, G>
    where
        Self: 'a;

    type ParallelIter<'a> = UnionParallel<'a, G>
    where
        Self: 'a;

    fn neighbors_directed(
        &self,
        n: &G::NodeId,
        _dir: Direction,
    ) -> Option<Self::NeighborsIter<'_>> {
        let (node, _) = self.graph.node_entry(n)?;
        let first = self.graph.neighbors_directed(node, Direction::Outgoing)?;
        let second = if self.graph.is_directed() {
            self.graph.neighbors_directed(node, Direction::Incoming)
        } else {
            None
        };

        Some(UnionNeighbors {
            graph: &self.graph,
            node,
            first,
            second,
        })
    }

    fn edges_between(
        &self,
        u: &G::NodeId,
        v: &G::NodeId,
        _dir: Direction,
    ) -> Self::ParallelIter<'_> {
        let first = self.graph.edges_between(u, v, Direction::Outgoing);
        if !self.graph.is_directed() {
            return UnionParallel {
                first,
                second: None,
                seen: Vec::new(),
            };
        }

        let seen = self
            .graph
            .edges_between(u, v, Direction::Outgoing)
            .map(|edge| edge.key)
            .collect();

        UnionParallel {
            first,
            second: Some(self.graph.edges_between(u, v, Direction::Incoming)),
            seen,
        }
    }
}

/// Successors followed by the predecessors that are not successors too.
pub struct UnionNeighbors<'a, G: Neighbors + 'a> {
    graph: &'a G,
    node: &'a G::NodeId,
    first: G::NeighborsIter<'a>,
    second: Option<G::NeighborsIter<'a>>,
}

impl<'a, G: Neighbors + 'a> Iterator for UnionNeighbors<'a, G> {
    type Item = &'a G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(next) = self.first.next() {
            return Some(next);
        }

        let graph = self.graph;
        let node = self.node;
        self.second
            .as_mut()?
            .find(|&m| !graph.contains_edge_between(node, m, Direction::Outgoing))
    }
}

/// Outgoing edges followed by the incoming edges with a key not seen among the
/// outgoing ones.
pub struct UnionParallel<'a, G: Neighbors + 'a> {
    first: G::ParallelIter<'a>,
    second: Option<G::ParallelIter<'a>>,
    seen: Vec<Option<&'a Key>>,
}

impl<'a, G: Neighbors + 'a> Iterator for UnionParallel<'a, G> {
    type Item = EdgeData<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(next) = self.first.next() {
            return Some(next);
        }

        let seen = &self.seen;
        self.second
            .as_mut()?
            .find(|edge| !seen.contains(&edge.key))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::attrs;
    use crate::core::{AttrValue, GraphBase, GraphError, GraphMut, GraphRef, Key};
    use crate::graph::{DiGraph, Graph, MultiDiGraph};

    #[test]
    fn reciprocal_edges_collapse() {
        let mut graph = DiGraph::new();
        graph.add_edge_with(1, 2, attrs! { "w" => 1 });
        graph.add_edge_with(2, 1, attrs! { "w" => 2 });
        graph.add_edge(3, 1);

        let undirected = graph.to_undirected_view();
        assert!(!undirected.is_directed());
        assert_eq!(undirected.number_of_edges(), 2);
        assert_eq!(undirected.neighbors(&1).unwrap().collect::<Vec<_>>(), vec![&2, &3]);
        assert!(undirected.has_edge(&1, &3));
        assert_eq!(undirected.degree().get(&1), Some(2));
        assert_eq!(undirected.edge_data(&1, &2).unwrap().get("w"), Some(AttrValue::Int(1)));
        assert_eq!(undirected.edge_data(&2, &1).unwrap().get("w"), Some(AttrValue::Int(2)));
    }

    #[test]
    fn self_loop_counted_once() {
        let graph = DiGraph::from_edges([(1, 1), (1, 2)]).unwrap();

        let undirected = graph.to_undirected_view();
        assert_eq!(undirected.number_of_edges(), 2);
        assert_eq!(undirected.neighbors(&1).unwrap().count(), 2);
        assert_eq!(undirected.degree().get(&1), Some(3));
    }

    #[test]
    fn multigraph_collapses_equal_keys() {
        let mut graph = MultiDiGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);
        graph.add_keyed_edge(2, 1, "back", Default::default());

        let undirected = graph.to_undirected_view();
        assert_eq!(undirected.number_of_edges_between(&1, &2), 3);
        assert_eq!(undirected.number_of_edges_between(&2, &1), 3);
        assert!(undirected.has_keyed_edge(&1, &2, &Key::from("back")));
        assert_eq!(undirected.number_of_edges(), 3);
    }

    #[test]
    fn undirected_graph_is_unchanged() {
        let graph = Graph::from_edges([(1, 2), (2, 3)]).unwrap();

        let undirected = graph.to_undirected_view();
        assert_eq!(undirected.number_of_edges(), 2);
        assert_eq!(undirected.degree().total(), 4);
    }

    #[test]
    fn reflects_later_changes() {
        let mut undirected = Undirect::new(DiGraph::new());
        undirected.get_mut().add_edge(1, 2);
        assert!(undirected.has_edge(&2, &1));

        undirected.get_mut().remove_edge(&1, &2).unwrap();
        assert!(!undirected.has_edge(&2, &1));
        assert_matches!(
            undirected.try_add_node(3, Default::default()),
            Err(GraphError::ViewIsImmutable)
        );
    }
}
