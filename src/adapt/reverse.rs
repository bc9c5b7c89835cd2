use crate::core::{
    marker::{Directed, Direction},
    GraphBase, Neighbors,
};

/// Directed graph with all edges pointing the opposite way.
///
/// Edge `u -> v` of the wrapped graph is seen as `v -> u` with the very same
/// attributes.
#[derive(Debug)]
pub struct Reverse<G> {
    graph: G,
}

impl<G> Reverse<G>
where
    G: GraphBase<EdgeType = Directed>,
{
    pub fn new(graph: G) -> Self {
        Self { graph }
    }
}

adapter_accessors!(Reverse);
delegate_graph_base!(Reverse);
delegate_node_set!(Reverse);
immutable_graph_mut!(Reverse);

impl<G: Neighbors> Neighbors for Reverse<G> {
    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    type ParallelIter<'a> = G::ParallelIter<'a>
    where
        Self: 'a;

    fn neighbors_directed(&self, n: &G::NodeId, dir: Direction) -> Option<Self::NeighborsIter<'_>> {
        self.graph.neighbors_directed(n, dir.opposite())
    }

    fn edges_between(
        &self,
        u: &G::NodeId,
        v: &G::NodeId,
        dir: Direction,
    ) -> Self::ParallelIter<'_> {
        self.graph.edges_between(u, v, dir.opposite())
    }

    fn contains_edge_between(&self, u: &G::NodeId, v: &G::NodeId, dir: Direction) -> bool {
        self.graph.contains_edge_between(u, v, dir.opposite())
    }

    fn degree_directed(&self, n: &G::NodeId, dir: Direction) -> Option<usize> {
        self.graph.degree_directed(n, dir.opposite())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::attrs;
    use crate::core::{AttrValue, GraphError, GraphMut, GraphRef, Key};
    use crate::graph::{DiGraph, MultiDiGraph};

    #[test]
    fn edges_are_flipped() {
        let mut graph = DiGraph::new();
        graph.add_edge_with(1, 2, attrs! { "w" => 1 });
        graph.add_edge(2, 3);

        let reversed = graph.reverse_view();
        assert!(reversed.has_edge(&2, &1));
        assert!(!reversed.has_edge(&1, &2));
        assert!(reversed.has_successor(&3, &2));
        assert!(reversed.has_predecessor(&1, &2));
        assert_eq!(reversed.successors(&2).unwrap().collect::<Vec<_>>(), vec![&1]);
        assert_eq!(reversed.predecessors(&2).unwrap().collect::<Vec<_>>(), vec![&3]);
        assert_eq!(reversed.out_degree().get(&1), Some(0));
        assert_eq!(reversed.in_degree().get(&1), Some(1));
        assert_eq!(reversed.number_of_edges(), 2);
        assert_eq!(reversed.edge_data(&2, &1).unwrap().get("w"), Some(AttrValue::Int(1)));
    }

    #[test]
    fn shares_attributes() {
        let mut graph = DiGraph::new();
        graph.add_edge(1, 2);

        graph.reverse_view().edge_data(&2, &1).unwrap().set("color", "red");
        assert_eq!(
            graph.edge_data(&1, &2).unwrap().get("color"),
            Some(AttrValue::from("red"))
        );
    }

    #[test]
    fn reflects_later_changes() {
        let mut reversed = Reverse::new(DiGraph::new());
        reversed.get_mut().add_edge("a", "b");
        assert!(reversed.has_edge(&"b", &"a"));

        reversed.get_mut().remove_node(&"a").unwrap();
        assert!(!reversed.has_node(&"a"));
        assert_eq!(reversed.number_of_edges(), 0);
    }

    #[test]
    fn parallel_edges_keep_keys() {
        let mut graph = MultiDiGraph::new();
        graph.add_edge(1, 2);
        graph.add_keyed_edge(1, 2, "x", Default::default());

        let reversed = graph.reverse_view();
        assert_eq!(reversed.number_of_edges_between(&2, &1), 2);
        assert!(reversed.has_keyed_edge(&2, &1, &Key::from("x")));
    }

    #[test]
    fn immutable() {
        let graph = DiGraph::<u32>::new();
        let mut reversed = graph.reverse_view();
        assert_matches!(reversed.try_add_edge((1, 2)), Err(GraphError::ViewIsImmutable));
    }
}
