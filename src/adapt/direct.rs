use crate::core::{
    marker::{Directed, Direction},
    Neighbors,
};

/// Graph seen as directed.
///
/// A directed graph is passed through unchanged. Every edge `u - v` of an
/// undirected graph is seen as the pair of edges `u -> v` and `v -> u`
/// sharing the same attributes. A self-loop stays a single edge.
#[derive(Debug)]
pub struct Direct<G> {
    graph: G,
}

impl<G> Direct<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }
}

adapter_accessors!(Direct);
delegate_graph_base!(Direct, Directed);
delegate_node_set!(Direct);
immutable_graph_mut!(Direct);

impl<G: Neighbors> Neighbors for Direct<G> {
    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    type ParallelIter<'a> = G::ParallelIter<'a>
    where
        Self: 'a;

    // The wrapped undirected graph ignores the direction, which gives exactly
    // the symmetric view.
    fn neighbors_directed(&self, n: &G::NodeId, dir: Direction) -> Option<Self::NeighborsIter<'_>> {
        self.graph.neighbors_directed(n, dir)
    }

    fn edges_between(
        &self,
        u: &G::NodeId,
        v: &G::NodeId,
        dir: Direction,
    ) -> Self::ParallelIter<'_> {
        self.graph.edges_between(u, v, dir)
    }

    fn contains_edge_between(&self, u: &G::NodeId, v: &G::NodeId, dir: Direction) -> bool {
        self.graph.contains_edge_between(u, v, dir)
    }
}
