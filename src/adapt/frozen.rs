use std::ops::Deref;

use crate::core::{marker::Direction, Neighbors};

/// Read-only wrapper that exposes a graph exactly as it is.
///
/// Dereferences to the wrapped graph, so its non-mutating methods (copies and
/// conversions included) stay available.
#[derive(Debug)]
pub struct Frozen<G> {
    graph: G,
}

impl<G> Frozen<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }
}

impl<G> From<G> for Frozen<G> {
    fn from(graph: G) -> Self {
        Self::new(graph)
    }
}

impl<G> Deref for Frozen<G> {
    type Target = G;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

adapter_accessors!(Frozen);
delegate_graph_base!(Frozen);
delegate_node_set!(Frozen);
immutable_graph_mut!(Frozen);

impl<G: Neighbors> Neighbors for Frozen<G> {
    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    type ParallelIter<'a> = G::ParallelIter<'a>
    where
        Self: 'a;

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

    fn degree_directed(&self, n: &G::NodeId, dir: Direction) -> Option<usize> {
        self.graph.degree_directed(n, dir)
    }
}
