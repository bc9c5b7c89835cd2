use std::{iter, option};

use crate::core::{marker::Direction, AttrHandle, GraphRef, Key};

/// Mapping-like view `node -> neighbors -> edge attributes`.
///
/// For directed graphs, the view follows either successors or predecessors.
pub struct AdjacencyView<'a, G> {
    graph: &'a G,
    dir: Direction,
}

impl<'a, G: GraphRef> AdjacencyView<'a, G> {
    pub fn new(graph: &'a G, dir: Direction) -> Self {
        Self { graph, dir }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, n: &G::NodeId) -> bool {
        self.graph.contains_node(n)
    }

    pub fn get(&self, n: &G::NodeId) -> Option<NeighborView<'a, G>> {
        let (node, _) = self.graph.node_entry(n)?;
        Some(NeighborView {
            graph: self.graph,
            node,
            dir: self.dir,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a G::NodeId, NeighborView<'a, G>)> + 'a {
        let graph = self.graph;
        let dir = self.dir;
        graph.nodes().iter().map(move |node| {
            let neighbors = NeighborView { graph, node, dir };
            (node, neighbors)
        })
    }
}

/// Neighbors of a single node with the attributes of the connecting edges.
pub struct NeighborView<'a, G: GraphRef> {
    graph: &'a G,
    node: &'a G::NodeId,
    dir: Direction,
}

impl<'a, G: GraphRef> NeighborView<'a, G> {
    pub fn node(&self) -> &'a G::NodeId {
        self.node
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn contains(&self, v: &G::NodeId) -> bool {
        self.graph.contains_edge_between(self.node, v, self.dir)
    }

    /// Neighbors in insertion order.
    pub fn iter(&self) -> iter::Flatten<option::IntoIter<G::NeighborsIter<'a>>> {
        self.graph
            .neighbors_directed(self.node, self.dir)
            .into_iter()
            .flatten()
    }

    /// Attributes of the edge to `v`, the first parallel edge in multigraphs.
    pub fn get(&self, v: &G::NodeId) -> Option<&'a AttrHandle> {
        self.graph
            .edges_between(self.node, v, self.dir)
            .next()
            .map(|edge| edge.attrs)
    }

    pub fn get_keyed(&self, v: &G::NodeId, key: &Key) -> Option<&'a AttrHandle> {
        self.graph
            .edges_between(self.node, v, self.dir)
            .find(|edge| edge.key == Some(key))
            .map(|edge| edge.attrs)
    }

    /// All parallel edges to `v` with their keys.
    pub fn edges(&self, v: &G::NodeId) -> G::ParallelIter<'a> {
        self.graph.edges_between(self.node, v, self.dir)
    }
}
