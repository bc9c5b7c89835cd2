use std::borrow::Borrow;

use crate::{
    adapt::{Direct, Frozen, Reverse, SubgraphView, Undirect},
    report::{AdjacencyView, DegreeView, EdgeView, NbunchIter, NodeView},
};

use super::{
    attr::AttrHandle,
    base::{GraphBase, Neighbors, NodeSet},
    error::GraphError,
    id::Key,
    marker::{Directed, Direction},
    mutate::EdgeSpec,
};

/// Read access to a graph, implemented for every type with node and
/// neighbor access: owned graphs, views and references to either.
pub trait GraphRef: NodeSet + Neighbors {
    fn nodes(&self) -> NodeView<'_, Self>
    where
        Self: Sized,
    {
        NodeView::new(self)
    }

    /// Edges of the graph. In directed graphs, these are the outgoing edges.
    fn edges(&self) -> EdgeView<'_, Self>
    where
        Self: Sized,
    {
        EdgeView::new(self, Direction::Outgoing)
    }

    fn out_edges(&self) -> EdgeView<'_, Self>
    where
        Self: Sized + GraphBase<EdgeType = Directed>,
    {
        EdgeView::new(self, Direction::Outgoing)
    }

    fn in_edges(&self) -> EdgeView<'_, Self>
    where
        Self: Sized + GraphBase<EdgeType = Directed>,
    {
        EdgeView::new(self, Direction::Incoming)
    }

    fn adj(&self) -> AdjacencyView<'_, Self>
    where
        Self: Sized,
    {
        AdjacencyView::new(self, Direction::Outgoing)
    }

    fn succ(&self) -> AdjacencyView<'_, Self>
    where
        Self: Sized + GraphBase<EdgeType = Directed>,
    {
        AdjacencyView::new(self, Direction::Outgoing)
    }

    fn pred(&self) -> AdjacencyView<'_, Self>
    where
        Self: Sized + GraphBase<EdgeType = Directed>,
    {
        AdjacencyView::new(self, Direction::Incoming)
    }

    /// Degrees of nodes. In directed graphs, the degree is the sum of in- and
    /// out-degree. A self-loop contributes two.
    fn degree(&self) -> DegreeView<'_, Self>
    where
        Self: Sized,
    {
        DegreeView::new(self, None)
    }

    fn out_degree(&self) -> DegreeView<'_, Self>
    where
        Self: Sized + GraphBase<EdgeType = Directed>,
    {
        DegreeView::new(self, Some(Direction::Outgoing))
    }

    fn in_degree(&self) -> DegreeView<'_, Self>
    where
        Self: Sized + GraphBase<EdgeType = Directed>,
    {
        DegreeView::new(self, Some(Direction::Incoming))
    }

    fn has_node(&self, n: &Self::NodeId) -> bool {
        self.contains_node(n)
    }

    fn has_edge(&self, u: &Self::NodeId, v: &Self::NodeId) -> bool {
        self.contains_edge_between(u, v, Direction::Outgoing)
    }

    fn has_keyed_edge(&self, u: &Self::NodeId, v: &Self::NodeId, key: &Key) -> bool {
        self.edge_data_keyed(u, v, key).is_some()
    }

    fn has_successor(&self, u: &Self::NodeId, v: &Self::NodeId) -> bool
    where
        Self: GraphBase<EdgeType = Directed>,
    {
        self.contains_edge_between(u, v, Direction::Outgoing)
    }

    fn has_predecessor(&self, u: &Self::NodeId, v: &Self::NodeId) -> bool
    where
        Self: GraphBase<EdgeType = Directed>,
    {
        self.contains_edge_between(u, v, Direction::Incoming)
    }

    /// Neighbors of a node, successors in directed graphs.
    fn neighbors(&self, n: &Self::NodeId) -> Result<Self::NeighborsIter<'_>, GraphError> {
        self.neighbors_directed(n, Direction::Outgoing)
            .ok_or_else(|| GraphError::node_not_found(n))
    }

    fn successors(&self, n: &Self::NodeId) -> Result<Self::NeighborsIter<'_>, GraphError>
    where
        Self: GraphBase<EdgeType = Directed>,
    {
        self.neighbors(n)
    }

    fn predecessors(&self, n: &Self::NodeId) -> Result<Self::NeighborsIter<'_>, GraphError>
    where
        Self: GraphBase<EdgeType = Directed>,
    {
        self.neighbors_directed(n, Direction::Incoming)
            .ok_or_else(|| GraphError::node_not_found(n))
    }

    fn number_of_nodes(&self) -> usize {
        self.node_count()
    }

    fn number_of_edges(&self) -> usize {
        let total = self
            .node_entries()
            .filter_map(|(n, _)| self.degree_directed(n, Direction::Outgoing))
            .sum::<usize>();

        // Each undirected edge is counted from both endpoints.
        if self.is_directed() {
            total
        } else {
            total / 2
        }
    }

    /// Number of (parallel) edges from `u` to `v`.
    fn number_of_edges_between(&self, u: &Self::NodeId, v: &Self::NodeId) -> usize {
        self.edges_between(u, v, Direction::Outgoing).count()
    }

    fn size(&self) -> usize
    where
        Self: Sized,
    {
        self.number_of_edges()
    }

    /// Sum of edge weights stored under attribute `key`.
    fn size_weighted(&self, key: &str) -> Result<f64, GraphError>
    where
        Self: Sized,
    {
        self.edges()
            .iter()
            .try_fold(0.0, |acc, edge| Ok(acc + edge.attrs.weight(key)?))
    }

    /// Attributes of the edge `u -> v`. In multigraphs, the first parallel
    /// edge is returned.
    fn edge_data(&self, u: &Self::NodeId, v: &Self::NodeId) -> Option<&AttrHandle> {
        self.edges_between(u, v, Direction::Outgoing)
            .next()
            .map(|edge| edge.attrs)
    }

    fn edge_data_keyed(
        &self,
        u: &Self::NodeId,
        v: &Self::NodeId,
        key: &Key,
    ) -> Option<&AttrHandle> {
        self.edges_between(u, v, Direction::Outgoing)
            .find(|edge| edge.key == Some(key))
            .map(|edge| edge.attrs)
    }

    /// Nodes from `nbunch` that are present in the graph, in the given order.
    fn nbunch_iter<I>(&self, nbunch: I) -> NbunchIter<'_, Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Borrow<Self::NodeId>,
    {
        NbunchIter::new(self, nbunch.into_iter())
    }

    /// Live view induced by the given nodes. Nodes absent from the graph at
    /// this point are ignored.
    fn subgraph<I>(&self, nodes: I) -> SubgraphView<&Self>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Borrow<Self::NodeId>,
    {
        SubgraphView::induced(self, nodes)
    }

    /// Live view containing exactly the given edges and their endpoints. An
    /// edge without a key selects all parallel edges between its endpoints.
    fn edge_subgraph<I, T>(&self, edges: I) -> SubgraphView<&Self>
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
        T: Into<EdgeSpec<Self::NodeId>>,
    {
        SubgraphView::edge_induced(self, edges)
    }

    fn reverse_view(&self) -> Reverse<&Self>
    where
        Self: Sized + GraphBase<EdgeType = Directed>,
    {
        Reverse::new(self)
    }

    fn to_undirected_view(&self) -> Undirect<&Self>
    where
        Self: Sized,
    {
        Undirect::new(self)
    }

    fn to_directed_view(&self) -> Direct<&Self>
    where
        Self: Sized,
    {
        Direct::new(self)
    }

    fn copy_view(&self) -> Frozen<&Self>
    where
        Self: Sized,
    {
        Frozen::new(self)
    }
}

impl<G> GraphRef for G where G: NodeSet + Neighbors + ?Sized {}
