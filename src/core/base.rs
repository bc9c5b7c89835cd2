use super::{
    attr::AttrHandle,
    id::NodeId,
    marker::{Direction, EdgeType, Multiplicity},
    slot::EdgeData,
};

pub trait GraphBase {
    type NodeId: NodeId;
    type EdgeType: EdgeType;
    type Multiplicity: Multiplicity;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }

    fn is_multigraph(&self) -> bool {
        Self::Multiplicity::is_multigraph()
    }
}

pub trait NodeSet: GraphBase {
    type NodesIter<'a>: Iterator<Item = (&'a Self::NodeId, &'a AttrHandle)>
    where
        Self: 'a;

    fn graph_attrs(&self) -> &AttrHandle;

    /// Nodes with their attributes, in insertion order.
    fn node_entries(&self) -> Self::NodesIter<'_>;

    /// The stored node equal to `n` together with its attributes.
    fn node_entry(&self, n: &Self::NodeId) -> Option<(&Self::NodeId, &AttrHandle)>;

    fn node_attrs(&self, n: &Self::NodeId) -> Option<&AttrHandle> {
        self.node_entry(n).map(|(_, attrs)| attrs)
    }

    fn contains_node(&self, n: &Self::NodeId) -> bool {
        self.node_entry(n).is_some()
    }

    fn node_count(&self) -> usize {
        self.node_entries().count()
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = &'a Self::NodeId>
    where
        Self: 'a;

    type ParallelIter<'a>: Iterator<Item = EdgeData<'a>>
    where
        Self: 'a;

    /// Returns `None` if the node is not in the graph. The direction is
    /// ignored in undirected graphs.
    fn neighbors_directed(
        &self,
        n: &Self::NodeId,
        dir: Direction,
    ) -> Option<Self::NeighborsIter<'_>>;

    /// Edges in the adjacency entry of `u` for `v`, that is, edges `u -> v`
    /// for [`Outgoing`](Direction::Outgoing) and edges `v -> u` for
    /// [`Incoming`](Direction::Incoming). Empty if there is no such edge.
    fn edges_between(
        &self,
        u: &Self::NodeId,
        v: &Self::NodeId,
        dir: Direction,
    ) -> Self::ParallelIter<'_>;

    fn contains_edge_between(&self, u: &Self::NodeId, v: &Self::NodeId, dir: Direction) -> bool {
        self.edges_between(u, v, dir).next().is_some()
    }

    /// Number of edges incident to `n` in given direction, or `None` if the
    /// node is not in the graph. An undirected self-loop counts twice.
    fn degree_directed(&self, n: &Self::NodeId, dir: Direction) -> Option<usize> {
        let degree = self
            .neighbors_directed(n, dir)?
            .map(|neighbor| {
                let mult = if !self.is_directed() && neighbor == n { 2 } else { 1 };
                mult * self.edges_between(n, neighbor, dir).count()
            })
            .sum();

        Some(degree)
    }
}

macro_rules! deref_graph_base {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase + ?Sized,
        {
            type NodeId = G::NodeId;
            type EdgeType = G::EdgeType;
            type Multiplicity = G::Multiplicity;
        }
    };
}

deref_graph_base!(&);
deref_graph_base!(&mut);

macro_rules! deref_node_set {
    ($($ref_kind:tt)*) => {
        impl<G> NodeSet for $($ref_kind)* G
        where
            G: NodeSet + ?Sized,
        {
            type NodesIter<'a> = G::NodesIter<'a>
            where
                Self: 'a;

            fn graph_attrs(&self) -> &AttrHandle {
                (**self).graph_attrs()
            }

            fn node_entries(&self) -> Self::NodesIter<'_> {
                (**self).node_entries()
            }

            fn node_entry(&self, n: &Self::NodeId) -> Option<(&Self::NodeId, &AttrHandle)> {
                (**self).node_entry(n)
            }

            fn node_attrs(&self, n: &Self::NodeId) -> Option<&AttrHandle> {
                (**self).node_attrs(n)
            }

            fn contains_node(&self, n: &Self::NodeId) -> bool {
                (**self).contains_node(n)
            }

            fn node_count(&self) -> usize {
                (**self).node_count()
            }
        }
    };
}

deref_node_set!(&);
deref_node_set!(&mut);

macro_rules! deref_neighbors {
    ($($ref_kind:tt)*) => {
        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors + ?Sized,
        {
            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            type ParallelIter<'a> = G::ParallelIter<'a>
            where
                Self: 'a;

            fn neighbors_directed(
                &self,
                n: &Self::NodeId,
                dir: Direction,
            ) -> Option<Self::NeighborsIter<'_>> {
                (**self).neighbors_directed(n, dir)
            }

            fn edges_between(
                &self,
                u: &Self::NodeId,
                v: &Self::NodeId,
                dir: Direction,
            ) -> Self::ParallelIter<'_> {
                (**self).edges_between(u, v, dir)
            }

            fn contains_edge_between(
                &self,
                u: &Self::NodeId,
                v: &Self::NodeId,
                dir: Direction,
            ) -> bool {
                (**self).contains_edge_between(u, v, dir)
            }

            fn degree_directed(&self, n: &Self::NodeId, dir: Direction) -> Option<usize> {
                (**self).degree_directed(n, dir)
            }
        }
    };
}

deref_neighbors!(&);
deref_neighbors!(&mut);
