//! Live read-only views over a graph.
//!
//! An adapter wraps a graph (usually a reference to it, but owning and
//! `&mut` wrappers work too) and changes how it is seen without copying any
//! adjacency data. Every query goes to the wrapped graph, so an adapter never
//! goes stale. The structure of a graph cannot be changed through an adapter,
//! all [`GraphMut`](crate::core::GraphMut) operations fail with
//! [`ViewIsImmutable`](crate::core::GraphError::ViewIsImmutable). Attributes
//! stay mutable through their handles.

// Forwards `GraphBase` to the wrapped graph, optionally overriding the edge
// type.
macro_rules! delegate_graph_base {
    ($name:ident) => {
        impl<G: $crate::core::GraphBase> $crate::core::GraphBase for $name<G> {
            type NodeId = G::NodeId;
            type EdgeType = G::EdgeType;
            type Multiplicity = G::Multiplicity;
        }
    };
    ($name:ident, $edge_type:ty) => {
        impl<G: $crate::core::GraphBase> $crate::core::GraphBase for $name<G> {
            type NodeId = G::NodeId;
            type EdgeType = $edge_type;
            type Multiplicity = G::Multiplicity;
        }
    };
}

macro_rules! delegate_node_set {
    ($name:ident) => {
        impl<G: $crate::core::NodeSet> $crate::core::NodeSet for $name<G> {
            type NodesIter<'a> = G::NodesIter<'a>
            where
                Self: 'a;

            fn graph_attrs(&self) -> &$crate::core::AttrHandle {
                self.graph.graph_attrs()
            }

            fn node_entries(&self) -> Self::NodesIter<'_> {
                self.graph.node_entries()
            }

            fn node_entry(
                &self,
                n: &Self::NodeId,
            ) -> Option<(&Self::NodeId, &$crate::core::AttrHandle)> {
                self.graph.node_entry(n)
            }

            fn contains_node(&self, n: &Self::NodeId) -> bool {
                self.graph.contains_node(n)
            }

            fn node_count(&self) -> usize {
                self.graph.node_count()
            }
        }
    };
}

// Accessors shared by all adapters.
macro_rules! adapter_accessors {
    ($name:ident) => {
        impl<G> $name<G> {
            pub fn get_ref(&self) -> &G {
                &self.graph
            }

            /// Access to the wrapped graph. Changes made through it are
            /// immediately visible through the adapter.
            pub fn get_mut(&mut self) -> &mut G {
                &mut self.graph
            }

            pub fn into_inner(self) -> G {
                self.graph
            }
        }
    };
}

macro_rules! immutable_graph_mut {
    ($name:ident) => {
        impl<G: $crate::core::GraphBase> $crate::core::GraphMut for $name<G>
        where
            $name<G>: $crate::core::GraphRef,
        {
            fn try_add_node(
                &mut self,
                _n: Self::NodeId,
                _attrs: $crate::core::Attrs,
            ) -> Result<(), $crate::core::GraphError> {
                Err($crate::core::GraphError::ViewIsImmutable)
            }

            fn try_remove_node(
                &mut self,
                _n: &Self::NodeId,
            ) -> Result<(), $crate::core::GraphError> {
                Err($crate::core::GraphError::ViewIsImmutable)
            }

            fn try_add_edge<T>(
                &mut self,
                _edge: T,
            ) -> Result<Option<$crate::core::Key>, $crate::core::GraphError>
            where
                T: Into<$crate::core::EdgeSpec<Self::NodeId>>,
            {
                Err($crate::core::GraphError::ViewIsImmutable)
            }

            fn try_remove_edge(
                &mut self,
                _u: &Self::NodeId,
                _v: &Self::NodeId,
                _key: Option<&$crate::core::Key>,
            ) -> Result<(), $crate::core::GraphError> {
                Err($crate::core::GraphError::ViewIsImmutable)
            }

            fn try_clear(&mut self) -> Result<(), $crate::core::GraphError> {
                Err($crate::core::GraphError::ViewIsImmutable)
            }
        }
    };
}

pub mod direct;
pub mod frozen;
pub mod reverse;
pub mod subgraph;
pub mod undirect;

#[doc(inline)]
pub use direct::Direct;
#[doc(inline)]
pub use frozen::Frozen;
#[doc(inline)]
pub use reverse::Reverse;
#[doc(inline)]
pub use subgraph::{SubgraphIter, SubgraphView};
#[doc(inline)]
pub use undirect::Undirect;
