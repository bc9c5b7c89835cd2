//! Lazy reporting views over a graph.
//!
//! The views borrow the graph and compute everything on access. Nothing is
//! cached, so a view obtained from a live [adapter](crate::adapt) always
//! reflects the current state of the underlying graph.

pub mod adjacency;
pub mod degree;
pub mod edges;
pub mod nodes;

#[doc(inline)]
pub use adjacency::{AdjacencyView, NeighborView};
#[doc(inline)]
pub use degree::{DegreeView, WeightedDegreeView};
#[doc(inline)]
pub use edges::{EdgeRef, EdgeView, EdgesIter};
#[doc(inline)]
pub use nodes::{NbunchIter, NodeIds, NodeView};
