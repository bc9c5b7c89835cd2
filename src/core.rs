pub mod attr;
pub mod error;
pub mod id;
pub mod marker;
pub mod slot;

mod base;
mod graph;
mod mutate;

pub use attr::{AttrHandle, AttrValue, Attrs};
pub use base::*;
pub use error::GraphError;
pub use graph::*;
pub use id::{Key, NodeId};
pub use mutate::*;
pub use slot::{EdgeData, EdgeSlot, KeyedEdges};
