pub mod adapt;
pub mod common;
pub mod core;
pub mod func;
pub mod graph;
pub mod infra;
pub mod report;
pub mod storage;

pub mod prelude {
    pub use crate::{
        attrs,
        core::{
            marker::{Directed, Direction, Multi, Simple, Undirected},
            AttrHandle, AttrValue, Attrs, EdgeSpec, GraphError, GraphMut, GraphRef, Key,
        },
        graph::{DiGraph, Graph, GraphCore, MultiDiGraph, MultiGraph},
    };
}
