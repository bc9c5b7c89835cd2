//! Adjacency representation backing the owned graphs.
//!
//! A graph keeps one [`AdjStore`] (undirected) or two of them kept in
//! lockstep (directed, successors and predecessors). The store itself knows
//! nothing about edge directions or mirroring, that is the responsibility of
//! [`GraphCore`](crate::graph::GraphCore).

pub mod adjacency;

pub use adjacency::AdjStore;
