//! Type-level markers distinguishing the four graph variants.
//!
//! A graph is parameterized by its [edge type](EdgeType) (directed or
//! undirected) and its [multiplicity](Multiplicity) (simple or multi). Both
//! are sealed, uninhabited types that only ever appear as generic arguments.

use super::{attr::AttrHandle, slot::{EdgeSlot, KeyedEdges}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
}

pub use Direction::*;

impl Direction {
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::Outgoing => 0,
            Direction::Incoming => 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Outgoing => Incoming,
            Incoming => Outgoing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

pub trait EdgeType: private::Sealed + 'static {
    fn is_directed() -> bool;
    fn directions() -> &'static [Direction];
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }

    fn directions() -> &'static [Direction] {
        &[Outgoing]
    }
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }

    fn directions() -> &'static [Direction] {
        &[Outgoing, Incoming]
    }
}

/// At most one edge per (ordered or unordered) node pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Simple {}

/// Parallel edges between the same node pair, told apart by a
/// [`Key`](super::id::Key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multi {}

pub trait Multiplicity: private::Sealed + 'static {
    /// What a single adjacency entry `adj[u][v]` holds.
    type Slot: EdgeSlot;

    fn is_multigraph() -> bool;
}

impl Multiplicity for Simple {
    type Slot = AttrHandle;

    fn is_multigraph() -> bool {
        false
    }
}

impl Multiplicity for Multi {
    type Slot = KeyedEdges;

    fn is_multigraph() -> bool {
        true
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for Undirected {}
    impl Sealed for Directed {}
    impl Sealed for Simple {}
    impl Sealed for Multi {}
}
