//! Identification of nodes and parallel edges.
//!
//! Nodes are identified by arbitrary owned values: anything that is
//! [`Clone`], [`Eq`], [`Hash`] and [`Debug`] is a valid [`NodeId`]. Integers
//! and strings are the usual choices, but tuples or user-defined types work
//! equally well.
//!
//! Parallel edges of a multigraph are identified by a [`Key`] which is unique
//! only among the edges between the same pair of nodes.

use std::{fmt, hash::Hash};

pub trait NodeId: Clone + Eq + Hash + fmt::Debug + 'static {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + 'static {}

/// Key of a parallel edge in a multigraph.
///
/// Keys assigned by the graph itself are always [`Key::Index`]: the smallest
/// non-negative integer, starting from the number of edges already present
/// between the pair, that is not used by another edge between the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name:?}"),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}
