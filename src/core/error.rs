use std::fmt;

use thiserror::Error;

use super::id::Key;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    NodeNotFound(String),
    #[error("edge {u}-{v}{} is not in the graph", key_suffix(.key))]
    EdgeNotFound {
        u: String,
        v: String,
        key: Option<Key>,
    },
    #[error("attribute {0:?} is not set")]
    KeyNotFound(String),
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error("the graph is a read-only view and its structure cannot be modified")]
    ViewIsImmutable,
    #[error("attribute {key:?} holds a non-numeric value of type {found}")]
    NonNumericWeight { key: String, found: &'static str },
}

impl GraphError {
    pub fn node_not_found<N: fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound(format!("{node:?}"))
    }

    pub fn edge_not_found<N: fmt::Debug>(u: &N, v: &N, key: Option<&Key>) -> Self {
        GraphError::EdgeNotFound {
            u: format!("{u:?}"),
            v: format!("{v:?}"),
            key: key.cloned(),
        }
    }
}

fn key_suffix(key: &Option<Key>) -> String {
    match key {
        Some(key) => format!(" with key {key}"),
        None => String::new(),
    }
}
