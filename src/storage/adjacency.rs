use crate::common::ordered_map::{self, OrderedMap};
use crate::core::{error::GraphError, id::NodeId};

/// Nested insertion-ordered mapping `node -> neighbor -> slot`.
///
/// Both levels preserve insertion order and removals keep the order of the
/// remaining entries. Removing a link takes constant time on average,
/// removing a node is linear in the number of its neighbors.
#[derive(Debug, Clone)]
pub struct AdjStore<N, S> {
    inner: OrderedMap<N, OrderedMap<N, S>>,
}

pub type Neighborhood<N, S> = OrderedMap<N, S>;

impl<N: NodeId, S> AdjStore<N, S> {
    pub fn new() -> Self {
        Self {
            inner: OrderedMap::new(),
        }
    }

    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            inner: OrderedMap::with_capacity(node_count),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, n: &N) -> bool {
        self.inner.contains_key(n)
    }

    /// Adds a node without neighbors. Returns `false` if the node was already
    /// present, in which case nothing changes.
    pub fn add_node(&mut self, n: N) -> bool {
        if self.inner.contains_key(&n) {
            return false;
        }

        self.inner.insert(n, OrderedMap::new());
        true
    }

    /// Removes the node and every entry referring to it from its neighbors.
    /// Suitable for symmetric stores only, where each neighbor of `n` has `n`
    /// as a neighbor.
    pub fn remove_node(&mut self, n: &N) -> Result<Neighborhood<N, S>, GraphError> {
        let neighborhood = self
            .inner
            .remove(n)
            .ok_or_else(|| GraphError::node_not_found(n))?;

        for neighbor in neighborhood.keys() {
            if neighbor != n {
                self.unlink(neighbor, n);
            }
        }

        Ok(neighborhood)
    }

    /// Removes the entry of the node itself, leaving entries that refer to it
    /// in other neighborhoods untouched.
    pub fn take_node(&mut self, n: &N) -> Option<Neighborhood<N, S>> {
        self.inner.remove(n)
    }

    /// Sets the slot for the ordered pair `(u, v)`, adding `u` if it is not
    /// present. Returns the previous slot.
    pub fn link(&mut self, u: N, v: N, slot: S) -> Option<S> {
        self.inner
            .get_or_insert_with(u, OrderedMap::new)
            .insert(v, slot)
    }

    pub fn unlink(&mut self, u: &N, v: &N) -> Option<S> {
        self.inner.get_mut(u)?.remove(v)
    }

    pub fn neighborhood(&self, n: &N) -> Option<&Neighborhood<N, S>> {
        self.inner.get(n)
    }

    pub fn neighbors(&self, n: &N) -> Result<ordered_map::Keys<'_, N, S>, GraphError> {
        self.inner
            .get(n)
            .map(|neighborhood| neighborhood.keys())
            .ok_or_else(|| GraphError::node_not_found(n))
    }

    pub fn slot(&self, u: &N, v: &N) -> Option<&S> {
        self.inner.get(u)?.get(v)
    }

    pub fn slot_mut(&mut self, u: &N, v: &N) -> Option<&mut S> {
        self.inner.get_mut(u)?.get_mut(v)
    }

    /// Never fails, a missing node means no edge.
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.slot(u, v).is_some()
    }

    pub fn iter(&self) -> ordered_map::Iter<'_, N, Neighborhood<N, S>> {
        self.inner.iter()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Removes all entries while keeping the nodes.
    pub fn clear_edges(&mut self) {
        for neighborhood in self.inner.values_mut() {
            neighborhood.clear();
        }
    }
}

impl<N: NodeId, S> Default for AdjStore<N, S> {
    fn default() -> Self {
        Self::new()
    }
}
