use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::common::ordered_map::{self, OrderedMap};
use crate::core::{
    marker::{Direction, EdgeType, Multiplicity},
    AttrHandle, AttrValue, Attrs, EdgeData, EdgeSlot, EdgeSpec, GraphBase, GraphError, GraphMut,
    GraphRef, Key, Neighbors, NodeId, NodeSet,
};
use crate::storage::AdjStore;

/// Owned graph of one of the four variants.
///
/// Nodes, neighbors and parallel edges are all reported in insertion order.
/// An edge is stored in two adjacency entries, `succ[u][v]` and `succ[v][u]`
/// for undirected graphs and `succ[u][v]` and `pred[v][u]` for directed ones,
/// both holding the same attribute handles. An undirected self-loop occupies
/// a single entry.
#[derive(Debug)]
pub struct GraphCore<N, Ty: EdgeType, M: Multiplicity> {
    attrs: AttrHandle,
    nodes: OrderedMap<N, AttrHandle>,
    succ: AdjStore<N, M::Slot>,
    // Stays empty for undirected graphs.
    pred: AdjStore<N, M::Slot>,
    ty: PhantomData<fn() -> (Ty, M)>,
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> GraphCore<N, Ty, M> {
    pub fn new() -> Self {
        Self::with_attrs(Attrs::new())
    }

    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            attrs: AttrHandle::default(),
            nodes: OrderedMap::with_capacity(node_count),
            succ: AdjStore::with_capacity(node_count),
            pred: if Ty::is_directed() {
                AdjStore::with_capacity(node_count)
            } else {
                AdjStore::new()
            },
            ty: PhantomData,
        }
    }

    /// Creates an empty graph with given graph attributes.
    pub fn with_attrs(attrs: Attrs) -> Self {
        Self {
            attrs: AttrHandle::new(attrs),
            nodes: OrderedMap::new(),
            succ: AdjStore::new(),
            pred: AdjStore::new(),
            ty: PhantomData,
        }
    }

    /// The `"name"` graph attribute, or an empty string.
    pub fn name(&self) -> String {
        match self.attrs.get("name") {
            Some(AttrValue::Str(name)) => name,
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.attrs.set("name", name.into());
    }

    /// Adds a node. Adding an existing node has no effect.
    pub fn add_node(&mut self, n: N) {
        self.ensure_node(n);
    }

    /// Adds a node or merges `attrs` into the attributes of an existing one.
    /// The position of an existing node in the iteration order is kept.
    pub fn add_node_with(&mut self, n: N, attrs: Attrs) {
        self.ensure_node(n).update(attrs);
    }

    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
    {
        for n in nodes {
            self.ensure_node(n);
        }
    }

    pub fn add_nodes_from_attrs<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = (N, Attrs)>,
    {
        for (n, attrs) in nodes {
            self.ensure_node(n).update(attrs);
        }
    }

    /// Removes the node together with all its incident edges.
    pub fn remove_node(&mut self, n: &N) -> Result<(), GraphError> {
        if self.nodes.remove(n).is_none() {
            return Err(GraphError::node_not_found(n));
        }

        if Ty::is_directed() {
            let outgoing = self.succ.take_node(n).unwrap_or_default();
            let incoming = self.pred.take_node(n).unwrap_or_default();

            for v in outgoing.keys() {
                self.pred.unlink(v, n);
            }

            for v in incoming.keys() {
                self.succ.unlink(v, n);
            }
        } else {
            self.succ.remove_node(n)?;
        }

        Ok(())
    }

    /// Removes the nodes that are present, others are skipped.
    pub fn remove_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
    {
        for n in nodes {
            let n = n.borrow();
            if self.remove_node(n).is_err() {
                trace!("Skipping removal of missing node {:?}", n);
            }
        }
    }

    /// Removes all nodes, edges and graph attributes.
    pub fn clear(&mut self) {
        self.attrs.borrow_mut().clear();
        self.nodes.clear();
        self.succ.clear();
        self.pred.clear();
    }

    /// Removes all edges, keeping the nodes and their attributes.
    pub fn clear_edges(&mut self) {
        self.succ.clear_edges();
        self.pred.clear_edges();
    }

    fn ensure_node(&mut self, n: N) -> &AttrHandle {
        if !self.nodes.contains_key(&n) {
            self.succ.add_node(n.clone());
            if Ty::is_directed() {
                self.pred.add_node(n.clone());
            }
        }

        self.nodes.get_or_insert_with(n, AttrHandle::default)
    }

    pub(super) fn store(&self, dir: Direction) -> &AdjStore<N, M::Slot> {
        if Ty::is_directed() && dir == Direction::Incoming {
            &self.pred
        } else {
            &self.succ
        }
    }

    /// Entry holding the other half of the edge stored in `succ[u][v]`, or
    /// `None` if the edge occupies a single entry.
    fn mirror_slot_mut(&mut self, u: &N, v: &N) -> Option<&mut M::Slot> {
        if Ty::is_directed() {
            self.pred.slot_mut(v, u)
        } else if u != v {
            self.succ.slot_mut(v, u)
        } else {
            None
        }
    }

    fn link_mirrored(&mut self, u: N, v: N, slot: M::Slot) {
        let mirror = slot.clone();
        if Ty::is_directed() {
            self.succ.link(u.clone(), v.clone(), slot);
            self.pred.link(v, u, mirror);
        } else if u != v {
            self.succ.link(u.clone(), v.clone(), slot);
            self.succ.link(v, u, mirror);
        } else {
            self.succ.link(u, v, slot);
        }
    }

    fn unlink_mirrored(&mut self, u: &N, v: &N) {
        self.succ.unlink(u, v);
        if Ty::is_directed() {
            self.pred.unlink(v, u);
        } else if u != v {
            self.succ.unlink(v, u);
        }
    }

    /// Adds the edge `u -> v`, adding missing endpoints. An existing edge
    /// (simple graphs) or an existing edge with the same key (multigraphs)
    /// gets `attrs` merged into its attributes. A multigraph edge without a
    /// key gets the next free key.
    ///
    /// Returns the key of the edge, always `Key::Index(0)` for simple graphs.
    pub(super) fn insert_edge(&mut self, u: N, v: N, key: Option<Key>, attrs: Attrs) -> Key {
        self.ensure_node(u.clone());
        self.ensure_node(v.clone());

        let Some(slot) = self.succ.slot_mut(&u, &v) else {
            let key = key.unwrap_or(Key::Index(0));
            let slot = M::Slot::single(key.clone(), AttrHandle::new(attrs));
            self.link_mirrored(u, v, slot);
            return key;
        };

        if !M::is_multigraph() {
            if let Some(existing) = slot.get(None) {
                existing.update(attrs);
            }
            return Key::Index(0);
        }

        let key = key.unwrap_or_else(|| slot.next_key());
        if let Some(existing) = slot.get(Some(&key)) {
            existing.update(attrs);
            return key;
        }

        let handle = AttrHandle::new(attrs);
        slot.insert(key.clone(), handle.clone());
        if let Some(mirror) = self.mirror_slot_mut(&u, &v) {
            mirror.insert(key.clone(), handle);
        }

        key
    }

    /// Removes the edge `u -> v`. In multigraphs, the edge with given key, or
    /// the most recently added one if no key is given.
    pub(super) fn remove_edge_inner(
        &mut self,
        u: &N,
        v: &N,
        key: Option<&Key>,
    ) -> Result<AttrHandle, GraphError> {
        let slot = self
            .succ
            .slot_mut(u, v)
            .ok_or_else(|| GraphError::edge_not_found(u, v, key))?;

        if !M::is_multigraph() {
            let handle = slot
                .get(None)
                .cloned()
                .ok_or_else(|| GraphError::edge_not_found(u, v, key))?;
            self.unlink_mirrored(u, v);
            return Ok(handle);
        }

        let key = match key {
            Some(key) => key.clone(),
            None => slot
                .last_key()
                .cloned()
                .ok_or_else(|| GraphError::edge_not_found(u, v, None))?,
        };

        let handle = slot
            .remove(&key)
            .ok_or_else(|| GraphError::edge_not_found(u, v, Some(&key)))?;

        if slot.len() == 0 {
            self.unlink_mirrored(u, v);
        } else if let Some(mirror) = self.mirror_slot_mut(u, v) {
            mirror.remove(&key);
        }

        Ok(handle)
    }

    /// Adds an edge described by `spec`. Keys are malformed input for simple
    /// graphs.
    pub(super) fn insert_spec(&mut self, spec: EdgeSpec<N>) -> Result<Option<Key>, GraphError> {
        if !M::is_multigraph() {
            if let Some(key) = spec.key {
                return Err(GraphError::Malformed(format!(
                    "edge {:?}-{:?} has key {key} but the graph does not allow parallel edges",
                    spec.u, spec.v
                )));
            }
            self.insert_edge(spec.u, spec.v, None, spec.attrs);
            return Ok(None);
        }

        Ok(Some(self.insert_edge(spec.u, spec.v, spec.key, spec.attrs)))
    }

    /// Name of the variant, such as `"MultiDiGraph"`.
    pub fn variant_name() -> &'static str {
        match (Ty::is_directed(), M::is_multigraph()) {
            (false, false) => "Graph",
            (true, false) => "DiGraph",
            (false, true) => "MultiGraph",
            (true, true) => "MultiDiGraph",
        }
    }
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> Default for GraphCore<N, Ty, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> fmt::Display for GraphCore<N, Ty, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        f.write_str(Self::variant_name())?;
        if !name.is_empty() {
            write!(f, " named '{name}'")?;
        }
        write!(
            f,
            " with {} nodes and {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )
    }
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> GraphBase for GraphCore<N, Ty, M> {
    type NodeId = N;
    type EdgeType = Ty;
    type Multiplicity = M;
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> NodeSet for GraphCore<N, Ty, M> {
    type NodesIter<'a> = ordered_map::Iter<'a, N, AttrHandle>
    where
        Self: 'a;

    fn graph_attrs(&self) -> &AttrHandle {
        &self.attrs
    }

    fn node_entries(&self) -> Self::NodesIter<'_> {
        self.nodes.iter()
    }

    fn node_entry(&self, n: &N) -> Option<(&N, &AttrHandle)> {
        self.nodes.get_key_value(n)
    }

    fn contains_node(&self, n: &N) -> bool {
        self.nodes.contains_key(n)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> Neighbors for GraphCore<N, Ty, M> {
    type NeighborsIter<'a> = ordered_map::Keys<'a, N, M::Slot>
    where
        Self: 'a;

    type ParallelIter<'a> = ParallelEdges<'a, M::Slot>
    where
        Self: 'a;

    fn neighbors_directed(&self, n: &N, dir: Direction) -> Option<Self::NeighborsIter<'_>> {
        self.store(dir)
            .neighborhood(n)
            .map(|neighborhood| neighborhood.keys())
    }

    fn edges_between(&self, u: &N, v: &N, dir: Direction) -> Self::ParallelIter<'_> {
        ParallelEdges {
            inner: self.store(dir).slot(u, v).map(EdgeSlot::entries),
        }
    }

    fn contains_edge_between(&self, u: &N, v: &N, dir: Direction) -> bool {
        self.store(dir).has_edge(u, v)
    }

    fn degree_directed(&self, n: &N, dir: Direction) -> Option<usize> {
        let neighborhood = self.store(dir).neighborhood(n)?;

        let mut degree = if M::is_multigraph() {
            neighborhood.iter().map(|(_, slot)| slot.len()).sum()
        } else {
            neighborhood.len()
        };

        // An undirected self-loop occupies one entry but has two endpoints.
        if !Ty::is_directed() {
            degree += neighborhood.get(n).map_or(0, EdgeSlot::len);
        }

        Some(degree)
    }
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> GraphMut for GraphCore<N, Ty, M> {
    fn try_add_node(&mut self, n: N, attrs: Attrs) -> Result<(), GraphError> {
        self.add_node_with(n, attrs);
        Ok(())
    }

    fn try_remove_node(&mut self, n: &N) -> Result<(), GraphError> {
        self.remove_node(n)
    }

    fn try_add_edge<T>(&mut self, edge: T) -> Result<Option<Key>, GraphError>
    where
        T: Into<EdgeSpec<N>>,
    {
        self.insert_spec(edge.into())
    }

    fn try_remove_edge(&mut self, u: &N, v: &N, key: Option<&Key>) -> Result<(), GraphError> {
        if !M::is_multigraph() && key.is_some() {
            return Err(GraphError::Malformed(
                "edge keys are not supported in graphs without parallel edges".to_owned(),
            ));
        }

        self.remove_edge_inner(u, v, key).map(|_| ())
    }

    fn try_clear(&mut self) -> Result<(), GraphError> {
        self.clear();
        Ok(())
    }
}

/// Parallel edges in one adjacency entry, empty if there is no entry.
pub struct ParallelEdges<'a, S: EdgeSlot> {
    inner: Option<S::Iter<'a>>,
}

impl<'a, S: EdgeSlot> Iterator for ParallelEdges<'a, S> {
    type Item = EdgeData<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner {
            Some(ref inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}
