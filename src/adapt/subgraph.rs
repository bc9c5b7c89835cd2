use std::borrow::Borrow;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::core::{
    marker::Direction, AttrHandle, EdgeData, EdgeSpec, GraphBase, GraphRef, Key, Neighbors,
    NodeId, NodeSet,
};

/// Part of a graph selected by node and edge predicates.
///
/// The predicates are evaluated on every access against the current state of
/// the wrapped graph. A node is visible if it passes the node predicate and
/// is still in the graph. An edge is visible if it passes the edge predicate
/// and both its endpoints are visible.
///
/// The edge predicate is always given the endpoints in the orientation of the
/// edge, that is `(u, v)` for an edge `u -> v`, no matter from which side the
/// edge is reached. For undirected graphs, the order is unspecified.
pub struct SubgraphView<G>
where
    G: GraphBase,
{
    graph: G,
    #[allow(clippy::type_complexity)]
    filter_node: Box<dyn Fn(&G::NodeId) -> bool>,
    #[allow(clippy::type_complexity)]
    filter_edge: Box<dyn Fn(&G::NodeId, &G::NodeId, Option<&Key>) -> bool>,
}

impl<G> SubgraphView<G>
where
    G: GraphBase,
{
    /// A view that shows the whole graph until filters are added.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            filter_node: Box::new(|_| true),
            filter_edge: Box::new(|_, _, _| true),
        }
    }

    pub fn filter_node<F>(self, predicate: F) -> Self
    where
        F: Fn(&G::NodeId) -> bool + 'static,
    {
        Self {
            filter_node: Box::new(predicate),
            ..self
        }
    }

    pub fn filter_edge<F>(self, predicate: F) -> Self
    where
        F: Fn(&G::NodeId, &G::NodeId, Option<&Key>) -> bool + 'static,
    {
        Self {
            filter_edge: Box::new(predicate),
            ..self
        }
    }

    pub fn get_ref(&self) -> &G {
        &self.graph
    }

    /// Access to the wrapped graph. Changes made through it are immediately
    /// visible through the view.
    pub fn get_mut(&mut self) -> &mut G {
        &mut self.graph
    }

    pub fn into_inner(self) -> G {
        self.graph
    }

    fn check_node(&self, n: &G::NodeId) -> bool {
        (self.filter_node)(n)
    }

    // `u` is the node the edge is reached from.
    fn check_edge(&self, u: &G::NodeId, v: &G::NodeId, dir: Direction, key: Option<&Key>) -> bool {
        if dir == Direction::Incoming && self.graph.is_directed() {
            (self.filter_edge)(v, u, key)
        } else {
            (self.filter_edge)(u, v, key)
        }
    }
}

impl<G> SubgraphView<G>
where
    G: GraphRef,
{
    /// View induced by `nodes`. Only the nodes present in the graph now are
    /// taken into account, nodes added later never show up.
    pub fn induced<I>(graph: G, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<G::NodeId>,
    {
        let nodes = graph
            .nbunch_iter(nodes)
            .cloned()
            .collect::<FxHashSet<_>>();

        trace!("Creating subgraph view induced by {} nodes", nodes.len());
        Self::new(graph).filter_node(move |n| nodes.contains(n))
    }

    /// View with exactly the given edges and their endpoints. An edge without
    /// a key selects all parallel edges between its endpoints. Edges that are
    /// not in the graph now are ignored.
    pub fn edge_induced<I, T>(graph: G, edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeSpec<G::NodeId>>,
    {
        let directed = graph.is_directed();
        let multi = graph.is_multigraph();

        let mut nodes = FxHashSet::default();
        let mut selected = EdgeSelection::default();

        for edge in edges {
            let EdgeSpec { u, v, key, .. } = edge.into();
            let key = key.filter(|_| multi);

            let exists = match key {
                Some(ref key) => graph.has_keyed_edge(&u, &v, key),
                None => graph.has_edge(&u, &v),
            };

            if !exists {
                trace!("Skipping missing edge {:?}-{:?} in edge subgraph", u, v);
                continue;
            }

            if !directed {
                selected.select(v.clone(), u.clone(), key.clone());
            }
            selected.select(u.clone(), v.clone(), key);

            nodes.insert(u);
            nodes.insert(v);
        }

        trace!("Creating edge subgraph view with {} nodes", nodes.len());
        Self::new(graph)
            .filter_node(move |n| nodes.contains(n))
            .filter_edge(move |u, v, key| selected.contains(u, v, key))
    }
}

// Selected edges by their endpoints. `None` stands for all parallel edges.
struct EdgeSelection<N> {
    inner: FxHashMap<N, FxHashMap<N, Option<FxHashSet<Key>>>>,
}

impl<N> Default for EdgeSelection<N> {
    fn default() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }
}

impl<N: NodeId> EdgeSelection<N> {
    fn select(&mut self, u: N, v: N, key: Option<Key>) {
        let to = self.inner.entry(u).or_default();
        match key {
            None => {
                to.insert(v, None);
            }
            Some(key) => {
                if let Some(keys) = to.entry(v).or_insert_with(|| Some(FxHashSet::default())) {
                    keys.insert(key);
                }
            }
        }
    }

    fn contains(&self, u: &N, v: &N, key: Option<&Key>) -> bool {
        match self.inner.get(u).and_then(|to| to.get(v)) {
            Some(None) => true,
            Some(Some(keys)) => key.map_or(false, |key| keys.contains(key)),
            None => false,
        }
    }
}

delegate_graph_base!(SubgraphView);
immutable_graph_mut!(SubgraphView);

impl<G> NodeSet for SubgraphView<G>
where
    G: NodeSet,
{
    type NodesIter<'a> = SubgraphIter<'a, G::NodesIter<'a>, (&'a G::NodeId, &'a AttrHandle)>
    where
        Self: 'a;

    fn graph_attrs(&self) -> &AttrHandle {
        self.graph.graph_attrs()
    }

    fn node_entries(&self) -> Self::NodesIter<'_> {
        SubgraphIter::<_, (&G::NodeId, &AttrHandle)>::new(
            self.graph.node_entries(),
            |(n, _)| self.check_node(n),
            true,
        )
    }

    fn node_entry(&self, n: &G::NodeId) -> Option<(&G::NodeId, &AttrHandle)> {
        if self.check_node(n) {
            self.graph.node_entry(n)
        } else {
            None
        }
    }
}

impl<G> Neighbors for SubgraphView<G>
where
    G: Neighbors + NodeSet,
{
    type NeighborsIter<'a> = SubgraphIter<'a, G::NeighborsIter<'a>, &'a G::NodeId>
    where
        Self: 'a;

    type ParallelIter<'a> = SubgraphIter<'a, G::ParallelIter<'a>, EdgeData<'a>>
    where
        Self: 'a;

    fn neighbors_directed(&self, n: &G::NodeId, dir: Direction) -> Option<Self::NeighborsIter<'_>> {
        let (node, _) = self.node_entry(n)?;
        let neighbors = self.graph.neighbors_directed(node, dir)?;

        Some(SubgraphIter::<_, &G::NodeId>::new(
            neighbors,
            move |&m| {
                self.check_node(m)
                    && self
                        .graph
                        .edges_between(node, m, dir)
                        .any(|edge| self.check_edge(node, m, dir, edge.key))
            },
            true,
        ))
    }

    fn edges_between(
        &self,
        u: &G::NodeId,
        v: &G::NodeId,
        dir: Direction,
    ) -> Self::ParallelIter<'_> {
        let inner = self.graph.edges_between(u, v, dir);

        match (self.node_entry(u), self.node_entry(v)) {
            (Some((u, _)), Some((v, _))) => SubgraphIter::<_, EdgeData<'_>>::new(
                inner,
                move |edge| self.check_edge(u, v, dir, edge.key),
                true,
            ),
            _ => SubgraphIter::new(inner, |_| false, false),
        }
    }
}

pub struct SubgraphIter<'a, I, T> {
    inner: I,
    #[allow(clippy::type_complexity)]
    filter: Box<dyn Fn(&T) -> bool + 'a>,
    non_empty: bool,
}

impl<'a, I, T> SubgraphIter<'a, I, T> {
    fn new<F>(inner: I, filter: F, non_empty: bool) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Self {
            inner,
            filter: Box::new(filter),
            non_empty,
        }
    }
}

impl<'a, I, T> Iterator for SubgraphIter<'a, I, T>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.non_empty {
            self.inner.find(&self.filter)
        } else {
            None
        }
    }
}
