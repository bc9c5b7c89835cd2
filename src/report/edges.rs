use std::borrow::Borrow;
use std::ops::Index;

use rustc_hash::FxHashSet;

use crate::core::{marker::Direction, AttrHandle, AttrValue, EdgeData, GraphRef, Key};

/// A single edge as reported by [`EdgeView`].
#[derive(Debug)]
pub struct EdgeRef<'a, N> {
    pub u: &'a N,
    pub v: &'a N,
    /// Always `None` in simple graphs.
    pub key: Option<&'a Key>,
    pub attrs: &'a AttrHandle,
}

impl<N> Clone for EdgeRef<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for EdgeRef<'_, N> {}

impl<'a, N> EdgeRef<'a, N> {
    pub fn endpoints(&self) -> (&'a N, &'a N) {
        (self.u, self.v)
    }
}

/// Set-like view of the edges.
///
/// Undirected edges are reported once, oriented from the endpoint that comes
/// first in node order. Incoming edge views report `(u, v)` pairs grouped by
/// the target node `v`.
pub struct EdgeView<'a, G: GraphRef> {
    graph: &'a G,
    dir: Direction,
    nbunch: Option<Vec<&'a G::NodeId>>,
}

impl<'a, G: GraphRef> Clone for EdgeView<'a, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            dir: self.dir,
            nbunch: self.nbunch.clone(),
        }
    }
}

impl<'a, G: GraphRef> EdgeView<'a, G> {
    pub fn new(graph: &'a G, dir: Direction) -> Self {
        Self {
            graph,
            dir,
            nbunch: None,
        }
    }

    /// Restricts the view to edges incident to the given nodes (sources for
    /// outgoing views, targets for incoming views). Missing nodes are
    /// ignored.
    pub fn nbunch<I>(self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<G::NodeId>,
    {
        let mut seen = FxHashSet::default();
        let nbunch = self
            .graph
            .nbunch_iter(nodes)
            .filter(|n| seen.insert(*n))
            .collect();

        Self {
            nbunch: Some(nbunch),
            ..self
        }
    }

    pub fn iter(&self) -> EdgesIter<'a, G> {
        let nodes: Box<dyn Iterator<Item = &'a G::NodeId> + 'a> = match self.nbunch {
            Some(ref nbunch) => Box::new(nbunch.clone().into_iter()),
            None => Box::new(self.graph.nodes().iter()),
        };

        EdgesIter {
            graph: self.graph,
            dir: self.dir,
            nodes,
            current: None,
            parallel: None,
            seen: if self.graph.is_directed() {
                None
            } else {
                Some(FxHashSet::default())
            },
        }
    }

    pub fn len(&self) -> usize {
        match self.nbunch {
            Some(_) => self.iter().count(),
            None => self.graph.number_of_edges(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn in_bunch(&self, u: &G::NodeId, v: &G::NodeId) -> bool {
        match self.nbunch {
            None => true,
            Some(ref nbunch) => {
                let anchor = match self.dir {
                    Direction::Outgoing => u,
                    Direction::Incoming => v,
                };
                nbunch.iter().any(|n| *n == anchor)
                    || (!self.graph.is_directed() && nbunch.iter().any(|n| *n == v))
            }
        }
    }

    /// Whether there is an edge `u -> v` (or `{u, v}`) in the view.
    ///
    /// The pair always names the edge from `u` to `v`, in incoming views
    /// too, matching the pairs reported by iteration.
    pub fn contains(&self, u: &G::NodeId, v: &G::NodeId) -> bool {
        self.in_bunch(u, v) && self.graph.has_edge(u, v)
    }

    pub fn contains_keyed(&self, u: &G::NodeId, v: &G::NodeId, key: &Key) -> bool {
        self.in_bunch(u, v) && self.graph.has_keyed_edge(u, v, key)
    }

    /// Attributes of the edge `u -> v`, the first parallel edge in
    /// multigraphs. As with [`contains`](Self::contains), `(u, v)` is the
    /// edge from `u` to `v` regardless of the direction of the view.
    pub fn get(&self, u: &G::NodeId, v: &G::NodeId) -> Option<&'a AttrHandle> {
        if self.in_bunch(u, v) {
            self.graph.edge_data(u, v)
        } else {
            None
        }
    }

    pub fn get_keyed(&self, u: &G::NodeId, v: &G::NodeId, key: &Key) -> Option<&'a AttrHandle> {
        if self.in_bunch(u, v) {
            self.graph.edge_data_keyed(u, v, key)
        } else {
            None
        }
    }

    /// Edges together with the value of a single attribute, if set.
    pub fn data_key(
        &self,
        key: impl Into<String>,
    ) -> impl Iterator<Item = (EdgeRef<'a, G::NodeId>, Option<AttrValue>)> + 'a {
        let key = key.into();
        self.iter().map(move |edge| (edge, edge.attrs.get(&key)))
    }

    /// Edges together with the value of a single attribute, or `default` if
    /// the attribute is not set.
    pub fn data_or(
        &self,
        key: impl Into<String>,
        default: impl Into<AttrValue>,
    ) -> impl Iterator<Item = (EdgeRef<'a, G::NodeId>, AttrValue)> + 'a {
        let key = key.into();
        let default = default.into();
        self.iter().map(move |edge| {
            let value = edge.attrs.get(&key).unwrap_or_else(|| default.clone());
            (edge, value)
        })
    }
}

impl<'a, 'b, G: GraphRef> Index<(&'b G::NodeId, &'b G::NodeId)> for EdgeView<'a, G> {
    type Output = AttrHandle;

    /// # Panics
    ///
    /// Panics if there is no such edge in the view.
    fn index(&self, (u, v): (&'b G::NodeId, &'b G::NodeId)) -> &Self::Output {
        match self.get(u, v) {
            Some(attrs) => attrs,
            None => panic!("edge {u:?}-{v:?} is not in the graph"),
        }
    }
}

impl<'a, G: GraphRef> IntoIterator for EdgeView<'a, G> {
    type Item = EdgeRef<'a, G::NodeId>;
    type IntoIter = EdgesIter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, G: GraphRef> IntoIterator for &EdgeView<'a, G> {
    type Item = EdgeRef<'a, G::NodeId>;
    type IntoIter = EdgesIter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct EdgesIter<'a, G: GraphRef + 'a> {
    graph: &'a G,
    dir: Direction,
    nodes: Box<dyn Iterator<Item = &'a G::NodeId> + 'a>,
    current: Option<(&'a G::NodeId, G::NeighborsIter<'a>)>,
    parallel: Option<(&'a G::NodeId, &'a G::NodeId, G::ParallelIter<'a>)>,
    // Nodes whose edges were all reported, undirected graphs only.
    seen: Option<FxHashSet<&'a G::NodeId>>,
}

impl<'a, G: GraphRef + 'a> EdgesIter<'a, G> {
    fn make_ref(
        &self,
        node: &'a G::NodeId,
        neighbor: &'a G::NodeId,
        edge: EdgeData<'a>,
    ) -> EdgeRef<'a, G::NodeId> {
        let (u, v) = match self.dir {
            Direction::Incoming if self.graph.is_directed() => (neighbor, node),
            _ => (node, neighbor),
        };

        EdgeRef {
            u,
            v,
            key: edge.key,
            attrs: edge.attrs,
        }
    }
}

impl<'a, G: GraphRef + 'a> Iterator for EdgesIter<'a, G> {
    type Item = EdgeRef<'a, G::NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((node, neighbor, ref mut edges)) = self.parallel {
                if let Some(edge) = edges.next() {
                    return Some(self.make_ref(node, neighbor, edge));
                }
                self.parallel = None;
            }

            if let Some((node, ref mut neighbors)) = self.current {
                let seen = &self.seen;
                let next = neighbors.find(|neighbor| match seen {
                    Some(seen) => !seen.contains(neighbor),
                    None => true,
                });

                match next {
                    Some(neighbor) => {
                        let edges = self.graph.edges_between(node, neighbor, self.dir);
                        self.parallel = Some((node, neighbor, edges));
                    }
                    None => {
                        if let Some(ref mut seen) = self.seen {
                            seen.insert(node);
                        }
                        self.current = None;
                    }
                }
                continue;
            }

            let node = self.nodes.next()?;
            self.current = self
                .graph
                .neighbors_directed(node, self.dir)
                .map(|neighbors| (node, neighbors));
        }
    }
}
