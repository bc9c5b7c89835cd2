use std::borrow::Borrow;

use crate::core::{marker::Direction, AttrHandle, GraphError, GraphRef, Neighbors};

/// Degrees of nodes.
///
/// Without a direction, the degree of a node in a directed graph is the sum
/// of its in- and out-degree. A self-loop adds one to both in- and out-degree
/// and two to the degree in an undirected graph.
pub struct DegreeView<'a, G: GraphRef> {
    graph: &'a G,
    dir: Option<Direction>,
    nbunch: Option<Vec<&'a G::NodeId>>,
}

impl<'a, G: GraphRef> DegreeView<'a, G> {
    pub fn new(graph: &'a G, dir: Option<Direction>) -> Self {
        Self {
            graph,
            dir,
            nbunch: None,
        }
    }

    /// Restricts iteration to the given nodes. Missing nodes are ignored.
    pub fn nbunch<I>(self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<G::NodeId>,
    {
        let nbunch = self.graph.nbunch_iter(nodes).collect();
        Self {
            nbunch: Some(nbunch),
            ..self
        }
    }

    /// `None` if the node is not in the graph.
    pub fn get(&self, n: &G::NodeId) -> Option<usize> {
        self.graph
            .contains_node(n)
            .then(|| count(self.graph, n, self.dir))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a G::NodeId, usize)> + '_ {
        self.nodes().map(|n| (n, count(self.graph, n, self.dir)))
    }

    /// Sum of the degrees of all nodes in the view.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, d)| d).sum()
    }

    /// Degrees counted as sums of the weights stored under attribute `key`.
    pub fn weighted(self, key: impl Into<String>) -> WeightedDegreeView<'a, G> {
        WeightedDegreeView {
            inner: self,
            key: key.into(),
        }
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &'a G::NodeId> + '_> {
        match self.nbunch {
            Some(ref nbunch) => Box::new(nbunch.iter().copied()),
            None => Box::new(self.graph.nodes().iter()),
        }
    }
}

/// Weighted degrees of nodes. A missing weight attribute counts as `1`.
pub struct WeightedDegreeView<'a, G: GraphRef> {
    inner: DegreeView<'a, G>,
    key: String,
}

impl<'a, G: GraphRef> WeightedDegreeView<'a, G> {
    pub fn get(&self, n: &G::NodeId) -> Result<f64, GraphError> {
        if !self.inner.graph.contains_node(n) {
            return Err(GraphError::node_not_found(n));
        }
        weigh(self.inner.graph, n, self.inner.dir, &self.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a G::NodeId, Result<f64, GraphError>)> + '_ {
        self.inner
            .nodes()
            .map(|n| (n, weigh(self.inner.graph, n, self.inner.dir, &self.key)))
    }

    pub fn total(&self) -> Result<f64, GraphError> {
        self.iter().map(|(_, d)| d).sum()
    }
}

fn count<G: Neighbors>(graph: &G, n: &G::NodeId, dir: Option<Direction>) -> usize {
    directions(graph, dir)
        .iter()
        .filter_map(|&dir| graph.degree_directed(n, dir))
        .sum()
}

fn weigh<G: Neighbors>(
    graph: &G,
    n: &G::NodeId,
    dir: Option<Direction>,
    key: &str,
) -> Result<f64, GraphError> {
    fold(graph, n, dir, 0.0, |acc, attrs, mult| {
        Ok(acc + mult as f64 * attrs.weight(key)?)
    })
}

fn directions<G: Neighbors>(graph: &G, dir: Option<Direction>) -> &'static [Direction] {
    match dir {
        Some(Direction::Outgoing) => &[Direction::Outgoing],
        Some(Direction::Incoming) => &[Direction::Incoming],
        None if graph.is_directed() => &[Direction::Outgoing, Direction::Incoming],
        None => &[Direction::Outgoing],
    }
}

/// Folds over the edges incident to `n`. Each edge is passed together with
/// the number of its endpoints at `n`.
fn fold<G, T, E, F>(
    graph: &G,
    n: &G::NodeId,
    dir: Option<Direction>,
    init: T,
    mut f: F,
) -> Result<T, E>
where
    G: Neighbors,
    F: FnMut(T, &AttrHandle, usize) -> Result<T, E>,
{
    let mut acc = init;
    for &dir in directions(graph, dir) {
        let Some(neighbors) = graph.neighbors_directed(n, dir) else {
            continue;
        };

        for neighbor in neighbors {
            // An undirected self-loop is seen only once but has two endpoints.
            let mult = if !graph.is_directed() && neighbor == n { 2 } else { 1 };

            for edge in graph.edges_between(n, neighbor, dir) {
                acc = f(acc, edge.attrs, mult)?;
            }
        }
    }

    Ok(acc)
}
