//! Free functions answering common questions about any graph or view.

use crate::{
    adapt::Frozen,
    core::{
        marker::{Direction, Undirected},
        GraphBase, GraphError, GraphRef,
    },
    report::EdgeRef,
};

/// Ratio of the number of edges to the number of edges of a complete graph
/// on the same nodes, `0` for graphs with fewer than two nodes.
///
/// Self-loops and parallel edges are counted, so the density of a multigraph
/// or a graph with self-loops can exceed `1`.
pub fn density<G: GraphRef>(graph: &G) -> f64 {
    let n = graph.number_of_nodes();
    if n < 2 {
        return 0.0;
    }

    let m = graph.number_of_edges() as f64;
    let complete = (n * (n - 1)) as f64;

    if graph.is_directed() {
        m / complete
    } else {
        2.0 * m / complete
    }
}

/// Whether the graph has no edges.
pub fn is_empty<G: GraphRef>(graph: &G) -> bool {
    graph.nodes().iter().all(|n| {
        graph
            .neighbors_directed(n, Direction::Outgoing)
            .map_or(true, |mut neighbors| neighbors.next().is_none())
    })
}

pub fn nodes_with_selfloops<G: GraphRef>(graph: &G) -> impl Iterator<Item = &G::NodeId> + '_ {
    graph
        .nodes()
        .iter()
        .filter(move |n| graph.contains_edge_between(n, n, Direction::Outgoing))
}

/// Self-loop edges, all parallel ones included.
pub fn selfloop_edges<G: GraphRef>(graph: &G) -> impl Iterator<Item = EdgeRef<'_, G::NodeId>> + '_ {
    nodes_with_selfloops(graph).flat_map(move |n| {
        graph
            .edges_between(n, n, Direction::Outgoing)
            .map(move |edge| EdgeRef {
                u: n,
                v: n,
                key: edge.key,
                attrs: edge.attrs,
            })
    })
}

pub fn number_of_selfloops<G: GraphRef>(graph: &G) -> usize {
    selfloop_edges(graph).count()
}

/// Neighbors of a node regardless of direction, predecessors followed by
/// successors in directed graphs. A node connected in both directions is
/// reported twice.
pub fn all_neighbors<'a, G: GraphRef>(
    graph: &'a G,
    n: &G::NodeId,
) -> Result<impl Iterator<Item = &'a G::NodeId> + 'a, GraphError> {
    let successors = graph
        .neighbors_directed(n, Direction::Outgoing)
        .ok_or_else(|| GraphError::node_not_found(n))?;

    let predecessors = if graph.is_directed() {
        graph.neighbors_directed(n, Direction::Incoming)
    } else {
        None
    };

    Ok(predecessors.into_iter().flatten().chain(successors))
}

/// Nodes adjacent to both `u` and `v`, other than `u` and `v` themselves.
pub fn common_neighbors<'a, G>(
    graph: &'a G,
    u: &G::NodeId,
    v: &G::NodeId,
) -> Result<impl Iterator<Item = &'a G::NodeId> + 'a, GraphError>
where
    G: GraphRef + GraphBase<EdgeType = Undirected>,
{
    let (u, _) = graph
        .node_entry(u)
        .ok_or_else(|| GraphError::node_not_found(u))?;
    let (v, _) = graph
        .node_entry(v)
        .ok_or_else(|| GraphError::node_not_found(v))?;

    Ok(graph.neighbors(u)?.filter(move |&w| {
        w != u && w != v && graph.contains_edge_between(v, w, Direction::Outgoing)
    }))
}

/// Wraps the graph so that its structure can no longer be changed.
pub fn freeze<G: GraphRef>(graph: G) -> Frozen<G> {
    Frozen::new(graph)
}
