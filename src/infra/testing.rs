use thiserror::Error;

use crate::{
    core::{marker::Direction, GraphRef},
    report::DegreeView,
};

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("nodes iterator count ({0}) is not equal to node count ({1})")]
    NodesNodeCountMismatch(usize, usize),
    #[error("node {0} is a neighbor but is not in the graph")]
    DanglingNeighbor(String),
    #[error("edge {u}-{v} is missing its mirrored entry")]
    MissingMirror { u: String, v: String },
    #[error("mirrored entries of edge {u}-{v} do not share attributes")]
    MirrorNotShared { u: String, v: String },
    #[error("sum of directed degrees ({0}) is not equal to sum of degrees ({1})")]
    DirectedUndirectedDegreeMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
}

/// Checks the structural invariants of a graph or a view.
///
/// Every edge must be reachable from both its endpoints through entries that
/// share the attribute handle, and the degrees must agree with the edge
/// count. An undirected view of a directed graph with reciprocal edges does
/// not pass, as both directions keep their own attributes there.
pub fn check_consistency<G: GraphRef>(graph: &G) -> Result<(), ConsistencyCheckError> {
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let node_count = graph.node_count();

    cmp(
        graph.node_entries().count(),
        node_count,
        ConsistencyCheckError::NodesNodeCountMismatch,
    )?;

    // The entry that mirrors the one found from `u` in direction `dir`.
    let mirror = |dir: Direction| {
        if graph.is_directed() {
            dir.opposite()
        } else {
            Direction::Outgoing
        }
    };

    let directions: &[Direction] = if graph.is_directed() {
        &[Direction::Outgoing, Direction::Incoming]
    } else {
        &[Direction::Outgoing]
    };

    for u in graph.nodes().iter() {
        for &dir in directions {
            for v in graph.neighbors_directed(u, dir).into_iter().flatten() {
                if !graph.contains_node(v) {
                    return Err(ConsistencyCheckError::DanglingNeighbor(format!("{v:?}")));
                }

                for edge in graph.edges_between(u, v, dir) {
                    let endpoints = || (format!("{u:?}"), format!("{v:?}"));

                    let mirrored = graph
                        .edges_between(v, u, mirror(dir))
                        .find(|other| other.key == edge.key);

                    match mirrored {
                        None => {
                            let (u, v) = endpoints();
                            return Err(ConsistencyCheckError::MissingMirror { u, v });
                        }
                        Some(other) if !other.attrs.ptr_eq(edge.attrs) => {
                            let (u, v) = endpoints();
                            return Err(ConsistencyCheckError::MirrorNotShared { u, v });
                        }
                        Some(_) => {}
                    }
                }
            }
        }
    }

    // Counted by iteration, independently of the stored degrees.
    let edge_count = graph.edges().iter().count();
    let deg_sum = graph.degree().total();

    if graph.is_directed() {
        let out_deg_sum = DegreeView::new(graph, Some(Direction::Outgoing)).total();
        let in_deg_sum = DegreeView::new(graph, Some(Direction::Incoming)).total();

        cmp(
            out_deg_sum + in_deg_sum,
            deg_sum,
            ConsistencyCheckError::DirectedUndirectedDegreeMismatch,
        )?;

        fn handshaking_lemma_directed(
            dir: Direction,
        ) -> impl FnOnce(usize, usize) -> ConsistencyCheckError {
            move |actual, expected| {
                ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, dir)
            }
        }

        // https://en.wikipedia.org/wiki/Handshaking_lemma
        cmp(
            in_deg_sum,
            edge_count,
            handshaking_lemma_directed(Direction::Incoming),
        )?;

        cmp(
            out_deg_sum,
            edge_count,
            handshaking_lemma_directed(Direction::Outgoing),
        )?;
    } else {
        cmp(
            deg_sum,
            2 * edge_count,
            ConsistencyCheckError::HandshakingLemma,
        )?;
    }

    Ok(())
}
