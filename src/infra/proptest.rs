use std::fmt::Debug;

use proptest::{collection, option, strategy::Strategy};

use crate::{
    attrs,
    core::{
        marker::{EdgeType, Multiplicity},
        GraphMut,
    },
    graph::GraphCore,
};

/// Graphs on nodes `0..max_nodes` with up to `max_edges` edges. Some edges
/// carry an integer `"weight"` attribute, self-loops and repeated edges are
/// generated too.
pub fn graph_strategy<Ty, M>(
    max_nodes: u8,
    max_edges: usize,
) -> impl Strategy<Value = GraphCore<u8, Ty, M>>
where
    Ty: EdgeType + Debug,
    M: Multiplicity + Debug,
{
    let max_nodes = max_nodes.max(1);

    let nodes = collection::vec(0..max_nodes, 0..=max_nodes as usize);
    let edges = collection::vec(
        (0..max_nodes, 0..max_nodes, option::of(-8i64..8)),
        0..=max_edges,
    );

    (nodes, edges).prop_map(|(nodes, edges)| {
        let mut graph = GraphCore::<u8, Ty, M>::with_capacity(nodes.len());
        graph.add_nodes_from(nodes);

        for (u, v, weight) in edges {
            let attrs = match weight {
                Some(weight) => attrs! { "weight" => weight },
                None => attrs! {},
            };

            // Edges without a key are accepted by every variant.
            let _ = graph.try_add_edge((u, v, attrs));
        }

        graph
    })
}
