use tracing::debug;

use crate::core::{
    marker::{Directed, EdgeType, Multiplicity, Undirected},
    EdgeSpec, GraphError, GraphRef, Key, NodeId, NodeSet,
};

use super::GraphCore;

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> GraphCore<N, Ty, M> {
    /// Creates a graph from edges, adding their endpoints as nodes.
    pub fn from_edges<I, T>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeSpec<N>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert_spec(edge.into())?;
        }
        Ok(graph)
    }

    /// Creates an independent graph of this variant from any graph or view.
    ///
    /// All attributes are deep-copied. When parallel edges collapse into one
    /// because the target is a simple graph, the first one seen wins. Edges
    /// `u -> v` and `v -> u` of a directed source meeting in an undirected
    /// target are merged as in [`to_undirected`](Self::to_undirected), the
    /// later one over the earlier. Edges of a simple source get key `0` in a
    /// multigraph target. An undirected source expands into both directions
    /// when the target is directed.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: GraphRef<NodeId = N>,
    {
        let mut new = Self::with_capacity(graph.node_count());
        new.graph_attrs().update(graph.graph_attrs().to_attrs());

        for (n, attrs) in graph.node_entries() {
            new.add_node_with(n.clone(), attrs.to_attrs());
        }

        let expand = Ty::is_directed() && !<G::EdgeType as EdgeType>::is_directed();

        let mut previous = None;
        for edge in graph.edges().iter() {
            // Parallel edges of a pair are reported in a row.
            if !M::is_multigraph() && previous == Some((edge.u, edge.v)) {
                continue;
            }
            previous = Some((edge.u, edge.v));

            let key = M::is_multigraph().then(|| edge.key.cloned().unwrap_or(Key::Index(0)));

            let mut pairs = vec![(edge.u, edge.v)];
            if expand && edge.u != edge.v {
                pairs.push((edge.v, edge.u));
            }

            for (u, v) in pairs {
                new.insert_edge(u.clone(), v.clone(), key.clone(), edge.attrs.to_attrs());
            }
        }

        debug!(
            "Converted {} nodes and {} edges into a new {}",
            new.number_of_nodes(),
            new.number_of_edges(),
            Self::variant_name()
        );

        new
    }

    /// Independent deep copy, including all attributes.
    pub fn copy(&self) -> Self {
        Self::from_graph(self)
    }

    /// Directed copy. Each undirected edge becomes two directed edges with
    /// independent attribute copies.
    pub fn to_directed(&self) -> GraphCore<N, Directed, M> {
        GraphCore::from_graph(self)
    }

    /// Undirected copy. If both `u -> v` and `v -> u` exist (with the same key
    /// in multigraphs), attributes of the one seen later are merged over the
    /// earlier one.
    pub fn to_undirected(&self) -> GraphCore<N, Undirected, M> {
        let mut new = GraphCore::with_capacity(self.node_count());
        new.graph_attrs().update(self.graph_attrs().to_attrs());

        for (n, attrs) in self.node_entries() {
            new.add_node_with(n.clone(), attrs.to_attrs());
        }

        for edge in self.edges().iter() {
            new.insert_edge(
                edge.u.clone(),
                edge.v.clone(),
                edge.key.cloned(),
                edge.attrs.to_attrs(),
            );
        }

        debug!(
            "Converted {} into an undirected graph with {} edges",
            Self::variant_name(),
            new.number_of_edges()
        );

        new
    }
}

impl<N: NodeId, M: Multiplicity> GraphCore<N, Directed, M> {
    /// Undirected copy keeping only edges present in both directions.
    pub fn to_undirected_reciprocal(&self) -> GraphCore<N, Undirected, M> {
        let mut new = GraphCore::with_capacity(self.node_count());
        new.graph_attrs().update(self.graph_attrs().to_attrs());

        for (n, attrs) in self.node_entries() {
            new.add_node_with(n.clone(), attrs.to_attrs());
        }

        for edge in self.edges().iter() {
            if self.has_predecessor(edge.u, edge.v) {
                new.insert_edge(
                    edge.u.clone(),
                    edge.v.clone(),
                    edge.key.cloned(),
                    edge.attrs.to_attrs(),
                );
            }
        }

        debug!(
            "Kept {} reciprocal edges out of {}",
            new.number_of_edges(),
            self.number_of_edges()
        );

        new
    }

    /// Deep copy with all edges reversed.
    pub fn reverse(&self) -> Self {
        let mut new = Self::with_capacity(self.node_count());
        new.graph_attrs().update(self.graph_attrs().to_attrs());

        for (n, attrs) in self.node_entries() {
            new.add_node_with(n.clone(), attrs.to_attrs());
        }

        for edge in self.edges().iter() {
            new.insert_edge(
                edge.v.clone(),
                edge.u.clone(),
                edge.key.cloned(),
                edge.attrs.to_attrs(),
            );
        }

        debug!("Reversed {} edges", new.number_of_edges());

        new
    }
}

impl<N: NodeId, Ty: EdgeType, M: Multiplicity> Clone for GraphCore<N, Ty, M> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::core::AttrValue;
    use crate::graph::{DiGraph, Graph, MultiDiGraph, MultiGraph};
    use crate::infra::testing::check_consistency;

    fn sorted_edges<G: GraphRef<NodeId = u32>>(graph: &G) -> Vec<(u32, u32)> {
        let mut edges = graph
            .edges()
            .iter()
            .map(|edge| {
                if graph.is_directed() {
                    (*edge.u, *edge.v)
                } else {
                    (*edge.u.min(edge.v), *edge.u.max(edge.v))
                }
            })
            .collect::<Vec<_>>();
        edges.sort();
        edges
    }

    #[test]
    fn copy_is_independent() {
        let mut graph = Graph::with_attrs(attrs! { "name" => "g" });
        graph.add_edge_with(1, 2, attrs! { "w" => 1 });

        let copy = graph.copy();
        copy.edge_data(&1, &2).unwrap().set("w", 2);
        copy.graph_attrs().set("name", "h");

        assert_eq!(graph.edge_data(&1, &2).unwrap().get("w"), Some(AttrValue::Int(1)));
        assert_eq!(graph.name(), "g");

        let mirror_a = copy.edge_data(&1, &2).unwrap();
        let mirror_b = copy.edge_data(&2, &1).unwrap();
        assert!(mirror_a.ptr_eq(mirror_b));
        check_consistency(&copy).unwrap();
    }

    #[test]
    fn to_directed_breaks_sharing() {
        let mut graph = Graph::new();
        graph.add_edge_with(1, 2, attrs! { "w" => 1 });
        graph.add_edge(3, 3);

        let directed = graph.to_directed();
        assert_eq!(sorted_edges(&directed), vec![(1, 2), (2, 1), (3, 3)]);

        let forward = directed.edge_data(&1, &2).unwrap();
        let backward = directed.edge_data(&2, &1).unwrap();
        assert!(!forward.ptr_eq(backward));
        assert_eq!(forward, backward);
        check_consistency(&directed).unwrap();
    }

    #[test]
    fn directed_round_trip() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1), (4, 4)]).unwrap();
        let back = graph.to_directed().to_undirected();

        assert_eq!(sorted_edges(&back), sorted_edges(&graph));
        assert!(back.nodes().iter().eq(graph.nodes().iter()));
    }

    #[test]
    fn to_undirected_later_wins() {
        let mut graph = DiGraph::new();
        graph.add_edge_with(1, 2, attrs! { "w" => 1, "c" => "red" });
        graph.add_edge_with(2, 1, attrs! { "w" => 2 });

        let undirected = graph.to_undirected();
        assert_eq!(undirected.number_of_edges(), 1);
        assert_eq!(
            undirected.edge_data(&1, &2).unwrap().to_attrs(),
            attrs! { "w" => 2, "c" => "red" }
        );
    }

    #[test]
    fn reciprocal() {
        let graph = DiGraph::from_edges([(1, 2), (2, 1), (2, 3)]).unwrap();
        let undirected = graph.to_undirected_reciprocal();

        assert_eq!(sorted_edges(&undirected), vec![(1, 2)]);
        assert!(undirected.has_node(&3));
    }

    #[test]
    fn reverse_copy() {
        let mut graph = DiGraph::new();
        graph.add_edge_with(1, 2, attrs! { "w" => 1 });
        graph.add_edge(2, 3);

        let reversed = graph.reverse();
        assert_eq!(sorted_edges(&reversed), vec![(2, 1), (3, 2)]);

        reversed.edge_data(&2, &1).unwrap().set("w", 5);
        assert_eq!(graph.edge_data(&1, &2).unwrap().get("w"), Some(AttrValue::Int(1)));
    }

    #[test]
    fn multi_to_simple_keeps_first() {
        let mut multi = MultiGraph::new();
        multi.add_edge_with(1, 2, attrs! { "order" => 1 });
        multi.add_edge_with(1, 2, attrs! { "order" => 2 });

        let simple = Graph::from_graph(&multi);
        assert_eq!(simple.number_of_edges(), 1);
        assert_eq!(
            simple.edge_data(&1, &2).unwrap().get("order"),
            Some(AttrValue::Int(1))
        );
    }

    #[test]
    fn reciprocal_edges_merge_like_to_undirected() {
        let mut graph = DiGraph::new();
        graph.add_edge_with(1, 2, attrs! { "w" => 1, "c" => "red" });
        graph.add_edge_with(2, 1, attrs! { "w" => 2 });

        let converted = Graph::from_graph(&graph);
        assert_eq!(converted.number_of_edges(), 1);
        assert_eq!(
            converted.edge_data(&1, &2).unwrap().to_attrs(),
            graph.to_undirected().edge_data(&1, &2).unwrap().to_attrs()
        );
        assert_eq!(
            converted.edge_data(&1, &2).unwrap().get("w"),
            Some(AttrValue::Int(2))
        );
    }

    #[test]
    fn directed_parallel_edges_keep_first() {
        let mut multi = MultiDiGraph::new();
        multi.add_edge_with(1, 2, attrs! { "w" => 1 });
        multi.add_edge_with(1, 2, attrs! { "w" => 2 });
        multi.add_edge_with(2, 1, attrs! { "w" => 3 });

        let simple = DiGraph::from_graph(&multi);
        assert_eq!(simple.number_of_edges(), 2);
        assert_eq!(simple.edge_data(&1, &2).unwrap().get("w"), Some(AttrValue::Int(1)));
        assert_eq!(simple.edge_data(&2, &1).unwrap().get("w"), Some(AttrValue::Int(3)));
        check_consistency(&simple).unwrap();
    }

    #[test]
    fn simple_to_multi_assigns_zero() {
        let graph = DiGraph::from_edges([(1, 2), (2, 3)]).unwrap();
        let multi = MultiDiGraph::from_graph(&graph);

        assert!(multi.has_keyed_edge(&1, &2, &Key::Index(0)));
        assert!(multi.has_keyed_edge(&2, &3, &Key::Index(0)));
        assert_eq!(multi.number_of_edges(), 2);
    }

    #[test]
    fn from_view() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 4)]).unwrap();
        let sub = Graph::from_graph(&graph.subgraph([2, 3, 4]));

        assert_eq!(sub.number_of_nodes(), 3);
        assert_eq!(sorted_edges(&sub), vec![(2, 3), (3, 4)]);
    }

    #[test]
    fn display() {
        let mut graph = MultiDiGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        assert_eq!(graph.to_string(), "MultiDiGraph with 2 nodes and 2 edges");

        graph.set_name("web");
        assert_eq!(
            graph.to_string(),
            "MultiDiGraph named 'web' with 2 nodes and 2 edges"
        );
    }
}
