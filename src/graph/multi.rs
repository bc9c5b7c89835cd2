use tracing::trace;

use crate::core::{
    marker::{Direction, EdgeType, Multi},
    Attrs, EdgeSlot, EdgeSpec, GraphError, Key, NodeId,
};

use super::GraphCore;

impl<N: NodeId, Ty: EdgeType> GraphCore<N, Ty, Multi> {
    /// Adds a new parallel edge with the next free key and returns the key.
    pub fn add_edge(&mut self, u: N, v: N) -> Key {
        self.insert_edge(u, v, None, Attrs::new())
    }

    pub fn add_edge_with(&mut self, u: N, v: N, attrs: Attrs) -> Key {
        self.insert_edge(u, v, None, attrs)
    }

    /// Adds an edge with given key. If such edge already exists, `attrs` are
    /// merged into its attributes.
    pub fn add_keyed_edge(&mut self, u: N, v: N, key: impl Into<Key>, attrs: Attrs) -> Key {
        self.insert_edge(u, v, Some(key.into()), attrs)
    }

    /// The key a new edge between `u` and `v` would get.
    pub fn new_edge_key(&self, u: &N, v: &N) -> Key {
        self.store(Direction::Outgoing)
            .slot(u, v)
            .map(EdgeSlot::next_key)
            .unwrap_or(Key::Index(0))
    }

    /// Returns the keys of the added edges, in order.
    pub fn add_edges_from<I, T>(&mut self, edges: I) -> Vec<Key>
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeSpec<N>>,
    {
        let edges = edges.into_iter();
        let mut keys = Vec::with_capacity(edges.size_hint().0);
        for edge in edges {
            let spec = edge.into();
            keys.push(self.insert_edge(spec.u, spec.v, spec.key, spec.attrs));
        }
        keys
    }

    pub fn add_weighted_edges_from<I>(&mut self, edges: I, key: &str) -> Vec<Key>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        edges
            .into_iter()
            .map(|(u, v, weight)| {
                let mut attrs = Attrs::new();
                attrs.set(key, weight);
                self.insert_edge(u, v, None, attrs)
            })
            .collect()
    }

    /// Removes the edge with given key, or the most recently added edge
    /// between `u` and `v` if no key is given.
    pub fn remove_edge(&mut self, u: &N, v: &N, key: Option<&Key>) -> Result<(), GraphError> {
        self.remove_edge_inner(u, v, key).map(|_| ())
    }

    /// Removes the edges that are present, others are skipped. Attributes of
    /// the specs are ignored.
    pub fn remove_edges_from<I, T>(&mut self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeSpec<N>>,
    {
        for edge in edges {
            let spec = edge.into();
            if self
                .remove_edge_inner(&spec.u, &spec.v, spec.key.as_ref())
                .is_err()
            {
                trace!(
                    "Skipping removal of missing edge {:?}-{:?} (key {:?})",
                    spec.u,
                    spec.v,
                    spec.key
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::attrs;
    use crate::core::{AttrValue, GraphRef};
    use crate::graph::{MultiDiGraph, MultiGraph};
    use crate::infra::testing::check_consistency;

    #[test]
    fn parallel_edges_get_consecutive_keys() {
        let mut graph = MultiGraph::new();

        assert_eq!(graph.add_edge("a", "b"), Key::Index(0));
        assert_eq!(graph.add_edge("b", "a"), Key::Index(1));
        assert_eq!(graph.new_edge_key(&"a", &"b"), Key::Index(2));
        assert_eq!(graph.new_edge_key(&"a", &"c"), Key::Index(0));

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.number_of_edges_between(&"b", &"a"), 2);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn keyed_edge_merges() {
        let mut graph = MultiGraph::new();
        graph.add_keyed_edge(1, 2, "x", attrs! { "w" => 1 });
        graph.add_keyed_edge(2, 1, "x", attrs! { "c" => "red" });

        assert_eq!(graph.number_of_edges(), 1);
        let attrs = graph.edge_data_keyed(&1, &2, &Key::from("x")).unwrap();
        assert_eq!(attrs.to_attrs(), attrs! { "w" => 1, "c" => "red" });
    }

    #[test]
    fn parallel_edges_share_attributes_with_mirror() {
        let mut graph = MultiGraph::new();
        graph.add_edge(1, 2);
        let key = graph.add_edge(1, 2);

        graph
            .edge_data_keyed(&2, &1, &key)
            .unwrap()
            .set("label", "second");

        assert_eq!(
            graph.edge_data_keyed(&1, &2, &key).unwrap().get("label"),
            Some(AttrValue::from("second"))
        );
        assert_eq!(graph.edge_data(&1, &2).unwrap().get("label"), None);
    }

    #[test]
    fn remove_without_key_removes_last() {
        let mut graph = MultiDiGraph::new();
        graph.add_keyed_edge(1, 2, 5usize, Attrs::new());
        graph.add_keyed_edge(1, 2, 3usize, Attrs::new());

        graph.remove_edge(&1, &2, None).unwrap();
        assert!(graph.has_keyed_edge(&1, &2, &Key::Index(5)));
        assert!(!graph.has_keyed_edge(&1, &2, &Key::Index(3)));

        graph.remove_edge(&1, &2, None).unwrap();
        assert!(!graph.has_edge(&1, &2));
        assert!(!graph.has_predecessor(&2, &1));

        assert_matches!(
            graph.remove_edge(&1, &2, None),
            Err(GraphError::EdgeNotFound { .. })
        );
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_missing_key() {
        let mut graph = MultiGraph::new();
        graph.add_edge(1, 2);

        assert_matches!(
            graph.remove_edge(&1, &2, Some(&Key::Index(4))),
            Err(GraphError::EdgeNotFound { key: Some(Key::Index(4)), .. })
        );
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn remove_keyed_keeps_mirror_consistent() {
        let mut graph = MultiGraph::new();
        graph.add_edges_from([(1, 2), (1, 2), (2, 1)]);

        graph.remove_edge(&2, &1, Some(&Key::Index(1))).unwrap();

        let keys = graph
            .edges()
            .iter()
            .map(|edge| edge.key.cloned())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![Some(Key::Index(0)), Some(Key::Index(2))]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_edges_from_skips_missing() {
        let mut graph = MultiGraph::new();
        graph.add_edges_from([(1, 2), (1, 2), (2, 3)]);

        graph.remove_edges_from([
            EdgeSpec::new(1, 2).with_key(Key::Index(0)),
            EdgeSpec::new(1, 2).with_key(Key::Index(0)),
            EdgeSpec::new(3, 4),
            EdgeSpec::new(3, 2),
        ]);

        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_keyed_edge(&1, &2, &Key::Index(1)));
    }

    #[test]
    fn self_loop_in_multigraph() {
        let mut graph = MultiGraph::new();
        graph.add_edge(1, 1);
        graph.add_edge(1, 1);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree().get(&1), Some(4));

        graph.remove_edge(&1, &1, None).unwrap();
        assert_eq!(graph.degree().get(&1), Some(2));
        check_consistency(&graph).unwrap();
    }
}
