use std::borrow::Borrow;
use std::ops::Index;

use crate::core::{AttrHandle, AttrValue, GraphError, GraphRef};

/// Set-like view of the nodes, with mapping-like access to their attributes.
pub struct NodeView<'a, G> {
    graph: &'a G,
}

impl<'a, G: GraphRef> NodeView<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, n: &G::NodeId) -> bool {
        self.graph.contains_node(n)
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> NodeIds<'a, G> {
        NodeIds {
            inner: self.graph.node_entries(),
        }
    }

    pub fn get(&self, n: &G::NodeId) -> Option<&'a AttrHandle> {
        self.graph.node_attrs(n)
    }

    pub fn attrs(&self, n: &G::NodeId) -> Result<&'a AttrHandle, GraphError> {
        self.get(n).ok_or_else(|| GraphError::node_not_found(n))
    }

    /// Nodes together with their attributes.
    pub fn data(&self) -> G::NodesIter<'a> {
        self.graph.node_entries()
    }

    /// Nodes together with the value of a single attribute, if set.
    pub fn data_key(
        &self,
        key: impl Into<String>,
    ) -> impl Iterator<Item = (&'a G::NodeId, Option<AttrValue>)> + 'a {
        let key = key.into();
        self.graph
            .node_entries()
            .map(move |(n, attrs)| (n, attrs.get(&key)))
    }

    /// Nodes together with the value of a single attribute, or `default` if
    /// the attribute is not set.
    pub fn data_or(
        &self,
        key: impl Into<String>,
        default: impl Into<AttrValue>,
    ) -> impl Iterator<Item = (&'a G::NodeId, AttrValue)> + 'a {
        let key = key.into();
        let default = default.into();
        self.graph
            .node_entries()
            .map(move |(n, attrs)| (n, attrs.get(&key).unwrap_or_else(|| default.clone())))
    }
}

impl<'a, G: GraphRef> Index<&G::NodeId> for NodeView<'a, G> {
    type Output = AttrHandle;

    /// # Panics
    ///
    /// Panics if the node is not in the graph.
    fn index(&self, n: &G::NodeId) -> &Self::Output {
        match self.get(n) {
            Some(attrs) => attrs,
            None => panic!("node {n:?} is not in the graph"),
        }
    }
}

impl<'a, G: GraphRef> IntoIterator for NodeView<'a, G> {
    type Item = &'a G::NodeId;
    type IntoIter = NodeIds<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, G: GraphRef> IntoIterator for &NodeView<'a, G> {
    type Item = &'a G::NodeId;
    type IntoIter = NodeIds<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct NodeIds<'a, G: GraphRef + 'a> {
    inner: G::NodesIter<'a>,
}

impl<'a, G: GraphRef + 'a> Iterator for NodeIds<'a, G> {
    type Item = &'a G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, _)| n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Nodes of a bunch that are present in the graph, as stored in the graph.
pub struct NbunchIter<'a, G, I> {
    graph: &'a G,
    inner: I,
}

impl<'a, G, I> NbunchIter<'a, G, I> {
    pub fn new(graph: &'a G, inner: I) -> Self {
        Self { graph, inner }
    }
}

impl<'a, G, I> Iterator for NbunchIter<'a, G, I>
where
    G: GraphRef,
    I: Iterator,
    I::Item: Borrow<G::NodeId>,
{
    type Item = &'a G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.inner
            .find_map(|n| graph.node_entry(n.borrow()).map(|(n, _)| n))
    }
}

#[cfg(test)]
mod tests {
    use crate::attrs;
    use crate::core::{AttrValue, GraphError, GraphRef};
    use crate::graph::{DiGraph, Graph};

    fn colored() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.add_node_with("a", attrs! { "color" => "red" });
        graph.add_node("b");
        graph.add_node_with("c", attrs! { "color" => "blue" });
        graph
    }

    #[test]
    fn len_and_contains() {
        let graph = colored();
        let nodes = graph.nodes();

        assert_eq!(nodes.len(), 3);
        assert!(nodes.contains(&"b"));
        assert!(!nodes.contains(&"x"));
    }

    #[test]
    fn data_key_and_default() {
        let graph = colored();

        let colors = graph.nodes().data_key("color").collect::<Vec<_>>();
        assert_eq!(
            colors,
            vec![
                (&"a", Some(AttrValue::from("red"))),
                (&"b", None),
                (&"c", Some(AttrValue::from("blue"))),
            ]
        );

        let colors = graph
            .nodes()
            .data_or("color", "black")
            .map(|(_, color)| color)
            .collect::<Vec<_>>();
        assert_eq!(
            colors,
            vec![
                AttrValue::from("red"),
                AttrValue::from("black"),
                AttrValue::from("blue")
            ]
        );
    }

    #[test]
    fn attribute_access() {
        let graph = colored();

        graph.nodes()[&"b"].set("color", "green");
        assert_eq!(graph.nodes()[&"b"].get("color"), Some(AttrValue::from("green")));
        assert!(matches!(graph.nodes().attrs(&"x"), Err(GraphError::NodeNotFound(_))));
    }

    #[test]
    #[should_panic]
    fn index_missing_node() {
        let graph = colored();
        let _ = &graph.nodes()[&"x"];
    }

    #[test]
    fn view_is_not_a_snapshot() {
        let mut graph = DiGraph::new();
        graph.add_node(1);

        let before = graph.nodes().len();
        graph.add_edge(2, 3);
        assert_eq!(before, 1);
        assert_eq!(graph.nodes().len(), 3);
    }

    #[test]
    fn nbunch_keeps_order_and_skips_missing() {
        let graph = colored();
        let bunch = graph
            .nbunch_iter(["c", "x", "a"])
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(bunch, vec!["c", "a"]);
    }
}
