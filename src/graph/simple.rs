use tracing::trace;

use crate::core::{
    marker::{EdgeType, Simple},
    Attrs, EdgeSpec, GraphError, NodeId,
};

use super::GraphCore;

impl<N: NodeId, Ty: EdgeType> GraphCore<N, Ty, Simple> {
    /// Adds an edge, adding missing endpoints. Adding an existing edge has no
    /// effect.
    pub fn add_edge(&mut self, u: N, v: N) {
        self.insert_edge(u, v, None, Attrs::new());
    }

    /// Adds an edge or merges `attrs` into the attributes of the existing one.
    pub fn add_edge_with(&mut self, u: N, v: N, attrs: Attrs) {
        self.insert_edge(u, v, None, attrs);
    }

    /// Fails on the first keyed edge. Edges before it stay added.
    pub fn add_edges_from<I, T>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeSpec<N>>,
    {
        for edge in edges {
            self.insert_spec(edge.into())?;
        }
        Ok(())
    }

    /// Adds `(u, v, weight)` triples, storing the weight under attribute
    /// `key`.
    pub fn add_weighted_edges_from<I>(&mut self, edges: I, key: &str)
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        for (u, v, weight) in edges {
            let mut attrs = Attrs::new();
            attrs.set(key, weight);
            self.insert_edge(u, v, None, attrs);
        }
    }

    pub fn remove_edge(&mut self, u: &N, v: &N) -> Result<(), GraphError> {
        self.remove_edge_inner(u, v, None).map(|_| ())
    }

    /// Removes the edges that are present, others are skipped.
    pub fn remove_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (u, v) in edges {
            if self.remove_edge_inner(&u, &v, None).is_err() {
                trace!("Skipping removal of missing edge {:?}-{:?}", u, v);
            }
        }
    }
}
