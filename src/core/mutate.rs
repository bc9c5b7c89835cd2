use super::{attr::Attrs, error::GraphError, graph::GraphRef, id::Key};

/// Structural mutation shared by owned graphs and views. Views refuse every
/// operation with [`GraphError::ViewIsImmutable`].
pub trait GraphMut: GraphRef {
    fn try_add_node(&mut self, n: Self::NodeId, attrs: Attrs) -> Result<(), GraphError>;

    fn try_remove_node(&mut self, n: &Self::NodeId) -> Result<(), GraphError>;

    /// Returns the key of the edge in multigraphs and `None` in simple graphs.
    fn try_add_edge<T>(&mut self, edge: T) -> Result<Option<Key>, GraphError>
    where
        T: Into<EdgeSpec<Self::NodeId>>;

    fn try_remove_edge(
        &mut self,
        u: &Self::NodeId,
        v: &Self::NodeId,
        key: Option<&Key>,
    ) -> Result<(), GraphError>;

    fn try_clear(&mut self) -> Result<(), GraphError>;
}

impl<G> GraphMut for &mut G
where
    G: GraphMut + ?Sized,
{
    fn try_add_node(&mut self, n: Self::NodeId, attrs: Attrs) -> Result<(), GraphError> {
        (**self).try_add_node(n, attrs)
    }

    fn try_remove_node(&mut self, n: &Self::NodeId) -> Result<(), GraphError> {
        (**self).try_remove_node(n)
    }

    fn try_add_edge<T>(&mut self, edge: T) -> Result<Option<Key>, GraphError>
    where
        T: Into<EdgeSpec<Self::NodeId>>,
    {
        (**self).try_add_edge(edge)
    }

    fn try_remove_edge(
        &mut self,
        u: &Self::NodeId,
        v: &Self::NodeId,
        key: Option<&Key>,
    ) -> Result<(), GraphError> {
        (**self).try_remove_edge(u, v, key)
    }

    fn try_clear(&mut self) -> Result<(), GraphError> {
        (**self).try_clear()
    }
}

/// Edge input for bulk operations.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec<N> {
    pub u: N,
    pub v: N,
    pub key: Option<Key>,
    pub attrs: Attrs,
}

impl<N> EdgeSpec<N> {
    pub fn new(u: N, v: N) -> Self {
        Self {
            u,
            v,
            key: None,
            attrs: Attrs::new(),
        }
    }

    pub fn with_key(self, key: impl Into<Key>) -> Self {
        Self {
            key: Some(key.into()),
            ..self
        }
    }

    pub fn with_attrs(self, attrs: Attrs) -> Self {
        Self { attrs, ..self }
    }
}

impl<N> From<(N, N)> for EdgeSpec<N> {
    fn from((u, v): (N, N)) -> Self {
        EdgeSpec::new(u, v)
    }
}

impl<N> From<(N, N, Attrs)> for EdgeSpec<N> {
    fn from((u, v, attrs): (N, N, Attrs)) -> Self {
        EdgeSpec::new(u, v).with_attrs(attrs)
    }
}

impl<N> From<(N, N, Key)> for EdgeSpec<N> {
    fn from((u, v, key): (N, N, Key)) -> Self {
        EdgeSpec::new(u, v).with_key(key)
    }
}

impl<N> From<(N, N, Key, Attrs)> for EdgeSpec<N> {
    fn from((u, v, key, attrs): (N, N, Key, Attrs)) -> Self {
        EdgeSpec::new(u, v).with_key(key).with_attrs(attrs)
    }
}
