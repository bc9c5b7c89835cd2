use std::{fmt, iter};

use crate::common::ordered_map::{self, OrderedMap};

use super::{attr::AttrHandle, id::Key};

/// A single edge as seen from one adjacency entry.
#[derive(Debug, Clone, Copy)]
pub struct EdgeData<'a> {
    /// Always `None` in simple graphs.
    pub key: Option<&'a Key>,
    pub attrs: &'a AttrHandle,
}

/// Content of the adjacency entry for a pair of nodes.
///
/// `Clone` must be shallow: a cloned slot shares the attribute handles with
/// the original. That is what makes the mirrored entries of an edge refer to
/// the same attributes.
pub trait EdgeSlot: Clone + fmt::Debug + 'static {
    type Iter<'a>: Iterator<Item = EdgeData<'a>>
    where
        Self: 'a;

    fn single(key: Key, attrs: AttrHandle) -> Self;

    /// Number of parallel edges in the slot, never zero.
    fn len(&self) -> usize;

    fn entries(&self) -> Self::Iter<'_>;

    /// Gets the edge with given key, or the first one for `None`.
    fn get(&self, key: Option<&Key>) -> Option<&AttrHandle>;

    fn contains_key(&self, key: &Key) -> bool;

    fn insert(&mut self, key: Key, attrs: AttrHandle);

    fn remove(&mut self, key: &Key) -> Option<AttrHandle>;

    /// Key of the most recently inserted edge.
    fn last_key(&self) -> Option<&Key>;

    fn next_key(&self) -> Key;

    fn deep_clone(&self) -> Self;
}

// A simple graph stores the attribute handle directly.
impl EdgeSlot for AttrHandle {
    type Iter<'a> = iter::Once<EdgeData<'a>>;

    fn single(_key: Key, attrs: AttrHandle) -> Self {
        attrs
    }

    fn len(&self) -> usize {
        1
    }

    fn entries(&self) -> Self::Iter<'_> {
        iter::once(EdgeData {
            key: None,
            attrs: self,
        })
    }

    fn get(&self, key: Option<&Key>) -> Option<&AttrHandle> {
        match key {
            None => Some(self),
            Some(_) => None,
        }
    }

    fn contains_key(&self, _key: &Key) -> bool {
        false
    }

    fn insert(&mut self, _key: Key, attrs: AttrHandle) {
        *self = attrs;
    }

    fn remove(&mut self, _key: &Key) -> Option<AttrHandle> {
        None
    }

    fn last_key(&self) -> Option<&Key> {
        None
    }

    fn next_key(&self) -> Key {
        Key::Index(0)
    }

    fn deep_clone(&self) -> Self {
        AttrHandle::deep_clone(self)
    }
}

/// Parallel edges between a pair of nodes, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedEdges(OrderedMap<Key, AttrHandle>);

impl KeyedEdges {
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl EdgeSlot for KeyedEdges {
    type Iter<'a> = KeyedIter<'a>;

    fn single(key: Key, attrs: AttrHandle) -> Self {
        let mut edges = OrderedMap::new();
        edges.insert(key, attrs);
        Self(edges)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn entries(&self) -> Self::Iter<'_> {
        KeyedIter(self.0.iter())
    }

    fn get(&self, key: Option<&Key>) -> Option<&AttrHandle> {
        match key {
            Some(key) => self.0.get(key),
            None => self.0.first().map(|(_, attrs)| attrs),
        }
    }

    fn contains_key(&self, key: &Key) -> bool {
        self.0.contains_key(key)
    }

    fn insert(&mut self, key: Key, attrs: AttrHandle) {
        self.0.insert(key, attrs);
    }

    fn remove(&mut self, key: &Key) -> Option<AttrHandle> {
        self.0.remove(key)
    }

    fn last_key(&self) -> Option<&Key> {
        self.0.last().map(|(key, _)| key)
    }

    fn next_key(&self) -> Key {
        let mut index = self.0.len();
        while self.0.contains_key(&Key::Index(index)) {
            index += 1;
        }
        Key::Index(index)
    }

    fn deep_clone(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, attrs)| (key.clone(), attrs.deep_clone()))
                .collect(),
        )
    }
}

pub struct KeyedIter<'a>(ordered_map::Iter<'a, Key, AttrHandle>);

impl<'a> Iterator for KeyedIter<'a> {
    type Item = EdgeData<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, attrs)| EdgeData {
            key: Some(key),
            attrs,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
