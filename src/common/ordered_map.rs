use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use rustc_hash::FxHashMap;

// Compaction is not worth it for a handful of holes.
const MIN_HOLES: usize = 16;

/// Insertion-ordered map with average constant-time insertion, lookup and
/// removal.
///
/// Removing an entry leaves a hole in the entry sequence, so the remaining
/// entries keep their relative order. Holes at either end are trimmed right
/// away. Once the holes outnumber the live entries, the sequence is
/// compacted. That keeps iteration linear in the number of live entries and
/// makes removal amortized _O(1)_. A key inserted again after removal goes to
/// the end.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    index: FxHashMap<K, usize>,
    entries: Vec<Option<(K, V)>>,
    // Entries before `head` are all holes.
    head: usize,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            entries: Vec::new(),
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries[self.head..].iter(),
            remaining: self.len(),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries[self.head..]
            .iter_mut()
            .flatten()
            .map(|(_, value)| value)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        // Trailing holes are trimmed on removal.
        self.entries
            .last()?
            .as_ref()
            .map(|(key, value)| (key, value))
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.head = 0;
    }

    fn holes(&self) -> usize {
        self.entries.len() - self.index.len()
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: Vec::with_capacity(capacity),
            head: 0,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// The stored key equal to `key` together with its value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let &i = self.index.get(key)?;
        self.entries[i].as_ref().map(|(key, value)| (key, value))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let &i = self.index.get(key)?;
        self.entries[i].as_mut().map(|(_, value)| value)
    }

    /// Inserts the entry at the end, or replaces the value of an existing key
    /// in place. Returns the replaced value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&i) => self.entries[i]
                .as_mut()
                .map(|(_, old)| mem::replace(old, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Some((key, value)));
                None
            }
        }
    }

    /// Value of the key, inserting the one returned by `f` at the end if the
    /// key is not present.
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push(None);
                i
            }
        };

        let (_, value) = self.entries[i].get_or_insert_with(|| (key, f()));
        value
    }

    /// Removes the entry, keeping the order of the others.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.index.remove(key)?;
        let (_, value) = self.entries[i].take()?;
        self.trim();

        if self.holes() > self.len().max(MIN_HOLES) {
            self.compact();
        }

        Some(value)
    }

    fn trim(&mut self) {
        if self.index.is_empty() {
            self.entries.clear();
            self.head = 0;
            return;
        }

        while let Some(None) = self.entries.last() {
            self.entries.pop();
        }

        while let Some(None) = self.entries.get(self.head) {
            self.head += 1;
        }
    }

    fn compact(&mut self) {
        self.entries.retain(Option::is_some);
        self.head = 0;

        for (i, (key, _)) in self.entries.iter().flatten().enumerate() {
            if let Some(position) = self.index.get_mut(key) {
                *position = i;
            }
        }
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Option<(K, V)>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.inner.by_ref() {
            if let Some((key, value)) = entry {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn keys(map: &OrderedMap<u32, u32>) -> Vec<u32> {
        map.keys().copied().collect()
    }

    #[test]
    fn insertion_order() {
        let map = [(3, 0), (1, 0), (2, 0)].into_iter().collect::<OrderedMap<_, _>>();
        assert_eq!(keys(&map), vec![3, 1, 2]);
        assert_eq!(map.first(), Some((&3, &0)));
        assert_eq!(map.last(), Some((&2, &0)));
    }

    #[test]
    fn replace_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert(1, 10);
        map.insert(2, 20);

        assert_eq!(map.insert(1, 11), Some(10));
        assert_eq!(keys(&map), vec![1, 2]);
        assert_eq!(map.get(&1), Some(&11));
    }

    #[test]
    fn remove_keeps_order() {
        let mut map = (0..5).map(|i| (i, i)).collect::<OrderedMap<_, _>>();

        assert_eq!(map.remove(&2), Some(2));
        assert_eq!(map.remove(&2), None);
        assert_eq!(keys(&map), vec![0, 1, 3, 4]);
        assert_eq!(map.len(), 4);
        assert_eq!(map.iter().len(), 4);
    }

    #[test]
    fn ends_are_trimmed() {
        let mut map = (0..4).map(|i| (i, i)).collect::<OrderedMap<_, _>>();

        map.remove(&3);
        assert_eq!(map.last(), Some((&2, &2)));

        map.remove(&0);
        assert_eq!(map.first(), Some((&1, &1)));

        map.remove(&1);
        map.remove(&2);
        assert!(map.is_empty());
        assert_eq!(map.first(), None);
        assert_eq!(map.last(), None);
    }

    #[test]
    fn reinsert_goes_to_end() {
        let mut map = (0..3).map(|i| (i, i)).collect::<OrderedMap<_, _>>();

        map.remove(&1);
        map.insert(1, 7);
        assert_eq!(keys(&map), vec![0, 2, 1]);

        *map.get_or_insert_with(5, || 0) += 1;
        *map.get_or_insert_with(0, || 100) += 1;
        assert_eq!(keys(&map), vec![0, 2, 1, 5]);
        assert_eq!(map.get(&0), Some(&1));
        assert_eq!(map.get(&5), Some(&1));
    }

    #[test]
    fn compaction_keeps_lookups() {
        let mut map = (0..1000).map(|i| (i, i)).collect::<OrderedMap<_, _>>();

        for i in (0..1000).filter(|i| i % 4 != 0) {
            map.remove(&i);
        }

        assert!(map.entries.len() < 2 * map.len() + MIN_HOLES);
        assert_eq!(map.len(), 250);
        assert_eq!(map.get(&400), Some(&400));
        assert_eq!(map.get(&401), None);
        assert_eq!(keys(&map), (0..1000).step_by(4).collect::<Vec<_>>());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, u8),
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (any::<u8>(), any::<u8>()).prop_map(|(k, v)| Op::Insert(k % 32, v)),
            any::<u8>().prop_map(|k| Op::Remove(k % 32)),
        ]
    }

    proptest! {
        #[test]
        fn behaves_like_ordered_vec(ops in proptest::collection::vec(op(), 0..256)) {
            let mut map = OrderedMap::new();
            let mut expected: Vec<(u8, u8)> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert(k, v) => {
                        let old = expected.iter_mut().find(|(key, _)| *key == k);
                        let old = match old {
                            Some((_, value)) => Some(std::mem::replace(value, v)),
                            None => {
                                expected.push((k, v));
                                None
                            }
                        };
                        prop_assert_eq!(map.insert(k, v), old);
                    }
                    Op::Remove(k) => {
                        let position = expected.iter().position(|(key, _)| *key == k);
                        let old = position.map(|i| expected.remove(i).1);
                        prop_assert_eq!(map.remove(&k), old);
                    }
                }

                let actual = map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
                prop_assert_eq!(&actual, &expected);
                prop_assert_eq!(map.last().map(|(k, v)| (*k, *v)), expected.last().copied());
            }
        }
    }
}
