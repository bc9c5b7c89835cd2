use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub mod ordered_map;

pub use ordered_map::OrderedMap;

pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Insertion-ordered map with the Fx hash function.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
