//! Attribute storage shared by graphs, nodes and edges.
//!
//! Attributes are free-form `String -> AttrValue` maps without any schema.
//! All of them live behind an [`AttrHandle`], a reference-counted cell, for
//! two reasons:
//!
//! * An undirected edge `{u, v}` is reachable both as `adj[u][v]` and
//!   `adj[v][u]`, and a directed edge both as `succ[u][v]` and `pred[v][u]`.
//!   Both entries hold the same handle, so a change made through one of them
//!   is visible through the other.
//! * Views borrow the graph immutably, yet attribute mutation through a view
//!   is allowed. Only the structure of a graph is read-only in a view.

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use crate::common::FxIndexMap;

use super::error::GraphError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<AttrValue>),
    Map(Attrs),
}

impl AttrValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric value of integers and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Attrs> {
        match self {
            AttrValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Bool(_) => "bool",
            AttrValue::Int(_) => "int",
            AttrValue::Float(_) => "float",
            AttrValue::Str(_) => "str",
            AttrValue::List(_) => "list",
            AttrValue::Map(_) => "map",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => f.write_str("null"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(x) => write!(f, "{x}"),
            AttrValue::Str(s) => write!(f, "{s:?}"),
            AttrValue::List(list) => {
                f.write_str("[")?;
                for (i, value) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            AttrValue::Map(map) => write!(f, "{map}"),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i as i64)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<usize> for AttrValue {
    fn from(i: usize) -> Self {
        AttrValue::Int(i as i64)
    }
}

impl From<f32> for AttrValue {
    fn from(x: f32) -> Self {
        AttrValue::Float(x as f64)
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(list: Vec<AttrValue>) -> Self {
        AttrValue::List(list)
    }
}

impl From<Attrs> for AttrValue {
    fn from(map: Attrs) -> Self {
        AttrValue::Map(map)
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attrs {
    inner: FxIndexMap<String, AttrValue>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.inner.get(key)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a AttrValue) -> &'a AttrValue {
        self.inner.get(key).unwrap_or(default)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AttrValue> {
        self.inner.get_mut(key)
    }

    /// Sets the attribute and returns the previous value. Overwriting an
    /// existing attribute keeps its position in the iteration order.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Result<AttrValue, GraphError> {
        self.inner
            .shift_remove(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_owned()))
    }

    /// Merges `other` into `self`, `other` wins on conflicts.
    pub fn update(&mut self, other: Attrs) {
        self.inner.extend(other.inner);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(String::as_str)
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, &AttrValue)> + '_ {
        self.inner.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Reads attribute `key` as an edge weight. A missing attribute counts as
    /// `1`.
    pub fn weight(&self, key: &str) -> Result<f64, GraphError> {
        match self.inner.get(key) {
            None => Ok(1.0),
            Some(value) => value.as_f64().ok_or_else(|| GraphError::NonNumericWeight {
                key: key.to_owned(),
                found: value.type_name(),
            }),
        }
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.items().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K, V> Extend<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Shared, interiorly mutable attribute map.
///
/// `Clone` shares the underlying map. Use [`deep_clone`](AttrHandle::deep_clone)
/// for an independent copy.
#[derive(Clone, Default)]
pub struct AttrHandle(Rc<RefCell<Attrs>>);

impl AttrHandle {
    pub fn new(attrs: Attrs) -> Self {
        Self(Rc::new(RefCell::new(attrs)))
    }

    /// # Panics
    ///
    /// Panics if the map is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, Attrs> {
        self.0.borrow()
    }

    /// # Panics
    ///
    /// Panics if the map is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Attrs> {
        self.0.borrow_mut()
    }

    pub fn get(&self, key: &str) -> Option<AttrValue> {
        self.0.borrow().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.0.borrow_mut().set(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<AttrValue, GraphError> {
        self.0.borrow_mut().remove(key)
    }

    pub fn update(&self, attrs: Attrs) {
        if !attrs.is_empty() {
            self.0.borrow_mut().update(attrs);
        }
    }

    pub fn weight(&self, key: &str) -> Result<f64, GraphError> {
        self.0.borrow().weight(key)
    }

    /// Copies the content into a fresh, unshared handle.
    pub fn deep_clone(&self) -> Self {
        Self::new(self.to_attrs())
    }

    pub fn to_attrs(&self) -> Attrs {
        self.0.borrow().clone()
    }

    /// Returns `true` if both handles refer to the same attribute map.
    pub fn ptr_eq(&self, other: &AttrHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AttrHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(attrs) => f.debug_tuple("AttrHandle").field(&*attrs).finish(),
            Err(_) => f.write_str("AttrHandle(<borrowed>)"),
        }
    }
}

impl PartialEq for AttrHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl From<Attrs> for AttrHandle {
    fn from(attrs: Attrs) -> Self {
        Self::new(attrs)
    }
}

/// Creates [`Attrs`] from `key => value` pairs.
///
/// ```
/// use reticula::attrs;
///
/// let attrs = attrs! { "weight" => 4.2, "color" => "red" };
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::core::attr::Attrs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::core::attr::Attrs::new();
        $(attrs.set($key, $value);)+
        attrs
    }};
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn insertion_order_survives_overwrite() {
        let mut attrs = attrs! { "a" => 1, "b" => 2, "c" => 3 };
        attrs.set("a", 10);

        let keys = attrs.keys().collect::<Vec<_>>();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(attrs.get("a"), Some(&AttrValue::Int(10)));
    }

    #[test]
    fn remove_missing_key() {
        let mut attrs = attrs! { "a" => 1 };

        assert_eq!(attrs.remove("a"), Ok(AttrValue::Int(1)));
        assert_matches!(attrs.remove("a"), Err(GraphError::KeyNotFound(key)) if key == "a");
    }

    #[test]
    fn get_or_default() {
        let attrs = attrs! { "color" => "red" };
        let default = AttrValue::from("blue");

        assert_eq!(attrs.get_or("color", &default).as_str(), Some("red"));
        assert_eq!(attrs.get_or("shape", &default).as_str(), Some("blue"));
    }

    #[test]
    fn heterogeneous_values() {
        let attrs = attrs! {
            "flag" => true,
            "count" => 3,
            "ratio" => 0.5,
            "tags" => vec![AttrValue::from("x"), AttrValue::from(1)],
        };

        let types = attrs.items().map(|(_, v)| v.type_name()).collect::<Vec<_>>();
        assert_eq!(types, vec!["bool", "int", "float", "list"]);
    }

    #[test]
    fn weight() {
        let attrs = attrs! { "w" => 2, "x" => 0.5, "label" => "a" };

        assert_eq!(attrs.weight("w"), Ok(2.0));
        assert_eq!(attrs.weight("x"), Ok(0.5));
        assert_eq!(attrs.weight("missing"), Ok(1.0));
        assert_matches!(
            attrs.weight("label"),
            Err(GraphError::NonNumericWeight { found: "str", .. })
        );
    }

    #[test]
    fn handle_sharing() {
        let a = AttrHandle::new(attrs! { "w" => 1 });
        let b = a.clone();
        let c = a.deep_clone();

        b.set("w", 5);

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(a.get("w"), Some(AttrValue::Int(5)));
        assert_eq!(c.get("w"), Some(AttrValue::Int(1)));
    }

    #[test]
    fn display() {
        let attrs = attrs! { "a" => 1, "b" => "x" };
        assert_eq!(attrs.to_string(), r#"{"a": 1, "b": "x"}"#);
    }
}
