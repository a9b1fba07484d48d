use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A set that remembers insertion order.
///
/// Membership is unique, iteration yields elements in first-seen order.
/// Used for the favourite collections, which grow monotonically and are
/// displayed in the order they were favourited.
///
/// Equality is order-sensitive: two sets are equal iff they hold the same
/// elements in the same first-seen order. Use [`OrderedSet::same_elements`]
/// for order-insensitive membership comparison.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(
        serialize = "T: Serialize + Clone",
        deserialize = "T: Deserialize<'de> + Eq + Hash + Clone"
    )
)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    index: HashSet<T>,
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Insert a value, returning `true` if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.index.contains(&value) {
            return false;
        }
        self.index.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Union of `self` and `other`: all of `self` in its order, then the
    /// elements of `other` not already present, in `other`'s order.
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for value in other.iter() {
            merged.insert(value.clone());
        }
        merged
    }

    /// `true` if both sets hold exactly the same elements, ignoring order.
    pub fn same_elements(&self, other: &Self) -> bool {
        self.index == other.index
    }

    /// `true` if every element of `self` is also in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.index.is_subset(&other.index)
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Order-sensitive equality; `items` fully determines `index`.
impl<T: Eq + Hash + Clone> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash + Clone> Eq for OrderedSet<T> {}

impl<T: Eq + Hash + Clone> From<Vec<T>> for OrderedSet<T> {
    fn from(values: Vec<T>) -> Self {
        let mut set = Self::new();
        for value in values {
            set.insert(value);
        }
        set
    }
}

impl<T> From<OrderedSet<T>> for Vec<T> {
    fn from(set: OrderedSet<T>) -> Self {
        set.items
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_first_seen_order() {
        let mut set = OrderedSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.as_slice(), &["b", "a"]);
    }

    #[test]
    fn contains_and_len() {
        let set: OrderedSet<&str> = ["x", "y", "x"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&"x"));
        assert!(!set.contains(&"z"));
    }

    #[test]
    fn union_keeps_left_order_then_right_newcomers() {
        let a: OrderedSet<&str> = ["p", "q"].into_iter().collect();
        let b: OrderedSet<&str> = ["q", "r", "p", "s"].into_iter().collect();
        let u = a.union(&b);
        assert_eq!(u.as_slice(), &["p", "q", "r", "s"]);
    }

    #[test]
    fn union_with_self_is_identity() {
        let a: OrderedSet<&str> = ["p", "q"].into_iter().collect();
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn same_elements_ignores_order() {
        let a: OrderedSet<&str> = ["p", "q"].into_iter().collect();
        let b: OrderedSet<&str> = ["q", "p"].into_iter().collect();
        assert_ne!(a, b);
        assert!(a.same_elements(&b));
    }

    #[test]
    fn subset() {
        let a: OrderedSet<&str> = ["p"].into_iter().collect();
        let b: OrderedSet<&str> = ["q", "p"].into_iter().collect();
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
    }

    #[test]
    fn serde_roundtrip_as_sequence() {
        let set: OrderedSet<String> =
            ["one".to_string(), "two".to_string()].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"one\",\"two\"]");
        let parsed: OrderedSet<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn deserialization_deduplicates() {
        let parsed: OrderedSet<String> =
            serde_json::from_str("[\"a\",\"b\",\"a\"]").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.as_slice(), &["a".to_string(), "b".to_string()]);
    }
}
