//! Insertion-ordered, duplicate-free list used for skills and technologies.

use serde::{Deserialize, Deserializer, Serialize};

/// A `Vec` that refuses duplicates on insert.
///
/// Membership is exact (case-sensitive) equality. Order is insertion order and is
/// the order entries are displayed and rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` unless an equal value is already present.
    /// Returns `true` if the value was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if self.items.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes `value` if present. Returns `true` if something was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let before = self.items.len();
        self.items.retain(|v| v != value);
        self.items.len() != before
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The first `n` entries in insertion order (fewer if the set is smaller).
    pub fn first_n(&self, n: usize) -> &[T] {
        &self.items[..n.min(self.items.len())]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
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

// Drafts and request bodies may carry duplicates; they are dropped on the way in.
impl<'de, T> Deserialize<'de> for OrderedSet<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("Rust".to_string()));
        assert!(!set.insert("Rust".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let mut set = OrderedSet::new();
        set.insert("go".to_string());
        assert!(set.insert("Go".to_string()));
        assert_eq!(set.as_slice(), &["go".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let set: OrderedSet<&str> = ["c", "a", "b", "a"].into_iter().collect();
        assert_eq!(set.as_slice(), &["c", "a", "b"]);
    }

    #[test]
    fn test_remove() {
        let mut set: OrderedSet<&str> = ["a", "b"].into_iter().collect();
        assert!(set.remove(&"a"));
        assert!(!set.remove(&"a"));
        assert_eq!(set.as_slice(), &["b"]);
    }

    #[test]
    fn test_first_n_clamps() {
        let set: OrderedSet<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(set.first_n(3), &["a", "b"]);
        assert_eq!(set.first_n(1), &["a"]);
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: OrderedSet<String> = serde_json::from_str(r#"["Go","Rust","Go"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Go","Rust"]"#);
    }
}
