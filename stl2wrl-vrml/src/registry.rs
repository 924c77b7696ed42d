//! Point deduplication keyed on formatted coordinate text.

use std::collections::HashMap;

/// Assigns each distinct point key a stable index in first-seen order.
///
/// Every key in the map has exactly one index, equal to its position in the
/// ordered point list.
#[derive(Debug, Clone, Default)]
pub struct PointRegistry {
    indices: HashMap<String, usize>,
    points: Vec<String>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `key`, registering it with the next free index if unseen.
    pub fn insert(&mut self, key: String) -> usize {
        if let Some(index) = self.get(&key) {
            return index;
        }
        let index = self.points.len();
        self.indices.insert(key.clone(), index);
        self.points.push(key);
        index
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.indices.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Registered keys in index order.
    pub fn points(&self) -> &[String] {
        &self.points
    }

    pub fn into_points(self) -> Vec<String> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_first_seen_order() {
        let mut registry = PointRegistry::new();
        assert_eq!(registry.insert("a".to_string()), 0);
        assert_eq!(registry.insert("b".to_string()), 1);
        assert_eq!(registry.insert("a".to_string()), 0);
        assert_eq!(registry.insert("c".to_string()), 2);
        assert_eq!(registry.points(), ["a", "b", "c"]);
    }

    #[test]
    fn test_index_matches_position() {
        let mut registry = PointRegistry::new();
        for key in ["x", "y", "x", "z", "y", "w"] {
            registry.insert(key.to_string());
        }
        assert_eq!(registry.len(), 4);
        for (position, key) in registry.points().iter().enumerate() {
            assert_eq!(registry.get(key), Some(position));
        }
        assert_eq!(registry.get("missing"), None);
    }

    #[test]
    fn test_empty_registry() {
        let registry = PointRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.into_points().is_empty());
    }
}
