use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dense identifier for a city inside one route map.
///
/// Ids are handed out in first-seen order starting at zero, so algorithms
/// can keep per-city state in plain vectors instead of hashing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CityId(usize);

impl CityId {
    /// Wraps a raw index.
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Two-way mapping between city names and dense ids.
#[derive(Debug, Default, Clone)]
pub struct CityIndex {
    /// Map of name to id
    by_name: HashMap<String, CityId>,

    /// Names in id order
    names: Vec<String>,
}

impl CityIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next free one if the
    /// city has not been seen before.
    pub fn insert(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = CityId(self.names.len());
        self.by_name.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Resolves a city name to its id.
    pub fn resolve(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name behind an id.
    ///
    /// Ids only come from this index, so a miss is a programming error.
    pub fn name(&self, id: CityId) -> &str {
        &self.names[id.0]
    }

    /// Number of known cities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Iterates over all ids.
    pub fn ids(&self) -> impl Iterator<Item = CityId> {
        (0..self.names.len()).map(CityId)
    }

    /// Forgets every city.
    pub fn clear(&mut self) {
        self.by_name.clear();
        self.names.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_resolve() {
        let mut index = CityIndex::new();

        let paris = index.insert("Paris");
        let lyon = index.insert("Lyon");

        assert_eq!(paris.index(), 0);
        assert_eq!(lyon.index(), 1);
        assert_eq!(index.resolve("Lyon"), Some(lyon));
        assert_eq!(index.resolve("lyon"), None);
        assert_eq!(index.name(paris), "Paris");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = CityIndex::new();
        let first = index.insert("Nice");
        let second = index.insert("Nice");

        assert_eq!(first, second);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut index = CityIndex::new();
        index.insert("Nice");
        index.clear();

        assert!(index.is_empty());
        assert_eq!(index.resolve("Nice"), None);
        assert_eq!(index.insert("Metz").index(), 0);
    }
}
