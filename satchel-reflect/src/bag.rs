use ahash::{HashMap, HashMapExt};

use crate::value::Value;

/// An ordered, dynamically extensible name/value mapping.
///
/// Entries keep their insertion order, so a bag built by reflection lists
/// the properties in the order the source type declares them. Keys are
/// unique; inserting an existing key overwrites its value in place.
///
/// Order is kept in a vector of entries; a hash map indexes into it by
/// name for lookup.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a value under `name`.
    ///
    /// A new name is appended at the end; an existing name keeps its
    /// position and the previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        if let Some(&i) = self.index.get(&name) {
            Some(std::mem::replace(&mut self.entries[i].1, value))
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
            None
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove a name from the bag, returning its value.
    ///
    /// Later entries shift up; re-inserting the name appends it at the
    /// end again.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let i = self.index.remove(name)?;
        let (_, value) = self.entries.remove(i);
        for (name, _) in &self.entries[i..] {
            if let Some(slot) = self.index.get_mut(name) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// The names in the bag, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The entries in the bag, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn display_representation(&self) -> String {
        let entries = self
            .entries
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value.representation()))
            .collect::<Vec<_>>();
        format!("map {{\n{}\n}}", entries.join(",\n"))
    }
}

impl PartialEq for PropertyBag {
    fn eq(&self, other: &Self) -> bool {
        // order matters; the index is derived so it carries no extra
        // information
        self.entries == other.entries
    }
}

impl Extend<(String, Value)> for PropertyBag {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl FromIterator<(String, Value)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut bag = PropertyBag::new();
        bag.insert("name", "A".into());
        bag.insert("age", 3.into());
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get("name"), Some(&Value::from("A")));
        assert_eq!(bag.get("age"), Some(&Value::from(3)));
        assert_eq!(bag.get("missing"), None);
    }

    #[test]
    fn test_insertion_order() {
        let mut bag = PropertyBag::new();
        bag.insert("c", 1.into());
        bag.insert("a", 2.into());
        bag.insert("b", 3.into());
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut bag = PropertyBag::new();
        bag.insert("a", 1.into());
        bag.insert("b", 2.into());
        let previous = bag.insert("a", 10.into());
        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bag.get("a"), Some(&Value::from(10)));
    }

    #[test]
    fn test_remove_reindexes() {
        let mut bag = PropertyBag::new();
        bag.insert("a", 1.into());
        bag.insert("b", 2.into());
        bag.insert("c", 3.into());
        assert_eq!(bag.remove("a"), Some(Value::from(1)));
        assert_eq!(bag.remove("a"), None);
        assert_eq!(bag.get("b"), Some(&Value::from(2)));
        assert_eq!(bag.get("c"), Some(&Value::from(3)));
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["b", "c"]);
        // a removed name comes back at the end
        bag.insert("a", 4.into());
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_from_iterator() {
        let bag = [("x".to_string(), Value::from(1)), ("y".to_string(), Value::from(2))]
            .into_iter()
            .collect::<PropertyBag>();
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get("y"), Some(&Value::from(2)));
    }

    #[test]
    fn test_display_representation() {
        let mut bag = PropertyBag::new();
        bag.insert("name", "A".into());
        bag.insert("age", 3.into());
        insta::assert_snapshot!(bag.display_representation(), @r#"
        map {
        name: "A",
        age: 3
        }
        "#);
    }
}
