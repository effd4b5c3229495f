use serde::{Deserialize, Serialize};

/// An ordered mapping from property name to value, unique by key.
///
/// Rules carry their properties in source order, unique by name. A plain
/// `Vec` of pairs preserves insertion order without pulling in an extra
/// ordered-map dependency; `get` is linear but rules are small enough that
/// this is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, overwriting an existing entry in place
    /// (preserving its original position) rather than appending a duplicate.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut map = PropertyMap::new();
        map.insert("margin", "1rem");
        map.insert("padding", "1rem");
        map.insert("color", "red");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["margin", "padding", "color"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut map = PropertyMap::new();
        map.insert("margin", "1rem");
        map.insert("padding", "1rem");
        map.insert("margin", "2rem");
        assert_eq!(map.get("margin"), Some("2rem"));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["margin", "padding"]);
    }
}
