use std::collections::HashMap;

/// String-keyed map that iterates keys in first-seen order
///
/// Used as the node type of grouped trees; no sorting is ever applied.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedGroups<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedGroups<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedGroups<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for `key`, created with `make` on first encounter
    pub fn entry_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let pos = match self.index.get(key) {
            Some(&pos) => pos,
            None => {
                self.entries.push((key.to_string(), make()));
                let pos = self.entries.len() - 1;
                self.index.insert(key.to_string(), pos);
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in alphabetical order, for consumers that want it
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_by_key(|k| k.to_lowercase());
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> IntoIterator for OrderedGroups<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_keep_first_seen_order() {
        let mut groups: OrderedGroups<Vec<i32>> = OrderedGroups::new();
        groups.entry_or_insert_with("zeta", Vec::new).push(1);
        groups.entry_or_insert_with("alpha", Vec::new).push(2);
        groups.entry_or_insert_with("zeta", Vec::new).push(3);

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(groups.get("zeta"), Some(&vec![1, 3]));
        assert_eq!(groups.sorted_keys(), vec!["alpha", "zeta"]);
        assert_eq!(groups.len(), 2);
    }
}
