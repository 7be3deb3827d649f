//! Insertion-ordered counting table.
//!
//! Every aggregate in this crate is a "get-or-insert-default, then add" map
//! whose presentation order is "descending count, ties in first-seen order".
//! `OrderedTable` makes that order explicit: entries live in a `Vec` in the
//! order their keys were first encountered, and a `HashMap` maps each key to
//! its slot. A stable descending sort over the `Vec` therefore yields the
//! required tie-break without a separate sequence field.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OrderedTable<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

// `index` is derived from `entries`, so equality only looks at the entries
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedTable<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for OrderedTable<K, V> {}

impl<K, V> Default for OrderedTable<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> OrderedTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for `key`, inserting `V::default()` at the end of the
    /// encounter order if the key is new.
    pub fn entry<Q>(&mut self, key: &Q) -> &mut V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let owned = key.to_owned();
                self.entries.push((owned.clone(), V::default()));
                self.index.insert(owned, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Position of `key` in encounter order
    pub fn first_seen<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries sorted by descending `count`, ties kept in first-seen order.
    pub fn sorted_desc_by<F>(&self, count: F) -> Vec<(&K, &V)>
    where
        F: Fn(&V) -> usize,
    {
        let mut sorted: Vec<(&K, &V)> = self.iter().collect();
        // `sort_by` is stable, so equal counts stay in encounter order
        sorted.sort_by(|a, b| count(b.1).cmp(&count(a.1)));
        sorted
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Default + std::ops::AddAssign,
{
    /// Repeated keys are summed into their first slot
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (key, value) in iter {
            *table.entry(&key) += value;
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_inserts_default_once() {
        let mut table: OrderedTable<String, usize> = OrderedTable::new();
        *table.entry("alice") += 3;
        *table.entry("alice") += 2;

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("alice"), Some(&5));
        assert_eq!(table.get("bob"), None);
    }

    #[test]
    fn test_iteration_follows_first_seen_order() {
        let mut table: OrderedTable<String, usize> = OrderedTable::new();
        *table.entry("zed") += 1;
        *table.entry("amy") += 1;
        *table.entry("zed") += 1;
        *table.entry("kim") += 1;

        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zed", "amy", "kim"]);
        assert_eq!(table.first_seen("kim"), Some(2));
    }

    #[test]
    fn test_sorted_desc_keeps_ties_in_encounter_order() {
        let table: OrderedTable<String, usize> = vec![
            ("A".to_string(), 100),
            ("C".to_string(), 50),
            ("B".to_string(), 100),
        ]
        .into_iter()
        .collect();

        let sorted: Vec<&str> = table
            .sorted_desc_by(|v| *v)
            .into_iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(sorted, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_from_iter_sums_repeated_keys() {
        let table: OrderedTable<&str, usize> =
            vec![("x", 1), ("y", 4), ("x", 2)].into_iter().collect();
        assert_eq!(table.get("x"), Some(&3));
        assert_eq!(table.len(), 2);
    }
}
