use crate::map::HashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// An unordered key-value map with functional helpers.
///
/// Iteration order, and therefore the order of [`Mapping::keys`] and
/// [`Mapping::values`], is unspecified and may differ between the two calls.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "K: serde::Serialize + Eq + Hash, V: serde::Serialize",
            deserialize = "K: serde::Deserialize<'de> + Eq + Hash, V: serde::Deserialize<'de>"
        )
    )
)]
pub struct Mapping<K, V>(HashMap<K, V>);

impl<K, V> Mapping<K, V> {
    pub fn new() -> Self {
        Self(HashMap::default())
    }

    pub fn into_inner(self) -> HashMap<K, V> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
        self.0.iter()
    }

    /// All keys of the map, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.0.keys().cloned().collect()
    }

    /// All values of the map, in no particular order.
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.0.values().cloned().collect()
    }
}

impl<K: Eq + Hash, V> Mapping<K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.remove(key)
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Mapping<K, V> {
    /// New map holding the entries for which `predicate` returns `true`.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&K, &V) -> bool) -> Self {
        self.0
            .iter()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> Default for Mapping<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::disallowed_types)]
impl<K: Eq + Hash, V, S> From<std::collections::HashMap<K, V, S>> for Mapping<K, V> {
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<const N: usize, K: Eq + Hash, V> From<[(K, V); N]> for Mapping<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Mapping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for Mapping<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<K, V> IntoIterator for Mapping<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Mapping<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Mapping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Mapping<K, V> {}

impl<K, V> collection_traits::HasLength for Mapping<K, V> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> collection_traits::Iterable for Mapping<K, V> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::Mapping;
    use collection_traits::{count_matching, HasLength};
    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn letters() -> Mapping<&'static str, i32> {
        Mapping::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn keys() {
        let keys = letters().keys().into_iter().sorted().collect_vec();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn values() {
        let values = letters().values().into_iter().sorted().collect_vec();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn empty_map_has_no_keys_or_values() {
        let map = Mapping::<String, u8>::new();
        assert!(map.keys().is_empty());
        assert!(map.values().is_empty());
        assert!(map.filter(|_, _| true).is_empty());
    }

    #[test]
    fn filter() {
        let map = letters();
        let filtered = map.filter(|_, value| value % 2 != 0);

        assert_eq!(filtered, Mapping::from([("a", 1), ("c", 3)]));
        assert_eq!(map, letters());
    }

    #[test]
    fn filter_sees_keys() {
        let filtered = letters().filter(|key, _| *key != "b");
        assert_eq!(filtered.keys().into_iter().sorted().collect_vec(), vec!["a", "c"]);
    }

    #[test]
    fn entry_access() {
        let mut map = letters();
        assert_eq!(map.insert("d", 4), None);
        assert_eq!(map.get("d"), Some(&4));
        if let Some(value) = map.get_mut("a") {
            *value = 10;
        }
        assert_eq!(map.remove("b"), Some(2));
        assert!(!map.contains_key("b"));
        assert_eq!(HasLength::len(&map), 3);
        assert_eq!(count_matching(&map, |(_, v)| **v > 2), 3);
    }

    #[derive(Debug, PartialEq)]
    struct Handle(u8);

    #[test]
    fn keys_are_owned_for_non_clone_values() {
        let map: Mapping<&str, Handle> = Mapping::from([("x", Handle(1)), ("y", Handle(2))]);
        let keys: Vec<&str> = map.keys();
        assert_eq!(keys.into_iter().sorted().collect_vec(), vec!["x", "y"]);
        assert_eq!(map.get("y"), Some(&Handle(2)));
    }

    #[test]
    fn check_filter_is_subset() {
        let seeds = (0..u64::MAX).step_by((u64::MAX / 200) as usize);
        for seed in seeds {
            let mut rng = SmallRng::seed_from_u64(seed);
            let len = rng.gen_range(0..30);
            let map: Mapping<u16, i32> = (0..len)
                .map(|_| (rng.gen_range(0..64), rng.gen_range(-100..100)))
                .collect();
            let before = map.clone();

            let filtered = map.filter(|k, v| (*k as i32 + *v) % 2 == 0);

            assert!(filtered.len() <= map.len(), "Seed: {seed}");
            for (k, v) in &filtered {
                assert_eq!(map.get(k), Some(v), "Seed: {seed}");
                assert_eq!((*k as i32 + *v) % 2, 0, "Seed: {seed}");
            }
            assert_eq!(map, before, "Seed: {seed}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_map() {
        let map = Mapping::from([("a".to_string(), 1)]);
        let json = serde_json::to_string(&map).expect("Should serialize");
        assert_eq!(json, r#"{"a":1}"#);
        let back: Mapping<String, i32> = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back, map);
    }
}
