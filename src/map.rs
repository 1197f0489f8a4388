use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// 保持插入顺序的哈希表，用于`group_by`和`to_dict`的结果。
///
/// 覆盖已有键时只替换值，键保持首次插入的位置。比较相等时顺序敏感。
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap { entries: Vec::new(), index: FxHashMap::default() }
    }
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    /// 插入键值，返回被覆盖的旧值。
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// 获取键对应的值，不存在时使用`f`创建并追加到末尾。
    pub fn get_or_insert_with(&mut self, key: K, f: impl FnOnce() -> V) -> &mut V {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, f()));
                pos
            }
        };
        &mut self.entries[pos].1
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'m, K, V> IntoIterator for &'m OrderedMap<K, V> {
    type Item = (&'m K, &'m V);
    type IntoIter = std::iter::Map<std::slice::Iter<'m, (K, V)>, fn(&'m (K, V)) -> (&'m K, &'m V)>;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'m (K, V)) -> (&'m K, &'m V) = |(k, v)| (k, v);
        self.entries.iter().map(split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = OrderedMap::new();
        assert_eq!(map.insert("b", 1), None);
        assert_eq!(map.insert("a", 2), None);
        assert_eq!(map.insert("b", 3), Some(1));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(map.get("b"), Some(&3));
        assert!(map.contains_key("a"));
        assert!(!map.contains_key("c"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: OrderedMap<i32, Vec<&str>> = OrderedMap::new();
        map.get_or_insert_with(2, Vec::new).push("x");
        map.get_or_insert_with(1, Vec::new).push("y");
        map.get_or_insert_with(2, Vec::new).push("z");
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(2, vec!["x", "z"]), (1, vec!["y"])]);
    }

    #[test]
    fn test_eq_is_order_sensitive() {
        let ab: OrderedMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: OrderedMap<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, [("a", 1), ("b", 2)].into_iter().collect::<OrderedMap<_, _>>());
        assert_eq!(format!("{:?}", ab), r#"{"a": 1, "b": 2}"#);
        let empty: OrderedMap<i32, i32> = OrderedMap::default();
        assert!(empty.is_empty());
    }
}
