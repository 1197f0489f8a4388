use crate::err::{PipeErr, PipeRes};
use crate::map::OrderedMap;
use crate::pipe::{Cursor, Pipe};
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::ops::Add;

/// 终结操作：消耗流水线并返回普通值。
///
/// 作用于无限输入时，只有`find_first`和短路匹配（`any_match`等）会结束。
impl<'a, T: 'a> Pipe<'a, T> {
    /// 按顺序对每个元素调用`f`。
    pub fn for_each(self, f: impl FnMut(T)) {
        self.iter.for_each(f)
    }

    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// 从`start`开始从左到右累加。
    pub fn sum<S>(self, start: S) -> S
    where
        S: Add<T, Output = S>,
    {
        self.iter.fold(start, |acc, item| acc + item)
    }

    /// 按`classifier`分组，组按首次出现的顺序排列，组内保持原始顺序。
    pub fn group_by<K>(self, mut classifier: impl FnMut(&T) -> K) -> OrderedMap<K, Vec<T>>
    where
        K: Hash + Eq + Clone,
    {
        let mut groups = OrderedMap::new();
        for item in self.iter {
            groups.get_or_insert_with(classifier(&item), Vec::new).push(item);
        }
        tracing::trace!(groups = groups.len(), "group_by materialized source");
        groups
    }

    /// 以首个元素为初始值从左到右归约，没有元素时返回`None`。
    pub fn reduce(self, f: impl FnMut(T, T) -> T) -> Option<T> {
        self.iter.reduce(f)
    }

    /// 以`initial`为初始值从左到右归约，没有元素时原样返回`initial`。
    pub fn reduce_from<A>(self, initial: A, f: impl FnMut(A, T) -> A) -> A {
        self.iter.fold(initial, f)
    }

    /// 最小值，多个最小值时返回最先出现的。
    pub fn min(self) -> Option<T>
    where
        T: Ord,
    {
        self.iter.reduce(|best, item| if item < best { item } else { best })
    }

    /// 最大值，多个最大值时返回最先出现的。
    pub fn max(self) -> Option<T>
    where
        T: Ord,
    {
        self.iter.reduce(|best, item| if item > best { item } else { best })
    }

    /// 没有元素时返回`default`。
    pub fn min_or(self, default: T) -> T
    where
        T: Ord,
    {
        self.min().unwrap_or(default)
    }

    /// 没有元素时返回`default`。
    pub fn max_or(self, default: T) -> T
    where
        T: Ord,
    {
        self.max().unwrap_or(default)
    }

    /// 按`key`取最小值，每个元素只计算一次`key`，多个最小值时返回最先出现的。
    pub fn min_by_key<K: Ord>(self, mut key: impl FnMut(&T) -> K) -> Option<T> {
        self.iter
            .map(|item| (key(&item), item))
            .reduce(|best, cur| if cur.0 < best.0 { cur } else { best })
            .map(|(_, item)| item)
    }

    /// 按`key`取最大值，每个元素只计算一次`key`，多个最大值时返回最先出现的。
    pub fn max_by_key<K: Ord>(self, mut key: impl FnMut(&T) -> K) -> Option<T> {
        self.iter
            .map(|item| (key(&item), item))
            .reduce(|best, cur| if cur.0 > best.0 { cur } else { best })
            .map(|(_, item)| item)
    }

    /// 最多拉取一个元素。
    pub fn find_first(mut self) -> Option<T> {
        self.iter.next()
    }

    /// 遇到第一个满足条件的元素即停止拉取。
    pub fn any_match(mut self, pred: impl FnMut(T) -> bool) -> bool {
        self.iter.any(pred)
    }

    /// 遇到第一个不满足条件的元素即停止拉取，没有元素时返回`true`。
    pub fn all_match(mut self, pred: impl FnMut(T) -> bool) -> bool {
        self.iter.all(pred)
    }

    /// 等价于`!any_match(pred)`。
    pub fn none_match(self, pred: impl FnMut(T) -> bool) -> bool {
        !self.any_match(pred)
    }

    pub fn to_list(self) -> Vec<T> {
        self.iter.collect()
    }

    pub fn to_set(self) -> FxHashSet<T>
    where
        T: Hash + Eq,
    {
        self.iter.collect()
    }

    /// 收集为键值表。重复的键以最后的值为准，键保持首次出现的位置。
    pub fn to_dict<K, V>(self, mut key: impl FnMut(&T) -> K, mut value: impl FnMut(T) -> V) -> OrderedMap<K, V>
    where
        K: Hash + Eq + Clone,
    {
        let mut map = OrderedMap::new();
        for item in self.iter {
            let k = key(&item);
            map.insert(k, value(item));
        }
        map
    }

    /// 同[`Pipe::to_dict`]。
    pub fn to_map<K, V>(self, key: impl FnMut(&T) -> K, value: impl FnMut(T) -> V) -> OrderedMap<K, V>
    where
        K: Hash + Eq + Clone,
    {
        self.to_dict(key, value)
    }

    /// 将底层游标交给`f`做自定义归约。
    ///
    /// 例如：
    /// ```
    /// use rstream::pipe;
    /// let joined = pipe!["a", "b", "c"].collect(|iter| iter.collect::<Vec<_>>().join("-"));
    /// assert_eq!(joined, "a-b-c");
    /// ```
    pub fn collect<R>(self, f: impl FnOnce(Cursor<'a, T>) -> R) -> R {
        f(self.iter)
    }

    /// 将底层游标交给`f`，并把`f`返回的序列重新包装为流水线。
    pub fn collects<U>(self, f: impl FnOnce(Cursor<'a, T>) -> U) -> Pipe<'a, U::Item>
    where
        U: IntoIterator,
        U::IntoIter: 'a,
        U::Item: 'a,
    {
        Pipe::new(f(self.iter))
    }

    /// 按顺序对每个元素调用可失败的`f`，首次失败即停止。
    pub fn try_for_each<E>(self, mut f: impl FnMut(T) -> Result<(), E>) -> PipeRes<(), E> {
        for (index, item) in self.iter.enumerate() {
            f(item).map_err(|err| PipeErr::func(index, err))?;
        }
        Ok(())
    }
}

/// 可失败流水线的终结操作，遇到第一个错误即停止拉取。
impl<'a, T: 'a, E: 'a> Pipe<'a, Result<T, E>> {
    pub fn try_to_list(self) -> PipeRes<Vec<T>, E> {
        self.iter.enumerate().map(|(index, item)| item.map_err(|err| PipeErr::func(index, err))).collect()
    }

    /// 以首个元素为初始值归约，没有元素时返回`Ok(None)`。
    pub fn try_reduce(self, mut f: impl FnMut(T, T) -> T) -> PipeRes<Option<T>, E> {
        let mut acc = None;
        for (index, item) in self.iter.enumerate() {
            let item = item.map_err(|err| PipeErr::func(index, err))?;
            acc = Some(match acc {
                Some(acc) => f(acc, item),
                None => item,
            });
        }
        Ok(acc)
    }
}
