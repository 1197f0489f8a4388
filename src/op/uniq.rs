use crate::pipe::Pipe;
use rustc_hash::FxHashSet;
use std::hash::Hash;

impl<'a, T: 'a> Pipe<'a, T> {
    /// 去重，保留每个元素首次出现的位置。
    ///
    /// 调用时即读取全部元素。
    pub fn distinct(self) -> Pipe<'a, T>
    where
        T: Hash + Eq,
    {
        let items = self.iter.collect::<Vec<_>>();
        let keep = {
            let mut seen = FxHashSet::default();
            items.iter().map(|item| seen.insert(item)).collect::<Vec<_>>() // 返回 true 表示保留（首次出现）
        };
        Self::retain(items, keep)
    }

    /// 按`key`去重，保留每个键首次出现的元素。
    ///
    /// 调用时即读取全部元素。
    pub fn distinct_by_key<K: Hash + Eq>(self, mut key: impl FnMut(&T) -> K) -> Pipe<'a, T> {
        let items = self.iter.collect::<Vec<_>>();
        let keep = {
            let mut seen = FxHashSet::default();
            items.iter().map(|item| seen.insert(key(item))).collect::<Vec<_>>()
        };
        Self::retain(items, keep)
    }

    fn retain(items: Vec<T>, keep: Vec<bool>) -> Pipe<'a, T> {
        let kept = keep.iter().filter(|k| **k).count();
        tracing::trace!(total = items.len(), kept, "distinct materialized source");
        Pipe { iter: Box::new(items.into_iter().zip(keep).filter_map(|(item, keep)| keep.then_some(item))) }
    }
}
