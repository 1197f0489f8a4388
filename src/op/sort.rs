use crate::config::SortOrder;
use crate::pipe::Pipe;
use itertools::Itertools;
use std::cmp::Reverse;

impl<'a, T: 'a> Pipe<'a, T> {
    /// 按自然顺序排序。
    ///
    /// 调用时即读取全部元素。排序稳定，降序时相等元素仍保持原始顺序。
    pub fn sorted(self, order: SortOrder) -> Pipe<'a, T>
    where
        T: Ord,
    {
        let iter = if order.is_desc() { self.iter.sorted_by(|l, r| r.cmp(l)) } else { self.iter.sorted() };
        tracing::trace!(len = iter.len(), ?order, "sorted materialized source");
        Pipe { iter: Box::new(iter) }
    }

    /// 按`key`排序，每个元素只计算一次`key`。
    ///
    /// 调用时即读取全部元素。排序稳定，降序时相等元素仍保持原始顺序。
    pub fn sorted_by_key<K: Ord + 'a>(self, mut key: impl FnMut(&T) -> K, order: SortOrder) -> Pipe<'a, T> {
        let keyed = self.iter.map(|item| (key(&item), item));
        let iter = if order.is_desc() {
            keyed.sorted_by(|(l, _), (r, _)| Reverse(l).cmp(&Reverse(r)))
        } else {
            keyed.sorted_by(|(l, _), (r, _)| l.cmp(r))
        };
        tracing::trace!(len = iter.len(), ?order, "sorted materialized source");
        Pipe { iter: Box::new(iter.map(|(_, item)| item)) }
    }
}
