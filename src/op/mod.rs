mod sort;
mod star;
mod uniq;

pub use star::StarFn;

use crate::pipe::Pipe;

/// 惰性中间操作：只组装新的游标，调用时不拉取任何元素。
impl<'a, T: 'a> Pipe<'a, T> {
    /// 对每个元素应用`f`，顺序与数量不变。
    pub fn map<R: 'a>(self, f: impl FnMut(T) -> R + 'a) -> Pipe<'a, R> {
        Pipe { iter: Box::new(self.iter.map(f)) }
    }

    /// 将每个元组元素展开为`f`的位置参数。
    ///
    /// 例如：
    /// ```
    /// use rstream::pipe;
    /// let sums = pipe![(1, 2), (3, 4)].star_map(|a: i32, b: i32| a + b).to_list();
    /// assert_eq!(sums, vec![3, 7]);
    /// ```
    pub fn star_map<F>(self, mut f: F) -> Pipe<'a, F::Output>
    where
        F: StarFn<T> + 'a,
        F::Output: 'a,
    {
        Pipe { iter: Box::new(self.iter.map(move |args| f.call_star(args))) }
    }

    /// 将每个元素映射为一个序列，并按顺序展平一层。
    pub fn flat_map<U>(self, f: impl FnMut(T) -> U + 'a) -> Pipe<'a, U::Item>
    where
        U: IntoIterator + 'a,
        U::IntoIter: 'a,
        U::Item: 'a,
    {
        Pipe { iter: Box::new(self.iter.flat_map(f)) }
    }

    /// 仅保留满足条件的元素。
    pub fn filter(self, pred: impl FnMut(&T) -> bool + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.iter.filter(pred)) }
    }

    /// 每个元素向下游传递之前调用一次`f`，元素不变。
    pub fn peek(self, f: impl FnMut(&T) + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.iter.inspect(f)) }
    }

    /// 最多保留前`n`个元素，之后不再从上游拉取。
    pub fn limit(self, n: usize) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.iter.take(n)) }
    }

    /// 丢弃前`n`个元素。
    pub fn skip(self, n: usize) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.iter.skip(n)) }
    }

    /// 条件首次不满足时永久结束。
    pub fn take_while(self, pred: impl FnMut(&T) -> bool + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.iter.take_while(pred)) }
    }

    /// 丢弃满足条件的前缀，之后的元素全部保留。
    pub fn drop_while(self, pred: impl FnMut(&T) -> bool + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.iter.skip_while(pred)) }
    }

    /// 可失败的`map`，错误作为元素向下游传递，由`try_*`终结操作截停。
    pub fn try_map<R: 'a, E: 'a>(self, f: impl FnMut(T) -> Result<R, E> + 'a) -> Pipe<'a, Result<R, E>> {
        Pipe { iter: Box::new(self.iter.map(f)) }
    }

    /// 可失败的`filter`，条件出错时向下游传递错误。
    pub fn try_filter<E: 'a>(self, mut pred: impl FnMut(&T) -> Result<bool, E> + 'a) -> Pipe<'a, Result<T, E>> {
        Pipe {
            iter: Box::new(self.iter.filter_map(move |item| match pred(&item) {
                Ok(true) => Some(Ok(item)),
                Ok(false) => None,
                Err(err) => Some(Err(err)),
            })),
        }
    }
}
