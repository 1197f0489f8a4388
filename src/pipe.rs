use std::fmt;

/// 流水线底层的单向游标，只能前进一次。
pub type Cursor<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// 惰性序列流水线。
///
/// 独占一个单向游标。中间操作消耗`self`并返回包装派生游标的新流水线，
/// 终结操作消耗`self`并返回普通值。
pub struct Pipe<'a, T> {
    pub(crate) iter: Cursor<'a, T>,
}

impl<T> Iterator for Pipe<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> fmt::Debug for Pipe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe").field("size_hint", &self.iter.size_hint()).finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Pipe<'a, T> {
    /// 包装任意可迭代对象，不复制其内容。
    pub fn new<I>(source: I) -> Pipe<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe { iter: Box::new(source.into_iter()) }
    }

    /// 使用字面值作为输入。
    ///
    /// 例如：
    /// ```
    /// use rstream::Pipe;
    /// assert_eq!(Pipe::of(["a", "b"]).to_list(), vec!["a", "b"]);
    /// ```
    pub fn of<const N: usize>(values: [T; N]) -> Pipe<'a, T> {
        Pipe::new(values)
    }

    /// 空流水线。
    pub fn empty() -> Pipe<'a, T> {
        Pipe { iter: Box::new(std::iter::empty()) }
    }
}

/// 将任意可迭代对象转为[`Pipe`]。
pub trait IntoPipe<'a>: IntoIterator {
    fn into_pipe(self) -> Pipe<'a, Self::Item>;
}

impl<'a, I> IntoPipe<'a> for I
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    fn into_pipe(self) -> Pipe<'a, Self::Item> {
        Pipe::new(self)
    }
}

/// 使用字面值构造[`Pipe`]，等价于[`Pipe::of`]。
///
/// 例如：
/// ```
/// use rstream::pipe;
/// assert_eq!(pipe![1, 2, 3].count(), 3);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::Pipe::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Pipe::of([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_new_borrows_source() {
        let words = vec!["a".to_string(), "bb".to_string()];
        let lens = Pipe::new(&words).map(|s| s.len()).to_list();
        assert_eq!(lens, vec![1, 2]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_of_and_macro() {
        assert_eq!(Pipe::of([1, 2, 3]).to_list(), vec![1, 2, 3]);
        assert_eq!(pipe![1, 2, 3,].to_list(), vec![1, 2, 3]);
        assert_eq!(pipe!["x"].to_list(), vec!["x"]);
        let empty: Vec<i32> = pipe![].to_list();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_into_pipe() {
        assert_eq!(vec![1, 2].into_pipe().map(|x| x * 10).to_list(), vec![10, 20]);
        assert_eq!("abc".chars().into_pipe().count(), 3);
    }

    #[test]
    fn test_iterate_directly() {
        let mut pipe = Pipe::new(1..=3);
        assert_eq!(pipe.next(), Some(1));
        assert_eq!(pipe.size_hint(), (2, Some(2)));
        let mut rest = Vec::new();
        for x in pipe {
            rest.push(x);
        }
        assert_eq!(rest, vec![2, 3]);
    }

    #[test]
    fn test_construct_pulls_nothing() {
        let pulled = Rc::new(Cell::new(0));
        let counter = pulled.clone();
        let _pipe = Pipe::new((0..).inspect(move |_| counter.set(counter.get() + 1)));
        assert_eq!(pulled.get(), 0);
    }
}
