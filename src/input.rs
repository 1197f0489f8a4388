use crate::Integer;
use crate::pipe::Pipe;
use std::iter::repeat;

impl<'a> Pipe<'a, Integer> {
    /// 生成指定范围内的整数作为输入。
    ///
    /// * `start` - 起始值，包含。
    /// * `end` - 结束值，包含，未指定时生成到整数最大值。如果起始值大于结束值，则无数据生成。
    /// * `step` - 步长。正值表示正序生成；负值表示从结束值开始逆序生成；0表示无限重复起始值。
    ///
    /// 例如：
    /// ```
    /// use rstream::Pipe;
    /// assert_eq!(Pipe::range(0, Some(10), 2).to_list(), vec![0, 2, 4, 6, 8, 10]);
    /// assert_eq!(Pipe::range(0, Some(4), -2).to_list(), vec![4, 2, 0]);
    /// assert_eq!(Pipe::range(5, None, 1).limit(3).to_list(), vec![5, 6, 7]);
    /// ```
    pub fn range(start: Integer, end: Option<Integer>, step: Integer) -> Pipe<'a, Integer> {
        let end = end.unwrap_or(Integer::MAX);
        let iter = RangeIter { step: step.unsigned_abs(), next: start, next_back: end, done: start > end };
        if step < 0 { Pipe::new(iter.rev()) } else { Pipe::new(iter) }
    }
}

impl<'a, T: Clone + 'a> Pipe<'a, T> {
    /// 重复值作为输入。
    ///
    /// * `count` - 重复次数，未指定时无限重复。
    pub fn repeat(value: T, count: Option<usize>) -> Pipe<'a, T> {
        if let Some(count) = count { Pipe::new(std::iter::repeat_n(value, count)) } else { Pipe::new(repeat(value)) }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct RangeIter {
    step: u64,
    next: Integer,
    next_back: Integer,
    done: bool,
}

impl Iterator for RangeIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.next;
        if res == self.next_back {
            // 与反向游标相遇，步长为0时两端不会移动
            self.done = self.step != 0;
            return Some(res);
        }
        match res.checked_add_unsigned(self.step) {
            Some(next) if next <= self.next_back => self.next = next,
            _ => self.done = true,
        }
        Some(res)
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.next_back;
        if res == self.next {
            self.done = self.step != 0;
            return Some(res);
        }
        match res.checked_sub_unsigned(self.step) {
            Some(next_back) if next_back >= self.next => self.next_back = next_back,
            _ => self.done = true,
        }
        Some(res)
    }
}
