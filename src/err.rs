use thiserror::Error;

/// 可失败终结操作的返回值
pub type PipeRes<T, E> = Result<T, PipeErr<E>>;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PipeErr<E> {
    /// 调用方提供的函数在第`index`个元素（从0开始）上失败，流水线已部分消耗。
    #[error("[Func] Caller function failed on item `{index}`: {source}")]
    Func { index: usize, source: E },
}

impl<E> PipeErr<E> {
    pub(crate) fn func(index: usize, source: E) -> PipeErr<E> {
        tracing::debug!(index, "pipe stopped on caller function failure");
        PipeErr::Func { index, source }
    }

    /// 失败元素的位置。
    pub fn index(&self) -> usize {
        match self {
            PipeErr::Func { index, .. } => *index,
        }
    }

    /// 取出调用方函数的原始错误。
    pub fn into_inner(self) -> E {
        match self {
            PipeErr::Func { source, .. } => source,
        }
    }
}
