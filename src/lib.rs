//! 惰性序列流水线。
//!
//! [`Pipe`] 包装任意有限或无限的迭代器，提供可链式调用的中间操作（map、filter、flat_map、
//! distinct、sorted、limit、skip等）和终结操作（reduce、to_list、group_by、any_match等）。
//!
//! 中间操作只组装新的迭代器，不拉取元素（`distinct`和`sorted`除外，它们在调用时即读取全部元素）；
//! 终结操作消耗流水线并返回普通值。
//!
//! 例如：
//! ```
//! use rstream::{Pipe, SortOrder, pipe};
//!
//! let squares = Pipe::new(0..10).filter(|x| x % 2 == 0).map(|x| x * x).to_list();
//! assert_eq!(squares, vec![0, 4, 16, 36, 64]);
//!
//! let sorted = pipe![3, 1, 2, 1].distinct().sorted(SortOrder::Asc).to_list();
//! assert_eq!(sorted, vec![1, 2, 3]);
//! ```

mod config;
mod err;
mod input;
mod map;
mod op;
mod output;
mod pipe;

pub use config::SortOrder;
pub use err::{PipeErr, PipeRes};
pub use map::OrderedMap;
pub use op::StarFn;
pub use pipe::{Cursor, IntoPipe, Pipe};

/// 整数类型
pub type Integer = i64;
