/// 以元组作为位置参数调用的函数，供[`Pipe::star_map`](crate::Pipe::star_map)使用。
///
/// 为参数个数1到6的`FnMut`实现。闭包参数需要标注类型。
pub trait StarFn<Args> {
    type Output;

    fn call_star(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_star_fn {
    ($($arg:ident),+) => {
        impl<Func, Ret, $($arg),+> StarFn<($($arg,)+)> for Func
        where
            Func: FnMut($($arg),+) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            fn call_star(&mut self, ($($arg,)+): ($($arg,)+)) -> Ret {
                self($($arg),+)
            }
        }
    };
}

impl_star_fn!(A);
impl_star_fn!(A, B);
impl_star_fn!(A, B, C);
impl_star_fn!(A, B, C, D);
impl_star_fn!(A, B, C, D, E);
impl_star_fn!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use crate::pipe;

    fn area(w: u32, h: u32) -> u32 {
        w * h
    }

    #[test]
    fn test_star_map_fn_item() {
        assert_eq!(pipe![(2, 3), (4, 5)].star_map(area).to_list(), vec![6, 20]);
    }

    #[test]
    fn test_star_map_arity() {
        assert_eq!(pipe![(1,)].star_map(|a: i32| a + 1).to_list(), vec![2]);
        assert_eq!(pipe![("a", 2)].star_map(|s: &str, n: usize| s.repeat(n)).to_list(), vec!["aa"]);
        assert_eq!(
            pipe![(1, 2, 3, 4, 5, 6)]
                .star_map(|a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f)
                .to_list(),
            vec![21]
        );
    }

    #[test]
    fn test_star_map_zip() {
        let names = ["x", "y"];
        let res = pipe![1usize, 2]
            .map(|i| (names[i - 1], i))
            .star_map(|name: &str, i: usize| format!("{name}{i}"))
            .to_list();
        assert_eq!(res, vec!["x1", "y2"]);
    }
}
