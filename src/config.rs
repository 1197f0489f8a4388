/// 排序方向
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum SortOrder {
    /// 升序
    #[default]
    Asc,
    /// 降序，相等元素仍保持原始顺序
    Desc,
}

impl SortOrder {
    /// 按照是否逆序构造。
    #[inline]
    pub fn from_reverse(reverse: bool) -> SortOrder {
        if reverse { SortOrder::Desc } else { SortOrder::Asc }
    }

    #[inline]
    pub fn is_desc(self) -> bool {
        self == SortOrder::Desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reverse() {
        assert_eq!(SortOrder::from_reverse(false), SortOrder::Asc);
        assert_eq!(SortOrder::from_reverse(true), SortOrder::Desc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
        assert!(SortOrder::Desc.is_desc());
    }
}
