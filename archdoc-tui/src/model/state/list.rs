//! 列表光标

/// 固定长度列表中的光标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// 当前选中的索引
    pub selected: usize,
    /// 列表长度
    pub len: usize,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    /// 跳转到指定索引（越界时忽略）
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_bounds() {
        let mut cursor = ListCursor::new(3);
        cursor.select_next();
        cursor.select_next();
        cursor.select_next();
        assert_eq!(cursor.selected, 2);

        cursor.select_first();
        cursor.select_previous();
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        let mut cursor = ListCursor::new(0);
        cursor.select_next();
        cursor.select_last();
        cursor.select(4);
        assert_eq!(cursor.selected, 0);
        assert!(cursor.is_empty());
    }
}
