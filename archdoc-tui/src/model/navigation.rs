//! 章节导航状态定义

use archdoc_core::Section;

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub section: Section,
    pub icon: &'static str,
}

/// 导航状态
///
/// `selected` 只是侧边栏光标；真正的当前章节由 `Navigator` 持有，
/// 按 Enter 确认后才会切换。
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前光标所在的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态（五个章节）
    pub fn new() -> Self {
        Self {
            items: Section::ALL
                .into_iter()
                .map(|section| NavItem {
                    section,
                    icon: section_icon(section),
                })
                .collect(),
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 跳转到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳转到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取光标所在的章节
    pub fn current_section(&self) -> Option<Section> {
        self.items.get(self.selected).map(|item| item.section)
    }

    /// 将光标移动到指定章节（章节被其他方式切换时保持同步）
    pub fn sync_to(&mut self, section: Section) {
        if let Some(index) = self.items.iter().position(|item| item.section == section) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Functional => "✓",
        Section::NonFunctional => "◎",
        Section::UseCase => "@",
        Section::Component => "▣",
        Section::Architecture => "≡",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.selected, 0);

        nav.select_last();
        nav.select_next();
        assert_eq!(nav.current_section(), Some(Section::Architecture));
    }

    #[test]
    fn sync_moves_cursor_to_section() {
        let mut nav = NavigationState::new();
        nav.sync_to(Section::Component);
        assert_eq!(nav.selected, 3);
        assert_eq!(nav.current_section(), Some(Section::Component));
    }
}
