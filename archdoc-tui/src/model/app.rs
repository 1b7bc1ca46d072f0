//! 应用主状态结构

use archdoc_core::types::RequirementKind;
use archdoc_core::{Navigator, Section};

use super::{FocusPanel, ListCursor, NavigationState, UseCasesState};
use crate::view::theme::Theme;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 侧边栏导航状态
    pub navigation: NavigationState,

    /// 章节 / 组件选中 / 折叠面板状态（唯一真相来源）
    pub navigator: Navigator,

    /// 目录来源描述（显示在标题栏）
    pub catalog_label: String,

    // === 各页面光标 ===
    /// 功能需求列表
    pub functional: ListCursor,
    /// 非功能需求列表
    pub non_functional: ListCursor,
    /// 用例页面
    pub use_cases: UseCasesState,
    /// 组件列表
    pub components: ListCursor,
    /// 架构分层列表
    pub layers: ListCursor,

    /// 是否显示帮助
    pub show_help: bool,

    /// 当前主题
    pub theme: Theme,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(navigator: Navigator, catalog_label: impl Into<String>, theme: Theme) -> Self {
        let catalog = navigator.catalog();
        let functional = ListCursor::new(catalog.requirements(RequirementKind::Functional).count());
        let non_functional =
            ListCursor::new(catalog.requirements(RequirementKind::NonFunctional).count());
        let use_cases = UseCasesState::from_catalog(catalog);
        let components = ListCursor::new(catalog.components().len());
        let layers = ListCursor::new(catalog.layers().len());

        let mut navigation = NavigationState::new();
        navigation.sync_to(navigator.current_section());

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation,
            navigator,
            catalog_label: catalog_label.into(),
            functional,
            non_functional,
            use_cases,
            components,
            layers,
            show_help: false,
            theme,
            status_message: None,
        }
    }

    /// 当前章节
    pub fn section(&self) -> Section {
        self.navigator.current_section()
    }

    /// 需求列表光标（只读）
    pub fn requirement_cursor(&self, kind: RequirementKind) -> &ListCursor {
        match kind {
            RequirementKind::Functional => &self.functional,
            RequirementKind::NonFunctional => &self.non_functional,
        }
    }

    /// 当前页面的列表光标
    pub fn current_cursor_mut(&mut self) -> &mut ListCursor {
        match self.section() {
            Section::Functional => &mut self.functional,
            Section::NonFunctional => &mut self.non_functional,
            Section::UseCase => &mut self.use_cases.cursor,
            Section::Component => &mut self.components,
            Section::Architecture => &mut self.layers,
        }
    }

    /// 切换章节并同步侧边栏光标
    pub fn switch_section(&mut self, section: Section) {
        self.navigator.set_active_section(section);
        self.navigation.sync_to(section);
        self.clear_status();
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
