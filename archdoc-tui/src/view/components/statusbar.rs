//! 底部状态栏组件

use archdoc_core::Section;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(c.warning)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// 根据焦点和章节生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.section() {
            Section::Functional | Section::NonFunctional => {
                hints.push(("↑↓", "Scroll"));
            }
            Section::UseCase => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Expand/Collapse"));
                hints.push(("c", "Collapse All"));
            }
            Section::Component => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Details"));
                hints.push(("Esc", "Clear"));
            }
            Section::Architecture => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Open Component"));
            }
        },
    }

    hints.push(("1-5", "Jump"));
    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));
    hints
}
