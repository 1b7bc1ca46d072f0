//! 需求列表页面（功能 / 非功能）

use archdoc_core::types::{Priority, RequirementKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::push_wrapped;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const INDENT: &str = "        ";

/// 渲染需求列表
pub fn render(app: &App, kind: RequirementKind, frame: &mut Frame, area: Rect) {
    let cursor = app.requirement_cursor(kind);
    if cursor.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled("  No requirements in this catalog", Styles::muted()),
        ]);
        frame.render_widget(empty, area);
        return;
    }

    let width = usize::from(area.width);
    let items: Vec<ListItem> = app
        .navigator
        .catalog()
        .requirements(kind)
        .enumerate()
        .map(|(i, requirement)| {
            let is_selected = i == cursor.selected;
            let title_style = if is_selected { Styles::selected() } else { Styles::title() };

            let mut lines = vec![Line::from(vec![
                Span::styled(format!("  {:<7} ", requirement.id), Styles::heading()),
                Span::styled(requirement.title.clone(), title_style),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", requirement.priority.label()),
                    priority_style(requirement.priority),
                ),
            ])];
            push_wrapped(
                &mut lines,
                &requirement.description,
                (INDENT, INDENT),
                width,
                Styles::body(),
            );
            if let Some(category) = &requirement.category {
                lines.push(Line::styled(format!("{INDENT}# {category}"), Styles::muted()));
            }
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(cursor.selected));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}

fn priority_style(priority: Priority) -> Style {
    let c = colors();
    match priority {
        Priority::Must => Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        Priority::Should => Style::default().fg(c.accent),
        Priority::Could => Style::default().fg(c.muted),
    }
}
