//! 左侧章节导航组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let active = app.section();

    let block = Block::default()
        .title(" Sections ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_cursor = i == app.navigation.selected;
            let prefix = if is_cursor { "▶ " } else { "  " };

            let style = if is_cursor {
                Styles::selected()
            } else if nav_item.section == active {
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
            } else {
                Styles::body()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix}{} ", nav_item.icon), style),
                Span::styled(nav_item.section.title(), style),
                Span::styled(format!(" {}", i + 1), Styles::muted()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
