//! 帮助窗口

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::view::theme::{colors, Styles};

const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("Tab ←→", "Switch panel"),
    ("1-5", "Jump to section"),
    ("t", "Toggle theme"),
    ("Esc", "Back"),
    ("q", "Quit"),
];

const LIST_KEYS: &[(&str, &str)] = &[
    ("↑↓/jk", "Move up/down"),
    ("Home/End", "First/last item"),
    ("Enter", "Open / expand"),
    ("Space", "Expand/collapse"),
    ("c", "Collapse all panels"),
];

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助窗口
pub fn render(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(50, 19, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::styled("Global shortcuts", Styles::heading()), Line::from("")];
    lines.extend(GLOBAL_KEYS.iter().map(|&(key, desc)| key_line(key, desc)));
    lines.push(Line::from(""));
    lines.push(Line::styled("Content panel", Styles::heading()));
    lines.push(Line::from(""));
    lines.extend(LIST_KEYS.iter().map(|&(key, desc)| key_line(key, desc)));
    lines.push(Line::from(""));
    lines.push(Line::styled("Press Esc or ? to close", Styles::muted()));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Styles::hint_key()),
        Span::styled(desc, Styles::body()),
    ])
}
