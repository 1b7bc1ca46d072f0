//! 主布局渲染

use archdoc_core::types::RequirementKind;
use archdoc_core::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::util::truncate;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(colors().bg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 帮助窗口在最上层
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::raw(concat!(" archdoc v", env!("CARGO_PKG_VERSION"))),
        Span::raw(" │ "),
        Span::raw(truncate(&app.catalog_label, usize::from(area.width).saturating_sub(20))),
    ]);
    frame.render_widget(Paragraph::new(title).style(Styles::statusbar()), area);
}

/// 根据当前章节渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let section = app.section();

    let block = Block::default()
        .title(format!(" {} ", section.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match section {
        Section::Functional => {
            pages::requirements::render(app, RequirementKind::Functional, frame, inner_area);
        }
        Section::NonFunctional => {
            pages::requirements::render(app, RequirementKind::NonFunctional, frame, inner_area);
        }
        Section::UseCase => pages::use_cases::render(app, frame, inner_area),
        Section::Component => pages::components::render(app, frame, inner_area),
        Section::Architecture => pages::architecture::render(app, frame, inner_area),
    }
}
