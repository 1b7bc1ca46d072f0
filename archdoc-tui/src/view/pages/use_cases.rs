//! 用例页面：角色与流程两组折叠面板

use archdoc_core::types::{Actor, Workflow};
use archdoc_core::NavigatorView;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{push_wrapped, scroll_offset};
use crate::model::App;
use crate::view::theme::{colors, Styles};

const DETAIL: &str = "      ";
const STEP_DETAIL: &str = "           ";

/// 渲染用例页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let catalog = app.navigator.catalog();
    let view = app.navigator.view();
    let width = usize::from(area.width);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor_line = 0;

    lines.push(Line::styled("  Actors", Styles::heading()));
    for actor in catalog.actors() {
        let is_selected = app.use_cases.is_actor_selected(&actor.key);
        if is_selected {
            cursor_line = lines.len();
        }
        render_actor(&mut lines, actor, &view, is_selected, width);
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("  Workflows", Styles::heading()));
    for workflow in catalog.workflows() {
        let is_selected = app.use_cases.is_workflow_selected(&workflow.key);
        if is_selected {
            cursor_line = lines.len();
        }
        render_workflow(&mut lines, workflow, &view, is_selected, width);
    }

    let paragraph = Paragraph::new(lines).scroll((scroll_offset(cursor_line, area.height), 0));
    frame.render_widget(paragraph, area);
}

fn render_actor(
    lines: &mut Vec<Line<'static>>,
    actor: &Actor,
    view: &NavigatorView<'_>,
    is_selected: bool,
    width: usize,
) {
    let expanded = view.is_actor_expanded(actor.key.as_str());
    let label = format!("{} {}", actor_glyph(&actor.icon), actor.name);
    lines.push(header_line(expanded, is_selected, label));

    if expanded {
        push_wrapped(lines, &actor.description, (DETAIL, DETAIL), width, Styles::body());
        for use_case in &actor.use_cases {
            push_wrapped(lines, use_case, ("      • ", "        "), width, Styles::body());
        }
    }
}

fn render_workflow(
    lines: &mut Vec<Line<'static>>,
    workflow: &Workflow,
    view: &NavigatorView<'_>,
    is_selected: bool,
    width: usize,
) {
    let expanded = view.is_workflow_expanded(workflow.key.as_str());
    lines.push(header_line(expanded, is_selected, workflow.title.clone()));

    if !expanded {
        return;
    }
    for (n, step) in workflow.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{DETAIL}{:>2}. ", n + 1), Styles::muted()),
            Span::styled(format!("{}: ", step.actor), Style::default().fg(colors().accent)),
            Span::styled(step.action.clone(), Styles::body()),
        ]));
        if !step.detail.is_empty() {
            push_wrapped(lines, &step.detail, (STEP_DETAIL, STEP_DETAIL), width, Styles::muted());
        }
    }
}

/// 折叠面板标题行
fn header_line(expanded: bool, is_selected: bool, label: String) -> Line<'static> {
    let (marker, marker_style) = if expanded {
        ("▼ ", Style::default().fg(colors().success))
    } else {
        ("▶ ", Styles::muted())
    };
    let label_style = if is_selected { Styles::selected() } else { Styles::title() };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(marker, marker_style),
        Span::styled(label, label_style),
    ])
}

/// 角色图标名到终端字符的映射
fn actor_glyph(icon: &str) -> &'static str {
    match icon {
        "user" => "◉",
        "briefcase" => "▤",
        "wrench" => "⚒",
        "shield" => "◈",
        "clipboard" => "▦",
        _ => "•",
    }
}
