//! 组件页面：左侧组件列表，右侧组件详情

use archdoc_core::types::{ComponentDetail, ConfigCategory};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::push_wrapped;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染组件页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    render_list(app, frame, columns[0]);

    let detail_area = columns[1].inner(Margin::new(2, 0));
    render_detail(app, frame, detail_area);
}

/// 渲染组件列表；● 标记当前选中的组件
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let chosen = app.navigator.state().selected_component();

    let items: Vec<ListItem> = app
        .navigator
        .catalog()
        .components()
        .enumerate()
        .map(|(i, component)| {
            let is_cursor = i == app.components.selected;
            let marker = if chosen.is_some_and(|key| *key == component.key) {
                "● "
            } else {
                "  "
            };
            let style = if is_cursor { Styles::selected() } else { Styles::body() };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(c.success)),
                Span::styled(component.title.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Styles::border(false)),
    );

    let mut state = ListState::default();
    state.select(Some(app.components.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// 渲染右侧详情
fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let view = app.navigator.view();
    let lines = match (view.component_detail, app.navigator.state().selected_component()) {
        (Some(detail), _) => detail_lines(app, detail, usize::from(area.width)),
        (None, Some(key)) => vec![
            Line::from(""),
            Line::styled(
                format!("Component '{key}' is not in this catalog"),
                Style::default().fg(colors().warning),
            ),
        ],
        (None, None) => vec![
            Line::from(""),
            Line::styled("Select a component and press Enter", Styles::muted()),
            Line::styled("to see its integrations and configuration.", Styles::muted()),
        ],
    };

    frame.render_widget(Paragraph::new(lines), area);
}

fn detail_lines(app: &App, detail: &ComponentDetail, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(detail.title.clone(), Styles::title()),
        Line::styled(detail.key.to_string(), Styles::muted()),
        Line::from(""),
    ];
    push_wrapped(&mut lines, &detail.description, ("", ""), width, Styles::body());

    let layers: Vec<&str> = app
        .navigator
        .catalog()
        .layers_of(detail.key.as_str())
        .map(|layer| layer.name.as_str())
        .collect();
    if !layers.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Layer: ", Styles::heading()),
            Span::styled(layers.join(", "), Styles::body()),
        ]));
    }

    if !detail.integrations.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Integrations", Styles::heading()));
        for integration in &detail.integrations {
            push_wrapped(&mut lines, integration, ("  • ", "    "), width, Styles::body());
        }
    }

    if !detail.data_flow.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Data Flow", Styles::heading()));
        for (n, step) in detail.data_flow.iter().enumerate() {
            let number = format!("  {}. ", n + 1);
            push_wrapped(&mut lines, step, (number.as_str(), "     "), width, Styles::body());
        }
    }

    if !detail.configuration.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Configuration", Styles::heading()));
        for category in ConfigCategory::ALL {
            let entries = detail.configuration.entries(category);
            if entries.is_empty() {
                continue;
            }
            lines.push(Line::styled(format!("  {}", category.label()), Styles::title()));
            for entry in entries {
                push_wrapped(&mut lines, entry, ("    - ", "      "), width, Styles::body());
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::builtin_app;

    #[test]
    fn detail_lists_every_configuration_entry() {
        let mut app = builtin_app();
        app.navigator.select_component(Some("openai"));
        let detail = app.navigator.current_component_detail().unwrap();

        let text: Vec<String> = detail_lines(&app, detail, 200)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(text[0], detail.title);
        for category in ConfigCategory::ALL {
            for entry in detail.configuration.entries(category) {
                assert!(text.iter().any(|line| line.contains(entry.as_str())));
            }
        }
        assert!(text.iter().any(|line| line.starts_with("Layer: ")));
    }
}
