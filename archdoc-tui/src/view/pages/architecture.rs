//! 架构分层页面

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::push_wrapped;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const INDENT: &str = "     ";

/// 渲染分层列表；每层下列出所属组件
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let catalog = app.navigator.catalog();
    let width = usize::from(area.width);

    let items: Vec<ListItem> = catalog
        .layers()
        .enumerate()
        .map(|(i, layer)| {
            let is_selected = i == app.layers.selected;
            let name_style = if is_selected { Styles::selected() } else { Styles::title() };

            let mut lines = vec![Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), Styles::muted()),
                Span::styled(layer.name.clone(), name_style),
            ])];
            push_wrapped(&mut lines, &layer.description, (INDENT, INDENT), width, Styles::muted());

            let mut components = vec![Span::raw(INDENT), Span::styled("→ ", Styles::heading())];
            for (n, key) in layer.components.iter().enumerate() {
                if n > 0 {
                    components.push(Span::styled(", ", Styles::muted()));
                }
                components.push(match catalog.component(key.as_str()) {
                    Some(component) => Span::styled(component.title.clone(), Styles::body()),
                    None => Span::styled(key.to_string(), Style::default().fg(c.warning)),
                });
            }
            lines.push(Line::from(components));
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.layers.selected));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}
