//! 章节页面
//!
//! 每个页面一个 `render(app, frame, area)`，需求页面额外接收需求类型。

pub mod architecture;
pub mod components;
pub mod requirements;
pub mod use_cases;

use ratatui::{style::Style, text::Line};

use crate::util::wrap;

/// 让第 `line` 行留在高度为 `height` 的视口内所需的滚动偏移
pub(super) fn scroll_offset(line: usize, height: u16) -> u16 {
    let height = usize::from(height);
    if height == 0 || line < height {
        return 0;
    }
    u16::try_from(line + 1 - height).unwrap_or(u16::MAX)
}

/// 按宽度折行后追加；首行使用 `first`，后续行使用 `rest` 作为前缀
pub(super) fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    (first, rest): (&str, &str),
    width: usize,
    style: Style,
) {
    let available = width.saturating_sub(first.chars().count()).max(1);
    for (i, chunk) in wrap(text, available).into_iter().enumerate() {
        let prefix = if i == 0 { first } else { rest };
        lines.push(Line::styled(format!("{prefix}{chunk}"), style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_line_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
        assert_eq!(scroll_offset(5, 0), 0);
    }

    #[test]
    fn wrapped_lines_carry_prefixes() {
        let mut lines = Vec::new();
        push_wrapped(&mut lines, "alpha beta gamma", ("  • ", "    "), 12, Style::default());
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["  • alpha", "    beta", "    gamma"]);
    }
}
