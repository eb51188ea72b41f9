//! 文本框渲染：光标位置按显示宽度计算（中文等宽字符占两列）

use ratatui::{
    layout::{Position, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::view::theme::Styles;

/// 多行文本框，内容超出高度时滚动到末尾
pub fn render_text_area(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    text: &str,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {label} "))
        .title_style(Styles::label())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    let lines: Vec<&str> = text.split('\n').collect();
    let scroll = scroll_offset(lines.len(), inner.height);

    let paragraph = if text.is_empty() {
        Paragraph::new(Line::styled(placeholder.to_string(), Styles::placeholder()))
    } else {
        Paragraph::new(
            lines
                .iter()
                .map(|line| Line::raw((*line).to_string()))
                .collect::<Vec<_>>(),
        )
        .scroll((scroll, 0))
    };
    frame.render_widget(paragraph.block(block), area);

    if focused {
        let last = lines.last().copied().unwrap_or_default();
        let row = to_u16(lines.len().saturating_sub(1)).saturating_sub(scroll);
        let col = to_u16(last.width()).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }
}

/// 单行输入框，过长时只显示尾部
pub fn render_line_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    text: &str,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {label} "))
        .title_style(Styles::label())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    let visible = tail_fit(text, usize::from(inner.width.saturating_sub(1)));
    let line = if text.is_empty() {
        Line::styled(placeholder.to_string(), Styles::placeholder())
    } else {
        Line::raw(visible.to_string())
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let col = to_u16(visible.width()).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + col, inner.y));
    }
}

/// 截取能放进 `width` 列的最长后缀
fn tail_fit(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// 让最后一行保持可见所需的滚动行数
fn scroll_offset(line_count: usize, height: u16) -> u16 {
    to_u16(line_count).saturating_sub(height)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fit_keeps_the_end_of_long_input() {
        assert_eq!(tail_fit("https://example.com", 40), "https://example.com");
        assert_eq!(tail_fit("https://example.com/abc", 3), "abc");
    }

    #[test]
    fn tail_fit_counts_wide_chars_as_two_columns() {
        assert_eq!(tail_fit("a中文", 4), "中文");
        assert_eq!(tail_fit("a中文", 3), "文");
    }

    #[test]
    fn scrolls_only_when_lines_overflow() {
        assert_eq!(scroll_offset(3, 5), 0);
        assert_eq!(scroll_offset(8, 5), 3);
    }
}
