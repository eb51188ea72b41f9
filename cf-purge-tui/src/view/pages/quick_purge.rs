//! Quick Purge 页面视图

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::input::render_line_input;
use crate::i18n::{fill, t};
use crate::model::{App, QuickPurgeField};
use crate::view::theme::{colors, Styles};

/// 渲染 Quick Purge 表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let form = &app.quick_purge;
    let content_focused = app.focus.is_content();

    let [desc_area, url_area, url_msg_area, zone_area, zone_msg_area, _, action_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {}", texts.quick_purge.description), Styles::label())),
        desc_area,
    );

    // URL 输入
    render_line_input(
        frame,
        url_area,
        texts.quick_purge.url_label,
        &form.url,
        texts.quick_purge.url_placeholder,
        content_focused && form.focus == QuickPurgeField::Url && !form.is_submitting(),
    );
    if let Some(ref error) = form.url_error {
        frame.render_widget(
            Paragraph::new(Line::styled(format!(" ⚠ {error}"), Styles::error())),
            url_msg_area,
        );
    }

    // Zone 选择器
    let zone_focused = content_focused && form.focus == QuickPurgeField::Zone;
    let zone_text = match form.selected_zone_id.as_deref() {
        None => texts.quick_purge.select_zone.to_string(),
        Some(id) => app
            .zones
            .find(id)
            .map_or_else(|| id.to_string(), |zone| zone.name.clone()),
    };
    let zone_style = if form.selected_zone_id.is_none() {
        Styles::placeholder()
    } else {
        Style::default().fg(c.fg)
    };
    let zone_line = if zone_focused {
        Line::from(vec![
            Span::styled("◀ ", Styles::hint_key()),
            Span::styled(zone_text, zone_style),
            Span::styled(" ▶", Styles::hint_key()),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::styled(zone_text, zone_style)])
    };
    let zone_block = Block::default()
        .title(format!(" {} ", texts.quick_purge.zone_label))
        .title_style(Styles::label())
        .borders(Borders::ALL)
        .border_style(Styles::border(zone_focused));
    frame.render_widget(Paragraph::new(zone_line).block(zone_block), zone_area);

    // Zone 错误优先于自动识别提示
    let zone_msg = if let Some(ref error) = form.zone_error {
        Some(Line::styled(format!(" ⚠ {error}"), Styles::error()))
    } else {
        form.detected_zone.as_deref().map(|zone| {
            Line::styled(
                format!(" ✓ {}", fill(texts.quick_purge.auto_detected, &[("zone", zone)])),
                Style::default().fg(c.success),
            )
        })
    };
    if let Some(line) = zone_msg {
        frame.render_widget(Paragraph::new(line), zone_msg_area);
    }

    // 提交按钮 / 进行中
    let action = if form.initializing {
        Line::styled(format!(" {}", texts.quick_purge.initializing), Styles::label())
    } else if form.is_submitting() {
        Line::styled(
            format!(" {}", texts.quick_purge.submitting),
            Style::default().fg(c.highlight),
        )
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", texts.quick_purge.submit),
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", texts.hints.keys.enter), Styles::hint_key()),
        ])
    };
    frame.render_widget(Paragraph::new(action), action_area);
}
