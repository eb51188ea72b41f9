//! Tag / 前缀表单视图

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use cf_purge_core::validation::parse_list;

use super::input::render_text_area;
use crate::i18n::{fill, t};
use crate::model::{App, ListMode};
use crate::view::theme::{colors, Styles};

/// 渲染 Tag / 前缀表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let form = &app.tag_form;
    let zone = form.zone.as_ref().map_or("", |z| z.name.as_str());

    let [mode_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(area);

    // 模式切换：当前模式高亮
    let mode_span = |label: &'static str, active: bool| {
        if active {
            Span::styled(format!(" {label} "), Styles::selected())
        } else {
            Span::styled(format!(" {label} "), Styles::label())
        }
    };
    let mode_line = Line::from(vec![
        Span::styled(format!(" {}: ", texts.tag_form.mode), Styles::label()),
        mode_span(texts.tag_form.tags, form.mode == ListMode::Tags),
        Span::raw(" "),
        mode_span(texts.tag_form.prefixes, form.mode == ListMode::Prefixes),
        Span::styled("   Alt+m", Styles::hint_key()),
    ]);
    frame.render_widget(Paragraph::new(mode_line), mode_area);

    let (label, placeholder) = match form.mode {
        ListMode::Tags => (
            texts.tag_form.tags_label,
            texts.tag_form.tags_placeholder.to_string(),
        ),
        ListMode::Prefixes => (
            texts.tag_form.prefixes_label,
            fill(texts.tag_form.prefixes_placeholder, &[("zone", zone)]),
        ),
    };
    render_text_area(
        frame,
        input_area,
        label,
        &form.input,
        &placeholder,
        app.focus.is_content() && !form.is_submitting(),
    );

    let count = parse_list(&form.input).len();
    let mut footer = vec![Line::styled(
        format!(" {}", fill(texts.tag_form.count, &[("count", count.to_string().as_str())])),
        Styles::label(),
    )];
    if form.is_submitting() {
        footer.push(Line::styled(
            format!(" {}", texts.tag_form.submitting),
            Style::default().fg(colors().highlight),
        ));
    } else if let Some(ref error) = form.error {
        footer.push(Line::styled(format!(" ⚠ {error}"), Styles::error()));
    }
    frame.render_widget(Paragraph::new(footer), footer_area);
}
