//! URL 列表表单视图

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::input::render_text_area;
use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染 URL 表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let form = &app.url_form;
    let zone = form.zone.as_ref().map_or("", |z| z.name.as_str());

    let [input_area, footer_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(area);

    render_text_area(
        frame,
        input_area,
        texts.url_form.label,
        &form.input,
        &fill(texts.url_form.placeholder, &[("zone", zone)]),
        app.focus.is_content() && !form.is_submitting(),
    );

    let count = form.input.lines().filter(|l| !l.trim().is_empty()).count();
    let mut footer = vec![Line::styled(
        format!(" {}", fill(texts.url_form.count, &[("count", count.to_string().as_str())])),
        Styles::label(),
    )];
    if form.is_submitting() {
        footer.push(Line::styled(
            format!(" {}", texts.url_form.submitting),
            Style::default().fg(colors().highlight),
        ));
    } else if let Some(ref error) = form.error {
        footer.push(Line::styled(format!(" ⚠ {error}"), Styles::error()));
    }
    frame.render_widget(Paragraph::new(footer), footer_area);
}
