//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmPurgeAll {
            zone_name, focus, ..
        } => render_confirm_purge_all(frame, zone_name, *focus),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 带边框的弹窗底板，返回内边距后的区域
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, border: Style) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border);
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// "Esc / Enter  Close"
fn close_hint() -> Line<'static> {
    let texts = t();
    Line::from(vec![
        Span::styled(
            format!("{} / {}", texts.hints.keys.esc, texts.hints.keys.enter),
            Styles::hint_key(),
        ),
        Span::styled(format!("  {}", texts.common.close), Styles::label()),
    ])
}

/// 清除整个 Zone 缓存的确认弹窗：默认焦点在"取消"
fn render_confirm_purge_all(frame: &mut Frame, zone_name: &str, focus: usize) {
    let texts = t();
    let c = colors();

    let area = centered_rect(60, 11, frame.area());
    let inner = modal_frame(
        frame,
        area,
        texts.modal.confirm_purge_title,
        Style::default().fg(c.error),
    );

    let cancel_style = if focus == 0 {
        Style::default().fg(c.selected_fg).bg(c.selected_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let purge_style = if focus == 1 {
        Style::default().fg(c.selected_fg).bg(c.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            fill(texts.modal.confirm_purge_message, &[("zone", zone_name)]),
            Style::default().fg(c.fg),
        ),
        Line::from(""),
        Line::styled(texts.modal.confirm_purge_warning, Style::default().fg(c.warning)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.purge), purge_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());
    let inner = modal_frame(frame, area, title, Style::default().fg(c.error));

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        close_hint(),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗：按分组列出快捷键
fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let c = colors();

    let sections: [(&str, &[(&str, &str)]); 4] = [
        (help.global, help.global_keys),
        (help.zone_list, help.zone_list_keys),
        (help.forms, help.form_keys),
        (help.quick_purge, help.quick_purge_keys),
    ];

    let mut lines = Vec::new();
    for (title, keys) in sections {
        lines.push(Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<20}"), Styles::hint_key()),
                Span::styled(*desc, Style::default().fg(c.fg)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(close_hint());

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(56, height, frame.area());
    let inner = modal_frame(frame, area, help.title, Style::default().fg(c.border_focused));

    frame.render_widget(Paragraph::new(lines), inner);
}
