//! 底部状态栏组件：左侧快捷键提示，右侧通知

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Notification, NotificationKind, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let notice = app.notification.as_ref().map(notification_line);
    let notice_width = notice.as_ref().map_or(0, |line| line.width() + 1);
    let notice_width = u16::try_from(notice_width).unwrap_or(u16::MAX);

    let [hints_area, notice_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(notice_width)]).areas(area);

    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        hints_area,
    );

    if let Some(line) = notice {
        frame.render_widget(
            Paragraph::new(line).style(Styles::statusbar()),
            notice_area,
        );
    }
}

/// 通知按类型着色
fn notification_line(notification: &Notification) -> Line<'static> {
    let c = colors();
    let (icon, color) = match notification.kind {
        NotificationKind::Info => ("", c.fg),
        NotificationKind::InProgress => ("⟳ ", c.highlight),
        NotificationKind::Success => ("✓ ", c.success),
        NotificationKind::Failure => ("✗ ", c.error),
    };
    let text = format!("{icon}{}", notification.text());
    Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// 根据当前焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags if app.zones.filtering => {
                hints.push((keys.enter, actions.apply_filter));
                hints.push((keys.esc, actions.clear_filter));
            }
            Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, actions.open));
                hints.push(("/", actions.filter));
                hints.push(("Alt+c", actions.copy_id));
                hints.push(("Alt+d", actions.copy_domain));
            }
            Page::UrlForm | Page::TagForm => {
                hints.push((keys.enter, actions.newline));
                hints.push((keys.submit, actions.submit));
                hints.push(("Alt+v", actions.paste));
                if app.current_page == Page::TagForm {
                    hints.push(("Alt+m", actions.toggle_mode));
                }
                hints.push((keys.esc, actions.back));
            }
            Page::QuickPurge => {
                hints.push((keys.arrows_ud, actions.switch_field));
                hints.push((keys.arrows_lr, actions.change_zone));
                hints.push(("Alt+v", actions.paste));
                hints.push((keys.enter, actions.submit));
            }
        },
    }

    hints.push(("Alt+h", actions.help));
    hints.push((keys.quit, actions.quit));
    hints
}
