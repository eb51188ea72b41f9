//! Zone 列表页面视图（Purge All / Purge URLs / Purge Tags 共用）

use cf_purge_core::Zone;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{fill, t};
use crate::model::{App, Page};
use crate::view::theme::{colors, Styles};

/// 渲染 Zone 列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let zones = &app.zones;
    let show_filter = zones.filtering || !zones.filter.is_empty();

    let [desc_area, filter_area, list_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(u16::from(show_filter)),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {}", description(app.current_page)), Styles::label())),
        desc_area,
    );

    if show_filter {
        render_filter(app, frame, filter_area);
    }

    if zones.zones.is_empty() {
        render_empty(app, frame, list_area);
        return;
    }

    let visible = zones.visible();
    if visible.is_empty() {
        let text = fill(t().zones.no_match, &[("filter", zones.filter.as_str())]);
        frame.render_widget(
            Paragraph::new(Line::styled(format!("  {text}"), Styles::label())),
            list_area,
        );
        return;
    }

    let in_flight = match app.current_page {
        Page::PurgeAll => app.purge_all.in_flight.as_deref(),
        _ => None,
    };
    let items: Vec<ListItem> = visible
        .iter()
        .map(|zone| zone_item(zone, in_flight == Some(zone.id.as_str())))
        .collect();

    let list = List::new(items)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(zones.selected));
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn description(page: Page) -> &'static str {
    let texts = t();
    match page {
        Page::PurgeUrls => texts.zones.purge_urls_desc,
        Page::PurgeTags => texts.zones.purge_tags_desc,
        _ => texts.zones.purge_all_desc,
    }
}

/// 筛选输入行
fn render_filter(app: &App, frame: &mut Frame, area: Rect) {
    let prefix = format!(" {}: /", t().zones.filter);
    let line = Line::from(vec![
        Span::styled(prefix.clone(), Styles::hint_key()),
        Span::raw(app.zones.filter.clone()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if app.zones.filtering {
        let col = prefix.width() + app.zones.filter.width();
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            area.x + col.min(area.width.saturating_sub(1)),
            area.y,
        ));
    }
}

/// 加载中 / 加载失败 / 没有 Zone
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let zones = &app.zones;

    let content = if zones.loading {
        vec![Line::styled(format!("  {}", texts.zones.loading), Styles::label())]
    } else if let Some(ref error) = zones.error {
        vec![
            Line::styled(
                format!("  {}", texts.zones.load_failed),
                Style::default().fg(c.error),
            ),
            Line::from(""),
            Line::styled(format!("  {error}"), Style::default().fg(c.fg)),
            Line::from(""),
            Line::styled(format!("  {}", texts.zones.retry_hint), Styles::label()),
        ]
    } else {
        vec![Line::styled(format!("  {}", texts.zones.no_zones), Styles::label())]
    };

    frame.render_widget(Paragraph::new(content), area);
}

/// 一行：状态图标、名称、ID、状态标签
fn zone_item(zone: &Zone, purging: bool) -> ListItem<'static> {
    let texts = t();
    let c = colors();

    // 暂停优先于状态
    let (tag, color) = if zone.paused {
        (texts.zones.status_paused.to_string(), c.warning)
    } else if zone.status.is_active() {
        (texts.zones.status_active.to_string(), c.success)
    } else {
        (zone.status.as_str().to_string(), c.muted)
    };

    let mut spans = vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::styled(format!("{:<32}", zone.name), Style::default().fg(c.fg)),
        Span::styled(format!(" {} ", zone.id), Styles::label()),
        Span::styled(format!(" {tag}"), Style::default().fg(color)),
    ];
    if purging {
        spans.push(Span::styled(
            format!("  {}", texts.zones.purging),
            Style::default().fg(c.highlight),
        ));
    }

    ListItem::new(Line::from(spans))
}
