//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavItemId};
use crate::view::theme::{colors, Styles};

/// 导航项的翻译标签
fn label(id: NavItemId) -> &'static str {
    let nav = &t().nav;
    match id {
        NavItemId::PurgeAll => nav.purge_all,
        NavItemId::PurgeUrls => nav.purge_urls,
        NavItemId::QuickPurge => nav.quick_purge,
        NavItemId::PurgeTags => nav.purge_tags,
    }
}

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    // 当前页面所属的导航项即使焦点不在导航栏也保持标记
    let current = app.current_page.parent().unwrap_or(app.current_page);

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .map(|item| {
            let marker = if item.id.page() == current { "▌" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(c.highlight)),
                Span::raw(format!("{} {}", item.icon, label(item.id))),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(c.fg))
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
