//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{App, ListMode, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area);

    // 左右分栏：导航较窄，内容占剩余宽度
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(content_area);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, status_area);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 当前页面的标题（表单页带上 Zone 名称）
fn page_title(app: &App) -> String {
    let texts = t();
    match app.current_page {
        Page::PurgeAll => texts.zones.title_purge_all.to_string(),
        Page::PurgeUrls => texts.zones.title_purge_urls.to_string(),
        Page::PurgeTags => texts.zones.title_purge_tags.to_string(),
        Page::QuickPurge => texts.quick_purge.title.to_string(),
        Page::UrlForm => {
            let zone = app.url_form.zone.as_ref().map_or("", |z| z.name.as_str());
            fill(texts.url_form.title, &[("zone", zone)])
        }
        Page::TagForm => {
            let zone = app.tag_form.zone.as_ref().map_or("", |z| z.name.as_str());
            let template = match app.tag_form.mode {
                ListMode::Tags => texts.tag_form.title_tags,
                ListMode::Prefixes => texts.tag_form.title_prefixes,
            };
            fill(template, &[("zone", zone)])
        }
    }
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", page_title(app)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags => {
            pages::zone_list::render(app, frame, inner_area);
        }
        Page::UrlForm => pages::url_form::render(app, frame, inner_area),
        Page::QuickPurge => pages::quick_purge::render(app, frame, inner_area),
        Page::TagForm => pages::tag_form::render(app, frame, inner_area),
    }
}
