//! 内容面板更新逻辑
//!
//! 处理 Zone 列表、URL 表单与 Tag 表单中的操作消息。
//! Quick Purge 表单的处理在 quick_purge.rs。

use cf_purge_core::validation::{check_urls_in_zone, parse_list, parse_url_list};
use cf_purge_core::{PurgeRequest, ValidationError};

use crate::backend::Command;
use crate::i18n::{fill, t};
use crate::message::{ContentMessage, PurgeOrigin};
use crate::model::{App, ListMode, Page};

use super::quick_purge;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match app.current_page {
        Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags => update_zone_list(app, msg),
        Page::UrlForm => update_url_form(app, msg),
        Page::TagForm => update_tag_form(app, msg),
        Page::QuickPurge => quick_purge::update(app, msg),
    }
}

// ========== Zone 列表 ==========

fn update_zone_list(app: &mut App, msg: ContentMessage) -> Option<Command> {
    // 筛选输入模式
    if app.zones.filtering {
        match msg {
            ContentMessage::Input(c) => app.zones.push_filter(c),
            ContentMessage::Backspace => app.zones.pop_filter(),
            ContentMessage::Confirm | ContentMessage::Submit | ContentMessage::Newline => {
                app.zones.stop_filter();
            }
            ContentMessage::SelectPrevious => app.zones.select_previous(),
            ContentMessage::SelectNext => app.zones.select_next(),
            _ => {}
        }
        return None;
    }

    match msg {
        ContentMessage::SelectPrevious => app.zones.select_previous(),
        ContentMessage::SelectNext => app.zones.select_next(),
        ContentMessage::SelectFirst => app.zones.select_first(),
        ContentMessage::SelectLast => app.zones.select_last(),
        ContentMessage::StartFilter => app.zones.start_filter(),
        ContentMessage::Confirm => return confirm_zone(app),
        ContentMessage::CopyZoneId => {
            let zone = app.zones.selected_zone()?;
            return Some(Command::CopyToClipboard {
                text: zone.id.clone(),
                label: t().notify.zone_id.to_string(),
            });
        }
        ContentMessage::CopyDomain => {
            let zone = app.zones.selected_zone()?;
            return Some(Command::CopyToClipboard {
                text: zone.name.clone(),
                label: t().notify.domain.to_string(),
            });
        }
        _ => {}
    }
    None
}

/// Enter：Purge All 打开确认弹窗，其余列表页进入表单
fn confirm_zone(app: &mut App) -> Option<Command> {
    let zone = app.zones.selected_zone()?.clone();

    match app.current_page {
        Page::PurgeAll => {
            if app.purge_all.in_flight.is_some() {
                app.set_status(t().notify.purge_in_progress);
            } else {
                app.modal.show_confirm_purge_all(&zone.id, &zone.name);
            }
        }
        Page::PurgeUrls => {
            app.url_form.open(zone);
            app.current_page = Page::UrlForm;
            app.clear_status();
        }
        Page::PurgeTags => {
            app.tag_form.open(zone);
            app.current_page = Page::TagForm;
            app.clear_status();
        }
        _ => {}
    }
    None
}

// ========== URL 表单 ==========

fn update_url_form(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let form = &mut app.url_form;
    match msg {
        ContentMessage::Input(c) => {
            form.input.push(c);
            form.error = None;
        }
        ContentMessage::Backspace => {
            form.input.pop();
            form.error = None;
        }
        ContentMessage::Newline => form.input.push('\n'),
        ContentMessage::Paste => return Some(Command::ReadClipboard),
        ContentMessage::Submit => return submit_url_form(app),
        _ => {}
    }
    None
}

fn submit_url_form(app: &mut App) -> Option<Command> {
    let form = &mut app.url_form;
    if form.is_submitting() {
        return None;
    }
    let zone = form.zone.clone()?;

    let urls = match parse_url_list(&form.input).and_then(|urls| {
        check_urls_in_zone(&urls, &zone)?;
        Ok(urls)
    }) {
        Ok(urls) => urls,
        Err(e) => {
            form.error = Some(e.to_string());
            return None;
        }
    };

    form.error = None;
    form.in_flight = Some(zone.id.clone());

    let count = urls.len();
    app.notify_progress(
        t().notify.purging_urls,
        Some(fill(t().notify.url_count, &[("count", count.to_string().as_str())])),
    );

    Some(Command::Purge {
        zone_id: zone.id,
        request: PurgeRequest::Files(urls),
        origin: PurgeOrigin::Urls {
            zone_name: zone.name,
            count,
        },
    })
}

// ========== Tag / 前缀表单 ==========

fn update_tag_form(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let form = &mut app.tag_form;
    match msg {
        ContentMessage::Input(c) => {
            form.input.push(c);
            form.error = None;
        }
        ContentMessage::Backspace => {
            form.input.pop();
            form.error = None;
        }
        ContentMessage::Newline => form.input.push('\n'),
        ContentMessage::ToggleMode => {
            if !form.is_submitting() {
                form.mode = form.mode.toggle();
                form.error = None;
            }
        }
        ContentMessage::Paste => return Some(Command::ReadClipboard),
        ContentMessage::Submit => return submit_tag_form(app),
        _ => {}
    }
    None
}

fn submit_tag_form(app: &mut App) -> Option<Command> {
    let form = &mut app.tag_form;
    if form.is_submitting() {
        return None;
    }
    let zone = form.zone.clone()?;
    let mode = form.mode;

    let items = parse_list(&form.input);
    if items.is_empty() {
        let err = match mode {
            ListMode::Tags => ValidationError::NoTags,
            ListMode::Prefixes => ValidationError::NoPrefixes,
        };
        form.error = Some(err.to_string());
        return None;
    }

    form.error = None;
    form.in_flight = Some(zone.id.clone());

    let count = items.len();
    let (progress, request) = match mode {
        ListMode::Tags => (t().notify.purging_tags, PurgeRequest::Tags(items)),
        ListMode::Prefixes => (t().notify.purging_prefixes, PurgeRequest::Prefixes(items)),
    };
    app.notify_progress(progress, None);

    Some(Command::Purge {
        zone_id: zone.id,
        request,
        origin: PurgeOrigin::List {
            zone_name: zone.name,
            count,
            mode,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FocusPanel, Modal, NotificationKind};
    use crate::test_utils::zone;

    fn app_on(page: Page) -> App {
        let mut app = App::new(page, None);
        app.focus = FocusPanel::Content;
        app.zones.set_zones(vec![
            zone("z1", "example.com"),
            zone("z2", "example.org"),
            zone("z3", "other.net"),
        ]);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let msg = if c == '\n' {
                ContentMessage::Newline
            } else {
                ContentMessage::Input(c)
            };
            update(app, msg);
        }
    }

    // ===== Zone 列表 =====

    #[test]
    fn purge_all_enter_only_opens_confirmation() {
        let mut app = app_on(Page::PurgeAll);
        update(&mut app, ContentMessage::SelectNext);

        let cmd = update(&mut app, ContentMessage::Confirm);
        assert_eq!(cmd, None);
        assert_eq!(
            app.modal.active,
            Some(Modal::ConfirmPurgeAll {
                zone_id: "z2".into(),
                zone_name: "example.org".into(),
                focus: 0,
            })
        );
    }

    #[test]
    fn purge_all_refuses_second_purge_while_in_flight() {
        let mut app = app_on(Page::PurgeAll);
        app.purge_all.in_flight = Some("z1".into());

        update(&mut app, ContentMessage::Confirm);
        assert!(!app.modal.is_open());
        assert_eq!(
            app.notification.as_ref().map(|n| n.title.as_str()),
            Some("A purge is already in progress")
        );
    }

    #[test]
    fn filter_narrows_selection() {
        let mut app = app_on(Page::PurgeUrls);
        update(&mut app, ContentMessage::StartFilter);
        type_text(&mut app, "OTHER");
        update(&mut app, ContentMessage::Confirm);
        assert!(!app.zones.filtering);

        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.current_page, Page::UrlForm);
        assert_eq!(app.url_form.zone.as_ref().map(|z| z.id.as_str()), Some("z3"));
    }

    #[test]
    fn copy_zone_id_requests_clipboard_write() {
        let mut app = app_on(Page::PurgeAll);
        let cmd = update(&mut app, ContentMessage::CopyZoneId);
        assert_eq!(
            cmd,
            Some(Command::CopyToClipboard {
                text: "z1".into(),
                label: "Zone ID".into(),
            })
        );
    }

    #[test]
    fn confirm_on_empty_list_does_nothing() {
        let mut app = App::new(Page::PurgeUrls, None);
        assert_eq!(update(&mut app, ContentMessage::Confirm), None);
        assert_eq!(app.current_page, Page::PurgeUrls);
    }

    // ===== URL 表单 =====

    fn url_form() -> App {
        let mut app = app_on(Page::PurgeUrls);
        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.current_page, Page::UrlForm);
        app
    }

    #[test]
    fn url_form_submits_valid_list() {
        let mut app = url_form();
        type_text(
            &mut app,
            "https://example.com/a\n\n  https://cdn.example.com/b?v=2  \n",
        );

        let cmd = update(&mut app, ContentMessage::Submit);
        assert_eq!(
            cmd,
            Some(Command::Purge {
                zone_id: "z1".into(),
                request: PurgeRequest::Files(vec![
                    "https://example.com/a".into(),
                    "https://cdn.example.com/b?v=2".into(),
                ]),
                origin: PurgeOrigin::Urls {
                    zone_name: "example.com".into(),
                    count: 2,
                },
            })
        );
        assert_eq!(app.url_form.in_flight.as_deref(), Some("z1"));
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.kind, NotificationKind::InProgress);
        assert_eq!(notification.text(), "Purging URLs...: 2 URL(s)");
    }

    #[test]
    fn url_form_rejects_malformed_lines() {
        let mut app = url_form();
        type_text(&mut app, "https://example.com/a\nnot a url");

        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(app.url_form.error.as_deref(), Some("Invalid URLs: not a url"));
        assert!(!app.url_form.is_submitting());
    }

    #[test]
    fn url_form_rejects_urls_outside_zone() {
        let mut app = url_form();
        type_text(&mut app, "https://evilexample.com/a");

        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(
            app.url_form.error.as_deref(),
            Some("Some URLs don't belong to example.com: https://evilexample.com/a")
        );
    }

    #[test]
    fn url_form_rejects_more_than_thirty_urls() {
        let mut app = url_form();
        let text = (0..31)
            .map(|i| format!("https://example.com/{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        type_text(&mut app, &text);

        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(
            app.url_form.error.as_deref(),
            Some("Maximum 30 URLs per request. Please reduce the number of URLs.")
        );
    }

    #[test]
    fn url_form_rejects_empty_input() {
        let mut app = url_form();
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(
            app.url_form.error.as_deref(),
            Some("Please enter at least one valid URL")
        );
    }

    #[test]
    fn url_form_ignores_submit_while_submitting() {
        let mut app = url_form();
        type_text(&mut app, "https://example.com/a");
        assert!(update(&mut app, ContentMessage::Submit).is_some());
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
    }

    #[test]
    fn editing_clears_inline_error() {
        let mut app = url_form();
        update(&mut app, ContentMessage::Submit);
        assert!(app.url_form.error.is_some());
        update(&mut app, ContentMessage::Input('h'));
        assert!(app.url_form.error.is_none());
    }

    // ===== Tag 表单 =====

    fn tag_form() -> App {
        let mut app = app_on(Page::PurgeTags);
        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.current_page, Page::TagForm);
        app
    }

    #[test]
    fn tag_form_splits_on_commas_and_newlines() {
        let mut app = tag_form();
        type_text(&mut app, "product-1, blog\n\nnews");

        let cmd = update(&mut app, ContentMessage::Submit);
        assert_eq!(
            cmd,
            Some(Command::Purge {
                zone_id: "z1".into(),
                request: PurgeRequest::Tags(vec![
                    "product-1".into(),
                    "blog".into(),
                    "news".into()
                ]),
                origin: PurgeOrigin::List {
                    zone_name: "example.com".into(),
                    count: 3,
                    mode: ListMode::Tags,
                },
            })
        );
    }

    #[test]
    fn tag_form_prefix_mode_sends_prefixes() {
        let mut app = tag_form();
        update(&mut app, ContentMessage::ToggleMode);
        type_text(&mut app, "example.com/img");

        let Some(Command::Purge { request, .. }) = update(&mut app, ContentMessage::Submit) else {
            panic!("expected purge command");
        };
        assert_eq!(request, PurgeRequest::Prefixes(vec!["example.com/img".into()]));
    }

    #[test]
    fn tag_form_empty_list_is_inline_error() {
        let mut app = tag_form();
        type_text(&mut app, " , \n");
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(app.tag_form.error.as_deref(), Some("No cache tags provided"));

        update(&mut app, ContentMessage::ToggleMode);
        update(&mut app, ContentMessage::Submit);
        assert_eq!(app.tag_form.error.as_deref(), Some("No prefixes provided"));
    }
}
