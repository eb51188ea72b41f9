//! 后台任务结果处理

use crate::backend::Command;
use crate::i18n::{fill, t};
use crate::message::{BackendMessage, PurgeOrigin};
use crate::model::{App, FocusPanel, ListMode, Page, UrlFormState};

use super::quick_purge;

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) -> Option<Command> {
    match msg {
        BackendMessage::ZonesLoaded(Ok(zones)) => {
            log::debug!("Loaded {} zone(s)", zones.len());
            app.zones.set_zones(zones);
            let refreshing = app.notification.as_ref().map(|n| n.title.as_str())
                == Some(t().notify.refreshing);
            if refreshing {
                app.clear_status();
            }
        }

        BackendMessage::ZonesLoaded(Err(e)) => {
            // 没有已知 Zone 时由列表页显示错误，否则用通知提示
            if !app.zones.zones.is_empty() {
                app.notify_failure(t().notify.load_zones_failed, e.clone());
            } else if app.notification.is_some() {
                app.clear_status();
            }
            app.zones.set_error(e);
        }

        BackendMessage::QuickPurgeReady { zones, clipboard } => {
            app.zones.set_zones(zones);
            app.quick_purge.initializing = false;

            if app.quick_purge.url.is_empty() {
                if let Some(text) = clipboard {
                    quick_purge::fill_from_clipboard(app, &text);
                }
            } else {
                // 刷新后用新的 Zone 列表重新识别
                quick_purge::on_url_changed(app);
            }
        }

        BackendMessage::QuickPurgeFailed(e) => {
            app.quick_purge.initializing = false;
            app.notify_failure(t().notify.init_failed, e);
        }

        BackendMessage::PurgeFinished { origin, result } => purge_finished(app, origin, result),

        BackendMessage::ClipboardRead(Ok(text)) => paste(app, &text),

        BackendMessage::ClipboardRead(Err(e)) => {
            app.modal.show_error(t().modal.clipboard_error, &e);
        }

        BackendMessage::ClipboardWritten { label, result } => match result {
            Ok(()) => app.set_status(fill(t().notify.copied, &[("label", label.as_str())])),
            Err(e) => app.modal.show_error(t().modal.clipboard_error, &e),
        },
    }
    None
}

fn purge_finished(app: &mut App, origin: PurgeOrigin, result: Result<(), String>) {
    match origin {
        PurgeOrigin::Everything { zone_name } => {
            app.purge_all.in_flight = None;
            match result {
                Ok(()) => app.notify_success(fill(
                    t().notify.cache_purged,
                    &[("zone", zone_name.as_str())],
                )),
                Err(e) => app.notify_failure(t().notify.purge_cache_failed, e),
            }
        }

        PurgeOrigin::Urls { zone_name, count } => {
            let zone_id = app.url_form.in_flight.take();
            match result {
                Ok(()) => {
                    app.notify_success(fill(
                        t().notify.urls_purged,
                        &[("count", count.to_string().as_str()), ("zone", zone_name.as_str())],
                    ));
                    // 期间换了 Zone 的表单不受影响
                    if zone_id.is_some_and(|id| app.url_form.targets(&id)) {
                        if app.current_page == Page::UrlForm {
                            super::return_to_parent(app);
                        }
                        app.url_form = UrlFormState::default();
                    }
                }
                // 保留表单内容，方便重试
                Err(e) => app.notify_failure(t().notify.purge_urls_failed, e),
            }
        }

        PurgeOrigin::Quick { url } => {
            app.quick_purge.in_flight = None;
            match result {
                Ok(()) => {
                    app.notify_success(fill(t().notify.url_purged, &[("url", url.as_str())]));
                    if app.quick_purge.url.trim() == url {
                        app.quick_purge.reset();
                        app.quick_purge.selected_zone_id = app.default_zone_id.clone();
                        app.focus = FocusPanel::Navigation;
                    }
                }
                Err(e) => app.notify_failure(t().notify.purge_url_failed, e),
            }
        }

        PurgeOrigin::List {
            zone_name,
            count,
            mode,
        } => {
            let zone_id = app.tag_form.in_flight.take();
            let notify = &t().notify;
            match result {
                Ok(()) => {
                    let template = match mode {
                        ListMode::Tags => notify.tags_purged,
                        ListMode::Prefixes => notify.prefixes_purged,
                    };
                    app.notify_success(fill(
                        template,
                        &[("count", count.to_string().as_str()), ("zone", zone_name.as_str())],
                    ));
                    if zone_id.is_some_and(|id| app.tag_form.targets(&id)) {
                        if app.current_page == Page::TagForm {
                            super::return_to_parent(app);
                        }
                        app.tag_form.input.clear();
                    }
                }
                Err(e) => {
                    let title = match mode {
                        ListMode::Tags => notify.purge_tags_failed,
                        ListMode::Prefixes => notify.purge_prefixes_failed,
                    };
                    app.notify_failure(title, e);
                }
            }
        }
    }
}

/// 剪贴板内容：Quick Purge 填入 URL，表单追加为新的一行
fn paste(app: &mut App, text: &str) {
    match app.current_page {
        Page::QuickPurge => {
            if !quick_purge::fill_from_clipboard(app, text) {
                app.set_status(t().notify.clipboard_no_url);
            }
        }
        Page::UrlForm => append_line(&mut app.url_form.input, text),
        Page::TagForm => append_line(&mut app.tag_form.input, text),
        _ => {}
    }
}

fn append_line(input: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !input.is_empty() && !input.ends_with('\n') {
        input.push('\n');
    }
    input.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Modal, NotificationKind};
    use crate::test_utils::zone;

    fn finished(origin: PurgeOrigin, result: Result<(), String>) -> BackendMessage {
        BackendMessage::PurgeFinished { origin, result }
    }

    #[test]
    fn zones_loaded_replaces_list() {
        let mut app = App::default();
        app.zones.start_loading();
        update(&mut app, BackendMessage::ZonesLoaded(Ok(vec![zone("z1", "example.com")])));
        assert!(!app.zones.loading);
        assert_eq!(app.zones.zones.len(), 1);
    }

    #[test]
    fn first_load_failure_goes_to_empty_view() {
        let mut app = App::default();
        app.zones.start_loading();
        update(&mut app, BackendMessage::ZonesLoaded(Err("bad token".into())));
        assert_eq!(app.zones.error.as_deref(), Some("bad token"));
        assert!(app.notification.is_none());
    }

    #[test]
    fn reload_failure_keeps_zones_and_notifies() {
        let mut app = App::default();
        app.zones.set_zones(vec![zone("z1", "example.com")]);
        update(&mut app, BackendMessage::ZonesLoaded(Err("timeout".into())));

        assert_eq!(app.zones.zones.len(), 1);
        let notification = app.notification.unwrap();
        assert_eq!(notification.kind, NotificationKind::Failure);
        assert_eq!(notification.text(), "Failed to load zones: timeout");
    }

    #[test]
    fn purge_all_success_clears_in_flight() {
        let mut app = App::default();
        app.purge_all.in_flight = Some("z1".into());
        update(
            &mut app,
            finished(
                PurgeOrigin::Everything {
                    zone_name: "example.com".into(),
                },
                Ok(()),
            ),
        );
        assert!(app.purge_all.in_flight.is_none());
        let notification = app.notification.unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.title, "Cache purged for example.com");
    }

    #[test]
    fn purge_all_failure_shows_error_message() {
        let mut app = App::default();
        app.purge_all.in_flight = Some("z1".into());
        update(
            &mut app,
            finished(
                PurgeOrigin::Everything {
                    zone_name: "example.com".into(),
                },
                Err("[cloudflare] Permission denied".into()),
            ),
        );
        assert!(app.purge_all.in_flight.is_none());
        assert_eq!(
            app.notification.unwrap().text(),
            "Failed to purge cache: [cloudflare] Permission denied"
        );
    }

    #[test]
    fn url_purge_success_pops_back_to_list() {
        let mut app = App::new(Page::UrlForm, None);
        app.url_form.open(zone("z1", "example.com"));
        app.url_form.in_flight = Some("z1".into());

        update(
            &mut app,
            finished(
                PurgeOrigin::Urls {
                    zone_name: "example.com".into(),
                    count: 2,
                },
                Ok(()),
            ),
        );
        assert_eq!(app.current_page, Page::PurgeUrls);
        assert!(!app.url_form.is_submitting());
        assert_eq!(
            app.notification.unwrap().title,
            "Purged 2 URL(s) from example.com"
        );
    }

    #[test]
    fn url_purge_failure_stays_on_form() {
        let mut app = App::new(Page::UrlForm, None);
        app.url_form.open(zone("z1", "example.com"));
        app.url_form.input = "https://example.com/a".into();
        app.url_form.in_flight = Some("z1".into());

        update(
            &mut app,
            finished(
                PurgeOrigin::Urls {
                    zone_name: "example.com".into(),
                    count: 1,
                },
                Err("rate limited".into()),
            ),
        );
        assert_eq!(app.current_page, Page::UrlForm);
        assert_eq!(app.url_form.input, "https://example.com/a");
        assert_eq!(app.notification.unwrap().title, "Failed to purge URLs");
    }

    #[test]
    fn quick_purge_success_resets_form_and_returns_to_navigation() {
        let mut app = App::new(Page::QuickPurge, Some("z1".into()));
        app.focus = FocusPanel::Content;
        app.quick_purge.url = "https://example.com/a".into();
        app.quick_purge.selected_zone_id = Some("z2".into());
        app.quick_purge.in_flight = Some("https://example.com/a".into());

        update(
            &mut app,
            finished(
                PurgeOrigin::Quick {
                    url: "https://example.com/a".into(),
                },
                Ok(()),
            ),
        );
        assert_eq!(app.focus, FocusPanel::Navigation);
        assert!(app.quick_purge.url.is_empty());
        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z1"));
        assert_eq!(
            app.notification.unwrap().title,
            "Purged: https://example.com/a"
        );
    }

    #[test]
    fn tag_purge_uses_mode_in_message() {
        let mut app = App::new(Page::TagForm, None);
        app.tag_form.open(zone("z1", "example.com"));
        app.tag_form.in_flight = Some("z1".into());
        update(
            &mut app,
            finished(
                PurgeOrigin::List {
                    zone_name: "example.com".into(),
                    count: 3,
                    mode: ListMode::Prefixes,
                },
                Ok(()),
            ),
        );
        assert_eq!(app.current_page, Page::PurgeTags);
        assert_eq!(
            app.notification.unwrap().title,
            "Purged 3 prefix(es) from example.com"
        );
    }

    #[test]
    fn quick_purge_ready_fills_url_from_clipboard() {
        let mut app = App::new(Page::QuickPurge, Some("z1".into()));
        app.quick_purge.selected_zone_id = Some("z1".into());
        app.quick_purge.initializing = true;

        update(
            &mut app,
            BackendMessage::QuickPurgeReady {
                zones: vec![zone("z1", "example.com"), zone("z2", "example.org")],
                clipboard: Some("https://www.example.org/page\n".into()),
            },
        );
        assert!(!app.quick_purge.initializing);
        assert_eq!(app.quick_purge.url, "https://www.example.org/page");
        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z2"));
        assert_eq!(app.quick_purge.detected_zone.as_deref(), Some("example.org"));
    }

    #[test]
    fn quick_purge_ready_ignores_non_url_clipboard() {
        let mut app = App::new(Page::QuickPurge, Some("z1".into()));
        app.quick_purge.selected_zone_id = Some("z1".into());

        update(
            &mut app,
            BackendMessage::QuickPurgeReady {
                zones: vec![zone("z1", "example.com")],
                clipboard: Some("hello world".into()),
            },
        );
        assert!(app.quick_purge.url.is_empty());
        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z1"));
    }

    #[test]
    fn quick_purge_init_failure_notifies() {
        let mut app = App::new(Page::QuickPurge, None);
        app.quick_purge.initializing = true;
        update(&mut app, BackendMessage::QuickPurgeFailed("offline".into()));
        assert!(!app.quick_purge.initializing);
        assert_eq!(app.notification.unwrap().text(), "Failed to initialize: offline");
    }

    #[test]
    fn paste_appends_line_to_url_form() {
        let mut app = App::new(Page::UrlForm, None);
        app.url_form.input = "https://example.com/a".into();
        update(
            &mut app,
            BackendMessage::ClipboardRead(Ok("https://example.com/b".into())),
        );
        assert_eq!(app.url_form.input, "https://example.com/a\nhttps://example.com/b");
    }

    #[test]
    fn clipboard_failure_opens_error_modal() {
        let mut app = App::new(Page::QuickPurge, None);
        update(&mut app, BackendMessage::ClipboardRead(Err("no tool".into())));
        assert_eq!(
            app.modal.active,
            Some(Modal::Error {
                title: "Clipboard Error".into(),
                message: "no tool".into(),
            })
        );
    }

    #[test]
    fn copy_success_sets_status() {
        let mut app = App::default();
        update(
            &mut app,
            BackendMessage::ClipboardWritten {
                label: "Zone ID".into(),
                result: Ok(()),
            },
        );
        assert_eq!(
            app.notification.unwrap().title,
            "Zone ID copied to clipboard"
        );
    }
}
