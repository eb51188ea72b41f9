//! Quick Purge 表单更新逻辑
//!
//! 两个字段：URL 输入框和 Zone 选择器。URL 每次修改都会重新校验，
//! 并用 ZoneResolver 在已加载的 Zone 中查找所属 Zone。

use cf_purge_core::validation::{check_url_in_zone, is_http_url, parse_http_url};
use cf_purge_core::{PurgeRequest, ValidationError, ZoneResolver};

use crate::backend::Command;
use crate::i18n::t;
use crate::message::{ContentMessage, PurgeOrigin};
use crate::model::{App, QuickPurgeField};

/// 处理 Quick Purge 页面的内容消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let on_url = app.quick_purge.focus == QuickPurgeField::Url;
    match msg {
        ContentMessage::NextField
        | ContentMessage::PrevField
        | ContentMessage::SelectNext
        | ContentMessage::SelectPrevious => {
            app.quick_purge.focus = app.quick_purge.focus.toggle();
        }

        ContentMessage::CyclePrev if !on_url => cycle_zone(app, false),
        ContentMessage::CycleNext if !on_url => cycle_zone(app, true),

        ContentMessage::Input(c) if on_url => {
            app.quick_purge.url.push(c);
            on_url_changed(app);
        }
        ContentMessage::Backspace if on_url => {
            app.quick_purge.url.pop();
            on_url_changed(app);
        }

        ContentMessage::Paste => return Some(Command::ReadClipboard),
        ContentMessage::Confirm | ContentMessage::Submit => return submit(app),
        _ => {}
    }
    None
}

/// 用剪贴板内容填充 URL（非 http(s) URL 时返回 false）
pub fn fill_from_clipboard(app: &mut App, text: &str) -> bool {
    let text = text.trim();
    if !is_http_url(text) {
        return false;
    }
    app.quick_purge.url = text.to_string();
    on_url_changed(app);
    true
}

/// URL 变化后：校验，并尝试自动识别 Zone
///
/// 识别失败时保留当前选中的 Zone。
pub fn on_url_changed(app: &mut App) {
    let form = &mut app.quick_purge;
    form.zone_error = None;

    if form.url.trim().is_empty() {
        form.url_error = None;
        form.detected_zone = None;
        return;
    }

    if let Err(e) = parse_http_url(&form.url) {
        form.url_error = Some(e.to_string());
        form.detected_zone = None;
        return;
    }
    form.url_error = None;

    match ZoneResolver::new(&app.zones.zones).resolve_url(&form.url) {
        Some(zone) => {
            form.selected_zone_id = Some(zone.id.clone());
            form.detected_zone = Some(zone.name.clone());
        }
        None => form.detected_zone = None,
    }
}

/// 在 "Select a zone..." 与各 Zone 之间循环
fn cycle_zone(app: &mut App, forward: bool) {
    let zones = &app.zones.zones;
    let form = &mut app.quick_purge;

    // 0 = 未选择，i + 1 = zones[i]
    let options = zones.len() + 1;
    let current = form
        .selected_zone_id
        .as_deref()
        .and_then(|id| zones.iter().position(|z| z.id == id))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (current + 1) % options
    } else {
        (current + options - 1) % options
    };

    form.selected_zone_id = next.checked_sub(1).map(|i| zones[i].id.clone());
    form.detected_zone = None;
    form.zone_error = None;
}

fn submit(app: &mut App) -> Option<Command> {
    let form = &mut app.quick_purge;
    if form.is_submitting() || form.initializing {
        return None;
    }

    let url = match parse_http_url(&form.url) {
        Ok(_) => form.url.trim().to_string(),
        Err(e) => {
            form.url_error = Some(e.to_string());
            form.focus = QuickPurgeField::Url;
            return None;
        }
    };

    let zone = match form.selected_zone_id.as_deref() {
        None => Err(ValidationError::NoZoneSelected),
        Some(id) => app
            .zones
            .find(id)
            .cloned()
            .ok_or(ValidationError::InvalidZone),
    };
    let zone = match zone.and_then(|zone| {
        check_url_in_zone(&url, &zone)?;
        Ok(zone)
    }) {
        Ok(zone) => zone,
        Err(e) => {
            form.zone_error = Some(e.to_string());
            return None;
        }
    };

    form.url_error = None;
    form.zone_error = None;
    form.in_flight = Some(url.clone());
    app.notify_progress(t().notify.purging_url, None);

    Some(Command::Purge {
        zone_id: zone.id,
        request: PurgeRequest::Files(vec![url.clone()]),
        origin: PurgeOrigin::Quick { url },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FocusPanel, Page};
    use crate::test_utils::zone;

    fn quick_app(default_zone: Option<&str>) -> App {
        let mut app = App::new(Page::QuickPurge, default_zone.map(str::to_string));
        app.focus = FocusPanel::Content;
        crate::update::init(&mut app);
        app.zones.set_zones(vec![
            zone("z1", "example.com"),
            zone("z2", "shop.example.com"),
            zone("z3", "other.org"),
        ]);
        app.quick_purge.initializing = false;
        app
    }

    fn type_url(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, ContentMessage::Input(c));
        }
    }

    #[test]
    fn typing_detects_most_specific_zone() {
        let mut app = quick_app(None);
        type_url(&mut app, "https://cdn.shop.example.com/app.js");

        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z2"));
        assert_eq!(app.quick_purge.detected_zone.as_deref(), Some("shop.example.com"));
        assert!(app.quick_purge.url_error.is_none());
    }

    #[test]
    fn partial_url_shows_error_without_detection() {
        let mut app = quick_app(Some("z3"));
        type_url(&mut app, "example.com");

        assert_eq!(
            app.quick_purge.url_error.as_deref(),
            Some("Please enter a valid URL starting with http:// or https://")
        );
        assert!(app.quick_purge.detected_zone.is_none());
        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z3"));
    }

    #[test]
    fn unknown_host_keeps_manual_selection() {
        let mut app = quick_app(Some("z3"));
        type_url(&mut app, "https://unknown.io/");
        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z3"));
        assert!(app.quick_purge.detected_zone.is_none());
    }

    #[test]
    fn clearing_url_clears_error() {
        let mut app = quick_app(None);
        type_url(&mut app, "h");
        assert!(app.quick_purge.url_error.is_some());
        update(&mut app, ContentMessage::Backspace);
        assert!(app.quick_purge.url_error.is_none());
    }

    #[test]
    fn zone_selector_cycles_through_placeholder() {
        let mut app = quick_app(None);
        update(&mut app, ContentMessage::NextField);
        assert_eq!(app.quick_purge.focus, QuickPurgeField::Zone);

        update(&mut app, ContentMessage::CycleNext);
        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z1"));
        update(&mut app, ContentMessage::CyclePrev);
        assert_eq!(app.quick_purge.selected_zone_id, None);
        update(&mut app, ContentMessage::CyclePrev);
        assert_eq!(app.quick_purge.selected_zone_id.as_deref(), Some("z3"));
    }

    #[test]
    fn typing_is_ignored_on_zone_field() {
        let mut app = quick_app(None);
        update(&mut app, ContentMessage::NextField);
        update(&mut app, ContentMessage::Input('x'));
        assert!(app.quick_purge.url.is_empty());
    }

    #[test]
    fn submit_requires_zone() {
        let mut app = quick_app(None);
        type_url(&mut app, "https://unknown.io/");

        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(app.quick_purge.zone_error.as_deref(), Some("Please select a zone"));
    }

    #[test]
    fn submit_rejects_unknown_default_zone() {
        let mut app = quick_app(Some("gone"));
        type_url(&mut app, "https://unknown.io/");

        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(app.quick_purge.zone_error.as_deref(), Some("Invalid zone selected"));
    }

    #[test]
    fn submit_rejects_domain_mismatch() {
        let mut app = quick_app(None);
        type_url(&mut app, "https://unknown.io/");
        update(&mut app, ContentMessage::NextField);
        update(&mut app, ContentMessage::CycleNext);

        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(
            app.quick_purge.zone_error.as_deref(),
            Some("URL domain (unknown.io) doesn't match zone (example.com)")
        );
    }

    #[test]
    fn submit_requires_url() {
        let mut app = quick_app(Some("z1"));
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(app.quick_purge.url_error.as_deref(), Some("URL is required"));
    }

    #[test]
    fn submit_sends_single_url() {
        let mut app = quick_app(None);
        type_url(&mut app, "https://www.example.com/index.html");

        let cmd = update(&mut app, ContentMessage::Submit);
        assert_eq!(
            cmd,
            Some(Command::Purge {
                zone_id: "z1".into(),
                request: PurgeRequest::Files(vec!["https://www.example.com/index.html".into()]),
                origin: PurgeOrigin::Quick {
                    url: "https://www.example.com/index.html".into(),
                },
            })
        );
        assert!(app.quick_purge.is_submitting());
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
    }

    #[test]
    fn submit_waits_for_initialization() {
        let mut app = quick_app(None);
        type_url(&mut app, "https://example.com/");
        app.quick_purge.initializing = true;
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
    }

    #[test]
    fn clipboard_fill_requires_http_url() {
        let mut app = quick_app(None);
        assert!(!fill_from_clipboard(&mut app, "ftp://example.com/file"));
        assert!(app.quick_purge.url.is_empty());

        assert!(fill_from_clipboard(&mut app, "  https://other.org/x \n"));
        assert_eq!(app.quick_purge.url, "https://other.org/x");
        assert_eq!(app.quick_purge.detected_zone.as_deref(), Some("other.org"));
    }
}
