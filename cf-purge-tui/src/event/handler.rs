//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::{typed_char, DefaultKeymap};
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // Resize 等：下一轮循环自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // `?` 只在不输入文本时作为帮助键
    if DefaultKeymap::HELP.matches(&key) || (!app.is_typing() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Enter | KeyCode::Right => NavigationMessage::Confirm,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    let msg = match app.current_page {
        Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags if app.zones.filtering => {
            handle_filter_keys(key)
        }
        Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags => handle_list_keys(key),
        Page::UrlForm => handle_text_area_keys(key, false),
        Page::TagForm => handle_text_area_keys(key, true),
        Page::QuickPurge => handle_quick_purge_keys(key),
    };
    msg.map_or(AppMessage::Noop, AppMessage::Content)
}

/// Zone 列表
fn handle_list_keys(key: KeyEvent) -> Option<ContentMessage> {
    if DefaultKeymap::FILTER.matches(&key) {
        return Some(ContentMessage::StartFilter);
    }
    if DefaultKeymap::COPY_ZONE_ID.matches(&key) {
        return Some(ContentMessage::CopyZoneId);
    }
    if DefaultKeymap::COPY_DOMAIN.matches(&key) {
        return Some(ContentMessage::CopyDomain);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(ContentMessage::SelectNext),
        KeyCode::Home => Some(ContentMessage::SelectFirst),
        KeyCode::End => Some(ContentMessage::SelectLast),
        KeyCode::Enter => Some(ContentMessage::Confirm),
        _ => None,
    }
}

/// Zone 列表的筛选输入
fn handle_filter_keys(key: KeyEvent) -> Option<ContentMessage> {
    match key.code {
        KeyCode::Enter => Some(ContentMessage::Confirm),
        KeyCode::Backspace => Some(ContentMessage::Backspace),
        KeyCode::Up => Some(ContentMessage::SelectPrevious),
        KeyCode::Down => Some(ContentMessage::SelectNext),
        _ => typed_char(&key).map(ContentMessage::Input),
    }
}

/// 多行输入框（URL 表单、Tag 表单）
fn handle_text_area_keys(key: KeyEvent, has_mode: bool) -> Option<ContentMessage> {
    if DefaultKeymap::SUBMIT.matches(&key) || DefaultKeymap::SUBMIT_ALT.matches(&key) {
        return Some(ContentMessage::Submit);
    }
    if DefaultKeymap::PASTE.matches(&key) {
        return Some(ContentMessage::Paste);
    }
    if has_mode && DefaultKeymap::TOGGLE_MODE.matches(&key) {
        return Some(ContentMessage::ToggleMode);
    }

    match key.code {
        KeyCode::Enter if key.modifiers.is_empty() => Some(ContentMessage::Newline),
        KeyCode::Backspace => Some(ContentMessage::Backspace),
        _ => typed_char(&key).map(ContentMessage::Input),
    }
}

/// Quick Purge：↑↓ 切换字段，←→ 切换 Zone
fn handle_quick_purge_keys(key: KeyEvent) -> Option<ContentMessage> {
    if DefaultKeymap::SUBMIT.matches(&key) || DefaultKeymap::SUBMIT_ALT.matches(&key) {
        return Some(ContentMessage::Submit);
    }
    if DefaultKeymap::PASTE.matches(&key) {
        return Some(ContentMessage::Paste);
    }

    match key.code {
        KeyCode::Enter => Some(ContentMessage::Submit),
        KeyCode::Up | KeyCode::BackTab => Some(ContentMessage::PrevField),
        KeyCode::Down => Some(ContentMessage::NextField),
        KeyCode::Left => Some(ContentMessage::CyclePrev),
        KeyCode::Right => Some(ContentMessage::CycleNext),
        KeyCode::Backspace => Some(ContentMessage::Backspace),
        _ => typed_char(&key).map(ContentMessage::Input),
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    let msg = match modal {
        Modal::ConfirmPurgeAll { .. } => match key.code {
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h' | 'l') => ModalMessage::ToggleFocus,
            KeyCode::Enter => ModalMessage::Confirm,
            _ => return AppMessage::Noop,
        },
        // 帮助和错误弹窗只响应关闭按键
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char('q') => ModalMessage::Close,
            _ => return AppMessage::Noop,
        },
    };
    AppMessage::Modal(msg)
}
