//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│  ┌────────────────────────────── UI 层 ────────────────────────────────┐    │
//！│  │                                                                     │    │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐          │    │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │          │    │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │          │    │
//！│  │   └─────────┘          │           │          └──┬────┬──┘          │    │
//！│  │        ▲               │ AppMessage│        修改 │    │ Command     │    │
//！│  │        │               │ ModalMsg  │             ▼    │             │    │
//！│  │   ┌─────────┐          │ ContentMsg│       ┌──────────┐│             │    │
//！│  │   │  View   │          │ NavMsg    │ ◀─┐   │  Model   ││             │    │
//！│  │   │   层    │          │ BackendMsg│   │   │    层    ││             │    │
//！│  │   └────┬────┘ ◀──读取─ └───────────┘   │   └──────────┘│             │    │
//！│  │        │                               │ channel       │             │    │
//！│  └────────│───────────────────────────────│───────────────│─────────────┘    │
//！│           │                               │               │ tokio::spawn     │
//！│           ▼                               │               ▼                  │
//！│      ┌─────────┐                          │         ┌──────────┐             │
//！│      │  终端   │                          └──────── │ Backend  │             │
//！│      │ (Util)  │                                    │    层    │             │
//！│      └─────────┘                                    └────┬─────┘             │
//！│                                                          │                   │
//！│                                                          ▼                   │
//！│                                               ┌───────────────────┐          │
//！│                                               │   cf-purge-core   │          │
//！│                                               └───────────────────┘          │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 需要网络或剪贴板时，update 不直接调用，而是返回一条 Command，
//! 由主循环交给 Backend 执行；执行结果以 AppMessage::Backend 的形式回到这里。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（Zone 列表、URL / Tag 表单）
//!         mod quick_purge;        // Quick Purge 表单
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台任务结果
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
//!                 match msg {
//!                     AppMessage::Quit => {
//!                         app.should_quit = true;
//!                         None
//!                     }
//!                     AppMessage::Content(content_msg) => content::update(app, content_msg),
//!                     AppMessage::Backend(result) => backend::update(app, result),
//!                     ...
//!                 }
//!             }
//!
//!         —— 的主更新函数。
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             复杂的子消息委托给子模块处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、打开页面（open_page）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         - Zone 列表页：标记 loading，返回 Command::LoadZones
//!         - Quick Purge：重置表单，预选默认 Zone，返回 Command::InitQuickPurge
//!
//!     启动时的第一页同样经过 open_page（见 init）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、清除请求的生命周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     提交                        后台                      结果
//!     ────                        ────                      ────
//!     本地校验失败 → 内联错误      （不发送）
//!     校验通过 → in_flight=Some    Command::Purge  ───▶  PurgeFinished
//!              → "Purging..."                               │
//!                                                            ▼
//!                                         in_flight=None，成功/失败通知
//!
//!     in_flight 存在时重复提交被忽略；离开并重新打开表单不会清除它。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod modal;
mod navigation;
mod quick_purge;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};

/// 启动时打开初始页面
pub fn init(app: &mut App) -> Option<Command> {
    open_page(app, app.current_page)
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(result) => backend::update(app, result),

        AppMessage::GoBack => {
            go_back(app);
            None
        }

        AppMessage::Refresh => refresh(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 切换到指定页面，返回该页面需要的加载命令
pub(crate) fn open_page(app: &mut App, page: Page) -> Option<Command> {
    app.current_page = page;
    app.navigation.select_page(page);

    match page {
        Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags => {
            app.zones.start_loading();
            Some(Command::LoadZones)
        }
        Page::QuickPurge => {
            app.quick_purge.reset();
            app.quick_purge.selected_zone_id = app.default_zone_id.clone();
            app.quick_purge.initializing = true;
            Some(Command::InitQuickPurge)
        }
        // 表单由列表页进入，不需要加载
        Page::UrlForm | Page::TagForm => None,
    }
}

/// 详情页返回其列表页（不重新加载，保留当前通知）
pub(crate) fn return_to_parent(app: &mut App) {
    if let Some(parent) = app.current_page.parent() {
        app.current_page = parent;
        app.navigation.select_page(parent);
    }
}

/// Esc：关闭弹窗 → 清除筛选 → 返回列表页 → 焦点回到导航栏
fn go_back(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
        return;
    }

    if app.focus == FocusPanel::Content
        && app.current_page.is_zone_list()
        && (app.zones.filtering || !app.zones.filter.is_empty())
    {
        app.zones.clear_filter();
        return;
    }

    if app.current_page.is_detail_page() {
        return_to_parent(app);
        app.clear_status();
        return;
    }

    app.focus = FocusPanel::Navigation;
}

/// Alt+r：重新加载当前页面的 Zone
fn refresh(app: &mut App) -> Option<Command> {
    match app.current_page {
        page if page.is_zone_list() => {
            if app.zones.loading {
                return None;
            }
            app.set_status(t().notify.refreshing);
            app.zones.start_loading();
            Some(Command::LoadZones)
        }
        Page::QuickPurge => {
            if app.quick_purge.initializing {
                return None;
            }
            app.quick_purge.initializing = true;
            Some(Command::InitQuickPurge)
        }
        _ => None,
    }
}
