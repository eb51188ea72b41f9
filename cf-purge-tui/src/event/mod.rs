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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)                                // 超时返回，主循环借此取出后台结果
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理；
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，按页面分发：
//!                     Zone 列表     handle_list_keys / handle_filter_keys
//!                     URL / Tag 表单 handle_text_area_keys
//!                     Quick Purge   handle_quick_purge_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!         Alt+q / Ctrl+c  → AppMessage::Quit
//!         Alt+h           → AppMessage::ShowHelp（非输入状态下 ? 也可以）
//!         Alt+r           → AppMessage::Refresh
//!         Esc             → AppMessage::GoBack
//!         Tab             → AppMessage::ToggleFocus
//!
//!     Zone 列表：
//!         ↑↓ / j k        → SelectPrevious / SelectNext
//!         Enter           → Confirm（Purge All 打开确认弹窗，其余进入表单）
//!         /               → StartFilter
//!         Alt+c / Alt+d   → CopyZoneId / CopyDomain
//!
//!     表单：
//!         字符 / Backspace → Input(c) / Backspace
//!         Enter           → Newline（Quick Purge 中为 Submit）
//!         Ctrl+s / Alt+Enter → Submit
//!         Alt+v           → Paste
//!         Alt+m           → ToggleMode（仅 Tag 表单）
//!
//!     文本输入时普通字符一律作为输入，所以页面操作都使用组合键。
//!
//!
//!     即，handler.rs 使用 message 层定义的 AppMessage 枚举类型，
//!     创建一个对应的枚举值并返回。
//!     在 src/app.rs 中，有：
//!         let command = update::update(&mut app, msg);
//!                                                ↑↑↑       // 在此作为参数传入 update 层
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
