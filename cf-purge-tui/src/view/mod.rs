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
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧都从头绘制整个界面（ratatui 的即时模式）。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 / 导航 / 内容 / 状态栏）
//!         mod components;     // 跨页面的组件
//!         mod pages;          // 各页面的内容区
//!         pub mod theme;      // 主题与样式
//!
//!     components/
//!         navigation.rs       // 左侧导航面板
//!         statusbar.rs        // 底部状态栏：快捷键提示 + 通知
//!         modal.rs            // 弹窗：清除确认 / 帮助 / 错误
//!
//!     pages/
//!         zone_list.rs        // Purge All / Purge URLs / Purge Tags 共用的 Zone 列表
//!         url_form.rs         // URL 列表表单
//!         quick_purge.rs      // Quick Purge 表单
//!         tag_form.rs         // Tag / 前缀表单
//!         input.rs            // 文本框的光标与换行计算
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 屏幕布局
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌──────────────────────────────────────────────────────────┐
//!     │ Cloudflare Cache Purge v0.1.0                            │  标题栏
//!     ├──────────────┬───────────────────────────────────────────┤
//!     │ ▶ Purge All  │  Purge All Cache                          │
//!     │   Purge URLs │  ● example.com     3f2a...   active       │
//!     │   Quick Purge│  ● example.org     9c1b...   paused       │  内容区
//!     │   Purge Tags │                                           │
//!     ├──────────────┴───────────────────────────────────────────┤
//!     │ Tab Switch panel │ ↑↓ Select │ ...     Cache purged for … │  状态栏
//!     └──────────────────────────────────────────────────────────┘
//!
//!     弹窗最后绘制，覆盖在所有内容之上。
//!
//!
//!     在 src/app.rs 中，有：
//!         terminal.draw(|frame| view::render(app, frame))?;
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
