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
//! src/backend/mod.rs
//! Backend 层：副作用执行
//!
//! Backend 层与 UI 完全解耦。Update 层返回的 `Command` 在这里被执行，
//! 通过 cf-purge-core 调用 Cloudflare API，或读写系统剪贴板。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // Command 定义
//!         mod executor;           // 在 tokio 上执行 Command
//!         mod clipboard;          // 系统剪贴板
//!         mod config_service;     // 配置文件 + 环境变量
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、执行器（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/executor.rs 中定义：
//!
//!         Backend 持有 tokio 运行时句柄、PurgeService、剪贴板和消息发送端。
//!         dispatch() 为每条 Command 启动一个任务，任务结束后把
//!         BackendMessage 包装成 AppMessage::Backend 发回主循环。
//!
//!         主循环从不等待网络请求；请求期间界面保持可操作，
//!         "进行中" 的状态由 Model 中各页面的 in_flight 字段表示。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、剪贴板（SystemClipboard）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/clipboard.rs 中定义：
//!
//!         调用平台自带的剪贴板工具。工具调用是同步的，
//!         执行器通过 spawn_blocking 调用它们。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置（FileConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         读取 JSON 配置文件，文件不存在时使用默认值；
//!         CLOUDFLARE_API_TOKEN / CLOUDFLARE_DEFAULT_ZONE_ID 环境变量优先。
//!

mod clipboard;
mod command;
mod config_service;
mod executor;

pub use clipboard::SystemClipboard;
#[cfg(test)]
pub use clipboard::{ClipboardError, ClipboardProvider};
pub use command::Command;
pub use config_service::{AppConfig, ConfigService, FileConfigService};
pub use executor::Backend;
