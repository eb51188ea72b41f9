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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作、后台任务结果都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod backend;
//!         mod content;
//!         mod modal;
//!         mod navigation;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!         #[derive{Debug , Clone}]
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Navigation(NavigationMessage),      // 导航面板子消息，与主消息分离
//!             Content(ContentMessage),            // 内容面板子消息
//!             Modal(ModalMessage),                // 弹窗子消息
//!             Backend(BackendMessage),            // 后台任务结果
//!             GoBack,                             // 返回上一页
//!             Refresh,                            // 刷新数据
//!             ShowHelp,                           // 显示帮助
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     分别分出
//!         content.rs          专门处理在内容面板中的子消息
//!         modal.rs            专门处理弹窗相关的子消息
//!         navigation.rs       专门处理在导航栏中的子消息
//!         backend.rs          后台任务（加载 Zone、清除缓存、剪贴板）的结果
//!
//!
//! 消息有两个来源：
//!
//!     1. 用户输入：src/event/handler.rs
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {...}
//!
//!     2. 后台任务：src/backend/mod.rs
//!         Backend::dispatch() 在 tokio 上执行 Command，
//!         完成后 tx.send(AppMessage::Backend(...))
//!         主循环每一轮都会先把 channel 中积压的消息取出。
//!
//!
//! 最后，两路消息都传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::{BackendMessage, PurgeOrigin};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
