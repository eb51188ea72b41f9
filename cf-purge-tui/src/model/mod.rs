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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod notification;   // 状态栏通知
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 page.rs 与 state/ 都表示页面状态，但两者有不同：
//!         - Page 是一个简单的枚举，表示当前应用处于哪个“页面”，相当于房间的门牌号，
//!             只负责标识位置，不存储任何业务数据；
//!         - State 是各个页面的业务数据容器，存储着 Zone 列表、表单输入、加载状态等，
//!             相当于储存了房间的内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                      // 退出标志
//!             pub focus: FocusPanel,                      // 当前焦点
//!             pub navigation: NavigationState,            // 导航状态
//!             pub current_page: Page,                     // 当前页面
//!             pub notification: Option<Notification>,     // 状态栏通知（可选）
//!             pub default_zone_id: Option<String>,        // 配置的默认 Zone
//!
//!             // 以及各页面状态：
//!             pub zones: ZoneListState,                   // Zone 列表（三个列表页共用）
//!             pub purge_all: PurgeAllState,               // 正在进行的全量清除
//!             pub url_form: UrlFormState,                 // URL 表单
//!             pub quick_purge: QuickPurgeState,           // Quick Purge 表单
//!             pub tag_form: TagFormState,                 // Tag / 前缀表单
//!
//!             pub modal: ModalState                       // 弹窗状态
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面（Page）与导航（NavigationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     导航栏有四项，与页面一一对应：
//!         Purge All / Purge URLs / Quick Purge / Purge Tags
//!
//!     另有两个详情页（由列表页按 Enter 进入，Esc 返回）：
//!         - UrlForm   → 返回 PurgeUrls
//!         - TagForm   → 返回 PurgeTags
//!
//!     Page::parent() 给出详情页对应的列表页。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、通知（Notification）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     状态栏右侧显示一条通知：
//!         - InProgress   "Purging cache..."
//!         - Success      "Cache purged for example.com"
//!         - Failure      "Failed to purge cache: <错误信息>"
//!         - Info         其他提示
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：
//!         - ConfirmPurgeAll { zone_id, zone_name, focus }     // 默认焦点为"取消"
//!         - Help
//!         - Error { title, message }
//!
//!     数据流：
//!         用户在 Purge All 列表中按 Enter
//!             ↓
//!         update 层调用 app.modal.show_confirm_purge_all()
//!             ↓
//!         view/components/modal.rs 渲染确认弹窗
//!             ↓
//!         只有焦点在"清除"上再按 Enter，update 才返回 Command
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
mod notification;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use notification::{Notification, NotificationKind};
pub use page::Page;
pub use state::{
    ListMode, Modal, ModalState, PurgeAllState, QuickPurgeField, QuickPurgeState, TagFormState,
    UrlFormState, ZoneListState,
};
