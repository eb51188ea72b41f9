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
//! src/util/mod.rs
//! Util 层：终端基础设施
//!
//! 与业务无关，只负责终端的进入与退出。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!     Term 是 Terminal<CrosstermBackend<Stdout>> 的别名，
//!     app.rs 的主循环签名因此可以写成 fn run(terminal: &mut Term, ...)。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 进入与退出
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     init_terminal():
//!         1. 安装 panic hook
//!         2. enable_raw_mode()            按键立即送达，不回显，Ctrl+c 也作为按键读取
//!         3. EnterAlternateScreen         在备用屏幕绘制，退出后原终端内容不受影响
//!         4. Terminal::new + clear
//!
//!     restore_terminal():
//!         disable_raw_mode → LeaveAlternateScreen → show_cursor
//!
//!     panic hook 做的是 restore_terminal 的前两步，然后交给原有的 hook 打印信息。
//!
//!
//!     在 src/main.rs 中：
//!
//!         let mut terminal = init_terminal()?;
//!         let result = app::run(&mut terminal, &mut app, &backend, &mut rx);
//!         restore_terminal(&mut terminal)?;       // 无论 run 成功与否都先恢复终端
//!         result
//!
//!     启动失败（配置缺失、Token 缺失）发生在 init_terminal 之前，
//!     错误直接打印到 stderr。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
