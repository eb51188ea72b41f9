//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时 App 的状态：
//!
//! App {
//!     should_quit: false,
//!     focus: FocusPanel::Navigation,                  // 焦点在导航栏
//!     navigation.selected → 起始页对应的导航项
//!     current_page: 起始页（命令行子命令决定，默认 Purge All）
//!     notification: None,
//!     default_zone_id: 配置中的默认 Zone,
//! }
//!
//! 进入循环前先执行 update::init()，起始页需要的 Zone 列表在后台开始加载。
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }
//!
//!     while let Ok(msg) = rx.try_recv() {             // 取出所有已完成的后台结果
//!         update → backend.dispatch
//!     }
//!
//!     if let Some(event) = poll_event(100ms) {        // 等待输入，最多 100ms
//!         let msg = handle_event(event, &app);
//!         update → backend.dispatch
//!     }
//! }
//!
//! 网络请求在 tokio 上执行，主循环本身不 await，所以请求进行中界面仍然响应按键。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    if let Some(command) = update::init(app) {
        backend.dispatch(command);
    }

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台结果
        while let Ok(msg) = rx.try_recv() {
            apply(app, backend, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            apply(app, backend, msg);
        }
    }

    Ok(())
}

/// 更新状态，并把产生的命令交给后台
fn apply(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        backend.dispatch(command);
    }
}
