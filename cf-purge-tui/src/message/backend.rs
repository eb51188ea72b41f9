//! 后台任务结果消息
//!
//! Backend 执行完一条 Command 后，把结果包装成 `BackendMessage` 送回主循环。
//! 错误在这里已经被格式化为字符串，UI 只负责展示。

use cf_purge_core::Zone;

use crate::model::ListMode;

/// 发起清除的来源，决定结果通知的文案与后续跳转
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOrigin {
    /// Purge All 确认弹窗
    Everything { zone_name: String },
    /// URL 表单
    Urls { zone_name: String, count: usize },
    /// Quick Purge 单个 URL
    Quick { url: String },
    /// Tag / 前缀表单
    List {
        zone_name: String,
        count: usize,
        mode: ListMode,
    },
}

/// 后台任务结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// Zone 列表加载完成
    ZonesLoaded(Result<Vec<Zone>, String>),

    /// Quick Purge 初始化完成：Zone 列表 + 剪贴板内容（读取失败为 `None`）
    QuickPurgeReady {
        zones: Vec<Zone>,
        clipboard: Option<String>,
    },

    /// Quick Purge 初始化失败
    QuickPurgeFailed(String),

    /// 清除请求结束
    PurgeFinished {
        origin: PurgeOrigin,
        result: Result<(), String>,
    },

    /// 剪贴板读取结果
    ClipboardRead(Result<String, String>),

    /// 剪贴板写入结果
    ClipboardWritten {
        label: String,
        result: Result<(), String>,
    },
}
