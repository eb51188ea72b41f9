//! 副作用请求
//!
//! Update 层不直接调用网络或剪贴板，而是返回一条 `Command`，
//! 由 [`Backend`](super::Backend) 在 tokio 上执行。

use cf_purge_core::PurgeRequest;

use crate::message::PurgeOrigin;

/// 后台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 拉取 Zone 列表
    LoadZones,

    /// Quick Purge 初始化：拉取 Zone 列表并读取剪贴板
    InitQuickPurge,

    /// 执行一次清除
    Purge {
        zone_id: String,
        request: PurgeRequest,
        origin: PurgeOrigin,
    },

    /// 读取剪贴板
    ReadClipboard,

    /// 写入剪贴板（`label` 用于结果提示，如 "Zone ID"）
    CopyToClipboard { text: String, label: String },
}
