//! 弹窗/对话框状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认清除整个 Zone 的缓存
    ConfirmPurgeAll {
        zone_id: String,
        zone_name: String,
        /// 当前焦点：0=取消, 1=清除
        focus: usize,
    },
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示清除确认弹窗（默认焦点在"取消"）
    pub fn show_confirm_purge_all(&mut self, zone_id: &str, zone_name: &str) {
        self.show(Modal::ConfirmPurgeAll {
            zone_id: zone_id.to_string(),
            zone_name: zone_name.to_string(),
            focus: 0,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}
