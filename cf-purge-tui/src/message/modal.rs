//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 确认/提交
    Confirm,

    /// 在确认弹窗中切换按钮焦点
    ToggleFocus,
}
