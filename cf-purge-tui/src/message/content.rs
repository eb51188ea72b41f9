//! 内容面板消息
//!
//! 处理内容面板中的操作：Zone 列表选择、筛选、表单输入与提交

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开确认弹窗或进入表单）
    Confirm,
    /// 开始输入筛选条件（`/`）
    StartFilter,

    // ========== 剪贴板 ==========
    /// 复制选中 Zone 的 ID
    CopyZoneId,
    /// 复制选中 Zone 的域名
    CopyDomain,
    /// 从剪贴板粘贴 URL（Quick Purge）
    Paste,

    // ========== 文本输入 ==========
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 换行（多行输入框）
    Newline,
    /// 提交表单
    Submit,

    // ========== 表单字段 ==========
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 切换到上一个选项（Zone 选择器）
    CyclePrev,
    /// 切换到下一个选项（Zone 选择器）
    CycleNext,
    /// 切换 Tag / 前缀模式
    ToggleMode,
}
