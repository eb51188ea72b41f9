//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航面板（启动时以及 Quick Purge 成功后）
    #[default]
    Navigation,
    /// 右侧内容面板（Zone 列表或表单）
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        self == FocusPanel::Navigation
    }

    pub fn is_content(self) -> bool {
        self == FocusPanel::Content
    }
}
