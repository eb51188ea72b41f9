//! 应用主状态结构

use super::{
    FocusPanel, ModalState, NavigationState, Notification, NotificationKind, Page, PurgeAllState,
    QuickPurgeState, TagFormState, UrlFormState, ZoneListState,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏通知
    pub notification: Option<Notification>,

    /// 配置的默认 Zone（Quick Purge 预选）
    pub default_zone_id: Option<String>,

    // === 各页面状态 ===
    /// Zone 列表（各列表页共用）
    pub zones: ZoneListState,
    /// Purge All 页面状态
    pub purge_all: PurgeAllState,
    /// URL 表单
    pub url_form: UrlFormState,
    /// Quick Purge 表单
    pub quick_purge: QuickPurgeState,
    /// Tag / 前缀表单
    pub tag_form: TagFormState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(start_page: Page, default_zone_id: Option<String>) -> Self {
        let mut navigation = NavigationState::new();
        navigation.select_page(start_page);

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation,
            current_page: start_page,
            notification: None,
            default_zone_id,
            zones: ZoneListState::new(),
            purge_all: PurgeAllState::default(),
            url_form: UrlFormState::default(),
            quick_purge: QuickPurgeState::default(),
            tag_form: TagFormState::default(),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::new(NotificationKind::Info, message));
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.notification = None;
    }

    /// 请求进行中
    pub fn notify_progress(&mut self, title: impl Into<String>, message: Option<String>) {
        let mut notification = Notification::new(NotificationKind::InProgress, title);
        notification.message = message;
        self.notification = Some(notification);
    }

    pub fn notify_success(&mut self, title: impl Into<String>) {
        self.notification = Some(Notification::new(NotificationKind::Success, title));
    }

    /// 失败通知（标题 + 底层错误信息）
    pub fn notify_failure(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notification =
            Some(Notification::new(NotificationKind::Failure, title).with_message(message));
    }

    /// 当前是否在等待文本输入（影响全局快捷键）
    pub fn is_typing(&self) -> bool {
        self.focus.is_content()
            && (self.current_page.accepts_text()
                || (self.current_page.is_zone_list() && self.zones.filtering))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Page::default(), None)
    }
}
