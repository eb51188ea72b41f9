//! 导航状态定义

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    PurgeAll,
    PurgeUrls,
    QuickPurge,
    PurgeTags,
}

impl NavItemId {
    /// 对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::PurgeAll => Page::PurgeAll,
            NavItemId::PurgeUrls => Page::PurgeUrls,
            NavItemId::QuickPurge => Page::QuickPurge,
            NavItemId::PurgeTags => Page::PurgeTags,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::PurgeAll,
                    icon: "✖",
                },
                NavItem {
                    id: NavItemId::PurgeUrls,
                    icon: "≡",
                },
                NavItem {
                    id: NavItemId::QuickPurge,
                    icon: "⚡",
                },
                NavItem {
                    id: NavItemId::PurgeTags,
                    icon: "#",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选中指定页面对应的导航项（详情页选中其列表页）
    pub fn select_page(&mut self, page: Page) {
        let page = page.parent().unwrap_or(page);
        if let Some(index) = self.items.iter().position(|item| item.id.page() == page) {
            self.selected = index;
        }
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
