//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 清除整个 Zone 的缓存
    #[default]
    PurgeAll,
    /// 选择 Zone 以按 URL 清除
    PurgeUrls,
    /// URL 列表表单（Zone 存在 `UrlFormState` 中）
    UrlForm,
    /// 单个 URL 快速清除
    QuickPurge,
    /// 选择 Zone 以按 Tag / 前缀清除
    PurgeTags,
    /// Tag / 前缀表单
    TagForm,
}

impl Page {
    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(self) -> bool {
        matches!(self, Page::UrlForm | Page::TagForm)
    }

    /// 详情页对应的列表页
    pub fn parent(self) -> Option<Page> {
        match self {
            Page::UrlForm => Some(Page::PurgeUrls),
            Page::TagForm => Some(Page::PurgeTags),
            _ => None,
        }
    }

    /// 是否展示 Zone 列表
    pub fn is_zone_list(self) -> bool {
        matches!(self, Page::PurgeAll | Page::PurgeUrls | Page::PurgeTags)
    }

    /// 是否包含文本输入（此时普通字符键不作为快捷键）
    pub fn accepts_text(self) -> bool {
        matches!(self, Page::UrlForm | Page::QuickPurge | Page::TagForm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_return_to_their_zone_list() {
        assert_eq!(Page::UrlForm.parent(), Some(Page::PurgeUrls));
        assert_eq!(Page::TagForm.parent(), Some(Page::PurgeTags));
        assert_eq!(Page::QuickPurge.parent(), None);
        assert!(Page::UrlForm.is_detail_page());
        assert!(!Page::PurgeAll.is_detail_page());
    }
}
