//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `zones.*`, `quick_purge.*`
//! 4. **状态栏通知归 `notify.*`**：清除请求的进度与结果
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 带 `{name}` 占位符的文本通过 [`fill`](super::fill) 替换。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// Zone 列表页文本（三个列表页共用）
    pub zones: ZonesTexts,
    /// URL 表单文本
    pub url_form: UrlFormTexts,
    /// Quick Purge 页面文本
    pub quick_purge: QuickPurgeTexts,
    /// Tag / 前缀表单文本
    pub tag_form: TagFormTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏通知
    pub notify: NotifyTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub purge: &'static str,
    pub zone: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
    pub submit: &'static str,    // "Ctrl+s"
    pub quit: &'static str,      // "Alt+q"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub switch_panel: &'static str,
    pub switch_field: &'static str,
    pub change_zone: &'static str,
    pub filter: &'static str,
    pub copy_id: &'static str,
    pub copy_domain: &'static str,
    pub paste: &'static str,
    pub newline: &'static str,
    pub submit: &'static str,
    pub toggle_mode: &'static str,
    pub back: &'static str,
    pub apply_filter: &'static str,
    pub clear_filter: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub purge_all: &'static str,
    pub purge_urls: &'static str,
    pub quick_purge: &'static str,
    pub purge_tags: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// Zone 列表页文本
pub struct ZonesTexts {
    pub title_purge_all: &'static str,
    pub title_purge_urls: &'static str,
    pub title_purge_tags: &'static str,
    /// 列表上方的说明
    pub purge_all_desc: &'static str,
    pub purge_urls_desc: &'static str,
    pub purge_tags_desc: &'static str,
    pub loading: &'static str,
    pub no_zones: &'static str,
    /// `{filter}`
    pub no_match: &'static str,
    pub load_failed: &'static str,
    pub retry_hint: &'static str,
    pub filter: &'static str,
    pub purging: &'static str,
    pub status_active: &'static str,
    pub status_paused: &'static str,
}

/// URL 表单文本
pub struct UrlFormTexts {
    /// `{zone}`
    pub title: &'static str,
    pub label: &'static str,
    /// `{zone}`
    pub placeholder: &'static str,
    /// `{count}`
    pub count: &'static str,
    pub submitting: &'static str,
}

/// Quick Purge 页面文本
pub struct QuickPurgeTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub url_label: &'static str,
    pub url_placeholder: &'static str,
    pub zone_label: &'static str,
    pub select_zone: &'static str,
    /// `{zone}`
    pub auto_detected: &'static str,
    pub initializing: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

/// Tag / 前缀表单文本
pub struct TagFormTexts {
    /// `{zone}`
    pub title_tags: &'static str,
    /// `{zone}`
    pub title_prefixes: &'static str,
    pub tags_label: &'static str,
    pub prefixes_label: &'static str,
    pub tags_placeholder: &'static str,
    /// `{zone}`
    pub prefixes_placeholder: &'static str,
    pub mode: &'static str,
    pub tags: &'static str,
    pub prefixes: &'static str,
    /// `{count}`
    pub count: &'static str,
    pub submitting: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本（所有弹窗的内容都在这里）
pub struct ModalTexts {
    pub confirm_purge_title: &'static str,
    /// `{zone}`
    pub confirm_purge_message: &'static str,
    pub confirm_purge_warning: &'static str,
    pub clipboard_error: &'static str,
}

// ============================================================================
// 状态栏通知
// ============================================================================

/// 清除请求的进度与结果（`{zone}` `{count}` `{url}` `{label}` 占位）
pub struct NotifyTexts {
    // Purge All
    pub purging_cache: &'static str,
    pub cache_purged: &'static str,
    pub purge_cache_failed: &'static str,
    pub purge_in_progress: &'static str,
    // Purge URLs
    pub purging_urls: &'static str,
    pub url_count: &'static str,
    pub urls_purged: &'static str,
    pub purge_urls_failed: &'static str,
    // Quick Purge
    pub purging_url: &'static str,
    pub url_purged: &'static str,
    pub purge_url_failed: &'static str,
    pub init_failed: &'static str,
    // Tags / 前缀
    pub purging_tags: &'static str,
    pub purging_prefixes: &'static str,
    pub tags_purged: &'static str,
    pub prefixes_purged: &'static str,
    pub purge_tags_failed: &'static str,
    pub purge_prefixes_failed: &'static str,
    // Zone 列表
    pub refreshing: &'static str,
    pub load_zones_failed: &'static str,
    // 剪贴板
    pub copied: &'static str,
    pub clipboard_no_url: &'static str,
    pub zone_id: &'static str,
    pub domain: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub zone_list: &'static str,
    pub forms: &'static str,
    pub quick_purge: &'static str,
    /// (按键, 说明)
    pub global_keys: &'static [(&'static str, &'static str)],
    pub zone_list_keys: &'static [(&'static str, &'static str)],
    pub form_keys: &'static [(&'static str, &'static str)],
    pub quick_purge_keys: &'static [(&'static str, &'static str)],
}
