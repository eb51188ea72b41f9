//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Cloudflare 缓存清除",
        cancel: "取消",
        close: "关闭",
        purge: "清除",
        zone: "Zone",
        loading: "加载中...",
        error: "错误",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            submit: "Ctrl+s",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            navigate: "导航",
            open: "打开",
            select: "选择",
            switch_panel: "切换面板",
            switch_field: "切换字段",
            change_zone: "切换 Zone",
            filter: "筛选",
            copy_id: "复制 ID",
            copy_domain: "复制域名",
            paste: "粘贴",
            newline: "换行",
            submit: "提交",
            toggle_mode: "标签/前缀",
            back: "返回",
            apply_filter: "应用",
            clear_filter: "清空",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "缓存清除",
        purge_all: "全部清除",
        purge_urls: "按 URL 清除",
        quick_purge: "快速清除",
        purge_tags: "按标签清除",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    zones: ZonesTexts {
        title_purge_all: "清除全部缓存",
        title_purge_urls: "按 URL 清除",
        title_purge_tags: "按标签 / 前缀清除",
        purge_all_desc: "选择一个 Zone，清除其全部缓存",
        purge_urls_desc: "选择一个 Zone，然后输入要清除的 URL",
        purge_tags_desc: "选择一个 Zone，然后输入缓存标签或 URL 前缀",
        loading: "正在加载 Zone...",
        no_zones: "此 API Token 下没有 Zone",
        no_match: "没有匹配 '{filter}' 的 Zone",
        load_failed: "加载 Zone 失败",
        retry_hint: "按 Alt+r 重试",
        filter: "筛选",
        purging: "清除中...",
        status_active: "活跃",
        status_paused: "已暂停",
    },

    url_form: UrlFormTexts {
        title: "清除 {zone} 的 URL",
        label: "URL（每行一个，最多 30 个）",
        placeholder: "https://{zone}/page-1",
        count: "{count} 个 URL",
        submitting: "正在清除 URL...",
    },

    quick_purge: QuickPurgeTexts {
        title: "快速清除",
        description: "清除单个 URL，Zone 会根据 URL 自动识别。",
        url_label: "URL",
        url_placeholder: "https://example.com/path/to/page",
        zone_label: "Zone",
        select_zone: "选择 Zone...",
        auto_detected: "自动识别：{zone}",
        initializing: "正在加载 Zone...",
        submit: "清除 URL",
        submitting: "正在清除 URL...",
    },

    tag_form: TagFormTexts {
        title_tags: "清除 {zone} 的缓存标签",
        title_prefixes: "清除 {zone} 的 URL 前缀",
        tags_label: "缓存标签（逗号或换行分隔）",
        prefixes_label: "URL 前缀（逗号或换行分隔）",
        tags_placeholder: "product-123, blog",
        prefixes_placeholder: "{zone}/images",
        mode: "模式",
        tags: "标签",
        prefixes: "前缀",
        count: "{count} 项",
        submitting: "清除中...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_purge_title: "清除全部缓存？",
        confirm_purge_message: "将清除 {zone} 的所有缓存文件。",
        confirm_purge_warning: "缓存重建期间源站负载可能升高。",
        clipboard_error: "剪贴板错误",
    },

    // ========================================================================
    // 状态栏通知
    // ========================================================================
    notify: NotifyTexts {
        purging_cache: "正在清除缓存...",
        cache_purged: "已清除 {zone} 的缓存",
        purge_cache_failed: "清除缓存失败",
        purge_in_progress: "已有清除请求正在进行",
        purging_urls: "正在清除 URL...",
        url_count: "{count} 个 URL",
        urls_purged: "已从 {zone} 清除 {count} 个 URL",
        purge_urls_failed: "清除 URL 失败",
        purging_url: "正在清除 URL...",
        url_purged: "已清除：{url}",
        purge_url_failed: "清除 URL 失败",
        init_failed: "初始化失败",
        purging_tags: "正在清除标签...",
        purging_prefixes: "正在清除前缀...",
        tags_purged: "已从 {zone} 清除 {count} 个标签",
        prefixes_purged: "已从 {zone} 清除 {count} 个前缀",
        purge_tags_failed: "清除标签失败",
        purge_prefixes_failed: "清除前缀失败",
        refreshing: "正在刷新 Zone...",
        load_zones_failed: "加载 Zone 失败",
        copied: "{label} 已复制到剪贴板",
        clipboard_no_url: "剪贴板中没有有效的 URL",
        zone_id: "Zone ID",
        domain: "域名",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global: "全局",
        zone_list: "Zone 列表",
        forms: "URL / 标签表单",
        quick_purge: "快速清除",
        global_keys: &[
            ("Tab", "切换面板"),
            ("Esc", "返回 / 关闭"),
            ("Alt+r", "重新加载 Zone"),
            ("Alt+h / ?", "帮助"),
            ("Alt+q / Ctrl+c", "退出"),
        ],
        zone_list_keys: &[
            ("↑↓ / j k", "移动"),
            ("Home / End", "首项 / 末项"),
            ("Enter", "清除或打开表单"),
            ("/", "按名称筛选"),
            ("Alt+c", "复制 Zone ID"),
            ("Alt+d", "复制域名"),
        ],
        form_keys: &[
            ("Enter", "换行"),
            ("Ctrl+s / Alt+Enter", "提交"),
            ("Alt+m", "标签 / 前缀"),
        ],
        quick_purge_keys: &[
            ("↑↓", "切换字段"),
            ("←→", "切换 Zone"),
            ("Alt+v", "粘贴 URL"),
            ("Enter", "清除"),
        ],
    },
};
