//! English translations (en-US)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // Common
    // ========================================================================
    common: CommonTexts {
        app_name: "Cloudflare Cache Purge",
        cancel: "Cancel",
        close: "Close",
        purge: "Purge",
        zone: "Zone",
        loading: "Loading...",
        error: "Error",
    },

    // ========================================================================
    // Keyboard hints
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
            navigate: "Navigate",
            open: "Open",
            select: "Select",
            switch_panel: "Switch panel",
            switch_field: "Switch field",
            change_zone: "Change zone",
            filter: "Filter",
            copy_id: "Copy ID",
            copy_domain: "Copy domain",
            paste: "Paste",
            newline: "New line",
            submit: "Submit",
            toggle_mode: "Tags/Prefixes",
            back: "Back",
            apply_filter: "Apply",
            clear_filter: "Clear",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // Navigation
    // ========================================================================
    nav: NavTexts {
        title: "Cache Purge",
        purge_all: "Purge All",
        purge_urls: "Purge URLs",
        quick_purge: "Quick Purge",
        purge_tags: "Purge Tags",
    },

    // ========================================================================
    // Pages
    // ========================================================================
    zones: ZonesTexts {
        title_purge_all: "Purge All Cache",
        title_purge_urls: "Purge URLs",
        title_purge_tags: "Purge Tags / Prefixes",
        purge_all_desc: "Select a zone to purge everything from its cache",
        purge_urls_desc: "Select a zone, then enter the URLs to purge",
        purge_tags_desc: "Select a zone, then enter cache tags or URL prefixes",
        loading: "Loading zones...",
        no_zones: "No zones found for this API token",
        no_match: "No zones match '{filter}'",
        load_failed: "Failed to Load Zones",
        retry_hint: "Press Alt+r to retry",
        filter: "Filter",
        purging: "purging...",
        status_active: "active",
        status_paused: "paused",
    },

    url_form: UrlFormTexts {
        title: "Purge URLs for {zone}",
        label: "URLs (one per line, max 30)",
        placeholder: "https://{zone}/page-1",
        count: "{count} URL(s)",
        submitting: "Purging URLs...",
    },

    quick_purge: QuickPurgeTexts {
        title: "Quick Purge",
        description: "Purge a single URL. The zone is detected from the URL.",
        url_label: "URL",
        url_placeholder: "https://example.com/path/to/page",
        zone_label: "Zone",
        select_zone: "Select a zone...",
        auto_detected: "Auto-detected: {zone}",
        initializing: "Loading zones...",
        submit: "Purge URL",
        submitting: "Purging URL...",
    },

    tag_form: TagFormTexts {
        title_tags: "Purge Cache Tags for {zone}",
        title_prefixes: "Purge Prefixes for {zone}",
        tags_label: "Cache tags (comma or newline separated)",
        prefixes_label: "URL prefixes (comma or newline separated)",
        tags_placeholder: "product-123, blog",
        prefixes_placeholder: "{zone}/images",
        mode: "Mode",
        tags: "Tags",
        prefixes: "Prefixes",
        count: "{count} item(s)",
        submitting: "Purging...",
    },

    // ========================================================================
    // Modals
    // ========================================================================
    modal: ModalTexts {
        confirm_purge_title: "Purge Entire Cache?",
        confirm_purge_message: "This will purge ALL cached files for {zone}.",
        confirm_purge_warning:
            "Your origin server may see increased load while the cache refills.",
        clipboard_error: "Clipboard Error",
    },

    // ========================================================================
    // Notifications
    // ========================================================================
    notify: NotifyTexts {
        purging_cache: "Purging cache...",
        cache_purged: "Cache purged for {zone}",
        purge_cache_failed: "Failed to purge cache",
        purge_in_progress: "A purge is already in progress",
        purging_urls: "Purging URLs...",
        url_count: "{count} URL(s)",
        urls_purged: "Purged {count} URL(s) from {zone}",
        purge_urls_failed: "Failed to purge URLs",
        purging_url: "Purging URL...",
        url_purged: "Purged: {url}",
        purge_url_failed: "Failed to purge URL",
        init_failed: "Failed to initialize",
        purging_tags: "Purging tags...",
        purging_prefixes: "Purging prefixes...",
        tags_purged: "Purged {count} tag(s) from {zone}",
        prefixes_purged: "Purged {count} prefix(es) from {zone}",
        purge_tags_failed: "Failed to purge tags",
        purge_prefixes_failed: "Failed to purge prefixes",
        refreshing: "Refreshing zones...",
        load_zones_failed: "Failed to load zones",
        copied: "{label} copied to clipboard",
        clipboard_no_url: "Clipboard does not contain a valid URL",
        zone_id: "Zone ID",
        domain: "Domain",
    },

    // ========================================================================
    // Help
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global: "Global",
        zone_list: "Zone lists",
        forms: "URL / tag forms",
        quick_purge: "Quick Purge",
        global_keys: &[
            ("Tab", "Switch panel"),
            ("Esc", "Back / close"),
            ("Alt+r", "Reload zones"),
            ("Alt+h / ?", "Help"),
            ("Alt+q / Ctrl+c", "Quit"),
        ],
        zone_list_keys: &[
            ("↑↓ / j k", "Move"),
            ("Home / End", "First / last"),
            ("Enter", "Purge or open form"),
            ("/", "Filter by name"),
            ("Alt+c", "Copy zone ID"),
            ("Alt+d", "Copy domain"),
        ],
        form_keys: &[
            ("Enter", "New line"),
            ("Ctrl+s / Alt+Enter", "Submit"),
            ("Alt+m", "Tags / prefixes"),
        ],
        quick_purge_keys: &[
            ("↑↓", "Switch field"),
            ("←→", "Change zone"),
            ("Alt+v", "Paste URL"),
            ("Enter", "Purge"),
        ],
    },
};
