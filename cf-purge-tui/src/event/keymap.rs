//! 快捷键配置
//!
//! 文本输入时普通字符会被当作输入，所以页面操作都使用 Alt / Ctrl 组合键。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // Zone 列表
    pub const FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const COPY_ZONE_ID: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const COPY_DOMAIN: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
    pub const SUBMIT_ALT: KeyBinding = KeyBinding::alt(KeyCode::Enter);
    pub const PASTE: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const TOGGLE_MODE: KeyBinding = KeyBinding::alt(KeyCode::Char('m'));
}

/// 是否是可输入的字符（无修饰键或仅 Shift）
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}
