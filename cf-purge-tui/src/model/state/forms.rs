//! 表单状态：URL 表单、Quick Purge、Tag/Prefix 表单

use cf_purge_core::Zone;

// ============ Purge All ============

/// Purge All 页面状态
#[derive(Debug, Default)]
pub struct PurgeAllState {
    /// 正在清除的 Zone ID（同一时间只允许一个请求）
    pub in_flight: Option<String>,
}

// ============ Purge URLs ============

/// URL 列表表单
#[derive(Debug, Default)]
pub struct UrlFormState {
    /// 目标 Zone
    pub zone: Option<Zone>,
    /// 多行输入，每行一个 URL
    pub input: String,
    /// 内联校验错误
    pub error: Option<String>,
    /// 请求进行中的 Zone ID，重新打开表单时保留
    pub in_flight: Option<String>,
}

impl UrlFormState {
    /// 为指定 Zone 打开空表单
    pub fn open(&mut self, zone: Zone) {
        *self = Self {
            zone: Some(zone),
            in_flight: self.in_flight.take(),
            ..Self::default()
        };
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 表单当前的 Zone 是否就是 `zone_id`
    pub fn targets(&self, zone_id: &str) -> bool {
        self.zone.as_ref().is_some_and(|z| z.id == zone_id)
    }
}

// ============ Quick Purge ============

/// Quick Purge 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickPurgeField {
    #[default]
    Url,
    Zone,
}

impl QuickPurgeField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Url => Self::Zone,
            Self::Zone => Self::Url,
        }
    }
}

/// Quick Purge 表单
#[derive(Debug, Default)]
pub struct QuickPurgeState {
    pub url: String,
    /// URL 字段的校验错误
    pub url_error: Option<String>,
    /// 选中的 Zone（`None` 即 "Select a zone..."）
    pub selected_zone_id: Option<String>,
    /// Zone 字段的校验错误
    pub zone_error: Option<String>,
    /// 根据 URL 自动识别出的 Zone 名称
    pub detected_zone: Option<String>,
    pub focus: QuickPurgeField,
    /// 正在加载 Zone 与剪贴板
    pub initializing: bool,
    /// 正在清除的 URL，清空表单时保留
    pub in_flight: Option<String>,
}

impl QuickPurgeState {
    /// 清空表单
    pub fn reset(&mut self) {
        *self = Self {
            in_flight: self.in_flight.take(),
            ..Self::default()
        };
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }
}

// ============ Purge Tags / Prefixes ============

/// 列表清除模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Tags,
    Prefixes,
}

impl ListMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Tags => Self::Prefixes,
            Self::Prefixes => Self::Tags,
        }
    }
}

/// Tag / Prefix 表单
#[derive(Debug, Default)]
pub struct TagFormState {
    pub zone: Option<Zone>,
    pub mode: ListMode,
    /// 换行或逗号分隔
    pub input: String,
    pub error: Option<String>,
    /// 请求进行中的 Zone ID
    pub in_flight: Option<String>,
}

impl TagFormState {
    /// 为指定 Zone 打开空表单（保留上次的模式与进行中的请求）
    pub fn open(&mut self, zone: Zone) {
        *self = Self {
            zone: Some(zone),
            mode: self.mode,
            in_flight: self.in_flight.take(),
            ..Self::default()
        };
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn targets(&self, zone_id: &str) -> bool {
        self.zone.as_ref().is_some_and(|z| z.id == zone_id)
    }
}
