//! Zone 列表状态（Purge All / Purge URLs / Purge Tags 共用）

use cf_purge_core::Zone;

/// Zone 列表状态
#[derive(Debug, Default)]
pub struct ZoneListState {
    /// 全部 Zone（API 返回顺序）
    pub zones: Vec<Zone>,
    /// 当前选中项（在筛选后的列表中的索引）
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 最近一次加载失败的信息
    pub error: Option<String>,
    /// 名称筛选
    pub filter: String,
    /// 是否正在输入筛选条件
    pub filtering: bool,
}

impl ZoneListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按名称筛选后的 Zone（不区分大小写）
    pub fn visible(&self) -> Vec<&Zone> {
        let needle = self.filter.trim().to_ascii_lowercase();
        self.zones
            .iter()
            .filter(|z| needle.is_empty() || z.name.to_ascii_lowercase().contains(&needle))
            .collect()
    }

    /// 获取当前选中的 Zone
    pub fn selected_zone(&self) -> Option<&Zone> {
        self.visible().get(self.selected).copied()
    }

    /// 按 ID 查找
    pub fn find(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// 标记开始加载
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// 设置 Zone 列表
    pub fn set_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
        self.loading = false;
        self.error = None;
        self.clamp_selection();
    }

    /// 记录加载失败（保留已有列表）
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// 进入筛选输入模式
    pub fn start_filter(&mut self) {
        self.filtering = true;
    }

    /// 结束筛选输入（保留筛选条件）
    pub fn stop_filter(&mut self) {
        self.filtering = false;
    }

    pub fn push_filter(&mut self, ch: char) {
        self.filter.push(ch);
        self.selected = 0;
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.selected = 0;
    }

    /// 清除筛选条件
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_purge_core::ZoneStatus;

    fn zone(id: &str, name: &str) -> Zone {
        Zone {
            id: id.to_string(),
            name: name.to_string(),
            status: ZoneStatus::Active,
            paused: false,
        }
    }

    fn state() -> ZoneListState {
        let mut state = ZoneListState::new();
        state.set_zones(vec![
            zone("z1", "example.com"),
            zone("z2", "Example.org"),
            zone("z3", "other.net"),
        ]);
        state
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut state = state();
        for ch in "EXAMPLE".chars() {
            state.push_filter(ch);
        }
        let names: Vec<_> = state.visible().iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["example.com", "Example.org"]);
    }

    #[test]
    fn selection_stays_within_visible_list() {
        let mut state = state();
        state.select_last();
        assert_eq!(state.selected_zone().unwrap().id, "z3");

        state.push_filter('o');
        state.push_filter('t');
        state.select_next();
        assert_eq!(state.selected_zone().unwrap().id, "z3");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn set_error_keeps_known_zones() {
        let mut state = state();
        state.start_loading();
        state.set_error("network down");
        assert!(!state.loading);
        assert_eq!(state.zones.len(), 3);
        assert_eq!(state.error.as_deref(), Some("network down"));
    }

    #[test]
    fn refresh_with_fewer_zones_clamps_selection() {
        let mut state = state();
        state.select_last();
        state.set_zones(vec![zone("z1", "example.com")]);
        assert_eq!(state.selected, 0);
        assert!(state.error.is_none());
    }

    #[test]
    fn clear_filter_resets_mode() {
        let mut state = state();
        state.start_filter();
        state.push_filter('x');
        state.clear_filter();
        assert!(!state.filtering);
        assert_eq!(state.visible().len(), 3);
    }
}
