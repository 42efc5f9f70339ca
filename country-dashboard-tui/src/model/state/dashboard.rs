//! 仪表盘状态
//!
//! 三份列表各司其职：
//!     - `all_countries`：最近一次成功的全量加载，只用来生成地区选项
//!     - `base`：最近一次被采用的接口结果（全量或按名称搜索）
//!     - `displayed`：由 `base` 按地区过滤、再按人口排序得到，从不原地修改
//!
//! 任何条件变化都通过 `derive()` 重新计算 `displayed`，
//! 因此切换地区不会丢失之前被过滤掉的国家。

use std::time::{Duration, Instant};

use country_dashboard_api::{Country, CountryKey};

use super::FetchStatus;
use crate::model::request::RequestTracker;

/// 等待防抖窗口结束的搜索
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub query: String,
    pub due: Instant,
}

/// `base` 的来源，用于刷新时重新请求同一数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CollectionSource {
    #[default]
    All,
    Name(String),
}

/// 仪表盘状态
#[derive(Debug, Default)]
pub struct DashboardState {
    /// 全量国家列表
    pub all_countries: Vec<Country>,
    /// 当前数据源的结果
    pub base: Vec<Country>,
    /// 网格中显示的国家
    pub displayed: Vec<Country>,
    /// 地区选项（去重、排序）
    pub region_options: Vec<String>,

    /// 搜索框内容
    pub search_value: String,
    /// 当前地区过滤，`None` 表示全部
    pub filter_value: Option<String>,
    /// 是否按人口排序
    pub sort_by_population: bool,

    /// 网格光标
    pub selected: usize,

    /// 列表加载状态
    pub status: FetchStatus,
    /// 列表请求编号（全量、搜索、刷新、清空共用）
    pub requests: RequestTracker,
    /// 防抖中的搜索
    pub pending_search: Option<PendingSearch>,
    /// `base` 的来源
    pub source: CollectionSource,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 数据 ==========

    /// 采用全量加载结果
    pub fn set_all(&mut self, countries: Vec<Country>) {
        self.set_catalogue(&countries);
        self.base = countries;
        self.source = CollectionSource::All;
        self.status = FetchStatus::Loaded;
        self.derive();
    }

    /// 只更新全量数据与地区选项，网格不变
    ///
    /// 全量结果被更新的搜索请求取代时走这里
    pub fn set_catalogue(&mut self, countries: &[Country]) {
        self.region_options = collect_regions(countries);
        self.all_countries = countries.to_vec();
    }

    /// 采用按名称搜索的结果
    pub fn set_search_result(&mut self, query: String, countries: Vec<Country>) {
        self.base = countries;
        self.source = CollectionSource::Name(query);
        self.status = FetchStatus::Loaded;
        self.derive();
    }

    /// 由 `base` 重新计算 `displayed`，光标尽量停在原来的国家上
    pub fn derive(&mut self) {
        let previous = self.selected_country().map(Country::key);

        let mut displayed: Vec<Country> = match &self.filter_value {
            Some(region) => self
                .base
                .iter()
                .filter(|c| &c.region == region)
                .cloned()
                .collect(),
            None => self.base.clone(),
        };

        if self.sort_by_population {
            // sort_by_key 是稳定排序，同人口保持原有顺序
            displayed.sort_by_key(|c| c.population);
        }

        self.displayed = displayed;
        self.selected = previous
            .and_then(|key| self.position_of(&key))
            .unwrap_or_else(|| self.selected.min(self.displayed.len().saturating_sub(1)));
    }

    fn position_of(&self, key: &CountryKey) -> Option<usize> {
        self.displayed.iter().position(|c| &c.key() == key)
    }

    // ========== 条件 ==========

    /// 设置地区过滤
    pub fn set_filter(&mut self, region: Option<String>) {
        self.filter_value = region;
        self.derive();
    }

    /// 地区下拉：全部 → 地区₁ → … → 全部
    pub fn next_region(&mut self) {
        let next = match &self.filter_value {
            None => self.region_options.first().cloned(),
            Some(current) => self
                .region_options
                .iter()
                .position(|r| r == current)
                .and_then(|i| self.region_options.get(i + 1))
                .cloned(),
        };
        self.set_filter(next);
    }

    /// 反向切换地区
    pub fn prev_region(&mut self) {
        let prev = match &self.filter_value {
            None => self.region_options.last().cloned(),
            Some(current) => match self.region_options.iter().position(|r| r == current) {
                Some(0) | None => None,
                Some(i) => self.region_options.get(i - 1).cloned(),
            },
        };
        self.set_filter(prev);
    }

    /// 按人口升序排序
    pub fn sort_by_population(&mut self) {
        self.sort_by_population = true;
        self.derive();
    }

    /// 重置搜索、地区、排序与防抖
    pub fn reset_criteria(&mut self) {
        self.search_value.clear();
        self.filter_value = None;
        self.sort_by_population = false;
        self.pending_search = None;
    }

    // ========== 防抖 ==========

    /// 安排一次防抖搜索，每次按键都会推迟截止时间
    pub fn schedule_search(&mut self, query: String, now: Instant, debounce: Duration) {
        self.pending_search = Some(PendingSearch {
            query,
            due: now + debounce,
        });
    }

    /// 取出已到期的搜索
    pub fn take_due_search(&mut self, now: Instant) -> Option<String> {
        match &self.pending_search {
            Some(pending) if pending.due <= now => self.pending_search.take().map(|p| p.query),
            _ => None,
        }
    }

    // ========== 网格光标 ==========

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.displayed.len() {
            self.selected += 1;
        }
    }

    /// 上移一行
    pub fn select_row_up(&mut self, columns: usize) {
        let columns = columns.max(1);
        if self.selected >= columns {
            self.selected -= columns;
        }
    }

    /// 下移一行
    pub fn select_row_down(&mut self, columns: usize) {
        let columns = columns.max(1);
        if self.selected + columns < self.displayed.len() {
            self.selected += columns;
        } else if !self.displayed.is_empty() {
            self.selected = self.displayed.len() - 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.displayed.len().saturating_sub(1);
    }

    /// 当前选中的国家
    pub fn selected_country(&self) -> Option<&Country> {
        self.displayed.get(self.selected)
    }
}

/// 去重并排序的非空地区
fn collect_regions(countries: &[Country]) -> Vec<String> {
    let mut regions: Vec<String> = countries
        .iter()
        .map(|c| c.region.clone())
        .filter(|r| !r.is_empty())
        .collect();
    regions.sort();
    regions.dedup();
    regions
}
