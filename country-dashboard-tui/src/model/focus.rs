//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部搜索框
    Search,
    /// 国家卡片网格
    #[default]
    Grid,
}

impl FocusPanel {
    /// 是否在搜索框
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }

    /// 是否在网格
    pub fn is_grid(self) -> bool {
        matches!(self, FocusPanel::Grid)
    }
}
