//! 应用主状态结构

use std::cell::Cell;

use super::{DashboardState, FocusPanel, ModalState, Settings};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 仪表盘状态
    pub dashboard: DashboardState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 动画帧计数（加载指示器）
    pub tick: u64,

    /// 运行时设置
    pub settings: Settings,

    /// 网格列数，由 View 层在渲染时记录，供上下移动使用
    pub grid_columns: Cell<usize>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(settings: Settings) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status_message: None,
            dashboard: DashboardState::new(),
            modal: ModalState::new(),
            tick: 0,
            settings,
            grid_columns: Cell::new(1),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
