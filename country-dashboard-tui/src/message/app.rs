//! 应用主消息枚举

use std::time::Instant;

use super::{BackendMessage, ContentMessage, ModalMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 网格相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendMessage),

    /// 焦点切到搜索框
    FocusSearch,

    /// 返回上一层（关闭弹窗 / 离开搜索框 / 清除状态消息）
    GoBack,

    /// 重新请求当前数据源
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 时钟（驱动防抖与加载动画）
    Tick(Instant),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
