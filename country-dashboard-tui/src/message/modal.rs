//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 向上滚动
    ScrollUp,

    /// 向下滚动
    ScrollDown,
}
