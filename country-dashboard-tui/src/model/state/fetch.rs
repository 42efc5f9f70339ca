//! 加载状态

/// 一次数据加载的状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// 尚未发起
    #[default]
    Idle,
    /// 请求中
    Loading,
    /// 已加载
    Loaded,
    /// 失败，附带错误信息
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// 失败时的错误信息
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
