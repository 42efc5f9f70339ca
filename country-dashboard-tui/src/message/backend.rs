//! 后台任务消息
//!
//! `Command` 由 Update 层产生、交给 Backend 执行；
//! `BackendMessage` 由 Backend 在任务完成后发回主循环。

use country_dashboard_api::{ApiError, Country};

use crate::model::RequestId;

/// 需要 Backend 执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载全部国家
    FetchAll { request: RequestId },
    /// 按名称搜索
    SearchByName { request: RequestId, query: String },
    /// 加载国家详情
    FetchDetail {
        request: RequestId,
        official_name: String,
    },
}

impl Command {
    pub fn request(&self) -> RequestId {
        match self {
            Command::FetchAll { request }
            | Command::SearchByName { request, .. }
            | Command::FetchDetail { request, .. } => *request,
        }
    }
}

/// 后台任务结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 全量加载完成
    AllLoaded {
        request: RequestId,
        result: Result<Vec<Country>, ApiError>,
    },
    /// 名称搜索完成
    SearchLoaded {
        request: RequestId,
        query: String,
        result: Result<Vec<Country>, ApiError>,
    },
    /// 详情加载完成
    DetailLoaded {
        request: RequestId,
        result: Result<Country, ApiError>,
    },
}
