use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::types::Country;

/// Read-only country data source
#[async_trait]
pub trait CountryApi: Send + Sync {
    /// 数据源标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 获取全部国家
    async fn all(&self) -> Result<Vec<Country>>;

    /// 按名称搜索国家（大小写不敏感的子串匹配，由上游决定）
    async fn search_by_name(&self, name: &str) -> Result<Vec<Country>>;

    /// 获取单个国家的详情
    ///
    /// 默认实现调用 `search_by_name()`：优先返回官方名称完全一致的条目，
    /// 否则返回第一条。结果为空时返回 `NotFound`。
    async fn detail_by_official_name(&self, official: &str) -> Result<Country> {
        let mut matches = self.search_by_name(official).await?;

        if let Some(pos) = matches.iter().position(|c| c.name.official == official) {
            return Ok(matches.swap_remove(pos));
        }

        if matches.is_empty() {
            return Err(ApiError::NotFound {
                query: official.to_string(),
            });
        }

        log::debug!(
            "[{}] no exact official-name match for '{official}', using first of {}",
            self.id(),
            matches.len()
        );
        Ok(matches.swap_remove(0))
    }
}
