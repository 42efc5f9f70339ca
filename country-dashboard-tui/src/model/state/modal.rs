//! 弹窗状态
//!
//! 国家详情弹窗的生命周期：
//!
//!     Closed ──(在卡片上按 Enter)──▶ OpenLoading ──(请求成功)──▶ OpenLoaded
//!                                         │
//!                                         └──(请求失败)──▶ OpenFailed
//!
//!     任意打开状态 ──(Close)──▶ Closed，详情数据随之丢弃
//!
//! 每次打开都会重新请求详情，旧请求的结果一律丢弃。

use country_dashboard_api::Country;

use super::FetchStatus;
use crate::model::request::{RequestId, RequestTracker};

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 国家详情
    CountryDetail {
        /// 请求所用的官方名称
        official_name: String,
        /// 本次打开对应的请求
        request: RequestId,
        status: FetchStatus,
        detail: Option<Box<Country>>,
        /// 内容滚动偏移
        scroll: u16,
    },

    /// 帮助
    Help,
}

/// 详情弹窗所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Closed,
    OpenLoading,
    OpenLoaded,
    OpenFailed,
}

/// 弹窗状态管理
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    /// 详情请求编号
    pub detail_requests: RequestTracker,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭弹窗，未完成的详情请求随之作废
    pub fn close(&mut self) {
        self.active = None;
        self.detail_requests.invalidate();
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.detail_requests.invalidate();
        self.active = Some(Modal::Help);
    }

    /// 打开国家详情弹窗（加载中），返回需要发出的请求编号
    pub fn show_country_detail(&mut self, official_name: &str) -> RequestId {
        let request = self.detail_requests.issue();
        self.active = Some(Modal::CountryDetail {
            official_name: official_name.to_string(),
            request,
            status: FetchStatus::Loading,
            detail: None,
            scroll: 0,
        });
        request
    }

    /// 应用详情请求结果
    ///
    /// 返回 `false` 表示结果已过期（弹窗已关闭或已重新打开）
    pub fn apply_detail(&mut self, id: RequestId, result: Result<Country, String>) -> bool {
        if !self.detail_requests.complete(id) {
            return false;
        }

        let Some(Modal::CountryDetail {
            request,
            status,
            detail,
            ..
        }) = &mut self.active
        else {
            return false;
        };

        if *request != id {
            return false;
        }

        match result {
            Ok(country) => {
                *detail = Some(Box::new(country));
                *status = FetchStatus::Loaded;
            }
            Err(message) => {
                *detail = None;
                *status = FetchStatus::Failed(message);
            }
        }
        true
    }

    /// 当前详情弹窗的阶段
    pub fn detail_phase(&self) -> DetailPhase {
        match &self.active {
            Some(Modal::CountryDetail { status, .. }) => match status {
                FetchStatus::Loaded => DetailPhase::OpenLoaded,
                FetchStatus::Failed(_) => DetailPhase::OpenFailed,
                FetchStatus::Idle | FetchStatus::Loading => DetailPhase::OpenLoading,
            },
            _ => DetailPhase::Closed,
        }
    }

    /// 已加载的详情
    pub fn detail(&self) -> Option<&Country> {
        match &self.active {
            Some(Modal::CountryDetail { detail, .. }) => detail.as_deref(),
            _ => None,
        }
    }

    pub fn scroll_up(&mut self) {
        if let Some(Modal::CountryDetail { scroll, .. }) = &mut self.active {
            *scroll = scroll.saturating_sub(1);
        }
    }

    pub fn scroll_down(&mut self) {
        if let Some(Modal::CountryDetail { scroll, .. }) = &mut self.active {
            *scroll = scroll.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_dashboard_api::CountryName;

    fn canada() -> Country {
        Country {
            name: CountryName {
                common: "Canada".to_string(),
                official: "Canada".to_string(),
            },
            cca3: "CAN".to_string(),
            ..Country::default()
        }
    }

    #[test]
    fn detail_lifecycle_loaded() {
        let mut modal = ModalState::new();
        assert_eq!(modal.detail_phase(), DetailPhase::Closed);

        let id = modal.show_country_detail("Canada");
        assert_eq!(modal.detail_phase(), DetailPhase::OpenLoading);

        assert!(modal.apply_detail(id, Ok(canada())));
        assert_eq!(modal.detail_phase(), DetailPhase::OpenLoaded);
        assert_eq!(modal.detail().map(|c| c.cca3.as_str()), Some("CAN"));

        modal.close();
        assert_eq!(modal.detail_phase(), DetailPhase::Closed);
        assert!(modal.detail().is_none());
    }

    #[test]
    fn detail_lifecycle_failed() {
        let mut modal = ModalState::new();
        let id = modal.show_country_detail("Canada");
        assert!(modal.apply_detail(id, Err("Network error: reset".to_string())));
        assert_eq!(modal.detail_phase(), DetailPhase::OpenFailed);

        modal.close();
        assert_eq!(modal.detail_phase(), DetailPhase::Closed);
    }

    #[test]
    fn result_after_close_is_discarded() {
        let mut modal = ModalState::new();
        let id = modal.show_country_detail("Canada");
        modal.close();
        assert!(!modal.apply_detail(id, Ok(canada())));
        assert!(!modal.is_open());
    }

    #[test]
    fn result_of_previous_open_is_discarded() {
        let mut modal = ModalState::new();
        let first = modal.show_country_detail("Canada");
        modal.close();
        let second = modal.show_country_detail("Republic of Chile");

        assert!(!modal.apply_detail(first, Ok(canada())));
        assert_eq!(modal.detail_phase(), DetailPhase::OpenLoading);
        assert!(modal.apply_detail(second, Err("boom".to_string())));
        assert_eq!(modal.detail_phase(), DetailPhase::OpenFailed);
    }

    #[test]
    fn scroll_never_underflows() {
        let mut modal = ModalState::new();
        modal.show_country_detail("Canada");
        modal.scroll_up();
        modal.scroll_down();
        modal.scroll_down();
        modal.scroll_up();
        assert!(matches!(
            modal.active,
            Some(Modal::CountryDetail { scroll: 1, .. })
        ));
    }
}
