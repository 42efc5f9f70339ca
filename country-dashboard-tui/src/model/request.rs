//! 请求编号
//!
//! 每个发出的网络请求都带一个单调递增的编号，
//! 回来的结果只有编号等于最新编号时才会被采用，其余一律丢弃。

/// 请求编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 请求追踪器
#[derive(Debug, Default)]
pub struct RequestTracker {
    next: u64,
    current: Option<RequestId>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发出新请求，之前的请求全部作废
    pub fn issue(&mut self) -> RequestId {
        self.next += 1;
        let id = RequestId(self.next);
        self.current = Some(id);
        id
    }

    /// 结果是否属于最新请求
    pub fn is_current(&self, id: RequestId) -> bool {
        self.current == Some(id)
    }

    /// 结果已被采用，标记为已完成
    ///
    /// 返回 `false` 表示该结果已过期
    pub fn complete(&mut self, id: RequestId) -> bool {
        if self.is_current(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// 作废当前请求（例如关闭弹窗）
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// 是否有未完成的请求
    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_monotonically() {
        let mut tracker = RequestTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
    }

    #[test]
    fn only_latest_request_is_current() {
        let mut tracker = RequestTracker::new();
        let old = tracker.issue();
        let new = tracker.issue();
        assert!(!tracker.is_current(old));
        assert!(tracker.is_current(new));
        assert!(!tracker.complete(old));
        assert!(tracker.complete(new));
        assert!(!tracker.in_flight());
    }

    #[test]
    fn invalidate_discards_pending_result() {
        let mut tracker = RequestTracker::new();
        let id = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.complete(id));
    }
}
