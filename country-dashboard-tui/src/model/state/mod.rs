//! 页面状态模块
//!
//! 定义仪表盘、弹窗与设置的状态数据结构

mod dashboard;
mod fetch;
mod modal;
mod settings;

pub use dashboard::{CollectionSource, DashboardState};
pub use fetch::FetchStatus;
pub use modal::{DetailPhase, Modal, ModalState};
pub use settings::Settings;
