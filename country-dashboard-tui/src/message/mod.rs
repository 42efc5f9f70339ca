//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ─→ Update 之间的桥梁
//! 所有的用户操作、时钟与后台结果都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod backend;        // 后台任务结果与 Command
//!         mod content;        // 网格子消息
//!         mod modal;          // 弹窗子消息
//!         mod search;         // 搜索框子消息
//!
//!
//!     消息来源有三处：
//!         · event/handler.rs      按键 → AppMessage
//!         · app.rs                每轮循环产生 AppMessage::Tick(now)
//!         · backend/mod.rs        任务完成 → AppMessage::Backend(..)
//!
//!     反方向，Update 层可以返回一个 Command：
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command>
//!
//!     主循环把 Command 交给 Backend 执行，
//!     执行结果以 BackendMessage 的形式再次回到 Update 层。
//!

mod app;
mod backend;
mod content;
mod modal;
mod search;

pub use app::AppMessage;
pub use backend::{BackendMessage, Command};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
