//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!         · handle_event    把按键翻译为 AppMessage
//!
//!             按键分派顺序：
//!                 1. Ctrl+C               始终退出
//!                 2. 弹窗打开             Esc/Enter/q 关闭，↑↓ 滚动
//!                 3. 焦点在搜索框         字符输入、Backspace，Enter/Esc/Tab 回到网格
//!                 4. 全局快捷键           q ? Alt+r Esc / Tab
//!                 5. 网格                 方向键/hjkl、Enter、s、r/R、c
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
