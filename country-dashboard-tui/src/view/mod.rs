//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改业务状态。
//! 唯一的例外是 `App::grid_columns`：网格列数取决于终端宽度，
//! 只有渲染时才知道，所以由 pages/grid.rs 写入，供 Update 层上下移动时使用。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 工具栏 + 网格 + 状态栏 + 弹窗
//!         mod components;     // 工具栏、状态栏、弹窗、加载指示器
//!         mod pages;          // 国家卡片网格
//!         mod text;           // 按显示宽度截断文本
//!         pub mod theme;      // 主题与样式
//!
//!
//!     ┌──────────────────────────────────────────────────────┐
//!     │ 标题栏                                                │
//!     ├──────────────────────┬─────────────────┬─────────────┤
//!     │ 搜索框               │ 地区下拉         │ 排序         │
//!     ├──────────────────────┴─────────────────┴─────────────┤
//!     │ ┌──────────┐ ┌──────────┐ ┌──────────┐               │
//!     │ │  卡片    │ │  卡片    │ │  卡片    │  ...          │
//!     │ └──────────┘ └──────────┘ └──────────┘               │
//!     ├──────────────────────────────────────────────────────┤
//!     │ 状态栏                                                │
//!     └──────────────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
mod text;
pub mod theme;

pub use layout::render;
