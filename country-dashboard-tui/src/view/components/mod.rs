//! 通用组件

pub mod modal;
pub mod spinner;
pub mod statusbar;
pub mod toolbar;
