//! 页面

pub mod grid;
