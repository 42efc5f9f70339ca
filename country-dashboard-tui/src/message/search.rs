//! 搜索框消息

/// 搜索框消息
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 离开搜索框，回到网格
    Leave,
}
