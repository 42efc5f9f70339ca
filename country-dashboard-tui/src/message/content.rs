//! 网格消息
//!
//! 处理卡片网格中的操作：光标移动、打开详情、排序、过滤、清空

/// 网格消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 光标移动 ==========
    /// 左移一格
    SelectPrevious,
    /// 右移一格
    SelectNext,
    /// 上移一行
    SelectUp,
    /// 下移一行
    SelectDown,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开选中国家的详情
    Confirm,

    // ========== 条件 ==========
    /// 按人口排序
    SortByPopulation,
    /// 下一个地区
    NextRegion,
    /// 上一个地区
    PrevRegion,
    /// 清空搜索、过滤与排序
    ClearAll,
}
