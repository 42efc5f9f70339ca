//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：详情与帮助弹窗的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 工具栏文本（搜索、地区、排序）
    pub toolbar: ToolbarTexts,
    /// 卡片网格文本
    pub grid: GridTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub all: &'static str,
    pub on: &'static str,
    pub off: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub arrows: &'static str,    // "←↑↓→"
    pub arrows_ud: &'static str, // "↑↓"
    pub search: &'static str,    // "/"
    pub sort: &'static str,      // "s"
    pub region: &'static str,    // "r/R"
    pub clear: &'static str,     // "c"
    pub refresh: &'static str,   // "Alt+r"
    pub help: &'static str,      // "?"
    pub quit: &'static str,      // "q"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub move_cursor: &'static str,
    pub open_detail: &'static str,
    pub search: &'static str,
    pub back_to_grid: &'static str,
    pub sort: &'static str,
    pub region: &'static str,
    pub clear: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
    pub scroll: &'static str,
}

// ============================================================================
// 工具栏
// ============================================================================

/// 工具栏文本
pub struct ToolbarTexts {
    pub search_title: &'static str,
    pub search_placeholder: &'static str,
    pub region_title: &'static str,
    pub sort_title: &'static str,
    pub sort_by_population: &'static str,
}

// ============================================================================
// 卡片网格
// ============================================================================

/// 卡片网格文本
pub struct GridTexts {
    pub title: &'static str,
    /// 标题中的数量单位，如 "250 countries"
    pub count_unit: &'static str,
    pub capital: &'static str,
    pub region: &'static str,
    pub subregion: &'static str,
    pub population: &'static str,
    pub flag: &'static str,
    pub no_flag: &'static str,
    pub no_capital: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub detail: DetailModalTexts,
}

/// 国家详情弹窗
pub struct DetailModalTexts {
    pub title: &'static str,
    pub flag: &'static str,
    pub capitals: &'static str,
    pub region: &'static str,
    pub subregion: &'static str,
    pub population: &'static str,
    pub currencies: &'static str,
    pub languages: &'static str,
    pub time_zones: &'static str,
    pub loading: &'static str,
    pub failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub grid_section: &'static str,
    pub search_section: &'static str,
    pub modal_section: &'static str,
    pub close_hint: &'static str,
}
