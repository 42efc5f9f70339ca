//! 运行时设置
//!
//! 由配置文件（`backend::AppConfig`）转换而来，启动后只读。

use std::time::Duration;

use crate::backend::AppConfig;
use crate::i18n::Language;
use crate::view::theme::Theme;

/// 运行时设置
#[derive(Debug, Clone)]
pub struct Settings {
    /// 搜索防抖窗口
    pub search_debounce: Duration,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl Settings {
    /// 从配置生成设置，无法识别的主题或语言退回默认值
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            search_debounce: Duration::from_millis(config.search_debounce_ms),
            theme: Theme::from_code(&config.theme).unwrap_or_default(),
            language: Language::from_code(&config.language).unwrap_or_default(),
        }
    }
}
