//! 按显示宽度截断文本

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到 `max` 列以内，超出部分以 `…` 结尾
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
