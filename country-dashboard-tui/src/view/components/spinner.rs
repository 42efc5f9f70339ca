//! 加载指示器

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::colors;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 主循环每 50ms 左右一个 tick，每两个 tick 换一帧
pub fn frame_at(tick: u64) -> &'static str {
    let index = usize::try_from((tick / 2) % FRAMES.len() as u64).unwrap_or(0);
    FRAMES[index]
}

/// 在区域中央渲染加载指示器，有错误时显示在下方
pub fn render(frame: &mut Frame, area: Rect, tick: u64, error: Option<&str>) {
    let c = colors();
    let texts = t();

    let mut lines = vec![Line::styled(
        format!("{} {}", frame_at(tick), texts.common.loading),
        Style::default().fg(c.highlight),
    )];

    if let Some(err) = error {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("⚠ {}: {err}", texts.common.error),
            Style::default().fg(c.error),
        ));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect::new(area.x, top, area.width, height.min(area.height));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_cycle() {
        assert_eq!(frame_at(0), frame_at(1));
        assert_ne!(frame_at(0), frame_at(2));
        assert_eq!(frame_at(0), frame_at(20));
    }
}
