//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和弹窗生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息（通常是错误），显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("⚠ {msg}"),
            Style::default().fg(colors().error).bg(Color::Black),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;

    if app.modal.is_open() {
        return vec![
            (keys.arrows_ud, actions.scroll),
            (keys.esc, actions.close),
        ];
    }

    if app.focus.is_search() {
        return vec![
            (keys.enter, actions.back_to_grid),
            (keys.refresh, actions.refresh),
        ];
    }

    vec![
        (keys.arrows, actions.move_cursor),
        (keys.enter, actions.open_detail),
        (keys.search, actions.search),
        (keys.region, actions.region),
        (keys.sort, actions.sort),
        (keys.clear, actions.clear),
        (keys.refresh, actions.refresh),
        (keys.help, actions.help),
        (keys.quit, actions.quit),
    ]
}
