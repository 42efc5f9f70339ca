//! 工具栏组件：搜索框、地区下拉、排序

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::spinner;
use crate::view::text::truncate;
use crate::view::theme::{colors, Styles};

/// 渲染工具栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // 搜索框
            Constraint::Percentage(30), // 地区
            Constraint::Percentage(20), // 排序
        ])
        .split(area);

    render_search(app, frame, columns[0]);
    render_region(app, frame, columns[1]);
    render_sort(app, frame, columns[2]);
}

/// 渲染搜索框
fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let dashboard = &app.dashboard;
    let focused = app.focus.is_search() && !app.modal.is_open();

    // 请求进行中或等待防抖时，标题后显示动画
    let busy = dashboard.status.is_loading() || dashboard.pending_search.is_some();
    let title = if busy {
        format!(" {} {} ", texts.toolbar.search_title, spinner::frame_at(app.tick))
    } else {
        format!(" {} ", texts.toolbar.search_title)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width.saturating_sub(1));
    let line = if dashboard.search_value.is_empty() && !focused {
        Line::styled(
            truncate(texts.toolbar.search_placeholder, width),
            Style::default().fg(c.muted),
        )
    } else if focused {
        Line::styled(
            format!("{}▎", truncate(&dashboard.search_value, width)),
            Style::default().fg(c.fg),
        )
    } else {
        Line::styled(truncate(&dashboard.search_value, width), Style::default().fg(c.fg))
    };

    frame.render_widget(Paragraph::new(line), inner);
}

/// 渲染地区下拉
fn render_region(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.toolbar.region_title))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = app
        .dashboard
        .filter_value
        .as_deref()
        .unwrap_or(texts.common.all);
    let value_style = if app.dashboard.filter_value.is_some() {
        Style::default().fg(c.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(c.muted)),
        Span::styled(
            truncate(value, usize::from(inner.width.saturating_sub(4))),
            value_style,
        ),
        Span::styled(" ▶", Style::default().fg(c.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

/// 渲染排序状态
fn render_sort(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.toolbar.sort_title))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (state, style) = if app.dashboard.sort_by_population {
        (
            texts.common.on,
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )
    } else {
        (texts.common.off, Style::default().fg(c.muted))
    };

    let line = Line::from(vec![
        Span::styled(format!("{} ↑ ", texts.toolbar.sort_by_population), Styles::label()),
        Span::styled(state, style),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
