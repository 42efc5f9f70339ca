//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 工具栏 + 网格 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 工具栏
            Constraint::Min(1),    // 网格
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    components::toolbar::render(app, frame, main_layout[1]);
    render_grid_area(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")))
        .style(
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

/// 渲染网格区域（带边框）
fn render_grid_area(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let dashboard = &app.dashboard;

    let title = Line::from(vec![
        Span::styled(format!(" {} ", texts.grid.title), Styles::title()),
        Span::styled(
            format!("({} {}) ", dashboard.displayed.len(), texts.grid.count_unit),
            Styles::label(),
        ),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_grid() && !app.modal.is_open()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 没有可显示的国家时（首次加载中、零结果、失败）显示加载指示器
    if dashboard.displayed.is_empty() {
        components::spinner::render(frame, inner_area, app.tick, dashboard.status.error());
    } else {
        pages::grid::render(app, frame, inner_area);
    }
}
