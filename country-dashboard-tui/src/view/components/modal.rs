//! 弹窗组件

use country_dashboard_api::Country;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, DetailPhase, Modal};
use crate::view::components::spinner;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::CountryDetail {
            official_name,
            status,
            scroll,
            ..
        }) => render_country_detail(app, frame, official_name, status.error(), *scroll),
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框
fn modal_block(title: &str) -> Block<'_> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg).fg(c.fg))
}

/// 渲染国家详情弹窗
fn render_country_detail(
    app: &App,
    frame: &mut Frame,
    official_name: &str,
    error: Option<&str>,
    scroll: u16,
) {
    let texts = &t().modal.detail;
    let c = colors();

    let area = centered_rect(72, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(texts.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match (app.modal.detail_phase(), app.modal.detail()) {
        (DetailPhase::OpenLoaded, Some(country)) => detail_lines(country),
        (DetailPhase::OpenFailed, _) => vec![
            Line::styled(official_name.to_string(), Styles::title()),
            Line::from(""),
            Line::styled(
                format!("⚠ {}", texts.failed),
                Style::default().fg(c.error).add_modifier(Modifier::BOLD),
            ),
            Line::styled(error.unwrap_or_default().to_string(), Style::default().fg(c.error)),
        ],
        _ => vec![
            Line::styled(official_name.to_string(), Styles::title()),
            Line::from(""),
            Line::styled(
                format!("{} {}", spinner::frame_at(app.tick), texts.loading),
                Style::default().fg(c.warning),
            ),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// 详情字段
///
/// 地区在 Sub Region 之后还会再出现一次，与卡片上的字段顺序保持一致
fn detail_lines(country: &Country) -> Vec<Line<'static>> {
    let texts = &t().modal.detail;
    let grid = &t().grid;

    let flag = country
        .flag_url()
        .map_or_else(|| grid.no_flag.to_string(), str::to_string);

    let mut lines = vec![
        Line::styled(country.name.common.clone(), Styles::title()),
        Line::styled(country.name.official.clone(), Styles::label()),
        Line::from(""),
        field(texts.flag, flag),
    ];

    if country.capital.is_empty() {
        lines.push(field(texts.capitals, grid.no_capital.to_string()));
    } else {
        for capital in &country.capital {
            lines.push(field(texts.capitals, capital.clone()));
        }
    }

    lines.extend([
        field(texts.region, country.region.clone()),
        field(texts.subregion, country.subregion.clone()),
        field(texts.population, country.formatted_population()),
        field(texts.currencies, country.currency_summary()),
        field(texts.languages, country.language_summary()),
        field(texts.region, country.region.clone()),
        field(texts.time_zones, country.timezone_summary()),
    ]);

    lines
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::label()),
        Span::styled(value, Style::default().fg(colors().fg)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let c = colors();

    let area = centered_rect(50, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(texts.help.title);
    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(texts.help.grid_section),
        entry(keys.arrows, actions.move_cursor),
        entry(keys.enter, actions.open_detail),
        entry(keys.search, actions.search),
        entry(keys.region, actions.region),
        entry(keys.sort, actions.sort),
        entry(keys.clear, actions.clear),
        entry(keys.refresh, actions.refresh),
        entry(keys.help, actions.help),
        entry(keys.quit, actions.quit),
        Line::from(""),
        section(texts.help.search_section),
        entry(keys.enter, actions.back_to_grid),
        entry(keys.esc, actions.back_to_grid),
        Line::from(""),
        section(texts.help.modal_section),
        entry(keys.arrows_ud, actions.scroll),
        entry(keys.esc, actions.close),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
