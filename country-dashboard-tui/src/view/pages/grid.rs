//! 国家卡片网格

use country_dashboard_api::Country;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::text::truncate;
use crate::view::theme::{colors, Styles};

/// 卡片宽度（含边框）
const CARD_WIDTH: u16 = 32;

/// 按可用宽度计算每行卡片数，至少一列
pub fn columns_for(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// 卡片高度：国旗 + 首都（至少一行）+ 地区 + 子地区 + 人口，再加上下边框
fn card_height(country: &Country) -> u16 {
    let capitals = u16::try_from(country.capital.len().max(1)).unwrap_or(u16::MAX);
    capitals.saturating_add(4 + 2)
}

/// 找到能让 `selected_row` 完整显示的第一行
///
/// 选中行之前的行尽量保留，直到放不下为止
fn first_visible_row(row_heights: &[u16], selected_row: usize, available: u16) -> usize {
    let mut used: u16 = 0;
    let mut top = selected_row;
    for row in (0..=selected_row).rev() {
        used = used.saturating_add(row_heights[row]);
        if used > available && row != selected_row {
            break;
        }
        top = row;
    }
    top
}

/// 渲染网格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let dashboard = &app.dashboard;
    let columns = columns_for(area.width);
    app.grid_columns.set(columns);

    let rows: Vec<&[Country]> = dashboard.displayed.chunks(columns).collect();
    let row_heights: Vec<u16> = rows
        .iter()
        .map(|row| row.iter().map(card_height).max().unwrap_or(0))
        .collect();

    let selected_row = dashboard.selected / columns;
    let top = first_visible_row(
        &row_heights,
        selected_row.min(rows.len().saturating_sub(1)),
        area.height,
    );

    let card_width = area.width / u16::try_from(columns).unwrap_or(1);
    let grid_focused = app.focus.is_grid() && !app.modal.is_open();

    let bottom = area.y.saturating_add(area.height);
    let mut y = area.y;
    for (row_index, row) in rows.iter().enumerate().skip(top) {
        if y >= bottom {
            break;
        }
        let height = row_heights[row_index].min(bottom - y);

        for (col, country) in row.iter().enumerate() {
            let index = row_index * columns + col;
            let x = area.x + card_width * u16::try_from(col).unwrap_or(0);
            let rect = Rect::new(x, y, card_width, height);
            let selected = index == dashboard.selected;
            render_card(frame, rect, country, selected, grid_focused);
        }

        y = y.saturating_add(row_heights[row_index]);
    }
}

/// 渲染单张卡片
fn render_card(frame: &mut Frame, area: Rect, country: &Country, selected: bool, focused: bool) {
    let texts = &t().grid;
    let c = colors();
    let width = usize::from(area.width.saturating_sub(2));

    let title_style = if selected {
        Styles::selected()
    } else {
        Styles::title()
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", truncate(&country.name.common, width.saturating_sub(2))),
            title_style,
        ))
        .borders(Borders::ALL)
        .border_style(Styles::border(selected && focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = |label: &str, value: &str| {
        let label = format!("{label}: ");
        let rest = width.saturating_sub(label.chars().count());
        Line::from(vec![
            Span::styled(label, Styles::label()),
            Span::styled(truncate(value, rest), Style::default().fg(c.fg)),
        ])
    };

    let flag = match country.flag_url() {
        Some(url) => Line::styled(truncate(url, width), Style::default().fg(c.muted)),
        None => Line::styled(
            truncate(texts.no_flag, width),
            Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
        ),
    };

    let mut lines = vec![flag];
    if country.capital.is_empty() {
        lines.push(row(texts.capital, texts.no_capital));
    } else {
        lines.extend(country.capital.iter().map(|cap| row(texts.capital, cap)));
    }
    lines.push(row(texts.region, &country.region));
    lines.push(row(texts.subregion, &country.subregion));
    lines.push(row(texts.population, &country.formatted_population()));

    let style = if selected {
        Style::default().bg(c.selected_bg)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(lines).style(style), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_one_column() {
        assert_eq!(columns_for(0), 1);
        assert_eq!(columns_for(31), 1);
        assert_eq!(columns_for(64), 2);
        assert_eq!(columns_for(100), 3);
    }

    #[test]
    fn card_grows_with_capitals() {
        let mut country = Country::default();
        assert_eq!(card_height(&country), 7);
        country.capital = vec!["Pretoria".into(), "Bloemfontein".into(), "Cape Town".into()];
        assert_eq!(card_height(&country), 9);
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        let heights = [7, 7, 9, 7];
        assert_eq!(first_visible_row(&heights, 0, 20), 0);
        assert_eq!(first_visible_row(&heights, 1, 20), 0);
        // 7 + 9 = 16，再加 7 放不下
        assert_eq!(first_visible_row(&heights, 2, 20), 1);
        assert_eq!(first_visible_row(&heights, 3, 20), 2);
    }

    #[test]
    fn oversized_row_still_shown() {
        assert_eq!(first_visible_row(&[7, 30], 1, 10), 1);
    }
}
