//! 网格更新逻辑
//!
//! 处理卡片网格中的各种操作消息

use crate::message::{Command, ContentMessage};
use crate::model::App;

/// 处理网格消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        // ========== 光标移动 ==========
        ContentMessage::SelectPrevious => {
            app.dashboard.select_previous();
            None
        }
        ContentMessage::SelectNext => {
            app.dashboard.select_next();
            None
        }
        ContentMessage::SelectUp => {
            let columns = app.grid_columns.get();
            app.dashboard.select_row_up(columns);
            None
        }
        ContentMessage::SelectDown => {
            let columns = app.grid_columns.get();
            app.dashboard.select_row_down(columns);
            None
        }
        ContentMessage::SelectFirst => {
            app.dashboard.select_first();
            None
        }
        ContentMessage::SelectLast => {
            app.dashboard.select_last();
            None
        }
        ContentMessage::Confirm => handle_modal_open(app),

        // ========== 条件 ==========
        ContentMessage::SortByPopulation => {
            app.dashboard.sort_by_population();
            None
        }
        ContentMessage::NextRegion => {
            app.dashboard.next_region();
            None
        }
        ContentMessage::PrevRegion => {
            app.dashboard.prev_region();
            None
        }
        ContentMessage::ClearAll => Some(handle_clear(app)),
    }
}

/// 打开选中国家的详情弹窗并请求详情
fn handle_modal_open(app: &mut App) -> Option<Command> {
    let official_name = app.dashboard.selected_country()?.name.official.clone();
    let request = app.modal.show_country_detail(&official_name);
    log::debug!("Open detail for '{official_name}' {request}");
    Some(Command::FetchDetail {
        request,
        official_name,
    })
}

/// 清空所有条件并重新加载全部国家
fn handle_clear(app: &mut App) -> Command {
    app.dashboard.reset_criteria();
    app.dashboard.derive();
    app.clear_status();
    super::fetch_all(app)
}
