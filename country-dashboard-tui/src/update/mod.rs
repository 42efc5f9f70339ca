//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后台结果处理
//!         mod content;            // 网格子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod search;             // 搜索框子消息处理（含防抖）
//!
//!         pub fn init(app: &mut App) -> Command {...}
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//!     update 不直接发网络请求，而是返回一个 Command：
//!
//!         AppMessage ──▶ update() ──▶ Option<Command> ──▶ Backend::dispatch()
//!
//!     发出 Command 之前先向对应的 RequestTracker 领取编号，
//!     结果回到 backend.rs 时再用编号判断是否过期。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 防抖（search.rs + Tick）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     输入 "f"  ──▶ pending = ("f",  t0 + 500ms)
//!     输入 "fr" ──▶ pending = ("fr", t1 + 500ms)      // 截止时间被推迟
//!     Tick(now >= t1 + 500ms) ──▶ Command::SearchByName("fr")
//!
//!     输入被删空 ──▶ 丢弃 pending，立即 Command::FetchAll
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod modal;
mod search;

#[cfg(test)]
mod fixtures;

use crate::message::{AppMessage, Command};
use crate::model::{App, CollectionSource, FetchStatus, FocusPanel};

/// 启动时的首次加载
pub fn init(app: &mut App) -> Command {
    log::info!("Initial load of all countries");
    fetch_all(app)
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Search(search_msg) => search::update(app, search_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
            None
        }

        AppMessage::FocusSearch => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = FocusPanel::Search;
            }
            None
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.focus.is_search() {
                app.focus = FocusPanel::Grid;
            } else {
                app.clear_status();
            }
            None
        }

        AppMessage::Refresh => Some(refresh(app)),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Tick(now) => {
            app.tick = app.tick.wrapping_add(1);
            app.dashboard
                .take_due_search(now)
                .map(|query| search_by_name(app, query))
        }

        AppMessage::Noop => None,
    }
}

/// 请求全部国家
fn fetch_all(app: &mut App) -> Command {
    let request = app.dashboard.requests.issue();
    app.dashboard.status = FetchStatus::Loading;
    log::debug!("Fetch all countries {request}");
    Command::FetchAll { request }
}

/// 按名称搜索
fn search_by_name(app: &mut App, query: String) -> Command {
    let request = app.dashboard.requests.issue();
    app.dashboard.status = FetchStatus::Loading;
    log::debug!("Search by name '{query}' {request}");
    Command::SearchByName { request, query }
}

/// 重新请求当前数据源，搜索、过滤、排序条件保持不变
fn refresh(app: &mut App) -> Command {
    app.clear_status();
    match app.dashboard.source.clone() {
        CollectionSource::All => fetch_all(app),
        CollectionSource::Name(query) => search_by_name(app, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::BackendMessage;
    use crate::model::RequestId;

    use super::fixtures::{app_with, country};

    #[test]
    fn init_issues_fetch_all_and_marks_loading() {
        let mut app = App::default();
        let cmd = init(&mut app);
        assert!(matches!(cmd, Command::FetchAll { .. }));
        assert!(app.dashboard.status.is_loading());
    }

    #[test]
    fn refresh_repeats_current_name_query() {
        let mut app = app_with(vec![country("France", "FRA", "Europe", 1)]);
        let request = app.dashboard.requests.issue();
        update(
            &mut app,
            AppMessage::Backend(BackendMessage::SearchLoaded {
                request,
                query: "fra".to_string(),
                result: Ok(vec![country("France", "FRA", "Europe", 1)]),
            }),
        );

        let cmd = update(&mut app, AppMessage::Refresh);
        assert!(matches!(
            cmd,
            Some(Command::SearchByName { ref query, .. }) if query == "fra"
        ));
    }

    #[test]
    fn refresh_after_full_load_fetches_all() {
        let mut app = app_with(vec![country("France", "FRA", "Europe", 1)]);
        let cmd = update(&mut app, AppMessage::Refresh);
        assert!(matches!(cmd, Some(Command::FetchAll { .. })));
    }

    #[test]
    fn go_back_closes_modal_before_leaving_search() {
        let mut app = App::default();
        app.focus = FocusPanel::Search;
        app.modal.show_help();

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert!(app.focus.is_search());

        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_grid());

        app.set_status("boom");
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        assert_eq!(update(&mut app, AppMessage::Quit), None);
        assert!(app.should_quit);
    }

    #[test]
    fn commands_carry_fresh_request_ids() {
        let mut app = App::default();
        let first = init(&mut app).request();
        let second = update(&mut app, AppMessage::Refresh).map(|c| c.request());
        assert!(second > Some(first));
        assert_ne!(second, Some(RequestId(0)));
    }
}
