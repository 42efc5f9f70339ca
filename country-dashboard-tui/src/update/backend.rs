//! 后台结果处理
//!
//! 所有结果先用请求编号检查是否过期，过期的直接丢弃。
//! 失败时只更新状态与状态栏，已显示的数据保持不变。

use country_dashboard_api::ApiError;

use crate::message::BackendMessage;
use crate::model::{App, FetchStatus, RequestId};

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::AllLoaded { request, result } => {
            if !accept_collection(app, request) {
                // 网格属于更新的请求，地区选项仍然需要全量数据
                if let Ok(countries) = result {
                    app.dashboard.set_catalogue(&countries);
                }
                return;
            }
            match result {
                Ok(countries) => {
                    log::info!("Loaded {} countries {request}", countries.len());
                    app.dashboard.set_all(countries);
                    app.clear_status();
                }
                Err(e) => collection_failed(app, "Loading countries", &e),
            }
        }

        BackendMessage::SearchLoaded {
            request,
            query,
            result,
        } => {
            if !accept_collection(app, request) {
                return;
            }
            match result {
                Ok(countries) => {
                    log::info!(
                        "Search '{query}' matched {} countries {request}",
                        countries.len()
                    );
                    app.dashboard.set_search_result(query, countries);
                    app.clear_status();
                }
                Err(e) => collection_failed(app, "Searching countries", &e),
            }
        }

        BackendMessage::DetailLoaded { request, result } => {
            if let Err(e) = &result {
                log_error("Loading country detail", e);
            }
            if !app.modal.apply_detail(request, result.map_err(|e| e.to_string())) {
                log::debug!("Discarding stale detail response {request}");
            }
        }
    }
}

/// 列表结果是否属于最新请求
fn accept_collection(app: &mut App, request: RequestId) -> bool {
    if app.dashboard.requests.complete(request) {
        true
    } else {
        log::debug!("Discarding stale collection response {request}");
        false
    }
}

fn collection_failed(app: &mut App, action: &str, error: &ApiError) {
    log_error(action, error);
    let message = error.to_string();
    app.set_status(message.clone());
    app.dashboard.status = FetchStatus::Failed(message);
}

/// 预期内的错误用 warn，其余用 error
fn log_error(action: &str, error: &ApiError) {
    if error.is_expected() {
        log::warn!("{action} failed: {error}");
    } else {
        log::error!("{action} failed: {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::message::{AppMessage, Command, ContentMessage, SearchMessage};
    use crate::model::DetailPhase;
    use crate::update::fixtures::{app_with, common_names, country};
    use crate::update::{init, update as app_update};

    fn deliver(app: &mut App, msg: BackendMessage) {
        app_update(app, AppMessage::Backend(msg));
    }

    #[test]
    fn initial_load_populates_grid_and_regions() {
        let mut app = App::default();
        let request = init(&mut app).request();
        deliver(
            &mut app,
            BackendMessage::AllLoaded {
                request,
                result: Ok(vec![
                    country("Peru", "PER", "Americas", 33_000_000),
                    country("Mali", "MLI", "Africa", 21_000_000),
                ]),
            },
        );

        assert_eq!(app.dashboard.status, FetchStatus::Loaded);
        assert_eq!(common_names(&app), vec!["Peru", "Mali"]);
        assert_eq!(app.dashboard.region_options, vec!["Africa", "Americas"]);
        assert_eq!(app.dashboard.all_countries.len(), 2);
    }

    #[test]
    fn stale_collection_response_is_discarded() {
        let mut app = app_with(vec![country("Peru", "PER", "Americas", 1)]);
        let old = app.dashboard.requests.issue();
        let new = app.dashboard.requests.issue();

        deliver(
            &mut app,
            BackendMessage::SearchLoaded {
                request: new,
                query: "mal".to_string(),
                result: Ok(vec![country("Mali", "MLI", "Africa", 2)]),
            },
        );
        // 较早发出的请求后到达，不得覆盖较新的结果
        deliver(
            &mut app,
            BackendMessage::SearchLoaded {
                request: old,
                query: "m".to_string(),
                result: Ok(vec![country("Malta", "MLT", "Europe", 3)]),
            },
        );

        assert_eq!(common_names(&app), vec!["Mali"]);
    }

    #[test]
    fn superseded_initial_load_still_fills_region_options() {
        let mut app = App::default();
        let initial = init(&mut app).request();

        // 首次加载还没返回时就输入了搜索
        app_update(&mut app, AppMessage::Search(SearchMessage::Input('f')));
        let due = Instant::now() + app.settings.search_debounce + Duration::from_millis(10);
        let Some(Command::SearchByName { request: search, .. }) =
            app_update(&mut app, AppMessage::Tick(due))
        else {
            panic!("expected a name query after the quiet period");
        };

        deliver(
            &mut app,
            BackendMessage::AllLoaded {
                request: initial,
                result: Ok(vec![
                    country("France", "FRA", "Europe", 67_000_000),
                    country("Japan", "JPN", "Asia", 125_000_000),
                ]),
            },
        );
        deliver(
            &mut app,
            BackendMessage::SearchLoaded {
                request: search,
                query: "f".to_string(),
                result: Ok(vec![country("France", "FRA", "Europe", 67_000_000)]),
            },
        );

        assert_eq!(common_names(&app), vec!["France"]);
        assert_eq!(app.dashboard.region_options, vec!["Asia", "Europe"]);
        assert_eq!(app.dashboard.all_countries.len(), 2);
    }

    #[test]
    fn failed_fetch_sets_failed_and_keeps_data() {
        let mut app = app_with(vec![country("Peru", "PER", "Americas", 1)]);
        let request = app.dashboard.requests.issue();
        deliver(
            &mut app,
            BackendMessage::SearchLoaded {
                request,
                query: "atlantis".to_string(),
                result: Err(ApiError::NotFound {
                    query: "/name/atlantis".to_string(),
                }),
            },
        );

        assert!(matches!(app.dashboard.status, FetchStatus::Failed(_)));
        assert_eq!(common_names(&app), vec!["Peru"]);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn failed_initial_load_leaves_grid_empty() {
        let mut app = App::default();
        let request = init(&mut app).request();
        deliver(
            &mut app,
            BackendMessage::AllLoaded {
                request,
                result: Err(ApiError::Network {
                    detail: "connection refused".to_string(),
                }),
            },
        );

        assert_eq!(
            app.dashboard.status.error(),
            Some("Network error: connection refused")
        );
        assert!(app.dashboard.displayed.is_empty());
    }

    #[test]
    fn detail_for_canada_goes_loading_then_loaded() {
        let mut app = app_with(vec![country("Canada", "CAN", "Americas", 38_005_238)]);
        let cmd = app_update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        let Some(Command::FetchDetail {
            request,
            official_name,
        }) = cmd
        else {
            panic!("expected detail fetch, got {cmd:?}");
        };
        assert_eq!(official_name, "Canada");
        assert_eq!(app.modal.detail_phase(), DetailPhase::OpenLoading);

        deliver(
            &mut app,
            BackendMessage::DetailLoaded {
                request,
                result: Ok(country("Canada", "CAN", "Americas", 38_005_238)),
            },
        );
        assert_eq!(app.modal.detail_phase(), DetailPhase::OpenLoaded);
    }

    #[test]
    fn detail_failure_shows_failed_phase() {
        let mut app = app_with(vec![country("Canada", "CAN", "Americas", 1)]);
        let request = app.modal.show_country_detail("Canada");
        deliver(
            &mut app,
            BackendMessage::DetailLoaded {
                request,
                result: Err(ApiError::Timeout {
                    detail: "30s".to_string(),
                }),
            },
        );
        assert_eq!(app.modal.detail_phase(), DetailPhase::OpenFailed);
    }

    #[test]
    fn detail_arriving_after_close_is_dropped() {
        let mut app = app_with(vec![country("Canada", "CAN", "Americas", 1)]);
        let request = app.modal.show_country_detail("Canada");
        app.modal.close();
        deliver(
            &mut app,
            BackendMessage::DetailLoaded {
                request,
                result: Ok(country("Canada", "CAN", "Americas", 1)),
            },
        );
        assert!(!app.modal.is_open());
    }
}
