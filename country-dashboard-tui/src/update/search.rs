//! 搜索框更新逻辑

use std::time::Instant;

use crate::message::{Command, SearchMessage};
use crate::model::{App, FocusPanel};

/// 处理搜索框消息
pub fn update(app: &mut App, msg: SearchMessage) -> Option<Command> {
    match msg {
        SearchMessage::Input(c) => {
            app.dashboard.search_value.push(c);
            handle_search_change(app, Instant::now())
        }
        SearchMessage::Backspace => {
            if app.dashboard.search_value.pop().is_none() {
                return None;
            }
            handle_search_change(app, Instant::now())
        }
        SearchMessage::Leave => {
            app.focus = FocusPanel::Grid;
            None
        }
    }
}

/// 搜索内容变化
///
/// 非空：安排防抖搜索（截止时间从 `now` 起算）。
/// 为空：丢弃防抖中的搜索，立即请求全部国家。
fn handle_search_change(app: &mut App, now: Instant) -> Option<Command> {
    let query = app.dashboard.search_value.trim().to_string();

    if query.is_empty() {
        app.dashboard.pending_search = None;
        return Some(super::fetch_all(app));
    }

    let debounce = app.settings.search_debounce;
    app.dashboard.schedule_search(query, now, debounce);
    None
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::message::AppMessage;
    use crate::update::update as app_update;

    fn type_text(app: &mut App, text: &str) -> Vec<Command> {
        text.chars()
            .filter_map(|c| app_update(app, AppMessage::Search(SearchMessage::Input(c))))
            .collect()
    }

    fn after_quiet_period(app: &App) -> Instant {
        Instant::now() + app.settings.search_debounce + Duration::from_millis(10)
    }

    #[test]
    fn typing_issues_no_request_immediately() {
        let mut app = App::default();
        let commands = type_text(&mut app, "swit");
        assert!(commands.is_empty());
        assert_eq!(app.dashboard.search_value, "swit");

        let cmd = app_update(&mut app, AppMessage::Tick(Instant::now()));
        assert_eq!(cmd, None);
    }

    #[test]
    fn quiet_period_issues_exactly_one_query_with_latest_value() {
        let mut app = App::default();
        type_text(&mut app, "swi");
        type_text(&mut app, "t");

        let now = after_quiet_period(&app);
        let first = app_update(&mut app, AppMessage::Tick(now));
        assert!(matches!(
            first,
            Some(Command::SearchByName { ref query, .. }) if query == "swit"
        ));

        let second = app_update(&mut app, AppMessage::Tick(now + Duration::from_secs(5)));
        assert_eq!(second, None);
    }

    #[test]
    fn each_keystroke_pushes_the_deadline() {
        let mut app = App::default();
        let start = Instant::now();
        let debounce = app.settings.search_debounce;

        app.dashboard.search_value.push('f');
        handle_search_change(&mut app, start);
        app.dashboard.search_value.push('r');
        handle_search_change(&mut app, start + Duration::from_millis(400));

        // 第一次按键的截止时间已过，但第二次按键把它推迟了
        let cmd = app_update(&mut app, AppMessage::Tick(start + debounce));
        assert_eq!(cmd, None);

        let cmd = app_update(
            &mut app,
            AppMessage::Tick(start + Duration::from_millis(400) + debounce),
        );
        assert!(matches!(
            cmd,
            Some(Command::SearchByName { ref query, .. }) if query == "fr"
        ));
    }

    #[test]
    fn clearing_input_fetches_all_and_drops_pending_search() {
        let mut app = App::default();
        type_text(&mut app, "ca");

        let first = app_update(&mut app, AppMessage::Search(SearchMessage::Backspace));
        assert_eq!(first, None);
        let cmd = app_update(&mut app, AppMessage::Search(SearchMessage::Backspace));
        assert!(matches!(cmd, Some(Command::FetchAll { .. })));
        assert!(app.dashboard.pending_search.is_none());

        let now = after_quiet_period(&app);
        let later = app_update(&mut app, AppMessage::Tick(now));
        assert_eq!(later, None, "no name query may follow an emptied search box");
    }

    #[test]
    fn backspace_on_empty_input_does_nothing() {
        let mut app = App::default();
        let cmd = app_update(&mut app, AppMessage::Search(SearchMessage::Backspace));
        assert_eq!(cmd, None);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut app = App::default();
        let commands = type_text(&mut app, " ");
        assert!(matches!(commands.as_slice(), [Command::FetchAll { .. }]));
    }
}
