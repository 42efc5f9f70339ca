//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, SearchMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何情况下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 搜索框获得焦点时，字符键都是输入
    if app.focus.is_search() {
        return handle_search_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::FOCUS_SEARCH.matches(&key) || DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::FocusSearch;
    }

    handle_grid_keys(key)
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    match key.code {
        // Enter / Esc / Tab: 回到网格
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => AppMessage::Search(SearchMessage::Leave),
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Search(SearchMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理网格的按键
fn handle_grid_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::OPEN_DETAIL.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }
    if DefaultKeymap::SORT_POPULATION.matches(&key) {
        return AppMessage::Content(ContentMessage::SortByPopulation);
    }
    if DefaultKeymap::NEXT_REGION.matches(&key) {
        return AppMessage::Content(ContentMessage::NextRegion);
    }
    if DefaultKeymap::PREV_REGION.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevRegion);
    }
    if DefaultKeymap::CLEAR_ALL.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearAll);
    }

    let msg = match key.code {
        // ← 或 h: 左移
        KeyCode::Left | KeyCode::Char('h') => ContentMessage::SelectPrevious,
        // → 或 l: 右移
        KeyCode::Right | KeyCode::Char('l') => ContentMessage::SelectNext,
        // ↑ 或 k: 上一行
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectUp,
        // ↓ 或 j: 下一行
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectDown,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn grid_keys_map_to_content_messages() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyCode::Char('s')), &app),
            AppMessage::Content(ContentMessage::SortByPopulation)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::SelectDown)
        ));
    }

    #[test]
    fn shifted_r_cycles_regions_backwards() {
        let app = App::default();
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('R'), KeyModifiers::SHIFT), &app),
            AppMessage::Content(ContentMessage::PrevRegion)
        ));
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('r'), KeyModifiers::ALT), &app),
            AppMessage::Refresh
        ));
    }

    #[test]
    fn search_focus_turns_letters_into_input() {
        let mut app = App::default();
        app.focus = FocusPanel::Search;
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Search(SearchMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Search(SearchMessage::Leave)
        ));
    }

    #[test]
    fn ctrl_c_quits_even_with_modal_open() {
        let mut app = App::default();
        app.modal.show_help();
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn slash_focuses_search() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyCode::Char('/')), &app),
            AppMessage::FocusSearch
        ));
    }
}
