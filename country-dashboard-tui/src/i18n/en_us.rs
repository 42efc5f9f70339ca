//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DetailModalTexts, GridTexts, HelpTexts, HintTexts, KeyNames,
    ModalTexts, ToolbarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Country Dashboard",
        loading: "Loading...",
        error: "Error",
        all: "All",
        on: "On",
        off: "Off",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            arrows: "←↑↓→",
            arrows_ud: "↑↓",
            search: "/",
            sort: "s",
            region: "r/R",
            clear: "c",
            refresh: "Alt+r",
            help: "?",
            quit: "q",
        },
        actions: ActionTexts {
            move_cursor: "Move",
            open_detail: "Details",
            search: "Search",
            back_to_grid: "Back to grid",
            sort: "Sort",
            region: "Region",
            clear: "Clear",
            refresh: "Refresh",
            help: "Help",
            quit: "Quit",
            close: "Close",
            scroll: "Scroll",
        },
    },

    // ========================================================================
    // 工具栏
    // ========================================================================
    toolbar: ToolbarTexts {
        search_title: "Search",
        search_placeholder: "Search for a country...",
        region_title: "Filter by Region",
        sort_title: "Sort",
        sort_by_population: "Population",
    },

    // ========================================================================
    // 卡片网格
    // ========================================================================
    grid: GridTexts {
        title: "Countries",
        count_unit: "countries",
        capital: "Capital",
        region: "Region",
        subregion: "Subregion",
        population: "Population",
        flag: "Flag",
        no_flag: "[no flag]",
        no_capital: "-",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        detail: DetailModalTexts {
            title: "Country Details",
            flag: "Flag",
            capitals: "Capital",
            region: "Region",
            subregion: "Sub Region",
            population: "Population",
            currencies: "Currencies",
            languages: "Languages",
            time_zones: "Time Zones",
            loading: "Loading details...",
            failed: "Could not load details",
        },
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        grid_section: "Grid",
        search_section: "Search box",
        modal_section: "Details",
        close_hint: "Press Esc to close the help",
    },
};
