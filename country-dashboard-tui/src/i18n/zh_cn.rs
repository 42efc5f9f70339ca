//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "国家仪表盘",
        loading: "加载中...",
        error: "错误",
        all: "全部",
        on: "开",
        off: "关",
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
            move_cursor: "移动",
            open_detail: "详情",
            search: "搜索",
            back_to_grid: "返回网格",
            sort: "排序",
            region: "地区",
            clear: "清空",
            refresh: "刷新",
            help: "帮助",
            quit: "退出",
            close: "关闭",
            scroll: "滚动",
        },
    },

    // ========================================================================
    // 工具栏
    // ========================================================================
    toolbar: ToolbarTexts {
        search_title: "搜索",
        search_placeholder: "输入国家名称...",
        region_title: "按地区过滤",
        sort_title: "排序",
        sort_by_population: "人口",
    },

    // ========================================================================
    // 卡片网格
    // ========================================================================
    grid: GridTexts {
        title: "国家",
        count_unit: "个国家",
        capital: "首都",
        region: "地区",
        subregion: "次区域",
        population: "人口",
        flag: "国旗",
        no_flag: "[无国旗]",
        no_capital: "-",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        detail: DetailModalTexts {
            title: "国家详情",
            flag: "国旗",
            capitals: "首都",
            region: "地区",
            subregion: "次区域",
            population: "人口",
            currencies: "货币",
            languages: "语言",
            time_zones: "时区",
            loading: "正在加载详情...",
            failed: "详情加载失败",
        },
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        grid_section: "网格",
        search_section: "搜索框",
        modal_section: "详情",
        close_hint: "按 Esc 关闭帮助",
    },
};
