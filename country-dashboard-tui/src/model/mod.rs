//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ SearchMsg │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ ModalMsg  │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │ Command       │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步执行          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │ BackendMessage     │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ country-dashboard-│           │
//！│                                           │       api         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和针对自身数据的小方法，
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / Grid）
//!         pub mod request;    // 请求编号
//!         pub mod state;      // 仪表盘、弹窗、设置状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub dashboard: DashboardState,      // 国家列表、搜索、过滤、排序
//!             pub modal: ModalState,              // 弹窗状态
//!             pub tick: u64,                      // 加载动画帧
//!             pub settings: Settings,             // 运行时设置
//!             pub grid_columns: Cell<usize>,      // 网格列数（View 层写入）
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、仪表盘状态（DashboardState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/dashboard.rs 中定义：
//!
//!         all_countries ──▶ region_options
//!         base ──(地区过滤)──▶ ──(人口排序)──▶ displayed
//!
//!     displayed 永远由 base 派生，切换地区、排序都只是重新派生。
//!
//!     防抖：pending_search 保存 (最新输入, 截止时间)，
//!         每次按键推迟截止时间，Tick 到期后才真正发出搜索请求。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、请求编号（RequestTracker）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     列表请求（全量、搜索、刷新、清空）共用 dashboard.requests，
//!     详情请求使用 modal.detail_requests。
//!     结果回来时只有编号为最新的才会被采用，迟到的结果直接丢弃。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!         - CountryDetail { official_name, request, status, detail, scroll }
//!         - Help
//!
//!     数据流：
//!         用户在卡片上按 Enter
//!             ↓
//!         update/content.rs 调用 app.modal.show_country_detail()
//!             ↓
//!         返回 Command::FetchDetail，由 Backend 执行
//!             ↓
//!         BackendMessage::DetailLoaded 回到 update/backend.rs
//!             ↓
//!         view/components/modal.rs 渲染详情
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
pub mod request;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use request::RequestId;
pub use state::{
    CollectionSource, DashboardState, DetailPhase, FetchStatus, Modal, ModalState, Settings,
};
