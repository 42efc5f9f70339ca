//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及文件日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 文件日志
//!         mod terminal;       // 终端初始化、恢复和 panic hook
//!
//!
//!     终端：
//!         在 src/util/terminal.rs 中，有：
//!
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!             pub fn init_terminal() -> Result<Term>       // 原始模式 + 备用屏幕
//!             pub fn restore_terminal(&mut Term) -> Result<()>
//!             pub fn install_panic_hook()                   // panic 时先恢复终端
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲和回显，每个按键立即送达
//!         · Alternate Screen（备用屏幕）
//!             - 退出后恢复主屏幕原有内容，类似 vim、htop
//!
//!         无论主循环是正常退出还是返回错误，main.rs 都会调用 restore_terminal。
//!         panic 不会经过 main.rs 的返回路径，所以由 panic hook 负责恢复。
//!
//!
//!     日志：
//!         在 src/util/logging.rs 中，有：
//!
//!             pub fn init_logging() -> Result<PathBuf> {
//!                 tracing_subscriber::registry()
//!                     .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
//!                     .with(EnvFilter)                  // RUST_LOG，默认 info
//!                     .try_init()?;                     // 同时接管 log 宏
//!             }
//!
//!         标准输出被界面占用，日志只能写文件：
//!             Linux:   ~/.cache/country-dashboard/country-dashboard.log
//!             macOS:   ~/Library/Caches/country-dashboard/country-dashboard.log
//!
//!         各层统一使用 log::{debug, info, warn, error} 宏记录。
//!
//!
//! Util 层在应用启动时初始化，在应用退出时收尾。
//!     → 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
