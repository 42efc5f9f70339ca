//! Country Dashboard TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息与后台命令 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 后台请求与配置 (`backend/`)
//!
//!
//! main.rs
//! Country Dashboard 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入缓存目录
//!     load config             // 读取配置，失败时使用默认值
//!     set_theme / set_language
//!     tokio Runtime           // 网络请求在运行时线程池上执行
//!     RestCountriesClient     // 来自 country-dashboard-api
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use country_dashboard_api::RestCountriesClient;

use backend::{AppConfig, Backend, ConfigService, FileConfigService};
use model::{App, Settings};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    let log_path = init_logging()?;
    log::info!(
        "Starting {} v{}, log file {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );

    // 2. 配置
    let config = load_config();
    let settings = Settings::from_config(&config);
    view::theme::set_theme(settings.theme);
    i18n::set_language(settings.language);
    log::info!("Language: {}", i18n::current_language().code());

    // 3. 后台运行时与 API 客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("country-dashboard-worker")
        .build()
        .context("failed to start the async runtime")?;
    let client = RestCountriesClient::new(config.client_options())
        .context("failed to build the HTTP client")?;
    let mut backend = Backend::new(Arc::new(client), runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;
    install_panic_hook();

    // 5. 创建应用实例并发出首次加载
    let mut app = App::new(settings);
    backend.dispatch(update::init(&mut app));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 7. 收尾（无论成功失败都执行）
    backend.shutdown();
    restore_terminal(&mut terminal)?;

    if let Err(ref err) = result {
        log::error!("Exited with error: {err:#}");
    } else {
        log::info!("Bye");
    }
    result
}

/// 读取配置，任何错误都退回默认值
///
/// 配置文件不存在时写入一份默认配置，方便用户修改
fn load_config() -> AppConfig {
    let service = match FileConfigService::new() {
        Ok(service) => service,
        Err(err) => {
            log::warn!("{err}, using default config");
            return AppConfig::default();
        }
    };

    let first_run = !service.path().exists();
    let config = service.load().unwrap_or_else(|err| {
        log::warn!("{err}, using default config");
        AppConfig::default()
    });

    if first_run {
        if let Err(err) = service.save(&config) {
            log::warn!("Could not write default config: {err}");
        }
    }

    config
}
