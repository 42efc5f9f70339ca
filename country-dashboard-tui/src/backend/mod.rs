//!
//! src/backend/mod.rs
//! Backend 层：执行网络请求
//!
//! Backend 层与 UI 完全解耦，只负责把 Update 层产生的 Command
//! 放到 tokio 运行时上执行，并把结果以 BackendMessage 发回主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、任务执行（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的，运行时由 main.rs 创建，Backend 只持有它的 Handle。
//!
//!         dispatch(Command)
//!             ↓
//!         JoinSet::spawn_on(..)           // 在运行时上执行请求
//!             ↓
//!         mpsc::UnboundedSender::send()   // 结果发回
//!             ↓
//!         try_recv()                      // 主循环每轮取出结果
//!             ↓
//!         AppMessage::Backend(..) 交给 Update 层
//!
//!     退出时 shutdown() 取消所有未完成的请求，
//!     确保不会有结果送到已经退出的应用。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（FileConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/country-dashboard/config.json
//!
//!         主要方法：
//!             - load()        读取配置，文件不存在时返回默认值
//!             - save(config)  写入配置
//!

mod config_service;

use std::sync::Arc;

use country_dashboard_api::CountryApi;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;

use crate::message::{BackendMessage, Command};

pub use config_service::{AppConfig, ConfigService, FileConfigService};

/// 后台任务执行器
pub struct Backend {
    api: Arc<dyn CountryApi>,
    handle: Handle,
    tasks: JoinSet<()>,
    tx: UnboundedSender<BackendMessage>,
    rx: UnboundedReceiver<BackendMessage>,
}

impl Backend {
    /// 创建执行器，任务会在 `handle` 所属的运行时上执行
    pub fn new(api: Arc<dyn CountryApi>, handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        log::info!("Backend ready, api: {}", api.id());
        Self {
            api,
            handle,
            tasks: JoinSet::new(),
            tx,
            rx,
        }
    }

    /// 执行 Command
    pub fn dispatch(&mut self, command: Command) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        self.tasks.spawn_on(
            async move {
                let message = execute(api.as_ref(), command).await;
                if tx.send(message).is_err() {
                    log::debug!("Backend receiver dropped, result discarded");
                }
            },
            &self.handle,
        );
    }

    /// 取出一条已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<BackendMessage> {
        // 回收已结束的任务
        while self.tasks.try_join_next().is_some() {}
        self.rx.try_recv().ok()
    }

    /// 未结束的任务数
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// 取消所有未完成的请求
    pub fn shutdown(&mut self) {
        if !self.tasks.is_empty() {
            log::info!("Aborting {} in-flight request(s)", self.tasks.len());
        }
        self.tasks.abort_all();
    }
}

/// 执行单个 Command
async fn execute(api: &dyn CountryApi, command: Command) -> BackendMessage {
    match command {
        Command::FetchAll { request } => BackendMessage::AllLoaded {
            request,
            result: api.all().await,
        },
        Command::SearchByName { request, query } => {
            let result = api.search_by_name(&query).await;
            BackendMessage::SearchLoaded {
                request,
                query,
                result,
            }
        }
        Command::FetchDetail {
            request,
            official_name,
        } => BackendMessage::DetailLoaded {
            request,
            result: api.detail_by_official_name(&official_name).await,
        },
    }
}
